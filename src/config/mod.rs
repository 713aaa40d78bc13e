use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Spreadsheet file name used when nothing else is configured.
pub const DEFAULT_SHEET_FILE: &str = "conversion_data.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet_file")]
    pub sheet_file: String,
    #[serde(default = "default_open_after_save")]
    pub open_after_save: bool,
    #[serde(default = "default_day")]
    pub default_day: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sheet_file() -> String {
    DEFAULT_SHEET_FILE.to_string()
}
fn default_open_after_save() -> bool {
    true
}
fn default_day() -> String {
    "Mon".to_string()
}
fn default_date_format() -> String {
    "%m-%d-%Y".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_file: default_sheet_file(),
            open_after_save: default_open_after_save(),
            default_day: default_day(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("convtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".convtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("convtrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Spreadsheet path with `~/` expanded.
    pub fn sheet_path(&self) -> PathBuf {
        expand_tilde(&self.sheet_file)
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if is_test {
            return Ok(config);
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let cfg = Config::from_yaml("sheet_file: daily.csv\nopen_after_save: false\n").unwrap();
        assert_eq!(cfg.sheet_file, "daily.csv");
        assert!(!cfg.open_after_save);
        assert_eq!(cfg.default_day, "Mon");
        assert_eq!(cfg.date_format, "%m-%d-%Y");
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn yaml_roundtrips_defaults() {
        let cfg = Config::default();
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = Config::from_yaml("open_after_save: [not, a, bool]").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
