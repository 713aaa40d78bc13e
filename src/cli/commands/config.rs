use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::env;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let env_editor = env::var("EDITOR").or_else(|_| env::var("VISUAL")).ok();
            let candidates = editor_candidates(editor.clone(), env_editor);

            for (i, ed) in candidates.iter().enumerate() {
                match Command::new(ed).arg(&path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited successfully using '{}'",
                            ed
                        ));
                        return Ok(());
                    }
                    Ok(_) | Err(_) => {
                        if let Some(next) = candidates.get(i + 1) {
                            warning(format!(
                                "Editor '{}' not available, falling back to '{}'",
                                ed, next
                            ));
                        }
                    }
                }
            }

            return Err(AppError::Config(format!(
                "could not edit {} with any of: {}",
                path.display(),
                candidates.join(", ")
            )));
        }
    }

    Ok(())
}

fn platform_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}

/// Editors to try in order: `--editor`, then `$EDITOR`/`$VISUAL`, then the
/// platform default. Each editor appears once.
fn editor_candidates(requested: Option<String>, env_editor: Option<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ed in [requested, env_editor, Some(platform_editor().to_string())]
        .into_iter()
        .flatten()
    {
        let ed = ed.trim().to_string();
        if !ed.is_empty() && !out.contains(&ed) {
            out.push(ed);
        }
    }
    out
}
