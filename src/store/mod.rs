//! Append-only spreadsheet storage for conversion records.

mod cell;
mod csv;
pub mod opener;
mod xlsx;

pub use cell::Cell;

use crate::errors::{AppError, AppResult};
use crate::models::ConversionRecord;
use cell::{header_row, record_to_row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sheet name given to a newly created workbook.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// On-disk table format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Csv,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SheetFormat::Csv,
            _ => SheetFormat::Xlsx,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetFormat::Xlsx => "xlsx",
            SheetFormat::Csv => "csv",
        }
    }
}

/// One named sheet of loaded values.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Table {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// Outcome of a successful append.
#[derive(Debug)]
pub struct AppendReport {
    pub path: PathBuf,
    /// The file did not exist before this append.
    pub created: bool,
    /// Rows below the header after this append.
    pub data_rows: usize,
    /// Set when the file was saved but could not be opened for viewing.
    pub open_warning: Option<AppError>,
}

pub(crate) fn to_persistence_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Persistence(e.to_string())
}

/// A single spreadsheet file that records are appended to.
///
/// Every append loads the whole table and rewrites the file; there is no
/// locking, so two processes appending at once can lose a row.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    format: SheetFormat,
    open_after_save: bool,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SheetFormat::from_path(&path);
        Self {
            path,
            format,
            open_after_save: true,
        }
    }

    /// Whether a successful append also opens the file for viewing.
    pub fn with_open_after_save(mut self, open: bool) -> Self {
        self.open_after_save = open;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SheetFormat {
        self.format
    }

    fn load(&self) -> AppResult<Vec<Table>> {
        match self.format {
            SheetFormat::Xlsx => xlsx::read_workbook(&self.path),
            SheetFormat::Csv => Ok(vec![Table {
                name: String::new(),
                rows: csv::read_rows(&self.path)?,
            }]),
        }
    }

    fn save(&self, sheets: &[Table]) -> AppResult<()> {
        match self.format {
            SheetFormat::Xlsx => xlsx::write_workbook(&self.path, sheets),
            SheetFormat::Csv => csv::write_rows(&self.path, &sheets[0].rows),
        }
    }

    /// Rows of the active table (the first sheet), header included.
    pub fn rows(&self) -> AppResult<Vec<Vec<Cell>>> {
        let mut sheets = self.load()?;
        if sheets.is_empty() {
            return Ok(Vec::new());
        }
        Ok(sheets.swap_remove(0).rows)
    }

    /// Append one record, creating the file with its header row if needed,
    /// then open the file when enabled.
    pub fn append(&self, record: &ConversionRecord) -> AppResult<AppendReport> {
        let created = !self.path.exists();

        let mut sheets = if created {
            Vec::new()
        } else {
            self.load()?
        };
        if sheets.is_empty() {
            let name = match self.format {
                SheetFormat::Xlsx => DEFAULT_SHEET_NAME.to_string(),
                SheetFormat::Csv => String::new(),
            };
            sheets.push(Table {
                name,
                rows: Vec::new(),
            });
        }

        let target = &mut sheets[0];
        if target.rows.is_empty() {
            debug!(path = %self.path.display(), "writing header row");
            target.rows.push(header_row());
        }
        target.rows.push(record_to_row(record));
        let header_rows = usize::from(target.rows.first() == Some(&header_row()));
        let data_rows = target.rows.len() - header_rows;

        self.save(&sheets)?;
        info!(
            path = %self.path.display(),
            format = self.format.as_str(),
            created,
            data_rows,
            "record appended"
        );

        let open_warning = if self.open_after_save {
            opener::open_file(&self.path).err()
        } else {
            None
        };

        Ok(AppendReport {
            path: self.path.clone(),
            created,
            data_rows,
            open_warning,
        })
    }
}
