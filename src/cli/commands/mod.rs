pub mod add;
pub mod calc;
pub mod config;
pub mod entry;
pub mod init;

use crate::config::Config;
use crate::core::Calculation;
use crate::store::{AppendReport, RecordStore};
use crate::ui::messages::{field, success, warning};

/// Store for the configured spreadsheet.
pub(crate) fn store_for(cfg: &Config) -> RecordStore {
    RecordStore::new(cfg.sheet_path()).with_open_after_save(cfg.open_after_save)
}

pub(crate) fn print_calculation(calc: &Calculation) {
    field("Number of Customers", calc.customers);
    field("Conversion Rate", &calc.conversion_rate);
}

/// Success line, plus the non-fatal open warning if any.
pub(crate) fn report_saved(report: &AppendReport) {
    if report.created {
        success(format!(
            "Data saved successfully! Created {}",
            report.path.display()
        ));
    } else {
        success(format!(
            "Data saved successfully! {} ({} rows)",
            report.path.display(),
            report.data_rows
        ));
    }

    if let Some(w) = &report.open_warning {
        warning(w);
    }
}
