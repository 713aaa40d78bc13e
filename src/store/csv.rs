use crate::errors::AppResult;
use crate::store::cell::Cell;
use crate::store::to_persistence_error;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Load every record of a CSV file. Rows may have different lengths.
pub(crate) fn read_rows(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(to_persistence_error)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(to_persistence_error)?;
        rows.push(rec.iter().map(Cell::from_field).collect());
    }

    Ok(rows)
}

/// Rewrite the whole file with `rows`.
pub(crate) fn write_rows(path: &Path, rows: &[Vec<Cell>]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(to_persistence_error)?;

    for row in rows {
        wtr.write_record(row.iter().map(|c| c.to_string()))
            .map_err(to_persistence_error)?;
    }

    wtr.flush().map_err(to_persistence_error)?;
    Ok(())
}
