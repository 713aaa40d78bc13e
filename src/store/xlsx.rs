use crate::errors::AppResult;
use crate::store::cell::{Cell, header_row};
use crate::store::{Table, to_persistence_error};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Load the values of every sheet, in workbook order.
pub(crate) fn read_workbook(path: &Path) -> AppResult<Vec<Table>> {
    let mut wb: Xlsx<_> = open_workbook(path).map_err(to_persistence_error)?;
    let names = wb.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = wb.worksheet_range(&name).map_err(to_persistence_error)?;
        sheets.push(Table {
            name,
            rows: range_to_rows(&range),
        });
    }

    Ok(sheets)
}

/// Cells keep their absolute position: the range may not start at A1.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((r0, c0)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<Cell>> = (0..r0).map(|_| Vec::new()).collect();
    for r in range.rows() {
        let mut row = vec![Cell::Empty; c0 as usize];
        row.extend(r.iter().map(Cell::from_data));
        rows.push(row);
    }
    rows
}

/// Write all sheets to a new workbook at `path`, replacing the file.
///
/// The first sheet is the active table: when it starts with the header row the
/// header is styled and frozen, and its columns are sized to their content.
pub(crate) fn write_workbook(path: &Path, sheets: &[Table]) -> AppResult<()> {
    let mut workbook = Workbook::new();

    for (index, sheet) in sheets.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        if !sheet.name.is_empty() {
            worksheet
                .set_name(&sheet.name)
                .map_err(to_persistence_error)?;
        }

        let styled = index == 0 && sheet.rows.first() == Some(&header_row());
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x2F75B5))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let fmt = (styled && r == 0).then_some(&header_format);
                write_cell(worksheet, r as u32, c as u16, cell, fmt)?;
            }
        }

        if styled {
            worksheet
                .set_freeze_panes(1, 0)
                .map_err(to_persistence_error)?;
        }

        if index == 0 {
            autofit_columns(worksheet, &sheet.rows)?;
        }
    }

    workbook.save(path).map_err(to_persistence_error)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    fmt: Option<&Format>,
) -> AppResult<()> {
    match (cell, fmt) {
        (Cell::Empty, _) => {}
        // record counts are bounded to MAX_EXACT_COUNT, so the cast is exact
        (Cell::Int(i), None) => {
            worksheet
                .write_number(row, col, *i as f64)
                .map_err(to_persistence_error)?;
        }
        (Cell::Float(n), None) => {
            worksheet
                .write_number(row, col, *n)
                .map_err(to_persistence_error)?;
        }
        (Cell::Bool(b), None) => {
            worksheet
                .write_boolean(row, col, *b)
                .map_err(to_persistence_error)?;
        }
        (Cell::Text(s), None) => {
            worksheet
                .write_string(row, col, s)
                .map_err(to_persistence_error)?;
        }
        (other, Some(f)) => {
            worksheet
                .write_string_with_format(row, col, other.to_string(), f)
                .map_err(to_persistence_error)?;
        }
    }
    Ok(())
}

fn autofit_columns(worksheet: &mut Worksheet, rows: &[Vec<Cell>]) -> AppResult<()> {
    let mut col_widths: Vec<usize> = Vec::new();

    for row in rows {
        for (c, cell) in row.iter().enumerate() {
            let w = UnicodeWidthStr::width(cell.to_string().as_str());
            if c >= col_widths.len() {
                col_widths.resize(c + 1, 0);
            }
            col_widths[c] = col_widths[c].max(w);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_persistence_error)?;
    }
    Ok(())
}
