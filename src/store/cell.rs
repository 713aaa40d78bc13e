use crate::models::ConversionRecord;
use calamine::Data;
use std::fmt;

/// A single loaded spreadsheet value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Spreadsheets store every number as a float; whole values come back as `Int`.
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Cell::Int(n as i64)
        } else {
            Cell::Float(n)
        }
    }

    pub(crate) fn from_data(d: &Data) -> Self {
        match d {
            Data::Empty => Cell::Empty,
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::from_number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::String(s) => Cell::Text(s.clone()),
            Data::DateTime(dt) => Cell::from_number(dt.as_f64()),
            other => Cell::Text(other.to_string()),
        }
    }

    /// CSV is untyped: existing fields are kept verbatim so a rewrite
    /// reproduces them (`007` stays `007`).
    pub(crate) fn from_field(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Header row as cells.
pub(crate) fn header_row() -> Vec<Cell> {
    crate::models::HEADERS
        .iter()
        .map(|h| Cell::Text((*h).to_string()))
        .collect()
}

/// A record in column order: Date, Day, Morning Count, Closing Count,
/// Transaction Number, Number of Customers, Conversion Rate, End of Day, Comments.
pub(crate) fn record_to_row(r: &ConversionRecord) -> Vec<Cell> {
    vec![
        Cell::Text(r.date.clone()),
        Cell::Text(r.day.label().to_string()),
        Cell::Int(r.morning_count),
        Cell::Int(r.closing_count),
        Cell::Int(r.transaction_number),
        Cell::Int(r.number_of_customers),
        Cell::Text(r.conversion_rate.clone()),
        Cell::Int(r.end_of_day),
        Cell::Text(r.comments.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn whole_floats_normalise_to_int() {
        assert_eq!(Cell::from_number(30.0), Cell::Int(30));
        assert_eq!(Cell::from_number(-5.0), Cell::Int(-5));
        assert_eq!(Cell::from_number(2.5), Cell::Float(2.5));
    }

    #[test]
    fn calamine_values_are_mapped() {
        assert_eq!(Cell::from_data(&Data::Empty), Cell::Empty);
        assert_eq!(Cell::from_data(&Data::Float(18.0)), Cell::Int(18));
        assert_eq!(
            Cell::from_data(&Data::String("60.00%".into())),
            Cell::Text("60.00%".into())
        );
    }

    #[test]
    fn csv_fields_are_kept_verbatim() {
        assert_eq!(Cell::from_field("10-19-2026"), Cell::Text("10-19-2026".into()));
        assert_eq!(Cell::from_field("60.00%"), Cell::Text("60.00%".into()));
        assert_eq!(Cell::from_field("-5"), Cell::Text("-5".into()));
        assert_eq!(Cell::from_field("007"), Cell::Text("007".into()));
        assert_eq!(Cell::from_field("+5").to_string(), "+5");
        assert_eq!(Cell::from_field(""), Cell::Empty);
    }

    #[test]
    fn record_row_follows_header_order() {
        let rec = ConversionRecord {
            date: "10-19-2026".into(),
            day: Weekday::Wed,
            morning_count: 10,
            closing_count: 40,
            transaction_number: 18,
            number_of_customers: 30,
            conversion_rate: "60.00%".into(),
            end_of_day: 1200,
            comments: "ok".into(),
        };
        let row: Vec<String> = record_to_row(&rec).iter().map(|c| c.to_string()).collect();
        assert_eq!(row.len(), header_row().len());
        assert_eq!(
            row,
            ["10-19-2026", "Wed", "10", "40", "18", "30", "60.00%", "1200", "ok"]
        );
    }
}
