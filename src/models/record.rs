use crate::models::weekday::Weekday;

/// Header row written when the spreadsheet is first created.
pub const HEADERS: [&str; 9] = [
    "Date",
    "Day",
    "Morning Count",
    "Closing Count",
    "Transaction Number",
    "Number of Customers",
    "Conversion Rate",
    "End of Day",
    "Comments",
];

/// One business day's observation, as appended to the spreadsheet.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRecord {
    pub date: String,
    pub day: Weekday,
    pub morning_count: i64,
    pub closing_count: i64,
    pub transaction_number: i64,
    pub number_of_customers: i64,
    pub conversion_rate: String,
    pub end_of_day: i64,
    pub comments: String,
}
