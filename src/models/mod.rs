pub mod record;
pub mod weekday;

pub use record::{ConversionRecord, HEADERS};
pub use weekday::Weekday;
