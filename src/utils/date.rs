use crate::errors::{AppError, AppResult};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};

/// Today's date rendered with `format` (the form's pre-filled date).
pub fn today_string(format: &str) -> AppResult<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return Err(AppError::Config(format!("invalid date_format '{format}'")));
    }

    Ok(Local::now()
        .date_naive()
        .format_with_items(items.into_iter())
        .to_string())
}
