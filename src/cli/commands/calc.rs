use crate::cli::parser::Commands;
use crate::core::calculator::{conversion_rate, customers};
use crate::core::form::{INVALID_COUNTS_MSG, is_exact_count, parse_count};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::field;

/// Handle the `calc` subcommand: show the derived values, save nothing.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calc {
        morning,
        closing,
        transactions,
    } = cmd
    {
        let invalid = || AppError::InputValidation(INVALID_COUNTS_MSG.to_string());
        let morning = parse_count(morning).ok_or_else(invalid)?;
        let closing = parse_count(closing).ok_or_else(invalid)?;
        let transactions = parse_count(transactions).ok_or_else(invalid)?;

        let n = customers(closing, morning);
        if !is_exact_count(n) {
            return Err(invalid());
        }
        field("Number of Customers", n);
        field("Conversion Rate", conversion_rate(transactions, n));
    }

    Ok(())
}
