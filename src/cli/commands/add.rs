use crate::cli::commands::{print_calculation, report_saved, store_for};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::FormState;
use crate::errors::AppResult;
use crate::models::Weekday;
use crate::utils::date::today_string;

/// Calculate and persist one day's record in a single step.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        day,
        morning,
        closing,
        transactions,
        end_of_day,
        comments,
    } = cmd
    {
        //
        // 1. Build the form (date and day fall back to their defaults)
        //
        let date = match date {
            Some(d) => d.clone(),
            None => today_string(&cfg.date_format)?,
        };
        let day = Weekday::parse(day.as_deref().unwrap_or(&cfg.default_day))?;

        let mut form = FormState::new(date, day);
        form.morning_count = morning.clone();
        form.closing_count = closing.clone();
        form.transaction_number = transactions.clone();
        form.end_of_day = end_of_day.clone();
        form.comments = comments.clone();

        //
        // 2. Calculate and show
        //
        let calc = form.calculate()?;
        print_calculation(&calc);

        //
        // 3. Confirm and append
        //
        let record = form.confirm(&calc)?;
        let report = store_for(cfg).append(&record)?;
        report_saved(&report);
    }

    Ok(())
}
