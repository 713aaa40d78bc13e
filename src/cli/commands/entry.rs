//! Interactive daily form: fill in, calculate, confirm, save, reset.

use crate::cli::commands::{print_calculation, report_saved, store_for};
use crate::config::Config;
use crate::core::form::{INVALID_COUNTS_MSG, INVALID_FIELDS_MSG, parse_count};
use crate::core::{Calculation, FormState};
use crate::errors::{AppError, AppResult};
use crate::models::Weekday;
use crate::store::RecordStore;
use crate::ui::messages::{error, header, info};
use crate::ui::prompt::{ask, confirm};
use crate::utils::date::today_string;
use std::io::{self, BufRead};

/// Handle the `entry` command on the process stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&mut input, cfg)
}

/// Form loop. Values typed so far are kept across validation and save
/// errors; only a successful save resets the form.
pub fn run_session<R: BufRead>(input: &mut R, cfg: &Config) -> AppResult<()> {
    let store = store_for(cfg);
    let default_day = Weekday::parse(&cfg.default_day)?;
    let mut form = FormState::new(today_string(&cfg.date_format)?, default_day);

    header("Conversion Tracker");
    info(format!("Saving to {}", store.path().display()));

    loop {
        if !fill_form(input, &mut form)? {
            info("No more input, nothing saved.");
            return Ok(());
        }

        let calc = match form.calculate() {
            Ok(calc) => calc,
            Err(e) => {
                error(e);
                continue;
            }
        };
        print_calculation(&calc);

        if save_step(input, &store, &form, &calc)? {
            form.reset(today_string(&cfg.date_format)?, default_day);
            if !confirm(input, "Enter another day?")? {
                return Ok(());
            }
        } else if !confirm(input, "Edit the form again?")? {
            info("Nothing saved.");
            return Ok(());
        }
    }
}

/// Prompt every field, re-asking only the ones that fail to parse.
/// Returns false when input ends.
fn fill_form<R: BufRead>(input: &mut R, form: &mut FormState) -> AppResult<bool> {
    let Some(date) = ask(input, "Date", &form.date)? else {
        return Ok(false);
    };
    form.date = date;

    loop {
        let Some(day) = ask(input, "Day", form.day.label())? else {
            return Ok(false);
        };
        match Weekday::parse(&day) {
            Ok(d) => {
                form.day = d;
                break;
            }
            Err(e) => error(e),
        }
    }

    if !ask_number(input, "Morning Count", &mut form.morning_count, INVALID_COUNTS_MSG)?
        || !ask_number(input, "Closing Count", &mut form.closing_count, INVALID_COUNTS_MSG)?
        || !ask_number(
            input,
            "Transaction Number",
            &mut form.transaction_number,
            INVALID_COUNTS_MSG,
        )?
        || !ask_number(
            input,
            "End of Day (sales w/o tax)",
            &mut form.end_of_day,
            INVALID_FIELDS_MSG,
        )?
    {
        return Ok(false);
    }

    let Some(comments) = ask(input, "Comments", &form.comments)? else {
        return Ok(false);
    };
    form.comments = comments;

    Ok(true)
}

fn ask_number<R: BufRead>(
    input: &mut R,
    label: &str,
    slot: &mut String,
    msg: &str,
) -> AppResult<bool> {
    loop {
        let Some(value) = ask(input, label, slot)? else {
            return Ok(false);
        };
        if parse_count(&value).is_some() {
            *slot = value;
            return Ok(true);
        }
        error(AppError::InputValidation(msg.to_string()));
    }
}

/// Ask for confirmation and append. A failed save is reported and the
/// operator may confirm again to retry. Returns true once saved.
fn save_step<R: BufRead>(
    input: &mut R,
    store: &RecordStore,
    form: &FormState,
    calc: &Calculation,
) -> AppResult<bool> {
    loop {
        if !confirm(input, "Confirm and save?")? {
            return Ok(false);
        }

        let record = form.confirm(calc)?;
        match store.append(&record) {
            Ok(report) => {
                report_saved(&report);
                return Ok(true);
            }
            Err(e) => error(e),
        }
    }
}
