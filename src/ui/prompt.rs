//! Line-based prompts on stdin for the interactive entry session.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// Read one line, without its trailing newline. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(AppError::from)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Ask for a value, showing `current` in brackets; an empty answer keeps it.
pub fn ask<R: BufRead>(input: &mut R, label: &str, current: &str) -> AppResult<Option<String>> {
    if current.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{current}]: ");
    }
    io::stdout().flush().ok();

    Ok(read_line(input)?.map(|answer| {
        if answer.trim().is_empty() {
            current.to_string()
        } else {
            answer
        }
    }))
}

/// Yes/no question, defaulting to no.
pub fn confirm<R: BufRead>(input: &mut R, question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let answer = read_line(input)?.unwrap_or_default();
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
