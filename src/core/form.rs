//! Form state for one day's entry.
//!
//! The presenter owns a `FormState` holding the raw text the operator typed.
//! `calculate()` derives customers and conversion rate; `confirm()` turns the
//! form into a `ConversionRecord`, but only for a calculation made from the
//! exact counts currently in the form.

use crate::core::calculator::{conversion_rate, customers};
use crate::errors::{AppError, AppResult};
use crate::models::{ConversionRecord, Weekday};

pub const INVALID_COUNTS_MSG: &str = "Please enter valid numbers for counts and transactions.";
pub const INVALID_FIELDS_MSG: &str = "Please ensure all fields are filled correctly.";

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawCounts {
    morning: String,
    closing: String,
    transactions: String,
}

/// Result of a calculation, tied to the raw counts it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    counts: RawCounts,
    pub customers: i64,
    pub conversion_rate: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub date: String,
    pub day: Weekday,
    pub morning_count: String,
    pub closing_count: String,
    pub transaction_number: String,
    pub end_of_day: String,
    pub comments: String,
}

/// Largest magnitude a spreadsheet number cell holds exactly (2^53 - 1).
pub const MAX_EXACT_COUNT: i64 = (1 << 53) - 1;

/// True when `n` survives a round trip through a spreadsheet number cell.
pub fn is_exact_count(n: i64) -> bool {
    (-MAX_EXACT_COUNT..=MAX_EXACT_COUNT).contains(&n)
}

/// Coerce one numeric field; surrounding whitespace and a leading sign are accepted.
/// Values a spreadsheet cannot store exactly are rejected.
pub fn parse_count(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| is_exact_count(*n))
}

impl FormState {
    /// Empty form with the pre-filled date and day.
    pub fn new(date: impl Into<String>, day: Weekday) -> Self {
        Self {
            date: date.into(),
            day,
            morning_count: String::new(),
            closing_count: String::new(),
            transaction_number: String::new(),
            end_of_day: String::new(),
            comments: String::new(),
        }
    }

    fn raw_counts(&self) -> RawCounts {
        RawCounts {
            morning: self.morning_count.clone(),
            closing: self.closing_count.clone(),
            transactions: self.transaction_number.clone(),
        }
    }

    fn parsed_counts(&self, msg: &str) -> AppResult<(i64, i64, i64)> {
        let invalid = || AppError::InputValidation(msg.to_string());
        let morning = parse_count(&self.morning_count).ok_or_else(invalid)?;
        let closing = parse_count(&self.closing_count).ok_or_else(invalid)?;
        let transactions = parse_count(&self.transaction_number).ok_or_else(invalid)?;
        Ok((morning, closing, transactions))
    }

    /// Compute customers and conversion rate from the current counts.
    pub fn calculate(&self) -> AppResult<Calculation> {
        let (morning, closing, transactions) = self.parsed_counts(INVALID_COUNTS_MSG)?;
        let n = customers(closing, morning);
        if !is_exact_count(n) {
            return Err(AppError::InputValidation(INVALID_COUNTS_MSG.to_string()));
        }

        Ok(Calculation {
            counts: self.raw_counts(),
            customers: n,
            conversion_rate: conversion_rate(transactions, n),
        })
    }

    /// True when `calc` was produced from the counts currently in the form.
    pub fn is_calculated(&self, calc: &Calculation) -> bool {
        calc.counts == self.raw_counts()
    }

    /// Build the record to persist.
    ///
    /// Derived values are recomputed here, never taken from `calc`.
    pub fn confirm(&self, calc: &Calculation) -> AppResult<ConversionRecord> {
        if !self.is_calculated(calc) {
            return Err(AppError::StaleCalculation);
        }

        let (morning, closing, transactions) = self.parsed_counts(INVALID_FIELDS_MSG)?;
        let end_of_day = parse_count(&self.end_of_day)
            .ok_or_else(|| AppError::InputValidation(INVALID_FIELDS_MSG.to_string()))?;
        let n = customers(closing, morning);
        if !is_exact_count(n) {
            return Err(AppError::InputValidation(INVALID_FIELDS_MSG.to_string()));
        }

        Ok(ConversionRecord {
            date: self.date.clone(),
            day: self.day,
            morning_count: morning,
            closing_count: closing,
            transaction_number: transactions,
            number_of_customers: n,
            conversion_rate: conversion_rate(transactions, n),
            end_of_day,
            comments: self.comments.trim().to_string(),
        })
    }

    /// Back to an empty form after a successful save.
    pub fn reset(&mut self, date: impl Into<String>, day: Weekday) {
        *self = Self::new(date, day);
    }
}
