use crate::errors::{AppError, AppResult};
use std::fmt;

/// Day-of-week as the operator picks it on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Mon,
    Tues,
    Wed,
    Thurs,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tues,
        Weekday::Wed,
        Weekday::Thurs,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Label written to the spreadsheet.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tues => "Tues",
            Weekday::Wed => "Wed",
            Weekday::Thurs => "Thurs",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Parse operator input: the stored label, the full English name or the
    /// three-letter form, in any case.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mon" | "monday" => Some(Weekday::Mon),
            "tues" | "tue" | "tuesday" => Some(Weekday::Tues),
            "wed" | "wednesday" => Some(Weekday::Wed),
            "thurs" | "thu" | "thur" | "thursday" => Some(Weekday::Thurs),
            "fri" | "friday" => Some(Weekday::Fri),
            "sat" | "saturday" => Some(Weekday::Sat),
            "sun" | "sunday" => Some(Weekday::Sun),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_label(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_label(day.label()), Some(day));
        }
    }

    #[test]
    fn accepts_full_names_and_short_forms() {
        assert_eq!(Weekday::from_label("Tuesday"), Some(Weekday::Tues));
        assert_eq!(Weekday::from_label("thu"), Some(Weekday::Thurs));
        assert_eq!(Weekday::from_label(" SUN "), Some(Weekday::Sun));
    }

    #[test]
    fn unknown_day_is_an_input_error() {
        let err = Weekday::parse("Funday").unwrap_err();
        assert!(matches!(err, AppError::InvalidDay(ref d) if d == "Funday"));
    }
}
