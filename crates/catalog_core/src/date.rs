use std::fmt;
use std::str::FromStr;

use chrono::Month;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Empty,
    #[error("unknown month name `{0}`")]
    UnknownMonth(String),
    #[error("invalid year in `{0}`")]
    InvalidYear(String),
    #[error("invalid day of month in `{0}`")]
    InvalidDay(String),
    #[error("unrecognized date shape `{0}`")]
    Malformed(String),
}

/// Month and year of an event, with the day of month kept only for display.
///
/// Ordering goes through [`PartialDate::sort_key`], which ignores the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    year: i32,
    month: Month,
    day: Option<u8>,
}

impl PartialDate {
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            year,
            month,
            day: None,
        }
    }

    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Builds a date from a month name (`"March"`, `"Mar"`, `"mar"`) and a year.
    pub fn from_month_name(month: &str, year: i32) -> Result<Self, DateParseError> {
        Ok(Self::new(year, parse_month(month)?))
    }

    /// Parses `"March 2024"`, `"Jan 2024"` or `"October 17, 2023"`.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let cleaned = input.replace(',', " ");
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(DateParseError::Empty),
            [month, year] => {
                let month = parse_month(month)?;
                Ok(Self::new(parse_year(year, input)?, month))
            }
            [month, day, year] => {
                let month = parse_month(month)?;
                let day = parse_day(day, input)?;
                Ok(Self::new(parse_year(year, input)?, month).with_day(day))
            }
            _ => Err(DateParseError::Malformed(input.trim().to_string())),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// Zero-based month index, January = 0.
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    pub fn sort_key(&self) -> (i32, u32) {
        (self.year, self.month_index())
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "{} {}, {}", self.month.name(), day, self.year),
            None => write!(f, "{} {}", self.month.name(), self.year),
        }
    }
}

impl FromStr for PartialDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_month(token: &str) -> Result<Month, DateParseError> {
    let token = token.trim();
    // chrono accepts "sep" and "september" but not the common "sept".
    if token.eq_ignore_ascii_case("sept") {
        return Ok(Month::September);
    }
    Month::from_str(token).map_err(|_| DateParseError::UnknownMonth(token.to_string()))
}

fn parse_year(token: &str, input: &str) -> Result<i32, DateParseError> {
    token
        .parse::<i32>()
        .map_err(|_| DateParseError::InvalidYear(input.trim().to_string()))
}

fn parse_day(token: &str, input: &str) -> Result<u8, DateParseError> {
    match token.parse::<u8>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(DateParseError::InvalidDay(input.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{DateParseError, PartialDate};
    use chrono::Month;

    #[test]
    fn parses_month_and_year() {
        let date = PartialDate::parse("November 2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), Month::November);
        assert_eq!(date.day(), None);
        assert_eq!(date.month_index(), 10);
    }

    #[test]
    fn parses_abbreviations_case_insensitively() {
        assert_eq!(PartialDate::parse("Jan 2024").unwrap().month_index(), 0);
        assert_eq!(PartialDate::parse("aug 2025").unwrap().month(), Month::August);
        assert_eq!(PartialDate::parse("Sept 2021").unwrap().month(), Month::September);
    }

    #[test]
    fn parses_day_but_ignores_it_for_ordering() {
        let early = PartialDate::parse("April 05, 2023").unwrap();
        let late = PartialDate::parse("April 28, 2023").unwrap();
        assert_eq!(early.day(), Some(5));
        assert_eq!(early.sort_key(), late.sort_key());
        assert_eq!(early.to_string(), "April 5, 2023");
    }

    #[test]
    fn rejects_unknown_month() {
        assert_eq!(
            PartialDate::parse("Smarch 2024"),
            Err(DateParseError::UnknownMonth("Smarch".to_string()))
        );
    }

    #[test]
    fn rejects_bad_year_and_day() {
        assert!(matches!(
            PartialDate::parse("March twenty"),
            Err(DateParseError::InvalidYear(_))
        ));
        assert!(matches!(
            PartialDate::parse("March 40, 2020"),
            Err(DateParseError::InvalidDay(_))
        ));
        assert_eq!(PartialDate::parse("   "), Err(DateParseError::Empty));
        assert!(matches!(
            PartialDate::parse("2024"),
            Err(DateParseError::Malformed(_))
        ));
    }

    #[test]
    fn display_uses_full_month_name() {
        let date = PartialDate::from_month_name("dec", 2023).unwrap();
        assert_eq!(date.to_string(), "December 2023");
    }
}
