use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::civil_date;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            other => Err(CoreError::invalid(
                "gender",
                format!("expected 'male' or 'female', got '{other}'"),
            )),
        }
    }
}

/// Civil birth date and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `0..=23`
    pub hour: u32,
}

impl BirthDate {
    /// Validated constructor: the date must exist and the hour be in `0..=23`.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self> {
        let date = Self {
            year,
            month,
            day,
            hour,
        };
        date.civil_date()?;
        if hour > 23 {
            return Err(CoreError::invalid(
                "hour",
                format!("hour {hour} is outside 0..=23"),
            ));
        }
        Ok(date)
    }

    /// Build from text fields, e.g. form or CLI input.
    pub fn parse_parts(year: &str, month: &str, day: &str, hour: &str) -> Result<Self> {
        Self::new(
            parse_int("year", year)?,
            parse_int("month", month)?,
            parse_int("day", day)?,
            parse_int("hour", hour)?,
        )
    }

    pub fn civil_date(&self) -> Result<NaiveDate> {
        civil_date(self.year, self.month, self.day)
    }
}

fn parse_int<T: FromStr>(field: &str, text: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| CoreError::invalid(field, format!("'{text}': {e}")))
}

/// Raw birth input. Every field is required by the calculator; absence is
/// reported as [`CoreError::MissingField`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    #[serde(default)]
    pub birth_date: Option<BirthDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub location: Option<String>,
}

impl BirthRecord {
    pub fn new(birth_date: BirthDate, gender: Gender, location: impl Into<String>) -> Self {
        Self {
            birth_date: Some(birth_date),
            gender: Some(gender),
            location: Some(location.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_parts_accepts_integers() {
        let date = BirthDate::parse_parts("1990", "6", " 15 ", "14").unwrap();
        assert_eq!(date, BirthDate::new(1990, 6, 15, 14).unwrap());
    }

    #[test]
    fn parse_parts_rejects_non_integers_and_bad_hours() {
        assert!(BirthDate::parse_parts("nineteen", "6", "15", "14").unwrap_err().is_invalid_input());
        assert!(BirthDate::parse_parts("1990", "6", "15", "24").unwrap_err().is_invalid_input());
        assert!(BirthDate::parse_parts("1990", "6", "15", "-1").unwrap_err().is_invalid_input());
        assert!(BirthDate::parse_parts("1990", "2", "30", "1").unwrap_err().is_invalid_input());
    }

    #[test]
    fn gender_parses_both_languages() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn record_deserializes_with_absent_fields() {
        let record: BirthRecord = serde_json::from_str(r#"{"gender": "female"}"#).unwrap();
        assert_eq!(record.gender, Some(Gender::Female));
        assert!(record.birth_date.is_none());
        assert!(record.location.is_none());
    }
}
