//! Field rules for enrollment input.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

/// Placeholder the entry form shows in empty date fields.
pub const DATE_PLACEHOLDER: &str = "YYYY/MM/DD";

pub const EARLIEST_YEAR: i32 = 1900;
pub const LATEST_YEAR: i32 = 2025;

/// Minimum age, in whole years, on the membership start date.
pub const MINIMUM_AGE: i32 = 10;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// True if `value` is blank or still the date placeholder.
pub fn is_blank(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == DATE_PLACEHOLDER
}

/// Exactly ten digits.
pub fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format("phone", "must be exactly 10 digits"))
    }
}

/// `local@domain.tld`
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format("email", "must look like name@example.com"))
    }
}

/// Parses a `YYYY/MM/DD` date with the year limited to 1900–2025.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if is_blank(value) {
        return Err(ValidationError::empty_field(field));
    }

    let format_error = || ValidationError::invalid_format(field, "expected YYYY/MM/DD");

    let parts: Vec<&str> = value.split('/').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(format_error());
    };

    let year: i32 = year.parse().map_err(|_| format_error())?;
    let month: u32 = month.parse().map_err(|_| format_error())?;
    let day: u32 = day.parse().map_err(|_| format_error())?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::out_of_range(
            format!("{} month", field),
            1,
            12,
            i64::from(month),
        ));
    }
    if !(EARLIEST_YEAR..=LATEST_YEAR).contains(&year) {
        return Err(ValidationError::out_of_range(
            format!("{} year", field),
            i64::from(EARLIEST_YEAR),
            i64::from(LATEST_YEAR),
            i64::from(year),
        ));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ValidationError::invalid_format(field, format!("{} is not a calendar date", value))
    })
}

/// Whole years from `born` to `on`.
pub fn age_on(born: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - born.year();
    if (on.month(), on.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

/// Member must be at least `MINIMUM_AGE` when the membership starts.
pub fn check_minimum_age(born: NaiveDate, start: NaiveDate) -> Result<(), ValidationError> {
    let age = age_on(born, start);
    if age < MINIMUM_AGE {
        return Err(ValidationError::invalid_format(
            "date_of_birth",
            format!(
                "member must be at least {} years old to start membership",
                MINIMUM_AGE
            ),
        ));
    }
    Ok(())
}
