//! Field validation for the login, registration, and trip forms.
//!
//! Every check returns an explicit per-field result so forms can attach the
//! failure to the offending input instead of juggling sentinel strings.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// A single form field failing validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid email format")]
    EmailFormat,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} must use the YYYY-MM-DD format")]
    DateFormat(&'static str),
    #[error("End date must not be before start date")]
    EndBeforeStart,
    #[error("Use the HH:MM time format")]
    TimeFormat,
}

/// Rejects empty or whitespace-only input, returning the trimmed value.
pub fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

/// Accepts addresses shaped like `local@domain.tld`.
pub fn email(value: &str) -> Result<String, FieldError> {
    let value = required("Email", value)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::EmailFormat);
    };
    let local_ok = !local.is_empty() && !local.contains(char::is_whitespace);
    let domain_ok = !domain.contains('@')
        && !domain.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty());
    if local_ok && domain_ok {
        Ok(value)
    } else {
        Err(FieldError::EmailFormat)
    }
}

/// Enforces the minimum password length. The raw value is kept; passwords
/// are never trimmed.
pub fn password(value: &str) -> Result<String, FieldError> {
    if value.is_empty() {
        Err(FieldError::Required("Password"))
    } else if value.chars().count() < 6 {
        Err(FieldError::PasswordTooShort)
    } else {
        Ok(value.to_string())
    }
}

/// Checks the confirmation matches the chosen password.
pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if confirmation.is_empty() {
        Err(FieldError::Required("Password confirmation"))
    } else if password != confirmation {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` form value.
pub fn date(field: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| FieldError::DateFormat(field))
}

/// Enforces the date ordering shared by the trip forms and the itinerary.
pub fn date_pair(start: NaiveDate, end: NaiveDate) -> Result<(), FieldError> {
    if end < start {
        Err(FieldError::EndBeforeStart)
    } else {
        Ok(())
    }
}

/// Parses an `HH:MM` form value.
pub fn time(value: &str) -> Result<NaiveTime, FieldError> {
    let value = required("Time", value)?;
    NaiveTime::parse_from_str(&value, "%H:%M").map_err(|_| FieldError::TimeFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect well-formed addresses to pass and keep their trimmed value
    #[test]
    fn email_accepts_plain_address() {
        assert_eq!(
            email("  traveler@example.com "),
            Ok("traveler@example.com".to_string())
        );
    }

    /// Expect malformed addresses to fail with the format error
    #[test]
    fn email_rejects_malformed_addresses() {
        assert_eq!(email(""), Err(FieldError::Required("Email")));
        assert_eq!(email("traveler"), Err(FieldError::EmailFormat));
        assert_eq!(email("traveler@example"), Err(FieldError::EmailFormat));
        assert_eq!(email("traveler@example."), Err(FieldError::EmailFormat));
        assert_eq!(email("tra veler@example.com"), Err(FieldError::EmailFormat));
        assert_eq!(email("traveler@exa@mple.com"), Err(FieldError::EmailFormat));
    }

    /// Expect the password rules to flag empty and short values
    #[test]
    fn password_enforces_minimum_length() {
        assert_eq!(password(""), Err(FieldError::Required("Password")));
        assert_eq!(password("abc"), Err(FieldError::PasswordTooShort));
        assert_eq!(password("secret"), Ok("secret".to_string()));
    }

    /// Expect confirmation mismatches to be reported explicitly
    #[test]
    fn confirmation_must_match() {
        assert_eq!(
            password_confirmation("secret", ""),
            Err(FieldError::Required("Password confirmation"))
        );
        assert_eq!(
            password_confirmation("secret", "secrets"),
            Err(FieldError::PasswordMismatch)
        );
        assert_eq!(password_confirmation("secret", "secret"), Ok(()));
    }

    /// Expect date parsing to accept the wire format only
    #[test]
    fn date_requires_wire_format() {
        assert_eq!(
            date("Start date", "2024-03-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(
            date("Start date", "03/01/2024"),
            Err(FieldError::DateFormat("Start date"))
        );
        assert_eq!(
            date("Start date", ""),
            Err(FieldError::Required("Start date"))
        );
    }

    /// Expect the pair check to allow same-day trips and reject reversals
    #[test]
    fn date_pair_allows_same_day() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(date_pair(start, end), Ok(()));

        let earlier = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(date_pair(start, earlier), Err(FieldError::EndBeforeStart));
    }

    /// Expect time parsing to accept HH:MM only
    #[test]
    fn time_requires_hh_mm() {
        assert_eq!(
            time("08:30"),
            Ok(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
        );
        assert_eq!(time("8 am"), Err(FieldError::TimeFormat));
        assert_eq!(time(""), Err(FieldError::Required("Time")));
    }
}
