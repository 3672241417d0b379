mod check_digit;
mod collaborators;
mod consts;
mod prelude;
mod types;

pub use check_digit::{
    CheckDigit, append_check_digit, char_value, check_digit, pad_field, verify_check_digit,
};
pub use collaborators::{
    DocumentScanner, LookupError, MockDocumentScanner, MockNationalityLookup, Mrtd,
    NationalityLookup, ScanError,
};
pub use consts::*;
pub use types::{CountryCode, Day, Month, Year};

use crate::prelude::*;

/// A date of birth as it appears in the machine readable zone.
///
/// Components are only range-checked (day 1-31, month 1-12, year >= 0);
/// the day is not checked against the month, so `31` February is accepted.
/// Displays as `YYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}{}{}", "year.short()", month, day)]
pub struct BirthDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display(fmt = "Invalid date components provided")]
    InvalidDate,
    #[display(fmt = "Invalid check digit: {} (must be 0-9)", _0)]
    InvalidCheckDigit(u8),
    #[display(fmt = "Unknown country code: {:?}", _0)]
    UnknownCode(String),
}

impl std::error::Error for FormatError {}

impl BirthDate {
    /// Validates the raw components.
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDate` if any component is out of range.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, FormatError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day)?,
        })
    }

    /// Builds a date from components that are already validated
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The `YYMMDD` text followed by its check digit, as written in an MRZ line.
    pub fn to_mrz_field(&self) -> String {
        append_check_digit(&self.to_string())
    }
}

/// Returns `true` if `code` is one of the [`ACCEPTED_CODES`].
///
/// The comparison is exact: lowercase or padded input is not accepted.
pub fn is_valid_country_code(code: &str) -> bool {
    ACCEPTED_CODES.iter().any(|&accepted| accepted == code)
}

/// Formats a date of birth as the six character MRZ `YYMMDD` field.
///
/// # Errors
/// Returns `FormatError::InvalidDate` if the day is outside 1-31, the month
/// outside 1-12, or the year is negative.
pub fn format_date_of_birth(day: i32, month: i32, year: i32) -> Result<String, FormatError> {
    BirthDate::new(day, month, year).map(|date| date.to_string())
}
