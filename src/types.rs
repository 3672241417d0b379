use crate::consts::{
    ACCEPTED_CODES, MAX_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH, MRZ_YEAR_DIGITS, YEAR_PAD_WIDTH,
};
use crate::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Narrows a caller-supplied integer into `min..=max`, or fails with `InvalidDate`.
fn bounded_u8(value: i32, min: u8, max: u8) -> Result<NonZeroU8, FormatError> {
    u8::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .and_then(NonZeroU8::new)
        .ok_or(FormatError::InvalidDate)
}

/// A year value guaranteed to be non-negative.
/// Any magnitude is accepted; only the last two digits reach the MRZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Year(u32);

impl Year {
    /// Creates a new Year, rejecting negative values
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDate` if the value is negative.
    pub fn new(value: i32) -> Result<Self, FormatError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| FormatError::InvalidDate)
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the last two digits of the year, as written in the MRZ
    #[inline]
    pub const fn short(self) -> u32 {
        self.0 % 10u32.pow(MRZ_YEAR_DIGITS)
    }
}

impl From<u32> for Year {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = YEAR_PAD_WIDTH)
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within 1..=12
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDate` if the value is out of range.
    pub fn new(value: i32) -> Result<Self, FormatError> {
        bounded_u8(value, MIN_MONTH, MAX_MONTH).map(Self)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

/// A day value guaranteed to be in the range `MIN_DAY..=MAX_DAY` (1..=31).
/// The month is not consulted, so 31 is accepted for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within 1..=31
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDate` if the value is out of range.
    pub fn new(value: i32) -> Result<Self, FormatError> {
        bounded_u8(value, MIN_DAY, MAX_DAY).map(Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

/// An issuing-authority or nationality code from the accepted set.
///
/// Only codes present in [`ACCEPTED_CODES`] can be constructed. Matching is
/// exact: no case folding and no trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// Looks up `code` in the accepted set
    ///
    /// # Errors
    /// Returns `FormatError::UnknownCode` if the code is not accepted.
    pub fn new(code: &str) -> Result<Self, FormatError> {
        ACCEPTED_CODES
            .iter()
            .find(|&&accepted| accepted == code)
            .map(|&accepted| Self(accepted))
            .ok_or_else(|| FormatError::UnknownCode(code.to_owned()))
    }

    /// Iterates over every accepted code, in table order
    pub fn all() -> impl Iterator<Item = Self> {
        ACCEPTED_CODES.iter().copied().map(Self)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl FromStr for CountryCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
