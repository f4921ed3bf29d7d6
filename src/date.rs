//! The CCYYMMDD date stored inside a SAUCE record.
//!
//! Dates in the wild are frequently garbage (month 13, day 0, spaces,
//! stray text). [`SauceDate::from_bytes`] therefore only accepts eight
//! ASCII digits that form a real calendar date; anything else decodes to
//! "no date" (`None` at the call sites).

use chrono::{Datelike, NaiveDate};

use crate::limits::DATE_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SauceDate {
    /// Full 4-digit year.
    pub year: i32,
    /// Month, 1 to 12.
    pub month: u8,
    /// Day of month, valid for the year and month.
    pub day: u8,
}

impl std::fmt::Display for SauceDate {
    /// Render as `YYYY/MM/DD`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl SauceDate {
    /// Construct from components, rejecting calendar-invalid input.
    /// The year must fit the four wire digits.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(0..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(|_| SauceDate { year, month, day })
    }

    /// Parse an 8-byte CCYYMMDD ASCII slice.
    ///
    /// Returns `None` if the slice is not exactly eight ASCII digits or
    /// the digits do not form a valid calendar date.
    ///
    /// ```
    /// use saucery::SauceDate;
    /// assert!(SauceDate::from_bytes(b"19940831").is_some());
    /// assert!(SauceDate::from_bytes(b"19941331").is_none()); // month 13
    /// assert!(SauceDate::from_bytes(b"19940800").is_none()); // day 0
    /// assert!(SauceDate::from_bytes(b"1994    ").is_none());
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != DATE_LENGTH || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digit = |b: u8| (b - b'0') as i32;
        let year = digit(bytes[0]) * 1000 + digit(bytes[1]) * 100 + digit(bytes[2]) * 10
            + digit(bytes[3]);
        let month = (digit(bytes[4]) * 10 + digit(bytes[5])) as u8;
        let day = (digit(bytes[6]) * 10 + digit(bytes[7])) as u8;

        SauceDate::new(year, month, day)
    }

    /// Serialize to the strict wire format, eight zero-padded digits.
    pub fn to_bytes(self) -> [u8; DATE_LENGTH] {
        let mut out = [0u8; DATE_LENGTH];
        let text = format!("{:04}{:02}{:02}", self.year, self.month, self.day);
        out.copy_from_slice(&text.as_bytes()[..DATE_LENGTH]);
        out
    }

    /// Convert to a `chrono::NaiveDate`. The fields are public, so a
    /// hand-built value may not be a calendar date; those return `None`.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }
}

impl From<NaiveDate> for SauceDate {
    fn from(date: NaiveDate) -> Self {
        SauceDate {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<SauceDate> for NaiveDate {
    type Error = ();

    fn try_from(value: SauceDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(value.year, value.month as u32, value.day as u32).ok_or(())
    }
}
