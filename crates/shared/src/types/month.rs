//! Calendar month keys in `YYYY-MM` form.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ParseError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, serialized as zero-padded `YYYY-MM`.
///
/// Ordering is chronological, which coincides with lexicographic ordering of
/// the serialized form because both fields are zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: u16,
    month: u8,
}

impl Month {
    /// Creates a month, validating year 1..=9999 and month 1..=12.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidMonth` when either component is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(ParseError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono months are always 1..=12; years outside 1..=9999 are clamped.
        let year = u16::try_from(date.year().clamp(1, 9999)).unwrap_or(9999);
        let month = u8::try_from(date.month()).unwrap_or(12);
        Self { year, month }
    }

    /// The current month in UTC.
    #[must_use]
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Month of year, 1-based.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// The month before this one, or `None` at the start of year 1.
    #[must_use]
    pub const fn pred(self) -> Option<Self> {
        if self.month > 1 {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        } else if self.year > 1 {
            Some(Self {
                year: self.year - 1,
                month: 12,
            })
        } else {
            None
        }
    }

    /// The month after this one, or `None` past year 9999.
    #[must_use]
    pub const fn succ(self) -> Option<Self> {
        if self.month < 12 {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        } else if self.year < 9999 {
            Some(Self {
                year: self.year + 1,
                month: 1,
            })
        } else {
            None
        }
    }

    /// The `count` months ending at `end` (inclusive), oldest first.
    ///
    /// Stops early if the calendar runs out before `count` months are found.
    #[must_use]
    pub fn trailing(end: Self, count: usize) -> Vec<Self> {
        let mut months: Vec<Self> = std::iter::successors(Some(end), |m| m.pred())
            .take(count)
            .collect();
        months.reverse();
        months
    }

    /// Three-letter month name, e.g. `"Mar"`.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.month - 1)]
    }

    /// Chart axis label, e.g. `"Jan 2024"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.abbreviation(), self.year)
    }

    /// Compact picker label, e.g. `"Jan 24"`.
    #[must_use]
    pub fn short_label(self) -> String {
        format!("{} {:02}", self.abbreviation(), self.year % 100)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMonth(s.to_string());

        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes.iter().enumerate().all(|(i, b)| {
                if i == 4 {
                    *b == b'-'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_formed {
            return Err(invalid());
        }

        let (year, month) = (&s[..4], &s[5..]);
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}
