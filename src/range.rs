use std::{cmp::Ordering, str::FromStr};

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{DATE_FORMAT, ParseError, RANGE_SEPARATOR, prelude::*};

/// A closed range of selected days (inclusive).
/// The lower bound is never after the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}", "lower.format(DATE_FORMAT)", "upper.format(DATE_FORMAT)")]
pub struct SelectionRange {
    lower: NaiveDate,
    upper: NaiveDate,
}

/// Error type for selection range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after upper bound.
    #[error("Invalid selection range: lower ({lower}) is after upper ({upper})")]
    InvalidRange { lower: NaiveDate, upper: NaiveDate },

    /// Error parsing one of the bounds.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl SelectionRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if lower > upper.
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// A range covering the single day `date`
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            lower: date,
            upper: date,
        }
    }

    /// Range spanning both dates, in whichever order they are given
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    pub const fn lower(&self) -> NaiveDate {
        self.lower
    }

    pub const fn upper(&self) -> NaiveDate {
        self.upper
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.lower, self.upper)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower <= date && date <= self.upper
    }

    /// Days from lower to upper bound; 0 for a single-day range
    pub fn span_days(&self) -> i64 {
        self.upper.signed_duration_since(self.lower).num_days()
    }

    pub fn is_single_day(&self) -> bool {
        self.lower == self.upper
    }

    /// Grows the range just enough to include `date`. Never shrinks it.
    #[must_use]
    pub fn extended_to(self, date: NaiveDate) -> Self {
        match (date.cmp(&self.lower), date.cmp(&self.upper)) {
            (Ordering::Less, _) => Self {
                lower: date,
                upper: self.upper,
            },
            (_, Ordering::Greater) => Self {
                lower: self.lower,
                upper: date,
            },
            _ => self,
        }
    }

    /// Every day in the range, in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let lower = self.lower;
        (0..=self.span_days()).map_while(move |offset| {
            lower.checked_add_signed(TimeDelta::try_days(offset)?)
        })
    }
}

impl FromStr for SelectionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (lower_str, upper_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let lower = parse_date(lower_str.trim())?;
                let upper = parse_date(upper_str.trim())?;

                Self::new(lower, upper)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ParseError::InvalidDate(s.to_owned()))
}

impl PartialOrd for SelectionRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SelectionRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare lower bounds first, then upper bounds
        match self.lower.cmp(&other.lower) {
            Ordering::Equal => self.upper.cmp(&other.upper),
            ord => ord,
        }
    }
}

impl Serialize for SelectionRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SelectionRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
