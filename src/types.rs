use crate::consts::{
    DEFAULT_YEARLY_COLUMNS, FRIDAY, FRIDAY_FIRST_REGIONS, LAYOUT_COLUMNS_SEPARATOR, MAX_WEEKDAY,
    MIN_WEEKDAY, MONDAY, MONTH_TITLE_FORMAT, SATURDAY, SATURDAY_FIRST_REGIONS, SUNDAY,
    SUNDAY_FIRST_REGIONS, WEEKDAY_SYMBOLS, YEAR_TITLE_FORMAT,
};
use crate::{ParseError, prelude::*};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

const fn non_zero(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(v) => v,
        None => NonZeroU8::MIN,
    }
}

/// A weekday number guaranteed to be in the range `1..=7`, counted from Sunday.
/// Uses `NonZeroU8` internally, so 0 is not a valid weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(NonZeroU8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(non_zero(SUNDAY));
    pub const MONDAY: Self = Self(non_zero(MONDAY));
    pub const FRIDAY: Self = Self(non_zero(FRIDAY));
    pub const SATURDAY: Self = Self(non_zero(SATURDAY));

    /// Creates a new weekday number, validating that it's within `1..=7`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the value is 0 or > 7.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidWeekday(value))?;
        if value > MAX_WEEKDAY {
            return Err(ParseError::InvalidWeekday(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the weekday number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The following weekday, wrapping Saturday to Sunday
    pub const fn succ(self) -> Self {
        if self.get() >= MAX_WEEKDAY {
            Self(non_zero(MIN_WEEKDAY))
        } else {
            Self(non_zero(self.get() + 1))
        }
    }

    pub const fn to_chrono(self) -> Weekday {
        match self.get() {
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Short English symbol, e.g. `"Mon"`
    pub fn symbol(self) -> &'static str {
        WEEKDAY_SYMBOLS[usize::from(self.get())]
    }

    /// First day of the week for a locale identifier such as `en_US` or `de-DE`.
    ///
    /// Only the region subtag is consulted. Identifiers without a region fall
    /// back to Monday, the ISO 8601 default.
    pub fn from_locale(locale: &str) -> Self {
        let region = locale
            .split(['_', '-', '.', '@'])
            .skip(1)
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase);

        match region.as_deref() {
            Some(r) if SUNDAY_FIRST_REGIONS.contains(&r) => Self::SUNDAY,
            Some(r) if SATURDAY_FIRST_REGIONS.contains(&r) => Self::SATURDAY,
            Some(r) if FRIDAY_FIRST_REGIONS.contains(&r) => Self::FRIDAY,
            _ => Self::MONDAY,
        }
    }
}

impl Default for DayOfWeek {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        let number = match weekday {
            Weekday::Sun => 1,
            Weekday::Mon => 2,
            Weekday::Tue => 3,
            Weekday::Wed => 4,
            Weekday::Thu => 5,
            Weekday::Fri => 6,
            Weekday::Sat => 7,
        };
        Self(non_zero(number))
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Shape of the rendered calendar. Orthogonal to selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum LayoutMode {
    /// One row holding the week that contains the anchor
    #[display(fmt = "weekly")]
    Weekly,
    /// The anchor's month, padded to a fixed height
    #[default]
    #[display(fmt = "monthly")]
    Monthly,
    /// Every month of the anchor's year, `columns` month grids per row
    #[display(fmt = "yearly{}{}", LAYOUT_COLUMNS_SEPARATOR, _0)]
    Yearly(NonZeroU8),
}

impl LayoutMode {
    /// Creates a yearly layout.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidColumns` if `columns` is 0.
    pub fn yearly(columns: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(columns)
            .map(Self::Yearly)
            .ok_or(ParseError::InvalidColumns(columns))
    }

    /// Month grids per row, for yearly layouts
    pub const fn columns(&self) -> Option<u8> {
        match self {
            Self::Yearly(columns) => Some(columns.get()),
            Self::Weekly | Self::Monthly => None,
        }
    }

    /// Header title for the period previewed at `anchor`
    pub fn title(&self, anchor: NaiveDate) -> String {
        match self {
            Self::Weekly | Self::Monthly => anchor.format(MONTH_TITLE_FORMAT).to_string(),
            Self::Yearly(_) => anchor.format(YEAR_TITLE_FORMAT).to_string(),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (name, columns) = match trimmed.split_once(LAYOUT_COLUMNS_SEPARATOR) {
            Some((name, columns)) => (name.trim(), Some(columns.trim())),
            None => (trimmed, None),
        };

        match (name.to_ascii_lowercase().as_str(), columns) {
            ("weekly", None) => Ok(Self::Weekly),
            ("monthly", None) => Ok(Self::Monthly),
            ("yearly", None) => Self::yearly(DEFAULT_YEARLY_COLUMNS),
            ("yearly", Some(columns)) => {
                let columns = columns
                    .parse::<u8>()
                    .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
                Self::yearly(columns)
            }
            _ => Err(ParseError::UnknownLayout(trimmed.to_owned())),
        }
    }
}

impl Serialize for LayoutMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LayoutMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
