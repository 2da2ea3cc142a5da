//! Per-day selection roles used for contiguous highlighting.

use crate::{SelectionRange, prelude::*, system::CalendarSystem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a rendered day relates to the current selection range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionRole {
    /// Outside the range, or no range at all
    #[default]
    #[display(fmt = "none")]
    None,
    /// First day of a multi-day range
    #[display(fmt = "leading")]
    Leading,
    /// Last day of a multi-day range
    #[display(fmt = "trailing")]
    Trailing,
    /// Strictly between the bounds of a multi-day range
    #[display(fmt = "inner")]
    Inner,
    /// The only day of a single-day range
    #[display(fmt = "single")]
    Single,
}

impl SelectionRole {
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classifies `date` against `selection`.
pub fn classify<C: CalendarSystem + ?Sized>(
    date: NaiveDate,
    selection: Option<&SelectionRange>,
    calendar: &C,
) -> SelectionRole {
    let Some(range) = selection else {
        return SelectionRole::None;
    };
    if !range.contains(date) {
        return SelectionRole::None;
    }

    let span = calendar.days_between(range.lower(), range.upper());
    let is_lower = calendar.is_same_day(date, range.lower());
    let is_upper = calendar.is_same_day(date, range.upper());

    match (span, is_lower, is_upper) {
        (0, true, _) => SelectionRole::Single,
        (_, true, _) => SelectionRole::Leading,
        (_, _, true) => SelectionRole::Trailing,
        _ => SelectionRole::Inner,
    }
}
