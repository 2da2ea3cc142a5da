use crate::{LayoutMode, system::CalendarSystem};
use chrono::NaiveDate;
use log::debug;

/// Which way to move the previewed period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    const fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

impl LayoutMode {
    /// Anchor of the adjacent period: a year for yearly layouts, a month for
    /// monthly ones and seven days for weekly ones.
    pub fn step<C: CalendarSystem + ?Sized>(&self, anchor: NaiveDate, calendar: &C, direction: Direction) -> NaiveDate {
        let sign = direction.sign();
        let next = match self {
            Self::Yearly(_) => calendar.add_years(anchor, sign),
            Self::Monthly => calendar.add_months(anchor, sign),
            Self::Weekly => calendar.add_days(anchor, 7 * sign),
        };
        debug!("{self} {direction:?}: {anchor} -> {next}");
        next
    }
}

pub fn previous_period<C: CalendarSystem + ?Sized>(anchor: NaiveDate, layout: LayoutMode, calendar: &C) -> NaiveDate {
    layout.step(anchor, calendar, Direction::Backward)
}

pub fn next_period<C: CalendarSystem + ?Sized>(anchor: NaiveDate, layout: LayoutMode, calendar: &C) -> NaiveDate {
    layout.step(anchor, calendar, Direction::Forward)
}
