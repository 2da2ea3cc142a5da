//! Calendar system adapter.
//!
//! Everything the grid generator and classifier know about weeks, months and
//! years goes through [`CalendarSystem`], so the same anchor date can yield
//! different grids under different systems.

use crate::consts::{DAYS_IN_WEEK, MONTHS_IN_YEAR};
use crate::types::DayOfWeek;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use log::warn;

/// Locale-aware calendar queries over day-precision dates.
///
/// Implementors provide the primitive component and arithmetic queries; the
/// derived queries have default implementations built on top of them. The
/// `checked_*` methods return `None` when the shifted date cannot be
/// represented, and their unchecked counterparts fall back to the unshifted
/// date in that case.
pub trait CalendarSystem {
    /// Weekday number the week starts on (1 is Sunday)
    fn first_weekday(&self) -> DayOfWeek;

    fn day_of_month(&self, date: NaiveDate) -> u32;

    fn month(&self, date: NaiveDate) -> u32;

    fn year(&self, date: NaiveDate) -> i32;

    fn weekday(&self, date: NaiveDate) -> DayOfWeek;

    fn days_in_month(&self, date: NaiveDate) -> u32;

    fn months_in_year(&self, date: NaiveDate) -> u32;

    fn checked_add_days(&self, date: NaiveDate, days: i32) -> Option<NaiveDate>;

    fn checked_add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate>;

    fn checked_add_years(&self, date: NaiveDate, years: i32) -> Option<NaiveDate>;

    /// Same year and day-of-month, moved to `month` (1-based)
    fn checked_with_month(&self, date: NaiveDate, month: u32) -> Option<NaiveDate>;

    fn add_days(&self, date: NaiveDate, days: i32) -> NaiveDate {
        self.checked_add_days(date, days).unwrap_or_else(|| {
            warn!("cannot shift {date} by {days} days; keeping it unchanged");
            date
        })
    }

    fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        self.checked_add_months(date, months).unwrap_or_else(|| {
            warn!("cannot shift {date} by {months} months; keeping it unchanged");
            date
        })
    }

    fn add_years(&self, date: NaiveDate, years: i32) -> NaiveDate {
        self.checked_add_years(date, years).unwrap_or_else(|| {
            warn!("cannot shift {date} by {years} years; keeping it unchanged");
            date
        })
    }

    fn with_month(&self, date: NaiveDate, month: u32) -> NaiveDate {
        self.checked_with_month(date, month).unwrap_or_else(|| {
            warn!("cannot move {date} to month {month}; keeping it unchanged");
            date
        })
    }

    fn start_of_day(&self, at: NaiveDateTime) -> NaiveDate {
        at.date()
    }

    fn is_same_day(&self, a: NaiveDate, b: NaiveDate) -> bool {
        self.year(a) == self.year(b)
            && self.month(a) == self.month(b)
            && self.day_of_month(a) == self.day_of_month(b)
    }

    fn is_same_month(&self, a: NaiveDate, b: NaiveDate) -> bool {
        self.year(a) == self.year(b) && self.month(a) == self.month(b)
    }

    fn is_same_year(&self, a: NaiveDate, b: NaiveDate) -> bool {
        self.year(a) == self.year(b)
    }

    /// Whether both dates fall in the same week, as bounded by `first_weekday`
    fn is_same_week(&self, a: NaiveDate, b: NaiveDate) -> bool {
        let start_a = self.add_days(a, -leading_offset(self.weekday(a), self.first_weekday()));
        let start_b = self.add_days(b, -leading_offset(self.weekday(b), self.first_weekday()));
        start_a == start_b
    }

    /// Weekday on which the month containing `date` starts
    fn month_start_weekday(&self, date: NaiveDate) -> DayOfWeek {
        let first = self.add_days(date, 1 - day_index(self.day_of_month(date)));
        self.weekday(first)
    }

    /// Cells in the first grid row that belong to the previous month
    fn leading_days(&self, date: NaiveDate) -> u32 {
        leading_offset(self.month_start_weekday(date), self.first_weekday()).unsigned_abs()
    }

    /// Number of (possibly partial) week rows the month containing `date` spans
    fn weeks_in_month(&self, date: NaiveDate) -> u32 {
        (self.leading_days(date) + self.days_in_month(date)).div_ceil(DAYS_IN_WEEK)
    }

    /// Calendar days from `from` to `to`; negative when `to` is earlier
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        to.signed_duration_since(from).num_days()
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(self.weekday(date).to_chrono(), Weekday::Sat | Weekday::Sun)
    }

    /// The seven weekdays in display order, starting at `first_weekday`
    fn weekday_order(&self) -> [DayOfWeek; 7] {
        let mut next = self.first_weekday();
        std::array::from_fn(|_| {
            let current = next;
            next = next.succ();
            current
        })
    }
}

/// Distance from `first` forward to `weekday`, in `0..7`
pub(crate) fn leading_offset(weekday: DayOfWeek, first: DayOfWeek) -> i32 {
    let shift = i32::from(weekday.get()) - i32::from(first.get());
    if shift < 0 { shift + 7 } else { shift }
}

/// Day-of-month as a signed offset. Day numbers never exceed 31.
pub(crate) fn day_index(day: u32) -> i32 {
    i32::try_from(day).unwrap_or(i32::MAX)
}

/// The proleptic Gregorian calendar with a configurable first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gregorian {
    first_weekday: DayOfWeek,
}

impl Gregorian {
    pub const fn new(first_weekday: DayOfWeek) -> Self {
        Self { first_weekday }
    }

    /// Gregorian calendar whose week starts where `locale` expects it to
    pub fn for_locale(locale: &str) -> Self {
        Self::new(DayOfWeek::from_locale(locale))
    }

    pub const fn sunday_first() -> Self {
        Self::new(DayOfWeek::SUNDAY)
    }

    pub const fn monday_first() -> Self {
        Self::new(DayOfWeek::MONDAY)
    }
}

impl CalendarSystem for Gregorian {
    fn first_weekday(&self) -> DayOfWeek {
        self.first_weekday
    }

    fn day_of_month(&self, date: NaiveDate) -> u32 {
        date.day()
    }

    fn month(&self, date: NaiveDate) -> u32 {
        date.month()
    }

    fn year(&self, date: NaiveDate) -> i32 {
        date.year()
    }

    fn weekday(&self, date: NaiveDate) -> DayOfWeek {
        DayOfWeek::from(date.weekday())
    }

    fn days_in_month(&self, date: NaiveDate) -> u32 {
        let first = date.with_day(1).unwrap_or(date);
        first
            .checked_add_months(Months::new(1))
            .map_or(31, |next| {
                u32::try_from(next.signed_duration_since(first).num_days()).unwrap_or(31)
            })
    }

    fn months_in_year(&self, _date: NaiveDate) -> u32 {
        MONTHS_IN_YEAR
    }

    fn checked_add_days(&self, date: NaiveDate, days: i32) -> Option<NaiveDate> {
        date.checked_add_signed(TimeDelta::try_days(i64::from(days))?)
    }

    fn checked_add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate> {
        let delta = Months::new(months.unsigned_abs());
        if months < 0 {
            date.checked_sub_months(delta)
        } else {
            date.checked_add_months(delta)
        }
    }

    fn checked_add_years(&self, date: NaiveDate, years: i32) -> Option<NaiveDate> {
        let months = years.checked_mul(i32::try_from(MONTHS_IN_YEAR).ok()?)?;
        self.checked_add_months(date, months)
    }

    fn checked_with_month(&self, date: NaiveDate, month: u32) -> Option<NaiveDate> {
        if month == 0 || month > MONTHS_IN_YEAR {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(date.year(), month, 1)?;
        let day = date.day().min(self.days_in_month(first));
        first.with_day(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, monday_first, sunday_first};

    #[test]
    fn test_components() {
        let cal = sunday_first();
        let d = date(2024, 3, 15);
        assert_eq!(cal.day_of_month(d), 15);
        assert_eq!(cal.month(d), 3);
        assert_eq!(cal.year(d), 2024);
        assert_eq!(cal.weekday(d), DayOfWeek::FRIDAY);
        assert_eq!(cal.months_in_year(d), 12);
    }

    #[test]
    fn test_days_in_month() {
        let cal = sunday_first();
        assert_eq!(cal.days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(cal.days_in_month(date(2023, 2, 28)), 28);
        assert_eq!(cal.days_in_month(date(1900, 2, 1)), 28);
        assert_eq!(cal.days_in_month(date(2024, 4, 30)), 30);
        assert_eq!(cal.days_in_month(date(2024, 12, 31)), 31);
    }

    #[test]
    fn test_month_start_weekday_ignores_day_of_month() {
        let cal = sunday_first();
        // March 2024 starts on a Friday
        for day in [1, 15, 31] {
            assert_eq!(cal.month_start_weekday(date(2024, 3, day)), DayOfWeek::FRIDAY);
        }
    }

    #[test]
    fn test_leading_days_depends_on_first_weekday() {
        // September 2024 starts on a Sunday
        let d = date(2024, 9, 10);
        assert_eq!(sunday_first().leading_days(d), 0);
        assert_eq!(monday_first().leading_days(d), 6);
    }

    #[test]
    fn test_weeks_in_month_cases() {
        struct TestCase {
            cal:      Gregorian,
            date:     NaiveDate,
            expected: u32,
        }

        let cases = [
            // February 2015 starts on a Sunday and has 28 days
            TestCase { cal: sunday_first(), date: date(2015, 2, 1), expected: 4 },
            TestCase { cal: monday_first(), date: date(2015, 2, 1), expected: 5 },
            TestCase { cal: sunday_first(), date: date(2024, 3, 15), expected: 6 },
            TestCase { cal: monday_first(), date: date(2024, 3, 15), expected: 5 },
            TestCase { cal: sunday_first(), date: date(2024, 6, 1), expected: 6 },
            TestCase { cal: monday_first(), date: date(2024, 9, 1), expected: 6 },
        ];

        for case in &cases {
            assert_eq!(
                case.cal.weeks_in_month(case.date),
                case.expected,
                "weeks in month of {} starting {}",
                case.date,
                case.cal.first_weekday()
            );
        }
    }

    #[test]
    fn test_add_months_clamps_to_month_length() {
        let cal = sunday_first();
        assert_eq!(cal.add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(cal.add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(cal.add_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(cal.add_days(date(2024, 12, 31), 1), date(2025, 1, 1));
    }

    #[test]
    fn test_with_month() {
        let cal = sunday_first();
        assert_eq!(cal.with_month(date(2024, 3, 31), 2), date(2024, 2, 29));
        assert_eq!(cal.with_month(date(2024, 3, 15), 12), date(2024, 12, 15));
        assert_eq!(cal.checked_with_month(date(2024, 3, 15), 13), None);
        assert_eq!(cal.with_month(date(2024, 3, 15), 0), date(2024, 3, 15));
    }

    #[test]
    fn test_unrepresentable_shift_keeps_date() {
        let cal = sunday_first();
        assert_eq!(cal.checked_add_days(NaiveDate::MAX, 1), None);
        assert_eq!(cal.add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(cal.add_months(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(cal.add_years(NaiveDate::MAX, i32::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_start_of_day_and_same_day() {
        let cal = sunday_first();
        let at = date(2024, 3, 15).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(cal.start_of_day(at), date(2024, 3, 15));
        assert!(cal.is_same_day(date(2024, 3, 15), date(2024, 3, 15)));
        assert!(!cal.is_same_day(date(2024, 3, 15), date(2024, 4, 15)));
    }

    #[test]
    fn test_same_period_queries() {
        let sun = sunday_first();
        let mon = monday_first();
        // Saturday and the following Sunday
        let sat = date(2024, 3, 16);
        let next_sun = date(2024, 3, 17);
        assert!(!sun.is_same_week(sat, next_sun));
        assert!(mon.is_same_week(sat, next_sun));
        assert!(sun.is_same_month(date(2024, 3, 1), date(2024, 3, 31)));
        assert!(!sun.is_same_month(date(2024, 3, 1), date(2023, 3, 1)));
        assert!(sun.is_same_year(date(2024, 1, 1), date(2024, 12, 31)));
    }

    #[test]
    fn test_days_between() {
        let cal = sunday_first();
        assert_eq!(cal.days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(cal.days_between(date(2024, 3, 1), date(2024, 2, 28)), -2);
        assert_eq!(cal.days_between(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_weekend() {
        let cal = sunday_first();
        assert!(cal.is_weekend(date(2024, 3, 16)));
        assert!(cal.is_weekend(date(2024, 3, 17)));
        assert!(!cal.is_weekend(date(2024, 3, 15)));
    }

    #[test]
    fn test_weekday_order() {
        let symbols: Vec<String> = monday_first()
            .weekday_order()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(symbols, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let order = Gregorian::new(DayOfWeek::new(3).unwrap()).weekday_order();
        assert_eq!(order[0].get(), 3);
        assert_eq!(order[6].get(), 2);
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(Gregorian::for_locale("en_US").first_weekday(), DayOfWeek::SUNDAY);
        assert_eq!(Gregorian::for_locale("en_GB").first_weekday(), DayOfWeek::MONDAY);
        assert_eq!(Gregorian::default().first_weekday(), DayOfWeek::SUNDAY);
    }
}
