//! Calendar day grids and date-range selection for calendar widgets.
//!
//! The crate computes what a calendar component renders, leaving the drawing
//! to the host:
//!
//! - [`CalendarGrid`] lays out days for weekly, monthly and yearly layouts.
//! - [`Selection`] tracks a closed [`SelectionRange`] across taps and drags.
//! - [`classify()`] tells each day whether it leads, trails, sits inside, or
//!   alone forms the selection, for contiguous highlighting.
//! - [`next_period`] / [`previous_period`] move the previewed period.
//!
//! [`CalendarState`] bundles all of it for a single calendar view.

mod classify;
mod config;
mod consts;
mod grid;
mod navigator;
mod prelude;
mod range;
mod selection;
mod system;
#[cfg(test)]
mod test_utils;
mod types;

pub use classify::{SelectionRole, classify};
pub use config::CalendarConfig;
pub use consts::*;
pub use grid::{CalendarGrid, DayCell, GridRow, MonthGrid, date_for, week_of_month};
pub use navigator::{Direction, next_period, previous_period};
pub use range::{RangeError, SelectionRange};
pub use selection::{
    Interaction, Selection, SelectionConfig, hover_transition, tap_transition, toggle_transition,
};
pub use system::{CalendarSystem, Gregorian};
pub use types::{DayOfWeek, LayoutMode};

use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid weekday: {} (must be {}-{})", "_0", MIN_WEEKDAY, MAX_WEEKDAY)]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid column count: {_0} (must be at least 1)")]
    InvalidColumns(u8),
    #[display(fmt = "Invalid date: {_0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[display(fmt = "Unknown layout: {_0}")]
    UnknownLayout(String),
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// State of one calendar view: the previewed period, its layout and the
/// current selection.
///
/// The host owns this value for the lifetime of the view, feeds interactions
/// into it in delivery order and re-renders from [`CalendarState::grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState<C: CalendarSystem = Gregorian> {
    calendar:  C,
    anchor:    NaiveDate,
    layout:    LayoutMode,
    selection: Selection,
}

impl<C: CalendarSystem> CalendarState<C> {
    pub fn new(calendar: C, anchor: NaiveDate, layout: LayoutMode, config: SelectionConfig) -> Self {
        Self {
            calendar,
            anchor,
            layout,
            selection: Selection::new(config),
        }
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        debug!("anchor reset to {anchor}");
        self.anchor = anchor;
    }

    /// Previews the period containing `at`, normalized to the start of its day
    pub fn set_anchor_at(&mut self, at: NaiveDateTime) {
        let anchor = self.calendar.start_of_day(at);
        self.set_anchor(anchor);
    }

    pub const fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub const fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub const fn range(&self) -> Option<&SelectionRange> {
        self.selection.range()
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::generate(self.anchor, &self.calendar, self.layout, self.range())
    }

    pub fn classify(&self, date: NaiveDate) -> SelectionRole {
        classify(date, self.range(), &self.calendar)
    }

    /// Moves the preview one period back and returns the new anchor
    pub fn previous_period(&mut self) -> NaiveDate {
        self.anchor = previous_period(self.anchor, self.layout, &self.calendar);
        self.anchor
    }

    /// Moves the preview one period forward and returns the new anchor
    pub fn next_period(&mut self) -> NaiveDate {
        self.anchor = next_period(self.anchor, self.layout, &self.calendar);
        self.anchor
    }

    pub fn apply(&mut self, interaction: Interaction) -> Option<SelectionRange> {
        self.selection.apply(interaction)
    }

    pub fn tap(&mut self, date: NaiveDate) -> Option<SelectionRange> {
        self.selection.tap(date)
    }

    pub fn hover(&mut self, date: Option<NaiveDate>) -> Option<SelectionRange> {
        self.selection.hover(date)
    }

    pub fn end_drag(&mut self) -> Option<SelectionRange> {
        self.selection.end_drag()
    }

    /// Header title for the previewed period
    pub fn title(&self) -> String {
        self.layout.title(self.anchor)
    }

    /// Weekday column headers, starting at the calendar's first weekday
    pub fn weekday_headers(&self) -> [DayOfWeek; 7] {
        self.calendar.weekday_order()
    }
}

impl CalendarState<Gregorian> {
    pub fn from_config(config: &CalendarConfig, anchor: NaiveDate) -> Self {
        Self::new(config.calendar(), anchor, config.layout, config.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, monday_first, sunday_first};

    #[test]
    fn test_monthly_scenario() {
        let state = CalendarState::new(
            sunday_first(),
            date(2024, 3, 15),
            LayoutMode::Monthly,
            SelectionConfig::default(),
        );
        let CalendarGrid::Monthly(month) = state.grid() else {
            panic!("expected a monthly grid");
        };
        let rows: Vec<&[DayCell]> = month.weeks().collect();
        assert_eq!(rows[0][0].date, date(2024, 2, 25));
        assert!(!rows[0][0].in_current_period);
        assert_eq!(rows[2][5].date, date(2024, 3, 15));
        assert!(rows[2][5].in_current_period);
    }

    #[test]
    fn test_tap_scenario_and_classification() {
        let mut state = CalendarState::new(
            sunday_first(),
            date(2024, 3, 15),
            LayoutMode::Monthly,
            SelectionConfig::default(),
        );

        state.tap(date(2024, 3, 10));
        let range = state.tap(date(2024, 3, 5));
        assert_eq!(range, Some(SelectionRange::new(date(2024, 3, 5), date(2024, 3, 10)).unwrap()));

        assert_eq!(state.classify(date(2024, 3, 5)), SelectionRole::Leading);
        assert_eq!(state.classify(date(2024, 3, 10)), SelectionRole::Trailing);
        assert_eq!(state.classify(date(2024, 3, 7)), SelectionRole::Inner);

        let selected: Vec<NaiveDate> = state
            .grid()
            .cells()
            .filter(|cell| cell.role.is_selected())
            .map(|cell| cell.date)
            .collect();
        assert_eq!(selected.len(), 6);

        assert_eq!(state.tap(date(2024, 3, 7)), None);
        assert_eq!(state.classify(date(2024, 3, 7)), SelectionRole::None);
    }

    #[test]
    fn test_drag_through_state() {
        let mut state = CalendarState::new(
            monday_first(),
            date(2024, 3, 15),
            LayoutMode::Weekly,
            SelectionConfig::default(),
        );
        for day in [13, 14, 15, 16] {
            state.apply(Interaction::Hover(Some(date(2024, 3, day))));
        }
        state.apply(Interaction::DragEnd);

        let roles: Vec<SelectionRole> = state.grid().cells().map(|cell| cell.role).collect();
        assert_eq!(
            roles,
            [
                SelectionRole::None,
                SelectionRole::None,
                SelectionRole::Leading,
                SelectionRole::Inner,
                SelectionRole::Inner,
                SelectionRole::Trailing,
                SelectionRole::None,
            ]
        );
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let mut state = CalendarState::new(
            sunday_first(),
            date(2024, 3, 15),
            LayoutMode::Monthly,
            SelectionConfig::default(),
        );
        state.tap(date(2024, 3, 20));

        assert_eq!(state.next_period(), date(2024, 4, 15));
        assert_eq!(state.title(), "April 2024");
        assert_eq!(state.previous_period(), date(2024, 3, 15));
        assert_eq!(state.range(), Some(&SelectionRange::single(date(2024, 3, 20))));

        state.set_layout(LayoutMode::yearly(3).unwrap());
        assert_eq!(state.next_period(), date(2025, 3, 15));
        assert_eq!(state.title(), "2025");
    }

    #[test]
    fn test_set_anchor_at_normalizes() {
        let mut state = CalendarState::new(
            sunday_first(),
            date(2024, 3, 15),
            LayoutMode::Weekly,
            SelectionConfig::default(),
        );
        state.set_anchor_at(date(2024, 7, 4).and_hms_opt(23, 59, 59).unwrap());
        assert_eq!(state.anchor(), date(2024, 7, 4));
    }

    #[test]
    fn test_from_config() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{ "locale": "de_DE", "layout": "weekly" }"#).unwrap();
        let state = CalendarState::from_config(&config, date(2024, 3, 15));

        assert_eq!(state.layout(), LayoutMode::Weekly);
        let headers: Vec<String> = state.weekday_headers().iter().map(ToString::to_string).collect();
        assert_eq!(headers[0], "Mon");
        assert_eq!(state.grid().dates().next(), Some(date(2024, 3, 11)));
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidWeekday(9).to_string(),
            "Invalid weekday: 9 (must be 1-7)"
        );
        assert_eq!(
            ParseError::InvalidColumns(0).to_string(),
            "Invalid column count: 0 (must be at least 1)"
        );
    }
}
