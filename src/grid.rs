//! Day grid generation for the three layout modes.
//!
//! All three layouts share one index-to-date mapping ([`date_for`]): the
//! first column of week row 0 is the first weekday on or before the 1st of
//! the anchor's month, and every later cell is one day after its predecessor
//! in row-major order.

use crate::classify::{SelectionRole, classify};
use crate::consts::{DAYS_IN_WEEK, MAX_WEEKS_IN_MONTH_GRID, MONTH_NAME_FORMAT};
use crate::system::{CalendarSystem, day_index};
use crate::{LayoutMode, SelectionRange};
use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// One rendered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the day belongs to the previewed month (or week)
    pub in_current_period: bool,
    pub role: SelectionRole,
}

/// A week of seven cells, or a blank row that keeps month grids equally tall.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridRow {
    Days(Vec<DayCell>),
    Spacer,
}

impl GridRow {
    pub fn cells(&self) -> &[DayCell] {
        match self {
            Self::Days(cells) => cells,
            Self::Spacer => &[],
        }
    }

    pub const fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer)
    }
}

/// The day grid of a single month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Date the grid was generated for; its month is the current period
    pub anchor: NaiveDate,
    /// Week rows followed by spacer rows, always six in total
    pub rows:   Vec<GridRow>,
}

impl MonthGrid {
    pub fn generate<C: CalendarSystem + ?Sized>(
        anchor: NaiveDate,
        calendar: &C,
        selection: Option<&SelectionRange>,
    ) -> Self {
        let weeks = calendar.weeks_in_month(anchor);
        trace!("month grid for {anchor}: {weeks} weeks");

        let mut rows: Vec<GridRow> = (0..weeks)
            .map(|week| {
                let cells = (1..=DAYS_IN_WEEK)
                    .map(|day| {
                        let date = date_for(calendar, day, week, anchor);
                        DayCell {
                            date,
                            in_current_period: calendar.month(date) == calendar.month(anchor),
                            role: classify(date, selection, calendar),
                        }
                    })
                    .collect();
                GridRow::Days(cells)
            })
            .collect();

        while rows.len() < MAX_WEEKS_IN_MONTH_GRID {
            rows.push(GridRow::Spacer);
        }

        Self { anchor, rows }
    }

    /// Week rows only, without the trailing spacers
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.rows.iter().filter(|row| !row.is_spacer()).map(GridRow::cells)
    }

    /// Month name caption, e.g. `"March"`
    pub fn title(&self) -> String {
        self.anchor.format(MONTH_NAME_FORMAT).to_string()
    }
}

/// The complete grid for one layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarGrid {
    Weekly(Vec<DayCell>),
    Monthly(MonthGrid),
    /// Rows of month grids; the last row may hold fewer than `columns`
    Yearly {
        columns: NonZeroU8,
        rows:    Vec<Vec<MonthGrid>>,
    },
}

impl CalendarGrid {
    /// Generates the grid previewing `anchor` in the given layout, with every
    /// cell classified against `selection`.
    pub fn generate<C: CalendarSystem + ?Sized>(
        anchor: NaiveDate,
        calendar: &C,
        layout: LayoutMode,
        selection: Option<&SelectionRange>,
    ) -> Self {
        match layout {
            LayoutMode::Weekly => Self::Weekly(weekly_row(anchor, calendar, selection)),
            LayoutMode::Monthly => Self::Monthly(MonthGrid::generate(anchor, calendar, selection)),
            LayoutMode::Yearly(columns) => Self::Yearly {
                columns,
                rows: yearly_rows(anchor, calendar, columns, selection),
            },
        }
    }

    /// Every real cell in row-major order, spacer rows skipped.
    /// Yearly grids yield month after month.
    pub fn cells(&self) -> Box<dyn Iterator<Item = &DayCell> + '_> {
        match self {
            Self::Weekly(cells) => Box::new(cells.iter()),
            Self::Monthly(month) => Box::new(month.weeks().flatten()),
            Self::Yearly { rows, .. } => Box::new(rows.iter().flatten().flat_map(|month| month.weeks().flatten())),
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells().map(|cell| cell.date)
    }

    /// All month grids, in order; empty for weekly grids
    pub fn months(&self) -> Vec<&MonthGrid> {
        match self {
            Self::Weekly(_) => Vec::new(),
            Self::Monthly(month) => vec![month],
            Self::Yearly { rows, .. } => rows.iter().flatten().collect(),
        }
    }
}

/// Date shown in column `day` (1-based) of week row `week` (0-based) of the
/// month containing `anchor`.
pub fn date_for<C: CalendarSystem + ?Sized>(calendar: &C, day: u32, week: u32, anchor: NaiveDate) -> NaiveDate {
    let shift = i32::from(calendar.month_start_weekday(anchor).get());
    let first_weekday = i32::from(calendar.first_weekday().get());
    let current_day = day_index(calendar.day_of_month(anchor));
    let week_start = day_index(week * DAYS_IN_WEEK);
    let day = day_index(day);

    let offset = if shift - first_weekday < 0 {
        week_start + day - current_day - (shift - first_weekday) - 7
    } else {
        week_start + day - current_day - (shift - first_weekday)
    };
    calendar.add_days(anchor, offset)
}

/// Zero-based week row of the month grid that contains `anchor`
pub fn week_of_month<C: CalendarSystem + ?Sized>(calendar: &C, anchor: NaiveDate) -> u32 {
    (calendar.leading_days(anchor) + calendar.day_of_month(anchor) - 1) / DAYS_IN_WEEK
}

fn weekly_row<C: CalendarSystem + ?Sized>(
    anchor: NaiveDate,
    calendar: &C,
    selection: Option<&SelectionRange>,
) -> Vec<DayCell> {
    let week = week_of_month(calendar, anchor);
    trace!("weekly row for {anchor}: week {week} of its month");
    (1..=DAYS_IN_WEEK)
        .map(|day| {
            let date = date_for(calendar, day, week, anchor);
            DayCell {
                date,
                in_current_period: true,
                role: classify(date, selection, calendar),
            }
        })
        .collect()
}

fn yearly_rows<C: CalendarSystem + ?Sized>(
    anchor: NaiveDate,
    calendar: &C,
    columns: NonZeroU8,
    selection: Option<&SelectionRange>,
) -> Vec<Vec<MonthGrid>> {
    let months = calendar.months_in_year(anchor);
    let columns = u32::from(columns.get());
    trace!("yearly grid for {anchor}: {months} months in {columns} columns");

    (0..months.div_ceil(columns))
        .map(|row| {
            (0..columns)
                .map(|column| row * columns + column + 1)
                .take_while(|&month| month <= months)
                .map(|month| MonthGrid::generate(calendar.with_month(anchor, month), calendar, selection))
                .collect()
        })
        .collect()
}
