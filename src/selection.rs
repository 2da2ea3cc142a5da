//! Selection state machine.
//!
//! Owns the optional [`SelectionRange`] and mutates it in response to taps and
//! drag gestures. Interactions are applied in the order the host delivers
//! them; the engine does no buffering or locking of its own.

use crate::SelectionRange;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Host-supplied switches for the selection behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Taps extend an existing day into a range, and drags sweep ranges
    pub multiselection_enabled: bool,
    /// Any selection at all
    pub selection_enabled: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            multiselection_enabled: true,
            selection_enabled: true,
        }
    }
}

impl SelectionConfig {
    /// Drag-to-select needs both switches on
    pub const fn drag_enabled(&self) -> bool {
        self.multiselection_enabled && self.selection_enabled
    }
}

/// A discrete interaction delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// A confirmed single tap on a day
    Tap(NaiveDate),
    /// Drag position update; `None` when the pointer is over no day
    Hover(Option<NaiveDate>),
    /// The drag gesture finished
    DragEnd,
}

/// Current selection plus the drag gesture bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    range:    Option<SelectionRange>,
    config:   SelectionConfig,
    dragging: bool,
}

impl Selection {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            range: None,
            config,
            dragging: false,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, range: Option<SelectionRange>) -> Self {
        self.range = range;
        self
    }

    pub const fn range(&self) -> Option<&SelectionRange> {
        self.range.as_ref()
    }

    pub const fn config(&self) -> SelectionConfig {
        self.config
    }

    pub const fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn clear(&mut self) {
        debug!("selection cleared");
        self.range = None;
    }

    /// Applies one interaction and returns the resulting range.
    pub fn apply(&mut self, interaction: Interaction) -> Option<SelectionRange> {
        match interaction {
            Interaction::Tap(date) => self.tap(date),
            Interaction::Hover(date) => self.hover(date),
            Interaction::DragEnd => self.end_drag(),
        }
    }

    /// Handles a tap on `date`.
    ///
    /// With multiselection, the first tap selects a day, a second tap on
    /// another day extends it into a range, and any further tap clears it.
    /// Without multiselection a tap toggles the single selected day.
    /// Taps are ignored while a drag is in progress.
    pub fn tap(&mut self, date: NaiveDate) -> Option<SelectionRange> {
        if !self.config.selection_enabled {
            debug!("tap on {date} ignored: selection disabled");
            return self.range;
        }
        if self.dragging {
            debug!("tap on {date} ignored: drag in progress");
            return self.range;
        }

        let next = if self.config.multiselection_enabled {
            tap_transition(self.range, date)
        } else {
            toggle_transition(self.range, date)
        };
        self.transition("tap", date, next)
    }

    /// Handles a drag position update. The first update starts the drag.
    pub fn hover(&mut self, date: Option<NaiveDate>) -> Option<SelectionRange> {
        if !self.config.drag_enabled() {
            return self.range;
        }
        if !self.dragging {
            debug!("drag started");
            self.dragging = true;
        }
        match date {
            Some(date) => {
                let next = Some(hover_transition(self.range, date));
                self.transition("hover", date, next)
            }
            None => self.range,
        }
    }

    /// Finishes the drag; the range swept so far is kept as is.
    pub fn end_drag(&mut self) -> Option<SelectionRange> {
        if self.dragging {
            debug!("drag ended with {}", describe(self.range.as_ref()));
            self.dragging = false;
        }
        self.range
    }

    fn transition(
        &mut self,
        kind: &str,
        date: NaiveDate,
        next: Option<SelectionRange>,
    ) -> Option<SelectionRange> {
        if next != self.range {
            debug!(
                "{kind} on {date}: {} -> {}",
                describe(self.range.as_ref()),
                describe(next.as_ref())
            );
            self.range = next;
        }
        self.range
    }
}

fn describe(range: Option<&SelectionRange>) -> String {
    range.map_or_else(|| "none".to_owned(), ToString::to_string)
}

/// Multiselection tap: select, extend once, then reset.
pub fn tap_transition(current: Option<SelectionRange>, date: NaiveDate) -> Option<SelectionRange> {
    let Some(range) = current else {
        return Some(SelectionRange::single(date));
    };

    if range.contains(date) || range.span_days() != 0 {
        None
    } else if date < range.lower() || date > range.upper() {
        Some(range.extended_to(date))
    } else {
        None
    }
}

/// Single-day tap: deselect when tapping the selection, otherwise move it.
pub fn toggle_transition(current: Option<SelectionRange>, date: NaiveDate) -> Option<SelectionRange> {
    match current {
        Some(range) if range.contains(date) => None,
        _ => Some(SelectionRange::single(date)),
    }
}

/// Drag hover: start at the first day, afterwards only ever grow.
pub fn hover_transition(current: Option<SelectionRange>, date: NaiveDate) -> SelectionRange {
    current.map_or_else(|| SelectionRange::single(date), |range| range.extended_to(date))
}
