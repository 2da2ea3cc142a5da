use crate::{DayOfWeek, Gregorian, LayoutMode, SelectionConfig};
use serde::{Deserialize, Serialize};

/// Host configuration for a calendar component.
///
/// Every field is optional when deserializing:
///
/// ```json
/// { "locale": "en_GB", "layout": "yearly:3", "selection": { "multiselection_enabled": false } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Explicit first weekday (1 is Sunday); overrides `locale`
    pub first_weekday: Option<DayOfWeek>,
    /// Locale identifier the first weekday is derived from
    pub locale:        Option<String>,
    pub layout:        LayoutMode,
    pub selection:     SelectionConfig,
}

impl CalendarConfig {
    /// First weekday in effect: the explicit one, then the locale's, then Sunday
    pub fn resolved_first_weekday(&self) -> DayOfWeek {
        self.first_weekday
            .or_else(|| self.locale.as_deref().map(DayOfWeek::from_locale))
            .unwrap_or_default()
    }

    pub fn calendar(&self) -> Gregorian {
        Gregorian::new(self.resolved_first_weekday())
    }
}
