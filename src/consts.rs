/// Number of columns in every week row
pub const DAYS_IN_WEEK: u32 = 7;

/// Month grids are padded with spacer rows up to this height
pub const MAX_WEEKS_IN_MONTH_GRID: usize = 6;

/// Smallest valid weekday number (Sunday)
pub const MIN_WEEKDAY: u8 = 1;
/// Largest valid weekday number (Saturday)
pub const MAX_WEEKDAY: u8 = 7;

/// Weekday numbers, counted from Sunday as 1
pub const SUNDAY: u8 = 1;
/// Weekday number for Monday
pub const MONDAY: u8 = 2;
/// Weekday number for Friday
pub const FRIDAY: u8 = 6;
/// Weekday number for Saturday
pub const SATURDAY: u8 = 7;

/// Short weekday symbols indexed by weekday number (index 0 is unused)
pub const WEEKDAY_SYMBOLS: [&str; 8] = ["", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Months in a Gregorian year
pub const MONTHS_IN_YEAR: u32 = 12;

/// Column count used when a yearly layout is given without one
pub const DEFAULT_YEARLY_COLUMNS: u8 = 3;

/// Separator between the bounds of a selection range
pub const RANGE_SEPARATOR: char = '/';
/// Separator between layout name and yearly column count
pub const LAYOUT_COLUMNS_SEPARATOR: char = ':';

/// ISO 8601 calendar date
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Header title for weekly and monthly periods ("March 2024")
pub const MONTH_TITLE_FORMAT: &str = "%B %Y";
/// Header title for yearly periods ("2024")
pub const YEAR_TITLE_FORMAT: &str = "%Y";
/// Caption above each month of a yearly grid ("March")
pub const MONTH_NAME_FORMAT: &str = "%B";

/// Regions whose week starts on Sunday (CLDR `firstDay`)
pub(crate) const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT", "GU",
    "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO", "MT", "MX",
    "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV", "TH", "TT", "TW",
    "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];
/// Regions whose week starts on Saturday
pub(crate) const SATURDAY_FIRST_REGIONS: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];
/// Regions whose week starts on Friday
pub(crate) const FRIDAY_FIRST_REGIONS: &[&str] = &["MV"];
