use crate::Gregorian;
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub const fn sunday_first() -> Gregorian {
    Gregorian::sunday_first()
}

pub const fn monday_first() -> Gregorian {
    Gregorian::monday_first()
}
