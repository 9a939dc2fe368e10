#![allow(dead_code)]

use booking_picker::events::{DayRecord, EventKind, FetchResult};
use booking_picker::picker::DateTimePicker;
use booking_picker::time::{Date, Month, TimeStamp, Year, YearMonth};
use booking_picker::{date, time_stamp};

#[must_use]
pub fn slots() -> Vec<TimeStamp> {
    vec![
        time_stamp!(12:00),
        time_stamp!(14:00),
        time_stamp!(16:30),
        time_stamp!(18:30),
        time_stamp!(20:00),
    ]
}

#[must_use]
pub fn march() -> YearMonth {
    YearMonth::new(Year::new(2024), Month::March)
}

#[must_use]
pub fn today() -> Date {
    date!(2024:03:15)
}

#[must_use]
pub fn records(json: &str) -> Vec<DayRecord> {
    serde_json::from_str(json).expect("the test records should be valid json")
}

/// National holidays for march 2024, in the shape the source sends them.
#[must_use]
pub fn holiday_records() -> Vec<DayRecord> {
    records(concat!(
        "[",
        r#"{"country": "PL", "date": "2024-03-20", "day": "Wednesday", "iso": "2024-03-20", "name": "Spring Festival", "type": "national_holiday", "year": 2024},"#,
        r#"{"country": "PL", "date": "2024-03-29", "day": "Friday", "iso": "2024-03-29", "name": "Good Friday", "type": "national_holiday", "year": 2024},"#,
        r#"{"country": "PL", "date": "2024-03-31", "day": "Sunday", "iso": "2024-03-31", "name": "Easter Sunday", "type": "national_holiday", "year": 2024}"#,
        "]"
    ))
}

/// Observances for march 2024.
#[must_use]
pub fn observance_records() -> Vec<DayRecord> {
    records(concat!(
        "[",
        r#"{"country": "PL", "date": "2024-03-08", "day": "Friday", "iso": "2024-03-08", "name": "Women's Day", "type": "observance", "year": 2024},"#,
        r#"{"country": "PL", "date": "2024-03-20", "day": "Wednesday", "iso": "2024-03-20", "name": "World Sparrow Day", "type": "observance", "year": 2024},"#,
        r#"{"country": "PL", "date": "2024-03-24", "day": "Sunday", "iso": "2024-03-24", "name": "Palm Sunday", "type": "observance", "year": 2024}"#,
        "]"
    ))
}

/// A picker showing march 2024 with both record collections applied.
#[must_use]
pub fn march_picker() -> DateTimePicker {
    let mut picker = DateTimePicker::new(march(), today(), slots());

    picker.apply_records(FetchResult::new(
        march(),
        EventKind::NationalHoliday,
        holiday_records(),
    ));
    picker.apply_records(FetchResult::new(
        march(),
        EventKind::Observance,
        observance_records(),
    ));

    picker
}

/// A picker showing march 2024 before any data has arrived.
#[must_use]
pub fn march_picker_without_data() -> DateTimePicker {
    DateTimePicker::new(march(), today(), slots())
}
