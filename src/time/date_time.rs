use derive_more::Display;

use crate::time::{Date, TimeStamp};

/// A calendar day combined with a time of day.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{date} {time}")]
pub struct DateTime {
    date: Date,
    time: TimeStamp,
}

impl DateTime {
    #[must_use]
    pub const fn new(date: Date, time: TimeStamp) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn time(&self) -> TimeStamp {
        self.time
    }
}
