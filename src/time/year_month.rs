use core::fmt;

use crate::time::{Date, InvalidDate, Month, Year};

/// The year and month pair identifying which month is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    #[must_use]
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// The month after this one. There is no upper bound on navigation.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month.is_eq(&Month::December) {
            Self::new(self.year.next(), Month::January)
        } else {
            Self::new(self.year, self.month.next())
        }
    }

    /// The month before this one. There is no lower bound on navigation.
    #[must_use]
    pub const fn prev(&self) -> Self {
        if self.month.is_eq(&Month::January) {
            Self::new(self.year.prev(), Month::December)
        } else {
            Self::new(self.year, self.month.prev())
        }
    }

    #[must_use]
    pub const fn first_day(&self) -> Date {
        Date::first_day(self.year, self.month)
    }

    /// The number of days in this month.
    #[must_use]
    pub const fn days(&self) -> usize {
        self.year.number_of_days_in_month(self.month)
    }

    pub fn date(&self, day: usize) -> Result<Date, InvalidDate> {
        Date::new(self.year, self.month, day)
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.year == date.year() && self.month == date.month()
    }

    /// All dates of this month in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        (1..=self.days()).map(|day| {
            self.date(day)
                .expect("every day up to the month length is valid")
        })
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}
