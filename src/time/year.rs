use derive_more::Display;

use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// 0000-01-01, a saturday, is the anchor for all weekday math.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year with an additional day added to
    /// february, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        !self.is_common_year()
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.0 - 1)
    }

    const fn days_before_month(&self, month: Month) -> usize {
        let mut days = 0;
        let mut number = 1;

        while number < month.as_usize() {
            days += self.number_of_days_in_month(Month::new(number));
            number += 1;
        }

        days
    }

    const fn days_since_base_date(&self) -> usize {
        let mut days = 0;
        let mut year = 0;

        while year < self.as_usize() {
            days += Self::new(year).days();
            year += 1;
        }

        days
    }

    /// Calculate the weekday of the given month and day in this year.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = self.days_since_base_date() + self.days_before_month(month) + (day - 1);

        Self::BASE_WEEK_DAY.add_days(days)
    }
}

impl From<usize> for Year {
    fn from(year: usize) -> Self {
        Self::new(year)
    }
}
