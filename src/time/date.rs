use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{DateTime, Month, TimeStamp, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: Year, month: Month, day: usize) -> Result<Self, InvalidDate> {
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    #[must_use]
    pub const fn is_sunday(&self) -> bool {
        matches!(self.week_day(), WeekDay::Sunday)
    }

    /// Attaches a time of day to this date.
    #[must_use]
    pub const fn at(&self, time: TimeStamp) -> DateTime {
        DateTime::new(*self, time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day} is not a valid day for {year}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_date_to_string() {
        assert_eq!(
            Date::new(Year::new(2024), Month::March, 11).map(|d| d.to_string()),
            Ok("2024-03-11".to_string())
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-03-11".parse(), Ok(date!(2024:03:11)));
        assert_eq!("2024-02-29".parse(), Ok(date!(2024:02:29)));

        assert_eq!(
            "2023-02-29".parse::<Date>(),
            Err(InvalidDate::InvalidDay {
                year: Year::new(2023),
                month: Month::February,
                day: 29,
            })
        );
        assert_eq!(
            "2024-03".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "2024-03".to_string()
            })
        );
        assert_eq!(
            "elephant".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "elephant".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_day() {
        assert!(Date::new(Year::new(2024), Month::March, 0).is_err());
        assert!(Date::new(Year::new(2024), Month::March, 32).is_err());
        assert!(Date::new(Year::new(2024), Month::April, 31).is_err());
    }

    #[must_use]
    fn sort_array<T: Ord, const N: usize>(mut array: [T; N]) -> [T; N] {
        array.sort();
        array
    }

    #[test]
    fn test_date_sorting() {
        assert_eq!(
            sort_array([date!(2024:01:03), date!(2024:01:02), date!(2024:01:01)]),
            [date!(2024:01:01), date!(2024:01:02), date!(2024:01:03)]
        );

        assert_eq!(
            sort_array([date!(2025:01:01), date!(2024:12:31), date!(2024:03:15)]),
            [date!(2024:03:15), date!(2024:12:31), date!(2025:01:01)]
        );
    }

    #[test]
    fn test_is_sunday() {
        assert_eq!(date!(2024:03:10).is_sunday(), true);
        assert_eq!(date!(2024:03:11).is_sunday(), false);
        assert_eq!(date!(2024:03:24).is_sunday(), true);
    }
}
