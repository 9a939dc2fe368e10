use std::str::FromStr;

use derive_more::Display;
use serde::{de, Deserialize};
use thiserror::Error;

#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        unsafe { $crate::time::TimeStamp::new_unchecked($hour, $minute) }
    }};
}

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

impl TimeStamp {
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeStamp {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = string
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected a time like \"14:00\", got \"{}\"", string))?;

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time_stamp;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(time_stamp!(12:00).to_string(), "12:00");
        assert_eq!(time_stamp!(16:30).to_string(), "16:30");
        assert_eq!(time_stamp!(9:05).to_string(), "09:05");
    }

    #[test]
    fn test_parse() {
        assert_eq!("14:00".parse::<TimeStamp>().unwrap(), time_stamp!(14:00));
        assert_eq!("09:05".parse::<TimeStamp>().unwrap(), time_stamp!(9:05));

        assert!("14".parse::<TimeStamp>().is_err());
        assert!("24:00".parse::<TimeStamp>().is_err());
        assert!("12:60".parse::<TimeStamp>().is_err());
        assert!("noon".parse::<TimeStamp>().is_err());
    }

    #[test]
    fn test_new_bounds() {
        assert!(TimeStamp::new(23, 59).is_ok());
        assert!(TimeStamp::new(24, 0).is_err());
        assert!(TimeStamp::new(0, 60).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(time_stamp!(12:00) < time_stamp!(14:00));
        assert!(time_stamp!(16:30) < time_stamp!(18:30));
    }
}
