#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// The number of cells before this weekday in a week that starts on
    /// monday. Monday is 0, sunday is 6.
    #[must_use]
    pub const fn days_from_monday(&self) -> usize {
        self.as_usize() - 1
    }

    #[must_use]
    pub(crate) const fn add_days(self, days: usize) -> Self {
        Self::week_days()[(self.days_from_monday() + days % 7) % 7]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_days_from_monday() {
        assert_eq!(WeekDay::Monday.days_from_monday(), 0);
        assert_eq!(WeekDay::Tuesday.days_from_monday(), 1);
        assert_eq!(WeekDay::Saturday.days_from_monday(), 5);
        assert_eq!(WeekDay::Sunday.days_from_monday(), 6);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(WeekDay::Monday.add_days(0), WeekDay::Monday);
        assert_eq!(WeekDay::Monday.add_days(6), WeekDay::Sunday);
        assert_eq!(WeekDay::Sunday.add_days(1), WeekDay::Monday);
        assert_eq!(WeekDay::Saturday.add_days(7 * 52), WeekDay::Saturday);
        assert_eq!(WeekDay::Friday.add_days(9), WeekDay::Sunday);
    }
}
