use core::fmt;

use serde::Deserialize;

use crate::time::Date;

/// Which of the two record collections a request or a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    NationalHoliday,
    Observance,
}

impl EventKind {
    pub const fn kinds() -> [Self; 2] {
        [Self::NationalHoliday, Self::Observance]
    }

    /// The type discriminator the date-events source expects in the query.
    #[must_use]
    pub const fn as_query(&self) -> &'static str {
        match self {
            Self::NationalHoliday => "national_holiday",
            Self::Observance => "observance",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// A single day entry as returned by the date-events source.
///
/// The source sends more fields (country, iso, year, ...), everything that is
/// not needed for annotating the calendar is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DayRecord {
    date: Date,
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
}

impl DayRecord {
    pub const fn date(&self) -> Date {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A replace-on-arrival collection of day records, looked up by exact date.
///
/// A date can occur more than once, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct DayRecordSet {
    records: Vec<DayRecord>,
}

impl DayRecordSet {
    #[must_use]
    pub fn find(&self, date: Date) -> Option<&DayRecord> {
        self.records.iter().find(|record| record.date() == date)
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.find(date).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<DayRecord>> for DayRecordSet {
    fn from(records: Vec<DayRecord>) -> Self {
        Self { records }
    }
}
