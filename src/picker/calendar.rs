use crate::events::{DayRecord, DayRecordSet, EventKind};
use crate::picker::Direction;
use crate::time::{Date, YearMonth};

/// How a day of the viewed month is displayed.
///
/// `Annotated` covers holidays, observances, sundays and today, which all
/// get the same dimmed treatment. A selected day stays `Selected` even when
/// it would also be annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Selected,
    Annotated,
    Normal,
}

/// Outcome of a day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    Selected(Date),
    Rejected,
}

impl DaySelection {
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    date: Date,
    status: DayStatus,
}

impl GridDay {
    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn status(&self) -> DayStatus {
        self.status
    }
}

/// The days of the viewed month, preceded by blank cells so the first row
/// lines up with a week that starts on monday. There is no trailing padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    leading_blanks: usize,
    days: Vec<GridDay>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days(&self) -> &[GridDay] {
        &self.days
    }
}

/// The calendar pane.
///
/// It owns the viewed month and the selected day. The holiday and observance
/// collections are absent until their first fetch arrives and are replaced
/// wholesale on every arrival.
pub struct Calendar {
    viewed: YearMonth,
    today: Date,
    selected: Option<Date>,
    annotated: Option<Date>,
    annotation: String,
    holidays: Option<DayRecordSet>,
    observances: Option<DayRecordSet>,
}

impl Calendar {
    #[must_use]
    pub fn new(viewed: YearMonth, today: Date) -> Self {
        Self {
            viewed,
            today,
            selected: None,
            annotated: None,
            annotation: String::new(),
            holidays: None,
            observances: None,
        }
    }

    pub fn viewed(&self) -> YearMonth {
        self.viewed
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn selected_day(&self) -> Option<Date> {
        self.selected
    }

    /// The explanation for the last clicked day, if it matched any records.
    pub fn annotation(&self) -> Option<&str> {
        (!self.annotation.is_empty()).then_some(self.annotation.as_str())
    }

    /// `true` until the first observance data has arrived.
    pub fn is_loading(&self) -> bool {
        self.observances.is_none()
    }

    /// Shifts the viewed month. Clears the selection and the annotation, the
    /// record collections keep their (now possibly stale) contents until the
    /// next arrival.
    pub fn navigate(&mut self, direction: Direction) -> YearMonth {
        self.viewed = match direction {
            Direction::Previous => self.viewed.prev(),
            Direction::Next => self.viewed.next(),
        };
        self.selected = None;
        self.annotated = None;
        self.annotation.clear();

        self.viewed
    }

    /// A day can be selected unless it is a holiday or a sunday. Observances
    /// never block a selection.
    ///
    /// A rejected day still gets its annotation text, so a sunday with an
    /// observance shows the observance while staying unselectable.
    pub fn select_day(&mut self, date: Date) -> DaySelection {
        self.annotated = Some(date);
        self.annotation = self.annotation_for(date);

        if self.is_holiday(date) || date.is_sunday() {
            self.selected = None;
            return DaySelection::Rejected;
        }

        self.selected = Some(date);
        DaySelection::Selected(date)
    }

    /// Replaces one of the record collections with freshly fetched data.
    pub fn apply(&mut self, kind: EventKind, records: Vec<DayRecord>) {
        let set = DayRecordSet::from(records);
        match kind {
            EventKind::NationalHoliday => self.holidays = Some(set),
            EventKind::Observance => self.observances = Some(set),
        }

        // the annotation is derived from the collections
        if let Some(date) = self.annotated {
            self.annotation = self.annotation_for(date);
        }
    }

    #[must_use]
    pub fn day_status(&self, date: Date) -> DayStatus {
        if self.selected == Some(date) {
            return DayStatus::Selected;
        }

        if self.is_holiday(date)
            || self.is_observance(date)
            || date.is_sunday()
            || date == self.today
        {
            return DayStatus::Annotated;
        }

        DayStatus::Normal
    }

    #[must_use]
    pub fn grid(&self) -> MonthGrid {
        MonthGrid {
            leading_blanks: self.viewed.first_day().week_day().days_from_monday(),
            days: self
                .viewed
                .dates()
                .map(|date| GridDay {
                    date,
                    status: self.day_status(date),
                })
                .collect(),
        }
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.as_ref().is_some_and(|set| set.contains(date))
    }

    fn is_observance(&self, date: Date) -> bool {
        self.observances
            .as_ref()
            .is_some_and(|set| set.contains(date))
    }

    fn annotation_for(&self, date: Date) -> String {
        let holiday = self.holidays.as_ref().and_then(|set| set.find(date));
        let observance = self.observances.as_ref().and_then(|set| set.find(date));

        let mut text = String::new();
        if let Some(record) = holiday {
            text = format!("It is {}", record.name());
        }
        if let Some(record) = observance {
            if holiday.is_some() {
                text.push_str(" and ");
            }
            text.push_str("It is ");
            text.push_str(record.name());
        }

        text
    }
}
