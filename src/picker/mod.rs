use log::debug;
use thiserror::Error;

use crate::events::FetchResult;
use crate::time::{Date, DateTime, InvalidDate, TimeStamp, YearMonth};

mod calendar;
pub use calendar::*;
mod slots;
pub use slots::*;

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlotError {
    #[error("no day has been selected yet")]
    NoDaySelected,
    #[error(transparent)]
    UnknownSlot(#[from] UnknownSlot),
}

type ChangeListener = Box<dyn FnMut(Option<DateTime>)>;

/// The two cooperating panes.
///
/// The calendar grid owns the selected day, the time pane exists only while
/// a day is selected, and the combination of both is reported upward through
/// the change listener. The reported value is present if and only if both a
/// day and a slot are selected.
pub struct DateTimePicker {
    calendar: Calendar,
    slots: Vec<TimeStamp>,
    time_picker: Option<SlotPicker>,
    listener: Option<ChangeListener>,
    reported: Option<DateTime>,
}

impl DateTimePicker {
    #[must_use]
    pub fn new(viewed: YearMonth, today: Date, slots: Vec<TimeStamp>) -> Self {
        Self {
            calendar: Calendar::new(viewed, today),
            slots,
            time_picker: None,
            listener: None,
            reported: None,
        }
    }

    /// Registers the callback that receives every change of the combined
    /// date-time value, including the change back to absent.
    pub fn on_change(&mut self, listener: impl FnMut(Option<DateTime>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The time pane, mounted only while a day is selected.
    pub fn slot_picker(&self) -> Option<&SlotPicker> {
        self.time_picker.as_ref()
    }

    /// The combined value of the selected day and the chosen slot.
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime> {
        self.time_picker.as_ref().and_then(SlotPicker::date_time)
    }

    /// Shifts the viewed month by one and clears the whole selection.
    ///
    /// Returns the newly viewed month so the caller can request fresh
    /// holiday and observance data for it.
    pub fn navigate(&mut self, direction: Direction) -> YearMonth {
        let viewed = self.calendar.navigate(direction);
        self.time_picker = None;
        self.report();

        viewed
    }

    /// Selects the given day of the viewed month.
    ///
    /// A rejected day (holiday or sunday) is a policy outcome, not an error;
    /// only a day number outside of the viewed month is an error.
    pub fn select_day(&mut self, day: usize) -> Result<DaySelection, InvalidDate> {
        let date = self.calendar.viewed().date(day)?;
        let selection = self.calendar.select_day(date);

        self.time_picker = match selection {
            DaySelection::Selected(date) => match self.time_picker.take() {
                // keep the chosen slot when the day did not change
                Some(picker) if picker.day() == date => Some(picker),
                _ => Some(SlotPicker::new(date, self.slots.clone())),
            },
            DaySelection::Rejected => None,
        };

        self.report();
        Ok(selection)
    }

    /// Chooses a time slot for the currently selected day.
    pub fn select_slot(&mut self, slot: TimeStamp) -> Result<DateTime, SlotError> {
        let picker = self.time_picker.as_mut().ok_or(SlotError::NoDaySelected)?;
        let date_time = picker.select(slot)?;
        self.report();

        Ok(date_time)
    }

    /// Applies a fetch outcome, unless the user has navigated away from the
    /// month the fetch was issued for.
    pub fn apply_records(&mut self, result: FetchResult) {
        if result.issued_for() != self.calendar.viewed() {
            debug!(
                "discarding {} records fetched for {}",
                result.kind(),
                result.issued_for()
            );
            return;
        }

        let kind = result.kind();
        self.calendar.apply(kind, result.into_records());
    }

    fn report(&mut self) {
        let current = self.date_time();
        if current == self.reported {
            return;
        }

        self.reported = current;
        if let Some(listener) = &mut self.listener {
            listener(current);
        }
    }
}
