use thiserror::Error;

use crate::time::{Date, DateTime, TimeStamp};

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{slot} is not one of the offered time slots")]
pub struct UnknownSlot {
    slot: TimeStamp,
}

/// The time pane.
///
/// It exists only while a day is selected and always starts without a chosen
/// slot. Exactly one slot can be chosen at a time, choosing another one
/// replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPicker {
    day: Date,
    slots: Vec<TimeStamp>,
    selected: Option<TimeStamp>,
}

impl SlotPicker {
    #[must_use]
    pub fn new(day: Date, slots: Vec<TimeStamp>) -> Self {
        Self {
            day,
            slots,
            selected: None,
        }
    }

    /// The day this pane belongs to.
    pub fn day(&self) -> Date {
        self.day
    }

    /// All offered slots in display order. No slot is ever disabled.
    pub fn slots(&self) -> &[TimeStamp] {
        &self.slots
    }

    pub fn selected(&self) -> Option<TimeStamp> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, slot: TimeStamp) -> bool {
        self.selected == Some(slot)
    }

    /// Chooses `slot`, replacing any previously chosen one.
    pub fn select(&mut self, slot: TimeStamp) -> Result<DateTime, UnknownSlot> {
        if !self.slots.contains(&slot) {
            return Err(UnknownSlot { slot });
        }

        self.selected = Some(slot);
        Ok(self.day.at(slot))
    }

    /// The combined value of the owning day and the chosen slot.
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime> {
        self.selected.map(|slot| self.day.at(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{date, time_stamp};

    fn picker() -> SlotPicker {
        SlotPicker::new(
            date!(2024:03:11),
            vec![time_stamp!(12:00), time_stamp!(14:00), time_stamp!(16:30)],
        )
    }

    #[test]
    fn test_starts_without_a_slot() {
        let picker = picker();

        assert_eq!(picker.selected(), None);
        assert_eq!(picker.date_time(), None);
    }

    #[test]
    fn test_select_replaces_the_previous_slot() {
        let mut picker = picker();

        assert_eq!(
            picker.select(time_stamp!(14:00)),
            Ok(date!(2024:03:11).at(time_stamp!(14:00)))
        );
        assert_eq!(picker.is_selected(time_stamp!(14:00)), true);

        assert_eq!(
            picker.select(time_stamp!(16:30)),
            Ok(date!(2024:03:11).at(time_stamp!(16:30)))
        );
        assert_eq!(picker.is_selected(time_stamp!(16:30)), true);
        assert_eq!(picker.is_selected(time_stamp!(14:00)), false);
        assert_eq!(
            picker.date_time(),
            Some(date!(2024:03:11).at(time_stamp!(16:30)))
        );
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let mut picker = picker();

        assert_eq!(
            picker.select(time_stamp!(13:00)),
            Err(UnknownSlot {
                slot: time_stamp!(13:00)
            })
        );
        assert_eq!(picker.selected(), None);
    }
}
