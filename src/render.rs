use crate::picker::{DateTimePicker, DayStatus, GridDay, SlotPicker};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const CELL_WIDTH: usize = 5;
const PANE_WIDTH: usize = 7 * CELL_WIDTH;

/// Renders both panes as text: the calendar grid always, the time pane only
/// while a day is selected.
#[must_use]
pub fn render(picker: &DateTimePicker) -> String {
    let calendar = calendar_pane(picker);
    let time = picker.slot_picker().map(time_pane).unwrap_or_default();

    let rows = calendar.len().max(time.len());
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let left = calendar.get(row).map_or("", String::as_str);
        match time.get(row) {
            Some(right) => lines.push(format!("{:<width$}  {}", left, right, width = PANE_WIDTH)),
            None => lines.push(left.trim_end().to_string()),
        }
    }

    lines.join("\n")
}

fn day_cell(day: &GridDay) -> String {
    match day.status() {
        DayStatus::Selected => format!("[{:>2}] ", day.date().day()),
        DayStatus::Annotated => format!("({:>2}) ", day.date().day()),
        DayStatus::Normal => format!(" {:>2}  ", day.date().day()),
    }
}

fn calendar_pane(picker: &DateTimePicker) -> Vec<String> {
    let calendar = picker.calendar();
    let mut lines = Vec::new();

    let mut title = calendar.viewed().to_string();
    if calendar.is_loading() {
        title.push_str(" (fetching...)");
    }
    lines.push(title);

    lines.push(WEEKDAYS.map(|day| format!(" {day}  ")).join(""));

    let grid = calendar.grid();
    let mut row = " ".repeat(CELL_WIDTH * grid.leading_blanks());
    let mut filled = grid.leading_blanks();
    for day in grid.days() {
        row.push_str(&day_cell(day));
        filled += 1;
        if filled % 7 == 0 {
            lines.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        lines.push(row);
    }

    if let Some(annotation) = calendar.annotation() {
        lines.push(String::new());
        lines.push(annotation.to_string());
    }

    lines
}

fn time_pane(picker: &SlotPicker) -> Vec<String> {
    let mut lines = vec!["Time".to_string()];

    for slot in picker.slots() {
        if picker.is_selected(*slot) {
            lines.push(format!("[{slot}]"));
        } else {
            lines.push(format!(" {slot} "));
        }
    }

    lines
}
