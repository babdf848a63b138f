//! Editor for the Date & Time step
//!
//! Dates are `YYYY-MM-DD`, times `HH:MM`. The duration field is filled in
//! from the schedule whenever it can be computed, and stays editable.

use iced::widget::{column, row, text, Column, Space};

use event_core::sections::DateTimeView;
use event_core::FieldChange;

use super::shared::{labeled_input, section_title};
use crate::Message;

/// Render the date & time editor
pub fn view(schedule: DateTimeView<'_>) -> Column<'_, Message> {
    column![
        section_title("Date & Time"),
        Space::new().height(8),
        row![
            labeled_input("Start Date:", "YYYY-MM-DD", schedule.start_date, |v| {
                Message::Field(FieldChange::StartDate(v))
            }),
            Space::new().width(12),
            labeled_input("End Date:", "YYYY-MM-DD", schedule.end_date, |v| {
                Message::Field(FieldChange::EndDate(v))
            }),
        ],
        row![
            labeled_input("Start Time:", "HH:MM", schedule.start_time, |v| {
                Message::Field(FieldChange::StartTime(v))
            }),
            Space::new().width(12),
            labeled_input("End Time:", "HH:MM", schedule.end_time, |v| {
                Message::Field(FieldChange::EndTime(v))
            }),
        ],
        labeled_input("Duration:", "e.g. 2h 30m", schedule.duration, |v| {
            Message::Field(FieldChange::Duration(v))
        }),
        text("Leave End Date empty for single-day events.").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
}
