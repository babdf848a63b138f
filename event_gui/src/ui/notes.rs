//! Notes editor

use iced::widget::{column, text_input, Column};
use iced::Length;

use event_core::FieldChange;

use super::shared::section_title;
use crate::Message;

pub fn view(notes: &str) -> Column<'_, Message> {
    column![
        section_title("Notes"),
        text_input("Anything else organisers should know", notes)
            .on_input(|v| Message::Field(FieldChange::Notes(v)))
            .width(Length::Fill)
            .padding(6)
            .size(11),
    ]
    .spacing(6)
}
