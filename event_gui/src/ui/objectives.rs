//! Objectives list editor

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use event_core::FieldChange;

use super::shared::section_title;
use crate::Message;

/// Render the objectives list with an add row
pub fn view<'a>(objectives: &'a [String], draft: &'a str) -> Column<'a, Message> {
    let items: Vec<Element<'a, Message>> = objectives
        .iter()
        .enumerate()
        .map(|(index, objective)| {
            row![
                text(format!("{}.", index + 1)).size(11).width(Length::Fixed(24.0)),
                text(objective.as_str()).size(11),
                Space::new().width(Length::Fill),
                button(text("Remove").size(10))
                    .on_press(Message::Field(FieldChange::RemoveObjective(index)))
                    .padding(Padding::from([2, 8]))
                    .style(button::text),
            ]
            .align_y(Alignment::Center)
            .into()
        })
        .collect();

    let add_row = row![
        text_input("Add an objective", draft)
            .on_input(Message::ObjectiveDraftChanged)
            .on_submit(Message::AddObjectiveDraft)
            .width(Length::Fill)
            .padding(4)
            .size(11),
        button(text("Add").size(11))
            .on_press(Message::AddObjectiveDraft)
            .padding(Padding::from([4, 12]))
            .style(button::secondary),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    column![
        section_title("Objectives"),
        Column::with_children(items).spacing(2),
        add_row,
    ]
    .spacing(6)
}
