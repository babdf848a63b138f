//! Attachment list editor

use iced::widget::{button, column, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use event_core::{AttachmentHandle, FieldChange};

use super::shared::section_title;
use crate::Message;

/// Render attached files with a picker button
pub fn view(attachments: &[AttachmentHandle]) -> Column<'_, Message> {
    let items: Vec<Element<'_, Message>> = attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            row![
                text(attachment.name.as_str()).size(11),
                Space::new().width(8),
                text(attachment.size_display()).size(10).color([0.5, 0.5, 0.5]),
                Space::new().width(Length::Fill),
                button(text("Remove").size(10))
                    .on_press(Message::Field(FieldChange::RemoveAttachment(index)))
                    .padding(Padding::from([2, 8]))
                    .style(button::text),
            ]
            .align_y(Alignment::Center)
            .into()
        })
        .collect();

    let list: Element<'_, Message> = if items.is_empty() {
        text("No files attached").size(11).color([0.5, 0.5, 0.5]).into()
    } else {
        Column::with_children(items).spacing(2).into()
    };

    column![
        section_title("Attachments"),
        list,
        button(text("Attach Files...").size(11))
            .on_press(Message::PickAttachments)
            .padding(Padding::from([4, 12]))
            .style(button::secondary),
    ]
    .spacing(6)
}
