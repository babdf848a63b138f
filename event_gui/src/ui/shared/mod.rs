//! Shared UI components reusable across the step editors

use iced::widget::{pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Width of the label column in every editor
pub const LABEL_WIDTH: f32 = 110.0;

/// Section heading used at the top of each editor
pub fn section_title(title: &str) -> Element<'_, Message> {
    text(title).size(14).into()
}

/// Label followed by a text input
pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Label followed by a drop-down over `options`. An empty `selected`
/// shows the placeholder.
pub fn labeled_picker<'a>(
    label: &'a str,
    placeholder: &'a str,
    options: &'a [String],
    selected: &'a str,
    on_select: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let selected = (!selected.is_empty()).then(|| selected.to_string());

    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(options, selected, on_select)
            .placeholder(placeholder)
            .width(Length::Fill)
            .text_size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
