//! Window header

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the wizard header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Create New Event").size(24),
        Space::new().width(Length::Fill),
        text("Events Dashboard").size(12).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
