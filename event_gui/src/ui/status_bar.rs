//! Status Bar (Bottom)
//!
//! Displays:
//! - Step position
//! - Status messages (last attach / submit outcome)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use event_core::{Navigator, Step};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(navigator: &Navigator, status: &'a str) -> Element<'a, Message> {
    let position = format!(
        "Step {} of {}: {}",
        navigator.active().index() + 1,
        Step::ALL.len(),
        navigator.active().label()
    );

    row![
        text(position).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
