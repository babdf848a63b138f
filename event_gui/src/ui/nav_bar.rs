//! Navigation buttons
//!
//! Back is hidden on the first step; the last step swaps Next for the
//! submit button.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use event_core::{ForwardAction, NavControls};

use crate::Message;

/// Render Back / Next / Create Event
pub fn view_nav_bar(controls: NavControls) -> Element<'static, Message> {
    let back: Element<'static, Message> = if controls.show_back {
        button(text("Back").size(12))
            .on_press(Message::Back)
            .padding(Padding::from([6, 16]))
            .style(button::secondary)
            .into()
    } else {
        Space::new().into()
    };

    let forward_message = match controls.forward {
        ForwardAction::Next => Message::Next,
        ForwardAction::Submit => Message::Submit,
    };

    row![
        back,
        Space::new().width(Length::Fill),
        button(text(controls.forward.label()).size(12))
            .on_press(forward_message)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center)
    .into()
}
