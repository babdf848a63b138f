//! Step tabs
//!
//! One tab per step in wizard order. Tabs only show where the user is;
//! moving between steps goes through the nav bar.

use iced::widget::{button, column, progress_bar, row, text, Row};
use iced::{Element, Length, Padding};

use event_core::{Navigator, Step};

use crate::Message;

/// Render the tab strip and progress indicator
pub fn view_tab_bar(navigator: &Navigator) -> Element<'static, Message> {
    let active = navigator.active();

    let tabs: Row<'static, Message> = Step::ALL.iter().fold(row![].spacing(4), |tabs, step| {
        let style = if *step == active {
            button::primary
        } else {
            button::secondary
        };
        tabs.push(
            button(text(step.label()).size(11))
                .padding(Padding::from([6, 12]))
                .width(Length::Fill)
                .style(style),
        )
    });

    column![
        tabs,
        progress_bar(0.0..=100.0, f32::from(navigator.progress_percent())),
        text(active.description()).size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .into()
}
