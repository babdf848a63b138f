//! Step Panel (Center)
//!
//! Dispatches to the editor for the active step's section:
//! - Details -> basic_details
//! - DateTime -> date_time
//! - Location -> location
//! - Participation -> participation
//! - Additional -> objectives + attachments + notes

use iced::widget::{column, container, rule, scrollable, Column};
use iced::{Element, Length};

use event_core::StepSection;

use crate::{App, Message};
use super::{attachments, basic_details, date_time, location, notes, objectives, participation};

/// Render the editor for the active step
pub fn view_step_panel(app: &App) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.wizard.section() {
        StepSection::Details(view) => basic_details::view(view, &app.config),
        StepSection::DateTime(view) => date_time::view(view),
        StepSection::Location(view) => location::view(view, &app.config),
        StepSection::Participation(view) => participation::view(view, &app.config),
        StepSection::Additional(view) => column![
            objectives::view(view.objectives, &app.objective_draft),
            rule::horizontal(1),
            attachments::view(view.attachments),
            rule::horizontal(1),
            notes::view(view.notes),
        ]
        .spacing(12),
    };

    container(scrollable(panel.padding(8)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
