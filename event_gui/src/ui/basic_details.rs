//! Editor for the Event Details step
//!
//! Displays fields for title, description, category, staff member and presenter.

use iced::widget::{column, Column, Space};

use event_core::sections::BasicDetailsView;
use event_core::{FieldChange, WizardConfig};

use super::shared::{labeled_input, labeled_picker, section_title};
use crate::Message;

/// Render the basic details editor
pub fn view<'a>(details: BasicDetailsView<'a>, config: &'a WizardConfig) -> Column<'a, Message> {
    column![
        section_title("Event Details"),
        Space::new().height(8),
        labeled_input("Title:", "Event title", details.title, |v| {
            Message::Field(FieldChange::Title(v))
        }),
        labeled_input("Description:", "What is this event about?", details.description, |v| {
            Message::Field(FieldChange::Description(v))
        }),
        labeled_picker("Category:", "Select a category", &config.categories, details.category, |v| {
            Message::Field(FieldChange::Category(v))
        }),
        labeled_input("Staff ID:", "Responsible staff member", details.staff_id, |v| {
            Message::Field(FieldChange::StaffId(v))
        }),
        labeled_input("Presenter:", "Presenter name", details.presenter, |v| {
            Message::Field(FieldChange::Presenter(v))
        }),
    ]
    .spacing(6)
}
