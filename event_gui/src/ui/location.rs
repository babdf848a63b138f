//! Editor for the Location step
//!
//! On-campus events pick a hall from the configured list; off-campus events
//! type the venue into the same field.

use iced::widget::{column, radio, row, text, Column, Space};
use iced::{Alignment, Element, Length};

use event_core::sections::LocationView;
use event_core::{FieldChange, LocationType, WizardConfig};

use super::shared::{labeled_input, labeled_picker, section_title, LABEL_WIDTH};
use crate::Message;

/// Render the location editor
pub fn view<'a>(location: LocationView<'a>, config: &'a WizardConfig) -> Column<'a, Message> {
    let type_selector = LocationType::ALL.iter().fold(
        row![text("Location:").size(11).width(Length::Fixed(LABEL_WIDTH))]
            .spacing(16)
            .align_y(Alignment::Center),
        |selector, kind| {
            selector.push(
                radio(kind.display_name(), *kind, Some(location.location_type), |k| {
                    Message::Field(FieldChange::LocationType(k))
                })
                .size(14)
                .text_size(11),
            )
        },
    );

    let venue: Element<'a, Message> = if location.location_type.uses_hall() {
        labeled_picker("Hall:", "Select a hall", &config.halls, location.selected_hall, |v| {
            Message::Field(FieldChange::SelectedHall(v))
        })
    } else {
        labeled_input("Venue:", "Address or venue name", location.selected_hall, |v| {
            Message::Field(FieldChange::SelectedHall(v))
        })
    };

    column![
        section_title("Location"),
        Space::new().height(8),
        type_selector,
        venue,
    ]
    .spacing(6)
}
