//! Editor for the Participation step
//!
//! Displays capacity, participation type, target audience and the two
//! independent gender restriction flags.

use iced::widget::{checkbox, column, row, text, Column, Space};
use iced::{Alignment, Length};

use event_core::sections::ParticipationView;
use event_core::{FieldChange, GenderKey, WizardConfig};

use super::shared::{labeled_input, labeled_picker, section_title, LABEL_WIDTH};
use crate::Message;

/// Render the participation editor
pub fn view<'a>(participation: ParticipationView<'a>, config: &'a WizardConfig) -> Column<'a, Message> {
    let restriction = participation.gender_restriction;
    let gender_row = GenderKey::ALL.iter().fold(
        row![text("Restricted to:").size(11).width(Length::Fixed(LABEL_WIDTH))]
            .spacing(16)
            .align_y(Alignment::Center),
        |gender_row, key| {
            let key = *key;
            gender_row.push(
                checkbox(restriction.get(key))
                    .label(key.display_name())
                    .on_toggle(move |value| {
                        Message::Field(FieldChange::GenderRestriction { gender: key, value })
                    })
                    .text_size(11),
            )
        },
    );

    column![
        section_title("Participation"),
        Space::new().height(8),
        labeled_input("Max Participants:", "Leave empty for no limit", participation.max_participants, |v| {
            Message::Field(FieldChange::MaxParticipants(v))
        }),
        labeled_picker(
            "Registration:",
            "Select participation type",
            &config.participation_types,
            participation.participation_type,
            |v| Message::Field(FieldChange::ParticipationType(v)),
        ),
        labeled_picker(
            "Audience:",
            "Select target audience",
            &config.target_audiences,
            participation.target_audience,
            |v| Message::Field(FieldChange::TargetAudience(v)),
        ),
        gender_row,
    ]
    .spacing(6)
}
