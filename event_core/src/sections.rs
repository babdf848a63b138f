//! # Step Sections
//!
//! Dispatch from a [`Step`] to the slice of [`WizardState`] its rendering
//! collaborator needs. Front ends match on [`StepSection`] and send edits
//! back as [`crate::change::FieldChange`] values.

use crate::attachment::AttachmentHandle;
use crate::state::{GenderRestriction, LocationType, WizardState};
use crate::step::Step;

/// Basic details editor input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicDetailsView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub staff_id: &'a str,
    pub presenter: &'a str,
}

/// Date & time editor input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeView<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub duration: &'a str,
}

/// Location picker input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationView<'a> {
    pub location_type: LocationType,
    pub selected_hall: &'a str,
}

/// Participation editor input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipationView<'a> {
    pub max_participants: &'a str,
    pub participation_type: &'a str,
    pub target_audience: &'a str,
    pub gender_restriction: GenderRestriction,
}

/// Objectives, attachments and notes; three collaborators share this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditionalView<'a> {
    pub objectives: &'a [String],
    pub attachments: &'a [AttachmentHandle],
    pub notes: &'a str,
}

/// Borrowed slice of the state for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSection<'a> {
    Details(BasicDetailsView<'a>),
    DateTime(DateTimeView<'a>),
    Location(LocationView<'a>),
    Participation(ParticipationView<'a>),
    Additional(AdditionalView<'a>),
}

impl StepSection<'_> {
    pub fn step(&self) -> Step {
        match self {
            StepSection::Details(_) => Step::Details,
            StepSection::DateTime(_) => Step::DateTime,
            StepSection::Location(_) => Step::Location,
            StepSection::Participation(_) => Step::Participation,
            StepSection::Additional(_) => Step::Additional,
        }
    }
}

impl WizardState {
    /// The slice of this state shown on `step`
    pub fn section(&self, step: Step) -> StepSection<'_> {
        match step {
            Step::Details => StepSection::Details(BasicDetailsView {
                title: &self.title,
                description: &self.description,
                category: &self.category,
                staff_id: &self.staff_id,
                presenter: &self.presenter,
            }),
            Step::DateTime => StepSection::DateTime(DateTimeView {
                start_date: &self.start_date,
                end_date: &self.end_date,
                start_time: &self.start_time,
                end_time: &self.end_time,
                duration: &self.duration,
            }),
            Step::Location => StepSection::Location(LocationView {
                location_type: self.location_type,
                selected_hall: &self.selected_hall,
            }),
            Step::Participation => StepSection::Participation(ParticipationView {
                max_participants: &self.max_participants,
                participation_type: &self.participation_type,
                target_audience: &self.target_audience,
                gender_restriction: self.gender_restriction,
            }),
            Step::Additional => StepSection::Additional(AdditionalView {
                objectives: &self.objectives,
                attachments: &self.attachments,
                notes: &self.notes,
            }),
        }
    }
}
