//! # Field Changes
//!
//! The events rendering collaborators emit. Each variant carries exactly one
//! field's new value (or one sequence operation), so a callback can never
//! touch a field it does not own.

use serde::{Deserialize, Serialize};

use crate::attachment::AttachmentHandle;
use crate::state::{EventPatch, GenderKey, LocationType};
use crate::step::Step;

/// A single field-level edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Title(String),
    Description(String),
    Category(String),
    StaffId(String),
    Presenter(String),
    StartDate(String),
    EndDate(String),
    StartTime(String),
    EndTime(String),
    Duration(String),
    LocationType(LocationType),
    SelectedHall(String),
    MaxParticipants(String),
    ParticipationType(String),
    TargetAudience(String),
    GenderRestriction { gender: GenderKey, value: bool },
    AddObjective(String),
    RemoveObjective(usize),
    AddAttachments(Vec<AttachmentHandle>),
    RemoveAttachment(usize),
    Notes(String),
}

impl FieldChange {
    /// The step whose collaborator emits this change
    pub fn step(&self) -> Step {
        match self {
            FieldChange::Title(_)
            | FieldChange::Description(_)
            | FieldChange::Category(_)
            | FieldChange::StaffId(_)
            | FieldChange::Presenter(_) => Step::Details,
            FieldChange::StartDate(_)
            | FieldChange::EndDate(_)
            | FieldChange::StartTime(_)
            | FieldChange::EndTime(_)
            | FieldChange::Duration(_) => Step::DateTime,
            FieldChange::LocationType(_) | FieldChange::SelectedHall(_) => Step::Location,
            FieldChange::MaxParticipants(_)
            | FieldChange::ParticipationType(_)
            | FieldChange::TargetAudience(_)
            | FieldChange::GenderRestriction { .. } => Step::Participation,
            FieldChange::AddObjective(_)
            | FieldChange::RemoveObjective(_)
            | FieldChange::AddAttachments(_)
            | FieldChange::RemoveAttachment(_)
            | FieldChange::Notes(_) => Step::Additional,
        }
    }

    /// Serialized name of the field this change targets
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldChange::Title(_) => "title",
            FieldChange::Description(_) => "description",
            FieldChange::Category(_) => "category",
            FieldChange::StaffId(_) => "staffId",
            FieldChange::Presenter(_) => "presenter",
            FieldChange::StartDate(_) => "startDate",
            FieldChange::EndDate(_) => "endDate",
            FieldChange::StartTime(_) => "startTime",
            FieldChange::EndTime(_) => "endTime",
            FieldChange::Duration(_) => "duration",
            FieldChange::LocationType(_) => "locationType",
            FieldChange::SelectedHall(_) => "selectedHall",
            FieldChange::MaxParticipants(_) => "maxParticipants",
            FieldChange::ParticipationType(_) => "participationType",
            FieldChange::TargetAudience(_) => "targetAudience",
            FieldChange::GenderRestriction { .. } => "genderRestriction",
            FieldChange::AddObjective(_) | FieldChange::RemoveObjective(_) => "objectives",
            FieldChange::AddAttachments(_) | FieldChange::RemoveAttachment(_) => "attachments",
            FieldChange::Notes(_) => "notes",
        }
    }

    /// True for edits to date/time fields a computed duration depends on
    pub fn affects_schedule(&self) -> bool {
        matches!(
            self,
            FieldChange::StartDate(_)
                | FieldChange::EndDate(_)
                | FieldChange::StartTime(_)
                | FieldChange::EndTime(_)
        )
    }

    /// Single-field patch for replace-only fields; `None` for the nested
    /// and sequence operations.
    pub fn into_patch(self) -> Option<EventPatch> {
        let mut patch = EventPatch::default();
        match self {
            FieldChange::Title(v) => patch.title = Some(v),
            FieldChange::Description(v) => patch.description = Some(v),
            FieldChange::Category(v) => patch.category = Some(v),
            FieldChange::StaffId(v) => patch.staff_id = Some(v),
            FieldChange::Presenter(v) => patch.presenter = Some(v),
            FieldChange::StartDate(v) => patch.start_date = Some(v),
            FieldChange::EndDate(v) => patch.end_date = Some(v),
            FieldChange::StartTime(v) => patch.start_time = Some(v),
            FieldChange::EndTime(v) => patch.end_time = Some(v),
            FieldChange::Duration(v) => patch.duration = Some(v),
            FieldChange::LocationType(v) => patch.location_type = Some(v),
            FieldChange::SelectedHall(v) => patch.selected_hall = Some(v),
            FieldChange::MaxParticipants(v) => patch.max_participants = Some(v),
            FieldChange::ParticipationType(v) => patch.participation_type = Some(v),
            FieldChange::TargetAudience(v) => patch.target_audience = Some(v),
            FieldChange::Notes(v) => patch.notes = Some(v),
            FieldChange::GenderRestriction { .. }
            | FieldChange::AddObjective(_)
            | FieldChange::RemoveObjective(_)
            | FieldChange::AddAttachments(_)
            | FieldChange::RemoveAttachment(_) => return None,
        }
        Some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_change_patches_one_field() {
        let patch = FieldChange::Presenter("Dr. Amal".into()).into_patch().unwrap();
        assert_eq!(patch.touched_fields(), vec!["presenter"]);
        assert_eq!(patch.presenter.as_deref(), Some("Dr. Amal"));
    }

    #[test]
    fn test_every_scalar_patch_touches_its_own_field() {
        let changes = vec![
            FieldChange::Title(String::new()),
            FieldChange::Description(String::new()),
            FieldChange::Category(String::new()),
            FieldChange::StaffId(String::new()),
            FieldChange::Presenter(String::new()),
            FieldChange::StartDate(String::new()),
            FieldChange::EndDate(String::new()),
            FieldChange::StartTime(String::new()),
            FieldChange::EndTime(String::new()),
            FieldChange::Duration(String::new()),
            FieldChange::LocationType(LocationType::OutCampus),
            FieldChange::SelectedHall(String::new()),
            FieldChange::MaxParticipants(String::new()),
            FieldChange::ParticipationType(String::new()),
            FieldChange::TargetAudience(String::new()),
            FieldChange::Notes(String::new()),
        ];
        for change in changes {
            let name = change.field_name();
            let patch = change.into_patch().unwrap();
            assert_eq!(patch.touched_fields(), vec![name]);
        }
    }

    #[test]
    fn test_sequence_changes_have_no_patch() {
        assert!(FieldChange::AddObjective("x".into()).into_patch().is_none());
        assert!(FieldChange::RemoveAttachment(0).into_patch().is_none());
        assert!(FieldChange::GenderRestriction { gender: GenderKey::Male, value: true }
            .into_patch()
            .is_none());
    }

    #[test]
    fn test_owning_step() {
        assert_eq!(FieldChange::StaffId("1".into()).step(), Step::Details);
        assert_eq!(FieldChange::Duration("1h".into()).step(), Step::DateTime);
        assert_eq!(FieldChange::SelectedHall("A".into()).step(), Step::Location);
        assert_eq!(
            FieldChange::GenderRestriction { gender: GenderKey::Female, value: true }.step(),
            Step::Participation
        );
        assert_eq!(FieldChange::Notes("n".into()).step(), Step::Additional);
    }

    #[test]
    fn test_schedule_fields() {
        assert!(FieldChange::EndTime("17:00".into()).affects_schedule());
        assert!(!FieldChange::Duration("2h".into()).affects_schedule());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&FieldChange::StaffId("S-7".into())).unwrap();
        assert_eq!(json, r#"{"field":"staffId","value":"S-7"}"#);

        let parsed: FieldChange =
            serde_json::from_str(r#"{"field":"genderRestriction","value":{"gender":"female","value":true}}"#)
                .unwrap();
        assert_eq!(
            parsed,
            FieldChange::GenderRestriction { gender: GenderKey::Female, value: true }
        );
    }
}
