//! # Wizard State
//!
//! `WizardState` is the flat record behind the event wizard. Every update
//! produces a new record; nothing edits a state in place.
//!
//! ## Update paths
//!
//! ```text
//! merge(&EventPatch)            scalar fields + location type, replace-only
//! set_gender_restriction(k, v)  one flag, sibling flag kept
//! add_objective / remove_objective
//! add_attachments / remove_attachment
//! apply(FieldChange)            routes a single collaborator event to one of the above
//! ```
//!
//! ## Example
//!
//! ```rust
//! use event_core::state::{EventPatch, GenderKey, WizardState};
//!
//! let state = WizardState::default();
//! let state = state.merge(&EventPatch {
//!     title: Some("Orientation".into()),
//!     ..EventPatch::default()
//! });
//! let state = state.set_gender_restriction(GenderKey::Female, true);
//!
//! assert_eq!(state.title, "Orientation");
//! assert!(state.gender_restriction.female);
//! assert!(!state.gender_restriction.male);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::attachment::AttachmentHandle;
use crate::change::FieldChange;
use crate::errors::{WizardError, WizardResult};

/// Participation type a fresh form starts with
pub const DEFAULT_PARTICIPATION_TYPE: &str = "yes";

/// Where the event takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    #[serde(rename = "in-campus")]
    InCampus,
    #[serde(rename = "out-campus")]
    OutCampus,
}

impl LocationType {
    /// All location types for UI selection
    pub const ALL: [LocationType; 2] = [LocationType::InCampus, LocationType::OutCampus];

    pub fn code(&self) -> &'static str {
        match self {
            LocationType::InCampus => "in-campus",
            LocationType::OutCampus => "out-campus",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LocationType::InCampus => "On Campus",
            LocationType::OutCampus => "Off Campus",
        }
    }

    /// Halls only apply to events held on campus
    pub fn uses_hall(&self) -> bool {
        matches!(self, LocationType::InCampus)
    }
}

impl FromStr for LocationType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "in-campus" | "on-campus" | "in" => Ok(LocationType::InCampus),
            "out-campus" | "off-campus" | "out" => Ok(LocationType::OutCampus),
            _ => Err(WizardError::invalid_input(
                "locationType",
                s,
                "Expected 'in-campus' or 'out-campus'",
            )),
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Selects one flag of [`GenderRestriction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderKey {
    Male,
    Female,
}

impl GenderKey {
    pub const ALL: [GenderKey; 2] = [GenderKey::Male, GenderKey::Female];

    pub fn display_name(&self) -> &'static str {
        match self {
            GenderKey::Male => "Male",
            GenderKey::Female => "Female",
        }
    }
}

impl FromStr for GenderKey {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(GenderKey::Male),
            "female" | "f" => Ok(GenderKey::Female),
            _ => Err(WizardError::invalid_input(
                "genderRestriction",
                s,
                "Expected 'male' or 'female'",
            )),
        }
    }
}

/// Two independent flags; both may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenderRestriction {
    pub male: bool,
    pub female: bool,
}

impl GenderRestriction {
    pub fn get(&self, key: GenderKey) -> bool {
        match key {
            GenderKey::Male => self.male,
            GenderKey::Female => self.female,
        }
    }

    /// Copy with only `key` replaced
    pub fn with(self, key: GenderKey, value: bool) -> Self {
        match key {
            GenderKey::Male => GenderRestriction { male: value, ..self },
            GenderKey::Female => GenderRestriction { female: value, ..self },
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.male || self.female
    }
}

/// Every value the event wizard collects.
///
/// Text fields stay as the user typed them; interpreting them (dates,
/// numbers) is left to whoever consumes the submitted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardState {
    // Details
    pub title: String,
    pub description: String,
    pub category: String,
    pub staff_id: String,
    pub presenter: String,

    // Date & time
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,

    // Location
    pub location_type: LocationType,
    pub selected_hall: String,

    // Participation
    pub max_participants: String,
    pub participation_type: String,
    pub target_audience: String,
    pub gender_restriction: GenderRestriction,

    // Additional
    pub objectives: Vec<String>,
    pub attachments: Vec<AttachmentHandle>,
    pub notes: String,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            staff_id: String::new(),
            presenter: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            duration: String::new(),
            location_type: LocationType::InCampus,
            selected_hall: String::new(),
            max_participants: String::new(),
            participation_type: DEFAULT_PARTICIPATION_TYPE.to_string(),
            target_audience: String::new(),
            gender_restriction: GenderRestriction::default(),
            objectives: Vec::new(),
            attachments: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Partial update for the replace-only fields of [`WizardState`].
///
/// `Some` overwrites the field, `None` leaves it alone. Gender flags,
/// objectives and attachments are updated through their own helpers on
/// [`WizardState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub staff_id: Option<String>,
    pub presenter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<String>,
    pub location_type: Option<LocationType>,
    pub selected_hall: Option<String>,
    pub max_participants: Option<String>,
    pub participation_type: Option<String>,
    pub target_audience: Option<String>,
    pub notes: Option<String>,
}

impl EventPatch {
    /// Names of the fields this patch overwrites, in declaration order
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut mark = |present: bool, name: &'static str| {
            if present {
                fields.push(name);
            }
        };
        mark(self.title.is_some(), "title");
        mark(self.description.is_some(), "description");
        mark(self.category.is_some(), "category");
        mark(self.staff_id.is_some(), "staffId");
        mark(self.presenter.is_some(), "presenter");
        mark(self.start_date.is_some(), "startDate");
        mark(self.end_date.is_some(), "endDate");
        mark(self.start_time.is_some(), "startTime");
        mark(self.end_time.is_some(), "endTime");
        mark(self.duration.is_some(), "duration");
        mark(self.location_type.is_some(), "locationType");
        mark(self.selected_hall.is_some(), "selectedHall");
        mark(self.max_participants.is_some(), "maxParticipants");
        mark(self.participation_type.is_some(), "participationType");
        mark(self.target_audience.is_some(), "targetAudience");
        mark(self.notes.is_some(), "notes");
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }
}

fn replace(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}

impl WizardState {
    /// Fresh state with a non-standard initial participation type
    pub fn with_participation_type(participation_type: impl Into<String>) -> Self {
        WizardState {
            participation_type: participation_type.into(),
            ..WizardState::default()
        }
    }

    /// New state with every field named in `patch` replaced.
    pub fn merge(&self, patch: &EventPatch) -> WizardState {
        let mut next = self.clone();
        replace(&mut next.title, &patch.title);
        replace(&mut next.description, &patch.description);
        replace(&mut next.category, &patch.category);
        replace(&mut next.staff_id, &patch.staff_id);
        replace(&mut next.presenter, &patch.presenter);
        replace(&mut next.start_date, &patch.start_date);
        replace(&mut next.end_date, &patch.end_date);
        replace(&mut next.start_time, &patch.start_time);
        replace(&mut next.end_time, &patch.end_time);
        replace(&mut next.duration, &patch.duration);
        if let Some(location_type) = patch.location_type {
            next.location_type = location_type;
        }
        replace(&mut next.selected_hall, &patch.selected_hall);
        replace(&mut next.max_participants, &patch.max_participants);
        replace(&mut next.participation_type, &patch.participation_type);
        replace(&mut next.target_audience, &patch.target_audience);
        replace(&mut next.notes, &patch.notes);
        next
    }

    /// New state with one gender flag replaced and the other kept.
    pub fn set_gender_restriction(&self, key: GenderKey, value: bool) -> WizardState {
        WizardState {
            gender_restriction: self.gender_restriction.with(key, value),
            ..self.clone()
        }
    }

    /// New state with `text` appended to the objectives.
    pub fn add_objective(&self, text: impl Into<String>) -> WizardState {
        let mut next = self.clone();
        next.objectives.push(text.into());
        next
    }

    /// New state without the objective at `index`.
    ///
    /// An out-of-range index returns an unchanged copy.
    pub fn remove_objective(&self, index: usize) -> WizardState {
        let mut next = self.clone();
        if index < next.objectives.len() {
            next.objectives.remove(index);
        } else {
            warn!(index, len = next.objectives.len(), "ignoring out-of-range objective removal");
        }
        next
    }

    /// New state with `files` appended to the attachments in arrival order.
    pub fn add_attachments<I>(&self, files: I) -> WizardState
    where
        I: IntoIterator<Item = AttachmentHandle>,
    {
        let mut next = self.clone();
        next.attachments.extend(files);
        next
    }

    /// New state without the attachment at `index`.
    ///
    /// An out-of-range index returns an unchanged copy.
    pub fn remove_attachment(&self, index: usize) -> WizardState {
        let mut next = self.clone();
        if index < next.attachments.len() {
            next.attachments.remove(index);
        } else {
            warn!(index, len = next.attachments.len(), "ignoring out-of-range attachment removal");
        }
        next
    }

    /// New state with a single collaborator event applied.
    pub fn apply(&self, change: FieldChange) -> WizardState {
        match change {
            FieldChange::GenderRestriction { gender, value } => {
                self.set_gender_restriction(gender, value)
            }
            FieldChange::AddObjective(text) => self.add_objective(text),
            FieldChange::RemoveObjective(index) => self.remove_objective(index),
            FieldChange::AddAttachments(files) => self.add_attachments(files),
            FieldChange::RemoveAttachment(index) => self.remove_attachment(index),
            scalar => match scalar.into_patch() {
                Some(patch) => self.merge(&patch),
                None => self.clone(),
            },
        }
    }

    /// Parse a state from JSON, e.g. one captured in an earlier snapshot
    pub fn from_json(json: &str) -> WizardResult<WizardState> {
        Ok(serde_json::from_str(json)?)
    }
}
