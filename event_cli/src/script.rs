//! Scripted sessions
//!
//! A script is a JSON array of actions replayed against a fresh wizard:
//!
//! ```json
//! [
//!   { "action": "set", "fields": { "title": "Orientation", "category": "Workshop" } },
//!   { "action": "next" },
//!   { "action": "gender", "gender": "female", "value": true },
//!   { "action": "add_objective", "text": "Meet mentors" },
//!   { "action": "attach", "paths": ["agenda.pdf"] },
//!   { "action": "submit" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use event_core::{
    Attachment, EventPatch, EventSnapshot, EventWizard, FieldChange, GenderKey, Submitter,
    WizardError, WizardResult,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Set { fields: EventPatch },
    Gender { gender: GenderKey, value: bool },
    AddObjective { text: String },
    RemoveObjective { index: usize },
    Attach { paths: Vec<PathBuf> },
    RemoveAttachment { index: usize },
    Next,
    Back,
    Submit,
}

pub fn parse_script(json: &str) -> WizardResult<Vec<ScriptAction>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: &Path) -> WizardResult<Vec<ScriptAction>> {
    let json = fs::read_to_string(path).map_err(|e| {
        WizardError::file_error("read script", path.display().to_string(), e.to_string())
    })?;
    parse_script(&json)
}

/// Apply `actions` in order. Stops at the first `submit` and returns its
/// snapshot; returns `None` if the script never submits.
pub fn replay<S: Submitter>(
    wizard: &mut EventWizard,
    actions: Vec<ScriptAction>,
    submitter: &mut S,
) -> WizardResult<Option<EventSnapshot>> {
    for (position, action) in actions.into_iter().enumerate() {
        debug!(position, ?action, "replaying");
        match action {
            ScriptAction::Set { fields } => wizard.merge(&fields),
            ScriptAction::Gender { gender, value } => {
                wizard.apply(FieldChange::GenderRestriction { gender, value })
            }
            ScriptAction::AddObjective { text } => wizard.apply(FieldChange::AddObjective(text)),
            ScriptAction::RemoveObjective { index } => {
                wizard.apply(FieldChange::RemoveObjective(index))
            }
            ScriptAction::Attach { paths } => {
                let batch = Attachment::batch_from_paths(&paths)?;
                wizard.apply(FieldChange::AddAttachments(batch));
            }
            ScriptAction::RemoveAttachment { index } => {
                wizard.apply(FieldChange::RemoveAttachment(index))
            }
            ScriptAction::Next => {
                wizard.advance();
            }
            ScriptAction::Back => {
                wizard.retreat();
            }
            ScriptAction::Submit => return wizard.submit(submitter).map(Some),
        }
    }
    Ok(None)
}
