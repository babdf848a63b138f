//! # Event Wizard Session
//!
//! `EventWizard` owns the form state and the step cursor for one session.
//! Collaborator edits and navigation are the only ways in; both go through
//! the merge path in [`crate::state`].
//!
//! ## Example
//!
//! ```rust
//! use event_core::{EventWizard, FieldChange, LogSubmitter, Step};
//!
//! let mut wizard = EventWizard::new();
//! wizard.apply(FieldChange::Title("Orientation".into()));
//! while wizard.advance() {}
//!
//! assert_eq!(wizard.active_step(), Step::Additional);
//! let snapshot = wizard.submit(&mut LogSubmitter::new()).unwrap();
//! assert_eq!(snapshot.event.title, "Orientation");
//! ```

use tracing::{debug, info};

use crate::change::FieldChange;
use crate::config::WizardConfig;
use crate::errors::{WizardError, WizardResult};
use crate::navigation::{NavControls, Navigator};
use crate::sections::StepSection;
use crate::state::{EventPatch, WizardState};
use crate::step::Step;
use crate::submit::{EventSnapshot, Submitter};

/// One form session: state plus active step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventWizard {
    state: WizardState,
    navigator: Navigator,
}

impl EventWizard {
    /// Fresh session with default fields on the first step
    pub fn new() -> Self {
        EventWizard::default()
    }

    /// Fresh session whose participation type comes from `config`
    pub fn with_config(config: &WizardConfig) -> Self {
        EventWizard {
            state: WizardState::with_participation_type(config.default_participation_type.clone()),
            navigator: Navigator::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn active_step(&self) -> Step {
        self.navigator.active()
    }

    /// State slice for the active step's collaborator
    pub fn section(&self) -> StepSection<'_> {
        self.state.section(self.navigator.active())
    }

    /// Apply one collaborator event.
    pub fn apply(&mut self, change: FieldChange) {
        debug!(
            field = change.field_name(),
            step = change.step().code(),
            "field change"
        );
        self.state = self.state.apply(change);
    }

    /// Overwrite every field named in `patch`.
    pub fn merge(&mut self, patch: &EventPatch) {
        debug!(fields = ?patch.touched_fields(), "merge patch");
        self.state = self.state.merge(patch);
    }

    pub fn advance(&mut self) -> bool {
        self.navigator.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    pub fn is_first_step(&self) -> bool {
        self.navigator.is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last_step()
    }

    pub fn controls(&self) -> NavControls {
        self.navigator.controls()
    }

    /// Complete copy of the current state
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot::new(self.state.clone())
    }

    /// Hand a snapshot to `submitter`.
    ///
    /// Only available on the last step. The cursor does not move; on success
    /// the caller is expected to end the session.
    pub fn submit<S: Submitter + ?Sized>(&self, submitter: &mut S) -> WizardResult<EventSnapshot> {
        if !self.is_last_step() {
            return Err(WizardError::SubmitUnavailable {
                step: self.active_step().code().to_string(),
            });
        }

        let snapshot = self.snapshot();
        submitter.submit(&snapshot)?;
        info!(
            title = %snapshot.event.title,
            objectives = snapshot.event.objectives.len(),
            attachments = snapshot.event.attachments.len(),
            "wizard submitted"
        );
        Ok(snapshot)
    }
}
