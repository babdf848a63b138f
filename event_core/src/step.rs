//! # Wizard Steps
//!
//! The fixed, ordered sequence of pages the event wizard walks through.
//! Ordering is explicit (`index`, `next`, `previous`) so navigation never
//! depends on looking values up in a list.
//!
//! ```text
//! details -> datetime -> location -> participation -> additional
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{WizardError, WizardResult};

/// One named page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Title, description, category, staff member, presenter
    #[default]
    Details,
    /// Start/end dates and times, duration
    DateTime,
    /// On/off campus and hall selection
    Location,
    /// Capacity, participation type, audience, gender restriction
    Participation,
    /// Objectives, attachments, notes
    Additional,
}

impl Step {
    /// All steps in wizard order
    pub const ALL: [Step; 5] = [
        Step::Details,
        Step::DateTime,
        Step::Location,
        Step::Participation,
        Step::Additional,
    ];

    /// The step a fresh wizard opens on
    pub const FIRST: Step = Step::Details;

    /// The only step with no forward transition
    pub const LAST: Step = Step::Additional;

    /// Zero-based position in the sequence
    pub fn index(&self) -> usize {
        match self {
            Step::Details => 0,
            Step::DateTime => 1,
            Step::Location => 2,
            Step::Participation => 3,
            Step::Additional => 4,
        }
    }

    /// Look up a step by position
    pub fn from_index(index: usize) -> WizardResult<Self> {
        Step::ALL
            .get(index)
            .copied()
            .ok_or_else(|| WizardError::invalid_step(index.to_string()))
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Step::Details => Some(Step::DateTime),
            Step::DateTime => Some(Step::Location),
            Step::Location => Some(Step::Participation),
            Step::Participation => Some(Step::Additional),
            Step::Additional => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Step::Details => None,
            Step::DateTime => Some(Step::Details),
            Step::Location => Some(Step::DateTime),
            Step::Participation => Some(Step::Location),
            Step::Additional => Some(Step::Participation),
        }
    }

    /// Identifier used in scripts, logs and serialized snapshots
    pub fn code(&self) -> &'static str {
        match self {
            Step::Details => "details",
            Step::DateTime => "datetime",
            Step::Location => "location",
            Step::Participation => "participation",
            Step::Additional => "additional",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Step::Details => "Event Details",
            Step::DateTime => "Date & Time",
            Step::Location => "Location",
            Step::Participation => "Participation",
            Step::Additional => "Additional Info",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Details => "Title, category and presenter",
            Step::DateTime => "When the event starts and ends",
            Step::Location => "Where the event takes place",
            Step::Participation => "Who can attend and how many",
            Step::Additional => "Objectives, attachments and notes",
        }
    }
}

impl FromStr for Step {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "details" => Ok(Step::Details),
            "datetime" => Ok(Step::DateTime),
            "location" => Ok(Step::Location),
            "participation" => Ok(Step::Participation),
            "additional" => Ok(Step::Additional),
            _ => Err(WizardError::invalid_step(s)),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
