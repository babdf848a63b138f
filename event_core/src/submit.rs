//! # Submission
//!
//! The wizard's only outbound seam. When the user submits, the session hands
//! an immutable [`EventSnapshot`] to a [`Submitter`]; what happens next
//! (network call, validation, storage) belongs to the submitter.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{WizardError, WizardResult};
use crate::state::WizardState;

/// Current snapshot schema version
pub const SNAPSHOT_VERSION: &str = "0.1.0";

/// Complete wizard state at the moment of submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub schema_version: String,
    pub submitted_at: DateTime<Utc>,
    pub event: WizardState,
}

impl EventSnapshot {
    pub fn new(event: WizardState) -> Self {
        EventSnapshot {
            schema_version: SNAPSHOT_VERSION.to_string(),
            submitted_at: Utc::now(),
            event,
        }
    }

    pub fn to_json_pretty(&self) -> WizardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Receives the snapshot when the wizard is submitted.
pub trait Submitter {
    fn submit(&mut self, snapshot: &EventSnapshot) -> WizardResult<()>;
}

/// Logs the snapshot as JSON and accepts it.
#[derive(Debug, Default)]
pub struct LogSubmitter {
    submitted: usize,
}

impl LogSubmitter {
    pub fn new() -> Self {
        LogSubmitter::default()
    }

    /// Number of snapshots accepted so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl Submitter for LogSubmitter {
    fn submit(&mut self, snapshot: &EventSnapshot) -> WizardResult<()> {
        let json = serde_json::to_string(snapshot)?;
        info!(title = %snapshot.event.title, snapshot = %json, "event submitted");
        self.submitted += 1;
        Ok(())
    }
}

/// Writes each snapshot as pretty JSON to a writer.
#[derive(Debug)]
pub struct JsonSubmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonSubmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonSubmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Submitter for JsonSubmitter<W> {
    fn submit(&mut self, snapshot: &EventSnapshot) -> WizardResult<()> {
        let json = snapshot.to_json_pretty()?;
        writeln!(self.writer, "{}", json)
            .and_then(|_| self.writer.flush())
            .map_err(|e| WizardError::submission_failed(e.to_string()))
    }
}
