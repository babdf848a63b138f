//! # event_core - Event Creation Wizard Engine
//!
//! `event_core` holds everything behind the multi-step "create event" form
//! except the pixels: the form state, the single merge path every edit goes
//! through, the ordered step list, and the navigation cursor. Front ends
//! (the Iced GUI and the terminal CLI) render from it and feed edits back.
//!
//! ## Design Philosophy
//!
//! - **Immutable updates**: every edit returns a new `WizardState`
//! - **One field per event**: collaborators emit `FieldChange` values
//! - **Unrepresentable bad steps**: the step list is an enum, not an index
//! - **JSON-First**: snapshots serialize with the field names web clients expect
//!
//! ## Quick Start
//!
//! ```rust
//! use event_core::{EventWizard, FieldChange, Step};
//!
//! let mut wizard = EventWizard::new();
//! wizard.apply(FieldChange::Title("Orientation".into()));
//! wizard.advance();
//!
//! assert_eq!(wizard.active_step(), Step::DateTime);
//! assert!(!wizard.is_first_step());
//! ```
//!
//! ## Modules
//!
//! - [`step`] - The ordered step enum
//! - [`state`] - Form record, patches and update helpers
//! - [`change`] - Field-level change events
//! - [`sections`] - Per-step state slices for rendering
//! - [`navigation`] - Step cursor and button affordances
//! - [`wizard`] - Session object tying state and cursor together
//! - [`schedule`] - Duration derived from the schedule fields
//! - [`attachment`] - Opaque file handles
//! - [`submit`] - Snapshot and submission seam
//! - [`config`] - Option catalogues
//! - [`errors`] - Structured error types

pub mod attachment;
pub mod change;
pub mod config;
pub mod errors;
pub mod navigation;
pub mod schedule;
pub mod sections;
pub mod state;
pub mod step;
pub mod submit;
pub mod wizard;

// Re-export commonly used types at crate root for convenience
pub use attachment::{Attachment, AttachmentHandle};
pub use change::FieldChange;
pub use config::WizardConfig;
pub use errors::{WizardError, WizardResult};
pub use navigation::{ForwardAction, NavControls, Navigator};
pub use sections::StepSection;
pub use state::{EventPatch, GenderKey, GenderRestriction, LocationType, WizardState};
pub use step::Step;
pub use submit::{EventSnapshot, JsonSubmitter, LogSubmitter, Submitter};
pub use wizard::EventWizard;
