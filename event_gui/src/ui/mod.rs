//! UI module for the event wizard GUI
//!
//! # Layout
//! - `toolbar` - Window header
//! - `tab_bar` - Step tabs with progress
//! - `step_panel` - Center panel: dispatches to the active step's editor
//! - `nav_bar` - Back / Next / Create Event buttons
//! - `status_bar` - Bottom status messages
//!
//! # Step Editors
//! - `basic_details` - Title, description, category, staff, presenter
//! - `date_time` - Dates, times, duration
//! - `location` - On/off campus and hall
//! - `participation` - Capacity, type, audience, gender restriction
//! - `objectives`, `attachments`, `notes` - The additional-info step
//!
//! # Shared Components
//! - `shared` - Labeled inputs and pickers

// Top-level panels
pub mod toolbar;
pub mod tab_bar;
pub mod step_panel;
pub mod nav_bar;
pub mod status_bar;

// Step editors
pub mod basic_details;
pub mod date_time;
pub mod location;
pub mod participation;
pub mod objectives;
pub mod attachments;
pub mod notes;

// Shared components
pub mod shared;
