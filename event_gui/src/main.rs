//! # Event Wizard GUI Application
//!
//! Desktop front end for the "Create New Event" wizard, built with Iced.
//! All form state lives in an [`EventWizard`]; this crate only turns widget
//! events into [`FieldChange`] values and renders the active step.
//!
//! ## Configuration
//!
//! Set `EVENT_WIZARD_CONFIG` to a TOML file to override the picker options.
//! Log verbosity follows `RUST_LOG` (default `info`).

mod ui;

use std::path::PathBuf;

use iced::widget::{column, rule};
use iced::{Element, Task};
use tracing_subscriber::EnvFilter;

use event_core::{Attachment, EventWizard, FieldChange, LogSubmitter, WizardConfig};

/// Application state
pub struct App {
    /// Picker options
    config: WizardConfig,
    /// Current form session
    wizard: EventWizard,
    /// Objective being typed before it is added to the list
    objective_draft: String,
    /// Submission collaborator
    submitter: LogSubmitter,
    /// Status bar text
    status: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A step collaborator edited a field
    Field(FieldChange),
    ObjectiveDraftChanged(String),
    AddObjectiveDraft,
    PickAttachments,
    AttachmentsPicked(Vec<PathBuf>),
    Next,
    Back,
    Submit,
}

impl App {
    fn new(config: WizardConfig) -> Self {
        App {
            wizard: EventWizard::with_config(&config),
            config,
            objective_draft: String::new(),
            submitter: LogSubmitter::new(),
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        let title = &self.wizard.state().title;
        if title.is_empty() {
            "Create New Event".to_string()
        } else {
            format!("Create New Event - {}", title)
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Field(change) => {
                let reschedule = change.affects_schedule();
                self.wizard.apply(change);
                if reschedule {
                    self.sync_duration();
                }
            }
            Message::ObjectiveDraftChanged(value) => {
                self.objective_draft = value;
            }
            Message::AddObjectiveDraft => {
                let objective = self.objective_draft.trim().to_string();
                if !objective.is_empty() {
                    self.wizard.apply(FieldChange::AddObjective(objective));
                    self.objective_draft.clear();
                }
            }
            Message::PickAttachments => {
                return Task::perform(pick_files(), Message::AttachmentsPicked);
            }
            Message::AttachmentsPicked(paths) => {
                if !paths.is_empty() {
                    self.attach(paths);
                }
            }
            Message::Next => {
                self.wizard.advance();
            }
            Message::Back => {
                self.wizard.retreat();
            }
            Message::Submit => self.submit(),
        }
        Task::none()
    }

    /// Keep the duration field in step with the schedule the user entered
    fn sync_duration(&mut self) {
        if let Some(duration) = self.wizard.state().computed_duration() {
            if duration != self.wizard.state().duration {
                self.wizard.apply(FieldChange::Duration(duration));
            }
        }
    }

    fn attach(&mut self, paths: Vec<PathBuf>) {
        match Attachment::batch_from_paths(&paths) {
            Ok(batch) => {
                self.status = format!("Attached {} file(s)", batch.len());
                self.wizard.apply(FieldChange::AddAttachments(batch));
            }
            Err(e) => {
                tracing::warn!(error = %e, "attachment rejected");
                self.status = e.to_string();
            }
        }
    }

    fn submit(&mut self) {
        match self.wizard.submit(&mut self.submitter) {
            Ok(snapshot) => {
                self.status = format!("Event '{}' created", snapshot.event.title);
                self.wizard = EventWizard::with_config(&self.config);
                self.objective_draft.clear();
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), error = %e, "submission failed");
                self.status = e.to_string();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_header(),
            ui::tab_bar::view_tab_bar(self.wizard.navigator()),
            rule::horizontal(1),
            ui::step_panel::view_step_panel(self),
            rule::horizontal(1),
            ui::nav_bar::view_nav_bar(self.wizard.controls()),
            ui::status_bar::view_status_bar(self.wizard.navigator(), &self.status),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }
}

/// Native multi-file picker; an empty list when the user cancels
async fn pick_files() -> Vec<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Attach files")
        .pick_files()
        .await
        .map(|files| files.iter().map(|f| f.path().to_path_buf()).collect())
        .unwrap_or_default()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = match WizardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load config, using built-in options");
            WizardConfig::default()
        }
    };

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .window_size((880.0, 660.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_core::Step;

    fn app() -> App {
        App::new(WizardConfig::default())
    }

    #[test]
    fn test_schedule_edit_fills_duration() {
        let mut app = app();
        let _ = app.update(Message::Field(FieldChange::StartDate("2025-09-01".into())));
        let _ = app.update(Message::Field(FieldChange::StartTime("10:00".into())));
        let _ = app.update(Message::Field(FieldChange::EndTime("12:00".into())));
        assert_eq!(app.wizard.state().duration, "2h");
    }

    #[test]
    fn test_objective_draft_is_trimmed_and_cleared() {
        let mut app = app();
        let _ = app.update(Message::ObjectiveDraftChanged("  Meet mentors ".into()));
        let _ = app.update(Message::AddObjectiveDraft);
        assert_eq!(app.wizard.state().objectives, vec!["Meet mentors"]);
        assert!(app.objective_draft.is_empty());

        let _ = app.update(Message::AddObjectiveDraft);
        assert_eq!(app.wizard.state().objectives.len(), 1);
    }

    #[test]
    fn test_submit_resets_session() {
        let mut app = app();
        let _ = app.update(Message::Field(FieldChange::Title("Orientation".into())));
        for _ in 0..4 {
            let _ = app.update(Message::Next);
        }
        assert_eq!(app.wizard.active_step(), Step::Additional);

        let _ = app.update(Message::Submit);
        assert_eq!(app.submitter.submitted(), 1);
        assert_eq!(app.wizard.active_step(), Step::Details);
        assert!(app.wizard.state().title.is_empty());
        assert!(app.status.contains("Orientation"));
    }

    #[test]
    fn test_missing_attachment_reports_status() {
        let mut app = app();
        let _ = app.update(Message::AttachmentsPicked(vec![PathBuf::from(
            "/nonexistent/event_wizard/agenda.pdf",
        )]));
        assert!(app.wizard.state().attachments.is_empty());
        assert!(app.status.starts_with("File error"));
    }
}
