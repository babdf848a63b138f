//! Interactive prompt walk
//!
//! One prompt function per step, each turning answers into `FieldChange`s.
//! An empty answer keeps the value shown in brackets.

use std::io::{BufRead, Write};
use std::sync::Arc;

use event_core::sections::{AdditionalView, BasicDetailsView, DateTimeView, LocationView, ParticipationView};
use event_core::{
    Attachment, EventSnapshot, EventWizard, FieldChange, ForwardAction, GenderKey, LocationType,
    Step, StepSection, Submitter, WizardConfig, WizardResult,
};

/// What the user chose at the bottom of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavChoice {
    Forward,
    Back,
    Quit,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    eof: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            eof: false,
        }
    }

    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
    }

    fn read_answer(&mut self) -> Option<String> {
        if self.eof || self.output.flush().is_err() {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.eof = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Ask for text; empty input (or end of input) keeps `current`
    fn ask(&mut self, label: &str, current: &str) -> String {
        let _ = write!(self.output, "{} [{}]: ", label, current);
        match self.read_answer() {
            Some(answer) if !answer.is_empty() => answer,
            _ => current.to_string(),
        }
    }

    fn ask_yes_no(&mut self, label: &str, current: bool) -> bool {
        let shown = if current { "y" } else { "n" };
        match self.ask(label, shown).to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => current,
        }
    }

    /// Pick from a numbered list; free text is accepted as-is
    fn choose(&mut self, label: &str, options: &[String], current: &str) -> String {
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, option));
        }
        let answer = self.ask(label, current);
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
            _ => answer,
        }
    }

    /// 1-based position to remove, or `None` for a blank answer
    fn ask_removal(&mut self, label: &str) -> Option<usize> {
        let answer = self.ask(label, "");
        answer.parse::<usize>().ok().filter(|n| *n > 0).map(|n| n - 1)
    }

    fn details(&mut self, view: BasicDetailsView<'_>, config: &WizardConfig) -> Vec<FieldChange> {
        vec![
            FieldChange::Title(self.ask("Title", view.title)),
            FieldChange::Description(self.ask("Description", view.description)),
            FieldChange::Category(self.choose("Category", &config.categories, view.category)),
            FieldChange::StaffId(self.ask("Staff ID", view.staff_id)),
            FieldChange::Presenter(self.ask("Presenter", view.presenter)),
        ]
    }

    fn schedule(&mut self, view: DateTimeView<'_>) -> Vec<FieldChange> {
        vec![
            FieldChange::StartDate(self.ask("Start date (YYYY-MM-DD)", view.start_date)),
            FieldChange::EndDate(self.ask("End date (YYYY-MM-DD)", view.end_date)),
            FieldChange::StartTime(self.ask("Start time (HH:MM)", view.start_time)),
            FieldChange::EndTime(self.ask("End time (HH:MM)", view.end_time)),
        ]
    }

    fn location(&mut self, view: LocationView<'_>, config: &WizardConfig) -> Vec<FieldChange> {
        let location_type = loop {
            let answer = self.ask("Location type (in-campus/out-campus)", view.location_type.code());
            match answer.parse::<LocationType>() {
                Ok(kind) => break kind,
                Err(e) if !self.eof => self.say(&e.to_string()),
                Err(_) => break view.location_type,
            }
        };

        let hall = if location_type.uses_hall() {
            self.choose("Hall", &config.halls, view.selected_hall)
        } else {
            self.ask("Venue", view.selected_hall)
        };

        vec![
            FieldChange::LocationType(location_type),
            FieldChange::SelectedHall(hall),
        ]
    }

    fn participation(&mut self, view: ParticipationView<'_>, config: &WizardConfig) -> Vec<FieldChange> {
        let mut changes = vec![
            FieldChange::MaxParticipants(self.ask("Max participants", view.max_participants)),
            FieldChange::ParticipationType(self.choose(
                "Participation type",
                &config.participation_types,
                view.participation_type,
            )),
            FieldChange::TargetAudience(self.choose(
                "Target audience",
                &config.target_audiences,
                view.target_audience,
            )),
        ];
        for key in GenderKey::ALL {
            let label = format!("Restrict to {}? (y/n)", key.display_name().to_lowercase());
            let value = self.ask_yes_no(&label, view.gender_restriction.get(key));
            changes.push(FieldChange::GenderRestriction { gender: key, value });
        }
        changes
    }

    fn additional(&mut self, view: AdditionalView<'_>) -> Vec<FieldChange> {
        let mut changes = Vec::new();

        for (i, objective) in view.objectives.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, objective));
        }
        if !view.objectives.is_empty() {
            if let Some(index) = self.ask_removal("Remove objective number (blank to keep all)") {
                changes.push(FieldChange::RemoveObjective(index));
            }
        }
        loop {
            let objective = self.ask("Add objective (blank to finish)", "");
            if objective.is_empty() {
                break;
            }
            changes.push(FieldChange::AddObjective(objective));
        }

        for (i, attachment) in view.attachments.iter().enumerate() {
            self.say(&format!("  {}. {} ({})", i + 1, attachment.name, attachment.size_display()));
        }
        if !view.attachments.is_empty() {
            if let Some(index) = self.ask_removal("Remove attachment number (blank to keep all)") {
                changes.push(FieldChange::RemoveAttachment(index));
            }
        }
        loop {
            let path = self.ask("Attach file path (blank to finish)", "");
            if path.is_empty() {
                break;
            }
            match Attachment::from_path(&path) {
                Ok(attachment) => changes.push(FieldChange::AddAttachments(vec![Arc::new(attachment)])),
                Err(e) => self.say(&format!("  {}", e)),
            }
        }

        changes.push(FieldChange::Notes(self.ask("Notes", view.notes)));
        changes
    }

    /// Prompt for every field of the active step
    fn fill_step(&mut self, wizard: &mut EventWizard, config: &WizardConfig) {
        let changes = match wizard.section() {
            StepSection::Details(view) => self.details(view, config),
            StepSection::DateTime(view) => self.schedule(view),
            StepSection::Location(view) => self.location(view, config),
            StepSection::Participation(view) => self.participation(view, config),
            StepSection::Additional(view) => self.additional(view),
        };
        for change in changes {
            wizard.apply(change);
        }

        if wizard.active_step() == Step::DateTime {
            let state = wizard.state();
            let suggested = state.computed_duration().unwrap_or_else(|| state.duration.clone());
            let duration = self.ask("Duration", &suggested);
            wizard.apply(FieldChange::Duration(duration));
        }
    }

    fn navigate(&mut self, wizard: &EventWizard) -> NavChoice {
        let controls = wizard.controls();
        let forward = controls.forward.label();
        let hint = if controls.show_back {
            format!("[Enter] {}, [b]ack, [q]uit", forward)
        } else {
            format!("[Enter] {}, [q]uit", forward)
        };
        let _ = write!(self.output, "{}: ", hint);

        match self.read_answer().as_deref().map(str::to_lowercase).as_deref() {
            None | Some("q") | Some("quit") => NavChoice::Quit,
            Some("b") | Some("back") => NavChoice::Back,
            _ => NavChoice::Forward,
        }
    }

    /// Walk the wizard until the user submits or quits.
    ///
    /// Returns the submitted snapshot, or `None` when the user quit.
    pub fn run<S: Submitter>(
        &mut self,
        wizard: &mut EventWizard,
        config: &WizardConfig,
        submitter: &mut S,
    ) -> WizardResult<Option<EventSnapshot>> {
        self.say("Create New Event");
        self.say("================");

        loop {
            let step = wizard.active_step();
            self.say("");
            self.say(&format!(
                "Step {} of {}: {} - {}",
                step.index() + 1,
                Step::ALL.len(),
                step.label(),
                step.description()
            ));

            self.fill_step(wizard, config);

            match self.navigate(wizard) {
                NavChoice::Quit => return Ok(None),
                NavChoice::Back => {
                    wizard.retreat();
                }
                NavChoice::Forward => match wizard.controls().forward {
                    ForwardAction::Next => {
                        wizard.advance();
                    }
                    ForwardAction::Submit => {
                        let snapshot = wizard.submit(submitter)?;
                        self.say(&format!("Event '{}' created.", snapshot.event.title));
                        return Ok(Some(snapshot));
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_core::JsonSubmitter;
    use std::io::Cursor;

    /// Answers for a full walk: details, schedule, location, participation, additional
    fn full_walk_input() -> String {
        [
            // Details
            "Orientation", "Welcome for new students", "1", "S-100", "Dr. Amal", "",
            // Date & time
            "2025-09-01", "", "09:00", "11:30", "", "",
            // Location
            "moon", "in-campus", "2", "",
            // Participation
            "150", "", "3", "n", "y", "",
            // Additional
            "Meet mentors", "Campus tour", "", "", "Bring student ID", "",
        ]
        .join("\n")
            + "\n"
    }

    #[test]
    fn test_full_walk_submits() {
        let config = WizardConfig::default();
        let mut wizard = EventWizard::with_config(&config);
        let mut submitter = JsonSubmitter::new(Vec::new());
        let mut output = Vec::new();

        let snapshot = Prompter::new(Cursor::new(full_walk_input()), &mut output)
            .run(&mut wizard, &config, &mut submitter)
            .unwrap()
            .unwrap();

        let event = snapshot.event;
        assert_eq!(event.title, "Orientation");
        assert_eq!(event.category, config.categories[0]);
        assert_eq!(event.duration, "2h 30m");
        assert_eq!(event.location_type, LocationType::InCampus);
        assert_eq!(event.selected_hall, config.halls[1]);
        assert_eq!(event.participation_type, "yes");
        assert_eq!(event.target_audience, config.target_audiences[2]);
        assert!(!event.gender_restriction.male);
        assert!(event.gender_restriction.female);
        assert_eq!(event.objectives, vec!["Meet mentors", "Campus tour"]);
        assert_eq!(event.notes, "Bring student ID");

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Invalid input for 'locationType'"));
        assert!(transcript.contains("Step 5 of 5: Additional Info"));
    }

    #[test]
    fn test_quit_submits_nothing() {
        let config = WizardConfig::default();
        let mut wizard = EventWizard::new();
        let mut submitter = JsonSubmitter::new(Vec::new());
        let input = "Draft\n\n\n\n\nq\n";

        let result = Prompter::new(Cursor::new(input), Vec::new())
            .run(&mut wizard, &config, &mut submitter)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(wizard.state().title, "Draft");
        assert!(submitter.into_inner().is_empty());
    }

    #[test]
    fn test_back_keeps_answers() {
        let config = WizardConfig::default();
        let mut wizard = EventWizard::new();
        let mut submitter = JsonSubmitter::new(Vec::new());
        // Details, next, schedule, back, details again (keep all), quit
        let input = "Orientation\n\n\n\n\n\n2025-09-01\n\n\n\n\nb\n\n\n\n\n\nq\n";

        Prompter::new(Cursor::new(input), Vec::new())
            .run(&mut wizard, &config, &mut submitter)
            .unwrap();

        assert_eq!(wizard.active_step(), Step::Details);
        assert_eq!(wizard.state().title, "Orientation");
        assert_eq!(wizard.state().start_date, "2025-09-01");
    }

    #[test]
    fn test_end_of_input_quits() {
        let config = WizardConfig::default();
        let mut wizard = EventWizard::new();
        let mut submitter = JsonSubmitter::new(Vec::new());

        let result = Prompter::new(Cursor::new(""), Vec::new())
            .run(&mut wizard, &config, &mut submitter)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(wizard.state(), EventWizard::new().state());
    }
}
