//! End-to-end wizard sessions driven the way a front end drives them.

use std::sync::Arc;

use event_core::{
    Attachment, EventWizard, FieldChange, ForwardAction, GenderKey, JsonSubmitter, LocationType,
    Step, WizardError, WizardState,
};

#[test]
fn orientation_scenario_submits_title_and_defaults() {
    let mut wizard = EventWizard::new();
    wizard.apply(FieldChange::Title("Orientation".into()));

    for _ in 0..4 {
        assert!(wizard.advance());
    }

    assert_eq!(wizard.active_step(), Step::Additional);
    assert!(wizard.is_last_step());
    assert!(!wizard.is_first_step());

    let mut submitter = JsonSubmitter::new(Vec::new());
    let snapshot = wizard.submit(&mut submitter).unwrap();

    let expected = WizardState {
        title: "Orientation".into(),
        ..WizardState::default()
    };
    assert_eq!(snapshot.event, expected);

    let written = String::from_utf8(submitter.into_inner()).unwrap();
    assert!(written.contains("\"title\": \"Orientation\""));
    assert!(written.contains("\"participationType\": \"yes\""));
}

#[test]
fn extra_advance_on_last_step_changes_nothing() {
    let mut wizard = EventWizard::new();
    while wizard.advance() {}
    let before = wizard.clone();

    assert!(!wizard.advance());
    assert_eq!(wizard, before);
}

#[test]
fn retreat_on_first_step_changes_nothing() {
    let mut wizard = EventWizard::new();
    let before = wizard.clone();

    assert!(!wizard.retreat());
    assert_eq!(wizard, before);
}

#[test]
fn full_form_walkthrough() {
    let mut wizard = EventWizard::new();

    // Details
    assert!(!wizard.controls().show_back);
    wizard.apply(FieldChange::Title("Research Symposium".into()));
    wizard.apply(FieldChange::Category("Conference".into()));
    wizard.apply(FieldChange::StaffId("S-1042".into()));
    wizard.apply(FieldChange::Presenter("Prof. Haddad".into()));
    wizard.advance();

    // Date & time
    wizard.apply(FieldChange::StartDate("2025-10-03".into()));
    wizard.apply(FieldChange::StartTime("09:00".into()));
    wizard.apply(FieldChange::EndTime("16:30".into()));
    let duration = wizard.state().computed_duration().unwrap();
    wizard.apply(FieldChange::Duration(duration));
    wizard.advance();

    // Location
    wizard.apply(FieldChange::LocationType(LocationType::OutCampus));
    wizard.advance();

    // Participation
    wizard.apply(FieldChange::MaxParticipants("120".into()));
    wizard.apply(FieldChange::GenderRestriction { gender: GenderKey::Male, value: true });
    wizard.apply(FieldChange::GenderRestriction { gender: GenderKey::Female, value: true });
    wizard.advance();

    // Additional
    assert_eq!(wizard.controls().forward, ForwardAction::Submit);
    wizard.apply(FieldChange::AddObjective("Share findings".into()));
    wizard.apply(FieldChange::AddObjective("Find collaborators".into()));
    wizard.apply(FieldChange::AddObjective("Typo".into()));
    wizard.apply(FieldChange::RemoveObjective(2));
    wizard.apply(FieldChange::RemoveObjective(9));
    wizard.apply(FieldChange::AddAttachments(vec![
        Arc::new(Attachment::new("program.pdf", "/srv/program.pdf", 2048)),
        Arc::new(Attachment::new("map.png", "/srv/map.png", 4096)),
    ]));
    wizard.apply(FieldChange::RemoveAttachment(0));
    wizard.apply(FieldChange::Notes("Lunch provided".into()));

    let mut submitter = JsonSubmitter::new(Vec::new());
    let event = wizard.submit(&mut submitter).unwrap().event;

    assert_eq!(event.title, "Research Symposium");
    assert_eq!(event.duration, "7h 30m");
    assert_eq!(event.location_type, LocationType::OutCampus);
    assert!(event.gender_restriction.male && event.gender_restriction.female);
    assert_eq!(event.objectives, vec!["Share findings", "Find collaborators"]);
    assert_eq!(event.attachments.len(), 1);
    assert_eq!(event.attachments[0].name, "map.png");
    assert_eq!(event.notes, "Lunch provided");
}

#[test]
fn submit_before_last_step_is_rejected() {
    let mut wizard = EventWizard::new();
    wizard.advance();
    let mut submitter = JsonSubmitter::new(Vec::new());

    let err = wizard.submit(&mut submitter).unwrap_err();
    assert_eq!(err, WizardError::SubmitUnavailable { step: "datetime".into() });
    assert!(submitter.into_inner().is_empty());
}
