use crossterm::event::KeyCode;
use serde_json::json;

use interview_cli::api::FeedbackResult;
use interview_cli::tui::wizard::{
    Command, Focus, JOB_ROLES, Msg, NoticeKind, Panel, WizardState, update,
};

/// Feed a string through the focused input, one key at a time.
fn type_str(state: &mut WizardState, text: &str) {
    for c in text.chars() {
        update(state, Msg::Input(KeyCode::Char(c)));
    }
}

fn fill_personal(state: &mut WizardState) {
    state.focus = Focus::Name;
    type_str(state, "Jane Doe");
    state.focus = Focus::Qualification;
    type_str(state, "BSc CS");
    state.focus = Focus::Skills;
    type_str(state, "Python, SQL");

    let analyst = JOB_ROLES
        .iter()
        .position(|role| *role == "Analyst")
        .expect("Analyst must be an available role");
    state.job_role.select(analyst);
}

fn fill_answers(state: &mut WizardState) {
    for (index, answer) in ["5 years", "Teamwork", "Growth"].iter().enumerate() {
        state.focus = Focus::Answer(index);
        type_str(state, answer);
    }
}

fn sample_feedback() -> FeedbackResult {
    FeedbackResult {
        technical_strengths: "Strong".to_string(),
        weaknesses: "None".to_string(),
        communication: "Good".to_string(),
        recommendation: "Proceed".to_string(),
        decision: "Hire".to_string(),
    }
}

#[test]
fn empty_personal_panel_never_transitions() {
    let mut state = WizardState::new();
    let command = update(&mut state, Msg::StartInterview);

    assert_eq!(command, Command::None);
    assert_eq!(state.panel, Panel::Personal);
    let notice = state.notice.expect("validation failure must raise a notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please fill in all fields.");
}

#[test]
fn any_blank_personal_field_blocks_the_transition() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    state.skills.clear();

    update(&mut state, Msg::StartInterview);
    assert_eq!(state.panel, Panel::Personal);
    assert!(state.notice.is_some());
}

#[test]
fn whitespace_only_fields_do_not_validate() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    state.name.set_value("   ");

    update(&mut state, Msg::StartInterview);
    assert_eq!(state.panel, Panel::Personal);
}

#[test]
fn unselected_job_role_blocks_the_transition() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    state.job_role.clear();

    update(&mut state, Msg::StartInterview);
    assert_eq!(state.panel, Panel::Personal);
}

#[test]
fn complete_personal_panel_moves_to_questions() {
    let mut state = WizardState::new();
    fill_personal(&mut state);

    update(&mut state, Msg::StartInterview);
    assert_eq!(state.panel, Panel::Questions);
    assert!(state.notice.is_none());
    assert_eq!(state.focus, Focus::Answer(0));
}

#[test]
fn blank_answer_never_submits() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);

    state.focus = Focus::Answer(0);
    type_str(&mut state, "5 years");
    state.focus = Focus::Answer(1);
    type_str(&mut state, "Teamwork");

    let command = update(&mut state, Msg::FinishInterview);
    assert_eq!(command, Command::None);
    assert_eq!(state.panel, Panel::Questions);
    assert!(!state.submitting);
    let notice = state.notice.expect("validation failure must raise a notice");
    assert_eq!(notice.message, "Please answer all questions.");
}

#[test]
fn submission_body_matches_the_service_contract() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);
    fill_answers(&mut state);

    let command = update(&mut state, Msg::FinishInterview);
    let Command::Submit(request) = command else {
        panic!("expected a submit command, got {command:?}");
    };

    assert!(state.submitting);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "Jane Doe",
            "qualification": "BSc CS",
            "skills": "Python, SQL",
            "jobRole": "Analyst",
            "answers": { "q1": "5 years", "q2": "Teamwork", "q3": "Growth" }
        })
    );
}

#[test]
fn duplicate_finish_while_in_flight_is_ignored() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);
    fill_answers(&mut state);

    let first = update(&mut state, Msg::FinishInterview);
    assert!(matches!(first, Command::Submit(_)));

    let second = update(&mut state, Msg::FinishInterview);
    assert_eq!(second, Command::None);
}

#[test]
fn successful_response_shows_the_feedback_panel() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);
    fill_answers(&mut state);
    update(&mut state, Msg::FinishInterview);

    update(&mut state, Msg::SubmitSucceeded(sample_feedback()));

    assert_eq!(state.panel, Panel::Feedback);
    assert!(!state.submitting);
    let view = state.feedback.expect("feedback must be stored for rendering");
    assert_eq!(view.profile.name, "Jane Doe");
    assert_eq!(view.feedback.decision, "Hire");
}

#[test]
fn failed_submission_stays_on_questions_and_reenables_finish() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);
    fill_answers(&mut state);
    update(&mut state, Msg::FinishInterview);
    assert!(state.submitting);

    update(
        &mut state,
        Msg::SubmitFailed("connection refused".to_string()),
    );

    assert_eq!(state.panel, Panel::Questions);
    assert!(!state.submitting, "finish control must be re-enabled");
    assert!(state.feedback.is_none());
    let notice = state.notice.expect("request failure must raise a notice");
    assert_eq!(notice.kind, NoticeKind::Error);

    // The control works again after the failure.
    state.notice = None;
    let retry = update(&mut state, Msg::FinishInterview);
    assert!(matches!(retry, Command::Submit(_)));
}

#[test]
fn back_returns_to_personal_without_validation() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);

    update(&mut state, Msg::BackToPersonal);
    assert_eq!(state.panel, Panel::Personal);
    assert_eq!(state.name.value(), "Jane Doe");
}

#[test]
fn reset_from_feedback_clears_fields_and_returns_to_personal() {
    let mut state = WizardState::new();
    fill_personal(&mut state);
    update(&mut state, Msg::StartInterview);
    fill_answers(&mut state);
    update(&mut state, Msg::FinishInterview);
    update(&mut state, Msg::SubmitSucceeded(sample_feedback()));
    assert_eq!(state.panel, Panel::Feedback);

    update(&mut state, Msg::Reset);

    assert_eq!(state.panel, Panel::Personal);
    assert_eq!(state.focus, Focus::Name);
    assert_eq!(state.name.value(), "");
    assert_eq!(state.qualification.value(), "");
    assert_eq!(state.skills.value(), "");
    assert_eq!(state.job_role.value(), None);
    for answer in &state.answers {
        assert_eq!(answer.value(), "");
    }
    // Already-rendered feedback is retained until the next render.
    assert!(state.feedback.is_some());
}
