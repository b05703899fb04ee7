//! The interview wizard state machine.
//!
//! State lives in [`WizardState`], events arrive as [`Msg`] values, and
//! [`update`] folds a message into the state, returning a [`Command`] for
//! any effect the runtime has to execute. Rendering is in
//! [`crate::tui::view`]; nothing here touches the terminal, which keeps
//! the whole flow testable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{AnswerSet, CandidateProfile, FeedbackResult, InterviewRequest};
use crate::tui::widgets::{SelectState, TextInputState};

/// The three mutually-exclusive panels of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Personal,
    Questions,
    Feedback,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Personal => "Candidate Details",
            Panel::Questions => "Interview Questions",
            Panel::Feedback => "Interview Feedback",
        }
    }
}

/// An interview question shown on the second panel.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
}

pub const QUESTIONS: [Question; 3] = [
    Question {
        id: "q1",
        prompt: "How many years of professional experience do you have, and in which areas?",
    },
    Question {
        id: "q2",
        prompt: "Describe a key project you have worked on and your role in it.",
    },
    Question {
        id: "q3",
        prompt: "Tell us about a challenging situation at work and how you handled it.",
    },
];

/// Open roles a candidate can apply for.
pub const JOB_ROLES: &[&str] = &[
    "Software Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Data Scientist",
    "Analyst",
    "DevOps Engineer",
];

/// Ticks the entrance highlight stays lit after a panel switch.
const ENTRANCE_TICKS: u8 = 5;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A modal notice. The runtime routes the next key press to
/// [`Msg::DismissNotice`] while one is showing, so it behaves like a
/// blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Focusable controls, identified per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Qualification,
    Skills,
    JobRole,
    Start,
    Answer(usize),
    Back,
    Finish,
    Reset,
}

/// Traversal order of the focusable controls on each panel.
pub fn focus_ring(panel: Panel) -> &'static [Focus] {
    match panel {
        Panel::Personal => &[
            Focus::Name,
            Focus::Qualification,
            Focus::Skills,
            Focus::JobRole,
            Focus::Start,
        ],
        Panel::Questions => &[
            Focus::Answer(0),
            Focus::Answer(1),
            Focus::Answer(2),
            Focus::Back,
            Focus::Finish,
        ],
        Panel::Feedback => &[Focus::Reset],
    }
}

/// Snapshot rendered on the feedback panel.
///
/// Survives a reset: the rendered feedback stays visible data until the
/// next successful submission replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub profile: CandidateProfile,
    pub feedback: FeedbackResult,
}

#[derive(Debug, Clone)]
pub enum Msg {
    /// Key routed to the focused widget.
    Input(KeyCode),
    FocusNext,
    FocusPrevious,
    StartInterview,
    BackToPersonal,
    FinishInterview,
    SubmitSucceeded(FeedbackResult),
    SubmitFailed(String),
    Reset,
    DismissNotice,
    Tick,
    Quit,
}

/// Effects requested by [`update`] and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Submit(InterviewRequest),
    Quit,
}

pub struct WizardState {
    pub panel: Panel,
    pub focus: Focus,
    /// Entrance highlight countdown, armed on every panel switch.
    pub entrance: u8,
    pub spinner_frame: usize,
    pub name: TextInputState,
    pub qualification: TextInputState,
    pub skills: TextInputState,
    pub job_role: SelectState,
    pub answers: [TextInputState; 3],
    pub submitting: bool,
    /// Profile captured when the submission was fired, so the feedback
    /// panel shows what was actually sent.
    pub submitted_profile: Option<CandidateProfile>,
    pub notice: Option<Notice>,
    pub feedback: Option<FeedbackView>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            panel: Panel::Personal,
            focus: Focus::Name,
            entrance: ENTRANCE_TICKS,
            spinner_frame: 0,
            name: TextInputState::new(),
            qualification: TextInputState::new(),
            skills: TextInputState::new(),
            job_role: SelectState::new(JOB_ROLES),
            answers: [
                TextInputState::new(),
                TextInputState::new(),
                TextInputState::new(),
            ],
            submitting: false,
            submitted_profile: None,
            notice: None,
            feedback: None,
        }
    }

    /// Switch the visible panel, arming the entrance highlight and moving
    /// focus to the panel's first control.
    pub fn show_panel(&mut self, panel: Panel) {
        self.panel = panel;
        self.focus = focus_ring(panel)[0];
        self.entrance = ENTRANCE_TICKS;
    }

    pub fn profile(&self) -> CandidateProfile {
        CandidateProfile {
            name: self.name.value().to_string(),
            qualification: self.qualification.value().to_string(),
            skills: self.skills.value().to_string(),
            job_role: self.job_role.value().unwrap_or_default().to_string(),
        }
    }

    pub fn answer_set(&self) -> AnswerSet {
        AnswerSet {
            q1: self.answers[0].value().to_string(),
            q2: self.answers[1].value().to_string(),
            q3: self.answers[2].value().to_string(),
        }
    }

    pub fn request(&self) -> InterviewRequest {
        InterviewRequest {
            profile: self.profile(),
            answers: self.answer_set(),
        }
    }

    /// True iff name, qualification and skills are non-blank and a job
    /// role is selected. Raises the blocking notice on failure.
    fn validate_personal(&mut self) -> bool {
        let complete = !self.name.is_blank()
            && !self.qualification.is_blank()
            && !self.skills.is_blank()
            && self.job_role.value().is_some();

        if !complete {
            self.notice = Some(Notice::error("Please fill in all fields."));
        }
        complete
    }

    /// True iff all three answers are non-blank. Same failure signaling.
    fn validate_answers(&mut self) -> bool {
        let complete = self.answers.iter().all(|answer| !answer.is_blank());

        if !complete {
            self.notice = Some(Notice::error("Please answer all questions."));
        }
        complete
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Qualification => Some(&mut self.qualification),
            Focus::Skills => Some(&mut self.skills),
            Focus::Answer(index) => self.answers.get_mut(index),
            _ => None,
        }
    }

    fn move_focus(&mut self, offset: isize) {
        let ring = focus_ring(self.panel);
        let current = ring
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(ring.len() as isize) as usize;
        self.focus = ring[next];
    }
}

/// Map a raw key event to a wizard message.
///
/// While a notice is showing every key dismisses it, like a modal alert.
/// Enter activates the focused control; on plain inputs it advances focus.
pub fn key_to_msg(state: &WizardState, key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Msg::Quit),
            _ => None,
        };
    }

    if state.notice.is_some() {
        return Some(Msg::DismissNotice);
    }

    match key.code {
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Msg::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Msg::FocusPrevious),
        KeyCode::Enter => Some(match state.focus {
            Focus::Start => Msg::StartInterview,
            Focus::Back => Msg::BackToPersonal,
            Focus::Finish => Msg::FinishInterview,
            Focus::Reset => Msg::Reset,
            _ => Msg::FocusNext,
        }),
        code => Some(Msg::Input(code)),
    }
}

pub fn update(state: &mut WizardState, msg: Msg) -> Command {
    match msg {
        Msg::Input(key) => {
            if state.focus == Focus::JobRole {
                state.job_role.handle_key(key);
            } else if let Some(input) = state.focused_input_mut() {
                input.handle_key(key);
            }
            Command::None
        }
        Msg::FocusNext => {
            state.move_focus(1);
            Command::None
        }
        Msg::FocusPrevious => {
            state.move_focus(-1);
            Command::None
        }
        Msg::StartInterview => {
            if state.validate_personal() {
                log::info!("Candidate details complete, moving to questions");
                state.show_panel(Panel::Questions);
            }
            Command::None
        }
        Msg::BackToPersonal => {
            state.show_panel(Panel::Personal);
            Command::None
        }
        Msg::FinishInterview => {
            // The finish control is disabled while a submission is in
            // flight; a repeated activation is a no-op.
            if state.submitting {
                return Command::None;
            }
            if !state.validate_answers() {
                return Command::None;
            }
            let request = state.request();
            state.submitting = true;
            state.submitted_profile = Some(request.profile.clone());
            Command::Submit(request)
        }
        Msg::SubmitSucceeded(feedback) => {
            state.submitting = false;
            let profile = state
                .submitted_profile
                .take()
                .unwrap_or_else(|| state.profile());
            state.feedback = Some(FeedbackView { profile, feedback });
            state.show_panel(Panel::Feedback);
            Command::None
        }
        Msg::SubmitFailed(reason) => {
            state.submitting = false;
            state.submitted_profile = None;
            log::error!("Interview submission failed: {reason}");
            state.notice = Some(Notice::error("Error processing interview. Please try again."));
            Command::None
        }
        Msg::Reset => {
            state.name.clear();
            state.qualification.clear();
            state.skills.clear();
            state.job_role.clear();
            for answer in &mut state.answers {
                answer.clear();
            }
            state.show_panel(Panel::Personal);
            Command::None
        }
        Msg::DismissNotice => {
            state.notice = None;
            Command::None
        }
        Msg::Tick => {
            state.entrance = state.entrance.saturating_sub(1);
            if state.submitting {
                state.spinner_frame = (state.spinner_frame + 1) % SPINNER_FRAMES.len();
            }
            Command::None
        }
        Msg::Quit => Command::Quit,
    }
}
