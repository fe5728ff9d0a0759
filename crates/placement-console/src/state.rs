//! Console state types.
//!
//! All state lives here and is mutated only by the reducer in `update.rs`.
//! The visible-panel accessors are the render surface: exactly one top-level
//! panel is visible, and at most one student sub-panel.

use placement_core::config::Config;

use crate::common::{TaskSeq, Tasks};

/// Top-level audience panels. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Student,
    Recruiter,
}

/// Student sub-panels. Meaningful only while the student panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentSubPanel {
    #[default]
    SignIn,
    CreateAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing message for a flow outcome (the alert analog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Prediction result area content. Each submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionPanel {
    #[default]
    Idle,
    Processing,
    Ready {
        decision: String,
        probability: f64,
    },
    Failed {
        message: String,
    },
}

impl PredictionPanel {
    /// Lines for the result area, one per displayed row.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Idle => vec![],
            Self::Processing => vec!["Processing prediction...".to_string()],
            Self::Ready {
                decision,
                probability,
            } => vec![
                format!("Decision: {decision}"),
                format!("Match Probability: {probability}%"),
            ],
            Self::Failed { message } => vec![message.clone()],
        }
    }
}

/// Application state for the login console.
#[derive(Debug)]
pub struct ConsoleState {
    /// Deployment configuration (remote switch, base URL, redirect delay).
    pub config: Config,
    pub active_panel: Panel,
    pub active_student_sub_panel: StudentSubPanel,
    /// Notices surfaced so far, oldest first.
    pub notices: Vec<Notice>,
    /// Prediction result area.
    pub prediction: PredictionPanel,
    /// Async task lifecycle slots.
    pub tasks: Tasks,
    /// Task id allocator.
    pub task_seq: TaskSeq,
}

impl ConsoleState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            active_panel: Panel::Student,
            active_student_sub_panel: StudentSubPanel::SignIn,
            notices: Vec::new(),
            prediction: PredictionPanel::Idle,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
        }
    }

    /// The currently visible top-level panel.
    pub fn visible_panel(&self) -> Panel {
        self.active_panel
    }

    /// The currently visible student sub-panel. `None` while the recruiter
    /// panel is showing.
    pub fn visible_sub_panel(&self) -> Option<StudentSubPanel> {
        match self.active_panel {
            Panel::Student => Some(self.active_student_sub_panel),
            Panel::Recruiter => None,
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
