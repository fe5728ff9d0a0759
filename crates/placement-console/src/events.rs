//! UI event types.
//!
//! Events originate from user intent (panel selection, form submission),
//! from the runtime's task lifecycle, and from async handler results
//! delivered via the inbox:
//!
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer re-dispatches the inner result event if the task is still
//!   the active one for its kind; stale completions are dropped

use placement_core::error::PortalError;
use placement_core::portal::{PredictionOutcome, PredictionRequest};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::state::{Panel, StudentSubPanel};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Activate a top-level panel.
    SelectPanel(Panel),

    /// Activate a student sub-panel. Ignored while the recruiter panel is
    /// active (its controls are not rendered there).
    SelectStudentSubPanel(StudentSubPanel),

    /// Submit the student sign-in form.
    SubmitSignIn { email: String, password: String },

    /// Submit the student create-account form.
    SubmitCreateAccount {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    },

    /// Submit the recruiter login form.
    SubmitRecruiterLogin { email: String, password: String },

    /// Submit the prediction form.
    SubmitPrediction { request: PredictionRequest },

    /// Remote student sign-in finished. Carries the submitted email so the
    /// session marker can be persisted on success.
    SignInFinished {
        email: String,
        result: Result<(), PortalError>,
    },

    /// Remote registration finished.
    RegistrationFinished { result: Result<(), PortalError> },

    /// Remote recruiter login finished.
    RecruiterLoginFinished { result: Result<(), PortalError> },

    /// Prediction request finished.
    PredictionFinished {
        result: Result<PredictionOutcome, PortalError>,
    },

    /// A scheduled redirect delay elapsed.
    RedirectDue { destination: String },

    /// A spawned task is now running.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// A spawned task finished; the inner result event is re-dispatched if
    /// the task is still active.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
