//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes
//! against the injected capabilities. This keeps the reducer pure: it only
//! mutates state and returns effects, never performs I/O or spawns tasks
//! directly.

use std::time::Duration;

use placement_core::portal::PredictionRequest;
use placement_core::session::StudentProfile;

use crate::common::TaskId;

/// Dashboard destination after a successful student flow.
pub const STUDENT_DASHBOARD: &str = "/student-dashboard.html";
/// Dashboard destination after a successful recruiter login.
pub const RECRUITER_DASHBOARD: &str = "/recruiter-dashboard.html";

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Persist the signed-in student's email marker.
    SaveStudentEmail { email: String },

    /// Persist the profile synthesized for a locally created account.
    SaveStudentProfile { profile: StudentProfile },

    /// Navigate to a destination now.
    Navigate { destination: String },

    /// Navigate to a destination after a delay, so the success notice can
    /// be seen first.
    ScheduleRedirect {
        task: TaskId,
        destination: String,
        delay: Duration,
    },

    /// POST student credentials to the portal.
    SubmitSignIn {
        task: TaskId,
        email: String,
        password: String,
    },

    /// POST a student registration to the portal.
    SubmitRegistration {
        task: TaskId,
        name: String,
        email: String,
        password: String,
    },

    /// POST recruiter credentials to the portal.
    SubmitRecruiterLogin {
        task: TaskId,
        email: String,
        password: String,
    },

    /// POST the prediction form to the portal.
    SubmitPrediction {
        task: TaskId,
        request: PredictionRequest,
    },
}
