//! Console reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state: panel
//! activation, form validation, and the local/remote submission flows.

use placement_core::error::{PortalError, PortalErrorKind};
use placement_core::portal::PredictionRequest;
use placement_core::session::StudentProfile;

use crate::effects::{RECRUITER_DASHBOARD, STUDENT_DASHBOARD, UiEffect};
use crate::events::UiEvent;
use crate::forms::{CreateAccountForm, RecruiterLoginForm, SignInForm};
use crate::state::{ConsoleState, Notice, Panel, PredictionPanel, StudentSubPanel};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut ConsoleState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::SelectPanel(panel) => {
            state.active_panel = panel;
            // Switching to the student panel always lands on sign-in.
            // Switching to recruiter leaves the stored sub-panel alone.
            if panel == Panel::Student {
                state.active_student_sub_panel = StudentSubPanel::SignIn;
            }
            vec![]
        }
        UiEvent::SelectStudentSubPanel(sub_panel) => {
            // The sub-tab controls are not rendered on the recruiter panel.
            if state.active_panel == Panel::Student {
                state.active_student_sub_panel = sub_panel;
            }
            vec![]
        }

        UiEvent::SubmitSignIn { email, password } => handle_sign_in(state, email, password),
        UiEvent::SubmitCreateAccount {
            name,
            email,
            password,
            confirm_password,
        } => handle_create_account(state, name, email, password, confirm_password),
        UiEvent::SubmitRecruiterLogin { email, password } => {
            handle_recruiter_login(state, email, password)
        }
        UiEvent::SubmitPrediction { request } => handle_prediction(state, request),

        UiEvent::SignInFinished { email, result } => match result {
            Ok(()) => vec![
                UiEffect::SaveStudentEmail { email },
                UiEffect::Navigate {
                    destination: STUDENT_DASHBOARD.to_string(),
                },
            ],
            Err(error) => {
                state.push_notice(Notice::error(login_failure_text(&error)));
                vec![]
            }
        },
        UiEvent::RegistrationFinished { result } => match result {
            Ok(()) => {
                state.push_notice(Notice::success(
                    "Account created successfully! Please sign in.",
                ));
                state.active_student_sub_panel = StudentSubPanel::SignIn;
                vec![]
            }
            Err(error) => {
                state.push_notice(Notice::error(registration_failure_text(&error)));
                vec![]
            }
        },
        UiEvent::RecruiterLoginFinished { result } => match result {
            Ok(()) => vec![UiEffect::Navigate {
                destination: RECRUITER_DASHBOARD.to_string(),
            }],
            Err(error) => {
                state.push_notice(Notice::error(login_failure_text(&error)));
                vec![]
            }
        },
        UiEvent::PredictionFinished { result } => {
            state.prediction = match result {
                Ok(outcome) => PredictionPanel::Ready {
                    decision: outcome.decision,
                    probability: outcome.probability,
                },
                Err(error) => PredictionPanel::Failed {
                    message: prediction_failure_text(&error),
                },
            };
            vec![]
        }

        UiEvent::RedirectDue { destination } => vec![UiEffect::Navigate { destination }],

        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if !ok {
                // Stale completion from a superseded task.
                vec![]
            } else {
                update(state, *completed.result)
            }
        }
    }
}

fn handle_sign_in(state: &mut ConsoleState, email: String, password: String) -> Vec<UiEffect> {
    let form = SignInForm { email, password };
    if let Err(error) = form.validate() {
        state.push_notice(Notice::error(error.message));
        return vec![];
    }

    if state.config.remote {
        let task = state.task_seq.next_id();
        vec![UiEffect::SubmitSignIn {
            task,
            email: form.email,
            password: form.password,
        }]
    } else {
        state.push_notice(Notice::success(
            "Student sign in successful! Redirecting to dashboard...",
        ));
        let task = state.task_seq.next_id();
        vec![
            UiEffect::SaveStudentEmail { email: form.email },
            UiEffect::ScheduleRedirect {
                task,
                destination: STUDENT_DASHBOARD.to_string(),
                delay: state.config.redirect_delay(),
            },
        ]
    }
}

fn handle_create_account(
    state: &mut ConsoleState,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Vec<UiEffect> {
    let form = CreateAccountForm::new(&name, &email, password, confirm_password);
    // The minimum-length policy belongs to the server in remote mode.
    let enforce_length = !state.config.remote;
    if let Err(error) = form.validate(enforce_length) {
        state.push_notice(Notice::error(error.message));
        return vec![];
    }

    if state.config.remote {
        let task = state.task_seq.next_id();
        vec![UiEffect::SubmitRegistration {
            task,
            name: form.name,
            email: form.email,
            password: form.password,
        }]
    } else {
        state.push_notice(Notice::success(
            "New student account created successfully! Redirecting to dashboard...",
        ));
        let profile = StudentProfile::new_user(form.name, form.email.clone());
        let task = state.task_seq.next_id();
        vec![
            UiEffect::SaveStudentEmail { email: form.email },
            UiEffect::SaveStudentProfile { profile },
            UiEffect::ScheduleRedirect {
                task,
                destination: STUDENT_DASHBOARD.to_string(),
                delay: state.config.redirect_delay(),
            },
        ]
    }
}

fn handle_recruiter_login(
    state: &mut ConsoleState,
    email: String,
    password: String,
) -> Vec<UiEffect> {
    let form = RecruiterLoginForm { email, password };
    if let Err(error) = form.validate() {
        state.push_notice(Notice::error(error.message));
        return vec![];
    }

    if state.config.remote {
        let task = state.task_seq.next_id();
        vec![UiEffect::SubmitRecruiterLogin {
            task,
            email: form.email,
            password: form.password,
        }]
    } else {
        state.push_notice(Notice::success(
            "Recruiter login successful! Redirecting to dashboard...",
        ));
        let task = state.task_seq.next_id();
        vec![UiEffect::ScheduleRedirect {
            task,
            destination: RECRUITER_DASHBOARD.to_string(),
            delay: state.config.redirect_delay(),
        }]
    }
}

fn handle_prediction(state: &mut ConsoleState, request: PredictionRequest) -> Vec<UiEffect> {
    if !state.config.remote {
        state.push_notice(Notice::error("Predictions require the remote portal."));
        return vec![];
    }

    state.prediction = PredictionPanel::Processing;
    let task = state.task_seq.next_id();
    vec![UiEffect::SubmitPrediction { task, request }]
}

/// Failure text for both login flows: the server message for a declared
/// failure, the generic retry text for a transport fault.
fn login_failure_text(error: &PortalError) -> String {
    match error.kind {
        PortalErrorKind::ServerDeclined => format!("Login failed: {}", error.message),
        _ => "An error occurred during login. Please try again.".to_string(),
    }
}

fn registration_failure_text(error: &PortalError) -> String {
    match error.kind {
        PortalErrorKind::ServerDeclined => format!("Registration failed: {}", error.message),
        _ => "An error occurred during registration. Please try again.".to_string(),
    }
}

fn prediction_failure_text(error: &PortalError) -> String {
    match error.kind {
        PortalErrorKind::ServerDeclined => format!("Error: {}", error.message),
        _ => "An error occurred during prediction. Please try again.".to_string(),
    }
}
