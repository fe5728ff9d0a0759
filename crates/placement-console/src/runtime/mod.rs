//! Console runtime - owns capabilities, executes effects, drives the reducer.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them
//! against the injected capabilities.
//!
//! ## Inbox Pattern
//!
//! Async work follows an "inbox" pattern:
//! - Handlers are pure async functions returning `UiEvent`
//! - The runtime spawns them and sends results to `inbox_tx`
//! - `run_until_idle` drains `inbox_rx` until no task slot is running
//!
//! Structure:
//! - `mod.rs`: Core runtime (ConsoleRuntime, effect dispatch, drain loop)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;

use anyhow::Result;
use inbox::{UiEventReceiver, UiEventSender};
use placement_core::config::Config;
use placement_core::nav::Navigator;
use placement_core::portal::PortalClient;
use placement_core::session;
use placement_core::store::KeyValueStore;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::ConsoleState;
use crate::update;

/// Login console runtime.
///
/// Owns the state and the injected storage/navigation capabilities. The
/// capabilities are public so callers (and tests) can inspect what a flow
/// wrote and where it navigated.
pub struct ConsoleRuntime<S, N> {
    /// Console state; mutated only through the reducer.
    pub state: ConsoleState,
    /// Storage capability (the localStorage analog).
    pub store: S,
    /// Navigation capability.
    pub navigator: N,
    portal: PortalClient,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - the drain loop reads this.
    inbox_rx: UiEventReceiver,
}

impl<S: KeyValueStore, N: Navigator> ConsoleRuntime<S, N> {
    /// Creates a runtime for the given configuration and capabilities.
    pub fn new(config: Config, store: S, navigator: N) -> Result<Self> {
        let portal = PortalClient::new(config.effective_base_url()?);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: ConsoleState::new(config),
            store,
            navigator,
            portal,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Dispatches one event through the reducer and executes the returned
    /// effects.
    pub fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    /// Dispatches an event, then drains the inbox until no spawned task
    /// remains running. This is the one-shot flow driver used by the CLI.
    pub async fn run_until_idle(&mut self, event: UiEvent) {
        self.dispatch_event(event);

        loop {
            // Apply pending TaskStarted markers before deciding whether
            // anything is still in flight.
            while let Ok(event) = self.inbox_rx.try_recv() {
                self.dispatch_event(event);
            }
            if !self.state.tasks.is_any_running() {
                break;
            }
            let Some(event) = self.inbox_rx.recv().await else {
                break;
            };
            self.dispatch_event(event);
        }
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle. Handlers stay pure async functions returning `UiEvent`.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tracing::debug!(?kind, task = id.0, "task started");
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f().await;
            tracing::debug!(?kind, task = id.0, "task completed");
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect against the capabilities, or spawns the
    /// matching async handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            // Capability effects (inline)
            UiEffect::SaveStudentEmail { email } => {
                session::save_student_email(&mut self.store, &email);
            }
            UiEffect::SaveStudentProfile { profile } => {
                session::save_student_profile(&mut self.store, &profile);
            }
            UiEffect::Navigate { destination } => {
                self.navigator.navigate(&destination);
            }

            // Async effects (spawned)
            UiEffect::ScheduleRedirect {
                task,
                destination,
                delay,
            } => {
                self.spawn_task(TaskKind::Redirect, task, move || {
                    handlers::redirect_after(destination, delay)
                });
            }
            UiEffect::SubmitSignIn {
                task,
                email,
                password,
            } => {
                let portal = self.portal.clone();
                self.spawn_task(TaskKind::SignIn, task, move || {
                    handlers::sign_in(portal, email, password)
                });
            }
            UiEffect::SubmitRegistration {
                task,
                name,
                email,
                password,
            } => {
                let portal = self.portal.clone();
                self.spawn_task(TaskKind::Registration, task, move || {
                    handlers::register(portal, name, email, password)
                });
            }
            UiEffect::SubmitRecruiterLogin {
                task,
                email,
                password,
            } => {
                let portal = self.portal.clone();
                self.spawn_task(TaskKind::RecruiterLogin, task, move || {
                    handlers::recruiter_login(portal, email, password)
                });
            }
            UiEffect::SubmitPrediction { task, request } => {
                let portal = self.portal.clone();
                self.spawn_task(TaskKind::Prediction, task, move || {
                    handlers::predict(portal, request)
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use placement_core::nav::RecordingNavigator;
    use placement_core::portal::PredictionRequest;
    use placement_core::store::{KeyValueStore, MemoryStore, STUDENT_EMAIL_KEY, STUDENT_PROFILE_KEY};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::state::{NoticeKind, PredictionPanel, StudentSubPanel};

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn console(config: Config) -> ConsoleRuntime<MemoryStore, RecordingNavigator> {
        ConsoleRuntime::new(config, MemoryStore::new(), RecordingNavigator::new()).unwrap()
    }

    fn local_config() -> Config {
        Config {
            redirect_delay_ms: 10,
            ..Config::default()
        }
    }

    fn remote_config(base_url: String) -> Config {
        Config {
            remote: true,
            base_url,
            redirect_delay_ms: 10,
        }
    }

    /// Local sign-in persists the marker and navigates after the delay.
    #[tokio::test]
    async fn test_local_sign_in_flow() {
        let mut console = console(local_config());

        console
            .run_until_idle(UiEvent::SubmitSignIn {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
            .await;

        assert_eq!(
            console.store.get(STUDENT_EMAIL_KEY),
            Some("a@b.com".to_string())
        );
        assert_eq!(
            console.navigator.destinations,
            vec!["/student-dashboard.html"]
        );
        assert_eq!(
            console.state.last_notice().unwrap().text,
            "Student sign in successful! Redirecting to dashboard..."
        );
    }

    /// A validation failure stops the flow before any capability is touched.
    #[tokio::test]
    async fn test_validation_failure_touches_nothing() {
        let mut console = console(local_config());

        console
            .run_until_idle(UiEvent::SubmitSignIn {
                email: String::new(),
                password: "x".to_string(),
            })
            .await;

        assert_eq!(console.store.get(STUDENT_EMAIL_KEY), None);
        assert!(console.navigator.destinations.is_empty());
        assert_eq!(
            console.state.last_notice().unwrap().kind,
            NoticeKind::Error
        );
    }

    /// Local account creation stores the starter profile next to the marker.
    #[tokio::test]
    async fn test_local_create_account_flow() {
        let mut console = console(local_config());

        console
            .run_until_idle(UiEvent::SubmitCreateAccount {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
            })
            .await;

        assert_eq!(
            console.store.get(STUDENT_EMAIL_KEY),
            Some("ana@example.com".to_string())
        );
        let profile_json = console.store.get(STUDENT_PROFILE_KEY).unwrap();
        let profile: serde_json::Value = serde_json::from_str(&profile_json).unwrap();
        assert_eq!(profile["name"], "Ana");
        assert_eq!(profile["major"], "Not specified");
        assert_eq!(profile["status"], "New User");
        assert_eq!(
            console.navigator.destinations,
            vec!["/student-dashboard.html"]
        );
    }

    /// Local recruiter login redirects without writing any marker.
    #[tokio::test]
    async fn test_local_recruiter_login_flow() {
        let mut console = console(local_config());

        console
            .run_until_idle(UiEvent::SubmitRecruiterLogin {
                email: "r@example.com".to_string(),
                password: "recruiterpass".to_string(),
            })
            .await;

        assert_eq!(console.store.get(STUDENT_EMAIL_KEY), None);
        assert_eq!(
            console.navigator.destinations,
            vec!["/recruiter-dashboard.html"]
        );
    }

    /// Remote sign-in success persists the marker and navigates right away.
    #[tokio::test]
    async fn test_remote_sign_in_success_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-student"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Login successful!",
                "user": {"name": "Ana", "email": "a@b.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console
            .run_until_idle(UiEvent::SubmitSignIn {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert_eq!(
            console.store.get(STUDENT_EMAIL_KEY),
            Some("a@b.com".to_string())
        );
        assert_eq!(
            console.navigator.destinations,
            vec!["/student-dashboard.html"]
        );
    }

    /// A declined remote sign-in surfaces the server text and stays put.
    #[tokio::test]
    async fn test_remote_sign_in_declined_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-student"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "message": "Invalid email or password."
            })))
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console
            .run_until_idle(UiEvent::SubmitSignIn {
                email: "a@b.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(console.store.get(STUDENT_EMAIL_KEY), None);
        assert!(console.navigator.destinations.is_empty());
        assert_eq!(
            console.state.last_notice().unwrap().text,
            "Login failed: Invalid email or password."
        );
    }

    /// A malformed response body surfaces the generic retry text.
    #[tokio::test]
    async fn test_remote_sign_in_transport_fault_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-student"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console
            .run_until_idle(UiEvent::SubmitSignIn {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert_eq!(
            console.state.last_notice().unwrap().text,
            "An error occurred during login. Please try again."
        );
        assert!(console.navigator.destinations.is_empty());
    }

    /// A declined registration quotes the server message and keeps the
    /// create-account sub-panel active.
    #[tokio::test]
    async fn test_remote_registration_declined_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register-student"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "success": false,
                "message": "email taken"
            })))
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console.dispatch_event(UiEvent::SelectStudentSubPanel(StudentSubPanel::CreateAccount));
        console
            .run_until_idle(UiEvent::SubmitCreateAccount {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
            })
            .await;

        assert_eq!(
            console.state.last_notice().unwrap().text,
            "Registration failed: email taken"
        );
        assert_eq!(
            console.state.visible_sub_panel(),
            Some(StudentSubPanel::CreateAccount)
        );
        assert_eq!(console.store.get(STUDENT_EMAIL_KEY), None);
    }

    /// A successful remote registration lands back on sign-in with no
    /// storage write and no navigation.
    #[tokio::test]
    async fn test_remote_registration_success_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register-student"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "success": true,
                "message": "Account created successfully!"
            })))
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console.dispatch_event(UiEvent::SelectStudentSubPanel(StudentSubPanel::CreateAccount));
        console
            .run_until_idle(UiEvent::SubmitCreateAccount {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
            })
            .await;

        assert_eq!(
            console.state.last_notice().unwrap().text,
            "Account created successfully! Please sign in."
        );
        assert_eq!(
            console.state.visible_sub_panel(),
            Some(StudentSubPanel::SignIn)
        );
        assert_eq!(console.store.get(STUDENT_EMAIL_KEY), None);
        assert!(console.navigator.destinations.is_empty());
    }

    /// The prediction flow replaces the result panel with the outcome.
    #[tokio::test]
    async fn test_prediction_flow() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "decision": "Hire",
                "probability": 82.0
            })))
            .mount(&server)
            .await;

        let mut console = console(remote_config(server.uri()));
        console
            .run_until_idle(UiEvent::SubmitPrediction {
                request: PredictionRequest::resume_screening(
                    "Backend engineer",
                    "resume.pdf",
                    b"%PDF-1.4".to_vec(),
                    Some("application/pdf".to_string()),
                ),
            })
            .await;

        assert_eq!(
            console.state.prediction,
            PredictionPanel::Ready {
                decision: "Hire".to_string(),
                probability: 82.0
            }
        );
        assert_eq!(
            console.state.prediction.lines(),
            vec![
                "Decision: Hire".to_string(),
                "Match Probability: 82%".to_string()
            ]
        );
    }
}
