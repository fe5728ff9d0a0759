//! Effect handlers for the console runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends results to the inbox; they never mutate state
//! directly.

use std::time::Duration;

use placement_core::portal::{PortalClient, PredictionRequest};

use crate::events::UiEvent;

/// Waits out the post-notice delay, then asks for the navigation.
pub async fn redirect_after(destination: String, delay: Duration) -> UiEvent {
    tokio::time::sleep(delay).await;
    UiEvent::RedirectDue { destination }
}

/// Submits student sign-in credentials to the portal.
pub async fn sign_in(portal: PortalClient, email: String, password: String) -> UiEvent {
    let result = portal.login_student(&email, &password).await;
    UiEvent::SignInFinished { email, result }
}

/// Submits a student registration to the portal.
pub async fn register(
    portal: PortalClient,
    name: String,
    email: String,
    password: String,
) -> UiEvent {
    let result = portal.register_student(&name, &email, &password).await;
    UiEvent::RegistrationFinished { result }
}

/// Submits recruiter credentials to the portal.
pub async fn recruiter_login(portal: PortalClient, email: String, password: String) -> UiEvent {
    let result = portal.login_recruiter(&email, &password).await;
    UiEvent::RecruiterLoginFinished { result }
}

/// Submits the prediction form to the portal.
pub async fn predict(portal: PortalClient, request: PredictionRequest) -> UiEvent {
    let result = portal.predict(request).await;
    UiEvent::PredictionFinished { result }
}
