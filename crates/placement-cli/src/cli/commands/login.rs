//! Student and recruiter login flows.

use anyhow::Result;
use placement_console::events::UiEvent;
use placement_core::config::Config;

pub async fn student(config: Config, email: String, password: String) -> Result<()> {
    let mut runtime = super::build_runtime(config)?;
    runtime
        .run_until_idle(UiEvent::SubmitSignIn { email, password })
        .await;
    super::print_outcome(&runtime);
    Ok(())
}

pub async fn recruiter(config: Config, email: String, password: String) -> Result<()> {
    let mut runtime = super::build_runtime(config)?;
    runtime
        .run_until_idle(UiEvent::SubmitRecruiterLogin { email, password })
        .await;
    super::print_outcome(&runtime);
    Ok(())
}
