//! Student account creation flow.

use anyhow::Result;
use placement_console::events::UiEvent;
use placement_core::config::Config;

pub async fn run(
    config: Config,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let mut runtime = super::build_runtime(config)?;
    runtime
        .run_until_idle(UiEvent::SubmitCreateAccount {
            name,
            email,
            password,
            confirm_password,
        })
        .await;
    super::print_outcome(&runtime);
    Ok(())
}
