//! Resume screening prediction flow.

use std::path::Path;

use anyhow::{Context, Result};
use placement_console::events::UiEvent;
use placement_core::config::Config;
use placement_core::portal::PredictionRequest;

pub async fn run(config: Config, job_description: &str, resume: &Path) -> Result<()> {
    if !config.remote {
        anyhow::bail!(
            "predict needs the remote portal (pass --remote or set remote = true in config.toml)"
        );
    }

    let bytes = std::fs::read(resume)
        .with_context(|| format!("read resume file {}", resume.display()))?;
    let file_name = resume
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());
    let mime_type = mime_for(&file_name);
    let request = PredictionRequest::resume_screening(job_description, file_name, bytes, mime_type);

    let mut runtime = super::build_runtime(config)?;
    runtime
        .run_until_idle(UiEvent::SubmitPrediction { request })
        .await;
    super::print_outcome(&runtime);
    Ok(())
}

/// Content type for the upload part, by extension. Unknown extensions
/// upload without one and the portal sniffs the content itself.
fn mime_for(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    let mime = match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime.to_string())
}
