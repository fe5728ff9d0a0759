//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use placement_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "placement")]
#[command(version = "0.1")]
#[command(about = "Campus placement portal console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Submit this invocation's forms to the portal backend
    #[arg(long, global = true, conflicts_with = "local")]
    remote: bool,

    /// Keep this invocation's forms client-side
    #[arg(long, global = true)]
    local: bool,

    /// Portal base URL for this invocation (overrides config.toml)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in as a student
    LoginStudent {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create a student account
    CreateAccount {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Log in as a recruiter
    LoginRecruiter {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Submit a resume for screening against a job description
    Predict {
        /// Job description text to screen the resume against
        #[arg(long, value_name = "TEXT")]
        job_description: String,

        /// Resume file to upload (pdf, doc, docx)
        #[arg(long, value_name = "FILE")]
        resume: std::path::PathBuf,
    },

    /// Inspect or clear the stored student session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum SessionCommands {
    /// Show the stored student session
    Show,
    /// Clear the stored student session
    Clear,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
    /// Persist the remote flag to the config file
    SetRemote {
        #[arg(value_name = "BOOL", action = clap::ArgAction::Set)]
        remote: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Logs go to stderr so command output stays parseable. RUST_LOG
/// overrides the default `warn` filter.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    // Per-invocation overrides; --local wins back the default.
    if cli.remote {
        config.remote = true;
    }
    if cli.local {
        config.remote = false;
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    tracing::debug!(remote = config.remote, "configuration resolved");

    match cli.command {
        Commands::LoginStudent { email, password } => {
            commands::login::student(config, email, password).await
        }
        Commands::CreateAccount {
            name,
            email,
            password,
            confirm_password,
        } => commands::register::run(config, name, email, password, confirm_password).await,
        Commands::LoginRecruiter { email, password } => {
            commands::login::recruiter(config, email, password).await
        }
        Commands::Predict {
            job_description,
            resume,
        } => commands::predict::run(config, &job_description, &resume).await,

        Commands::Session { command } => match command {
            SessionCommands::Show => commands::session::show(),
            SessionCommands::Clear => commands::session::clear(),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
            ConfigCommands::SetRemote { remote } => commands::config::set_remote(remote),
        },
    }
}
