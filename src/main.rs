mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_TICKETS_FILE};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::linear::LinearClient;
use crate::infra::prompt::{FixedTeam, InteractiveTeamPrompt};
use crate::services::TeamResolver;

#[derive(Parser)]
#[command(
    name = "linear-tickets",
    author,
    version,
    about = "Create Linear issues from a markdown tickets document"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one Linear issue per ticket in the document.
    Create(CreateArgs),
    /// Parse the document and show the tickets without contacting Linear.
    Preview(PreviewArgs),
}

#[derive(Args)]
struct CreateArgs {
    /// Path to the tickets document.
    #[arg(short, long, default_value = DEFAULT_TICKETS_FILE)]
    file: PathBuf,
    /// Team key, name, or id; skips the interactive team prompt.
    #[arg(short, long)]
    team: Option<String>,
}

#[derive(Args)]
struct PreviewArgs {
    /// Path to the tickets document.
    #[arg(short, long, default_value = DEFAULT_TICKETS_FILE)]
    file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        if let Some(help) = error.remediation() {
            eprintln!("\n{help}");
        }
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview(args) => cmd::preview::run(&args.file),
        Commands::Create(args) => run_create(args).await,
    }
}

async fn run_create(args: CreateArgs) -> AppResult<()> {
    let config = AppConfig::load(args.file, args.team)?;

    let issue_tracker = Arc::new(LinearClient::new(
        config.api_url.clone(),
        config.api_key.clone(),
    )?);
    let team_resolver: Arc<dyn TeamResolver> = match &config.team {
        Some(selector) => Arc::new(FixedTeam::new(selector.clone())),
        None => Arc::new(InteractiveTeamPrompt),
    };

    let context = AppContext::new(config, issue_tracker, team_resolver);
    cmd::create::run(&context).await?;

    Ok(())
}
