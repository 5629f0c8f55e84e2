//! GitCadence CLI
//!
//! Command-line host for the analysis client: submits repositories to the
//! remote backend, converts the result into the presentation view model, and
//! keeps the locale bookkeeping (active locale, persisted preference,
//! visible title) in sync across runs.

mod config;
mod report;

use clap::{Parser, Subcommand};
use gitcadence_client::{AnalysisClient, ClientConfig};
use gitcadence_core::AnalysisRequest;
use gitcadence_locale::{FilePreferences, LocaleRouter, LocaleStore};
use gitcadence_view::convert;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "gitcadence")]
#[command(about = "GitCadence - Git working-hours cadence analyzer", long_about = None)]
struct Cli {
    /// Base URL of the analysis backend
    #[arg(long, global = true, env = "GITCADENCE_BASE_URL")]
    base_url: Option<String>,

    /// Path to the configuration file (default: ~/.gitcadence/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Switch the UI locale before running (persisted for later runs)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Git repository's commit-timing cadence
    Analyze {
        /// Repository URL to analyze
        #[arg(long)]
        git_url: String,

        /// Branch to analyze (backend default: main/master)
        #[arg(long)]
        branch: Option<String>,

        /// Maximum commits to analyze (0 = all)
        #[arg(long)]
        max_commits: Option<u32>,

        /// Only count commits by this author email
        #[arg(long)]
        author_email: Option<String>,

        /// Print the view model as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Check backend service health
    Health,
    /// Show backend service information
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_config = config::load(cli.config.as_deref())?;
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| file_config.base_url.clone())
        .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());

    let mut router = init_router()?;
    if let Some(lang) = &cli.lang {
        if !router.switch_locale(lang) {
            warn!("Unrecognized locale {:?}, keeping {}", lang, router.locale());
        }
    }

    let client = AnalysisClient::new(
        ClientConfig::new(base_url).with_client_config(file_config.client_config()),
    )?;

    match cli.command {
        Commands::Analyze {
            git_url,
            branch,
            max_commits,
            author_email,
            json,
        } => {
            let mut request = AnalysisRequest::new(git_url);
            if let Some(branch) = branch {
                request = request.with_branch(branch);
            }
            if let Some(max_commits) = max_commits {
                request = request.with_max_commits(max_commits);
            }
            if let Some(author_email) = author_email {
                request = request.with_author_email(author_email);
            }

            // Entering the result page: the guard syncs locale state and
            // computes the visible title.
            let nav = router.navigate("/result", &[]);

            let result = client.analyze_repository(&request).await?;
            let view = convert(&result);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", nav.outcome.document_title);
                println!();
                print!("{}", report::render(&view));
            }
        }
        Commands::Health => {
            if client.check_health().await {
                println!("Backend is healthy");
            } else {
                println!("Backend is unavailable");
                std::process::exit(1);
            }
        }
        Commands::Info => match client.service_info().await {
            Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
            None => {
                println!("Service information unavailable");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn init_router() -> anyhow::Result<LocaleRouter> {
    let preferences = FilePreferences::open_default()?;
    let env_language = detect_env_language();
    let store = LocaleStore::init(Box::new(preferences), env_language.as_deref());
    Ok(LocaleRouter::new(store, env_language))
}

/// Detected environment language, from the POSIX locale variables
/// (e.g. "zh_CN.UTF-8" → "zh-CN").
fn detect_env_language() -> Option<String> {
    let raw = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok()?;
    let tag = raw.split('.').next().unwrap_or(&raw).replace('_', "-");
    if tag.is_empty() { None } else { Some(tag) }
}
