//! CLI interface for style-lint

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod formatting;
pub mod guidance;
pub mod guidelines;
pub mod review;
pub mod search;
pub mod suggest;
pub mod updates;

/// style-lint: writing style analysis for technical prose
#[derive(Parser)]
#[command(name = "style-lint")]
#[command(about = "Checks prose against writing style guidelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze text for style issues
    Analyze(analyze::AnalyzeCommand),
    /// Generate improvement suggestions for text
    Suggest(suggest::SuggestCommand),
    /// Review a document with per-dimension quality scores
    Review(review::ReviewCommand),
    /// Show the static style guidelines
    Guidelines(guidelines::GuidelinesCommand),
    /// Search the style guide
    Search(search::SearchCommand),
    /// Fetch official guidance pages for a topic
    Guidance(guidance::GuidanceCommand),
    /// Show changes tracked in the current session
    Updates(updates::UpdatesCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(cmd) => cmd.execute().await,
            Commands::Suggest(cmd) => cmd.execute().await,
            Commands::Review(cmd) => cmd.execute().await,
            Commands::Guidelines(cmd) => cmd.execute(),
            Commands::Search(cmd) => cmd.execute().await,
            Commands::Guidance(cmd) => cmd.execute().await,
            Commands::Updates(cmd) => cmd.execute().await,
        }
    }
}

/// Resolves the guidance mode: the `--web` flag wins, otherwise the
/// `STYLE_LINT_WEB` environment variable or settings entry.
pub(crate) fn resolve_web_mode(web_flag: bool) -> bool {
    if web_flag {
        return true;
    }
    matches!(
        crate::utils::settings::get_env_var("STYLE_LINT_WEB")
            .ok()
            .as_deref(),
        Some("1" | "true" | "yes")
    )
}
