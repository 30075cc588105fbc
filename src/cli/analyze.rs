//! Analyze command — checks text against the style rule catalog.

use anyhow::Result;
use clap::Parser;

use crate::data::report::OutputFormat;
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;
use crate::utils::read_text_input;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Text to analyze. Reads stdin when neither TEXT nor --file is given.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a file.
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    /// Analysis scope: comprehensive (default) or a category name
    /// (voice_tone, grammar, terminology, accessibility).
    #[arg(long, default_value = "comprehensive")]
    pub scope: String,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Skip session tracking for this analysis.
    #[arg(long)]
    pub dry_run: bool,

    /// Resolve guidance from the live style guide instead of the
    /// builtin table.
    #[arg(long)]
    pub web: bool,
}

impl AnalyzeCommand {
    /// Executes the analyze command.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);
        let text = read_text_input(self.text.as_deref(), self.file.as_deref())?;

        let resolver = GuidanceResolver::select(super::resolve_web_mode(self.web))?;
        tracing::debug!("Analyzing with {} guidance", resolver.mode());

        let service = StyleService::new(resolver)?;
        let report = service
            .analyze_content(&text, &self.scope, self.dry_run)
            .await;

        match format {
            OutputFormat::Text => super::formatting::print_report(&report)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&report)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&report)?),
        }

        Ok(())
    }
}
