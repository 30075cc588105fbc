//! Updates command — analyzes input and reports the tracked changes.

use anyhow::Result;
use clap::Parser;

use crate::data::report::OutputFormat;
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;
use crate::utils::read_text_input;

/// Updates command options.
///
/// The session ledger is scoped to the process, so this command runs
/// its own tracked analysis and then prints the accumulated summary.
/// Without input it prints the empty-session sentinel.
#[derive(Parser)]
pub struct UpdatesCommand {
    /// Text to analyze and track before summarizing.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl UpdatesCommand {
    /// Executes the updates command.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let service = StyleService::new(GuidanceResolver::offline())?;

        if self.text.is_some() || self.file.is_some() {
            let text = read_text_input(self.text.as_deref(), self.file.as_deref())?;
            service.analyze_content(&text, "comprehensive", false).await;
        }

        let summary = service.github_updates();

        match format {
            OutputFormat::Text => println!("{summary}"),
            OutputFormat::Json => println!("{}", crate::data::to_json(&summary)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&summary)?),
        }

        Ok(())
    }
}
