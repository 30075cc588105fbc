//! Guidance command — fetches official guidance pages for a topic.

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::report::OutputFormat;
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;

/// Guidance command options.
#[derive(Parser)]
pub struct GuidanceCommand {
    /// Topic to look up (e.g. "voice", "inclusive language", "grammar").
    #[arg(value_name = "TOPIC")]
    pub topic: String,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl GuidanceCommand {
    /// Executes the guidance command. Always uses the web resolver;
    /// official guidance has no offline backing.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let service = StyleService::new(GuidanceResolver::web()?)?;
        let pages = service
            .official_guidance(&self.topic)
            .await
            .with_context(|| format!("Failed to fetch guidance for topic: {}", self.topic))?;

        match format {
            OutputFormat::Text => super::formatting::print_pages(&pages)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&pages)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&pages)?),
        }

        Ok(())
    }
}
