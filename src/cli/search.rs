//! Search command — searches the style guide.

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::report::OutputFormat;
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;

/// Search command options.
#[derive(Parser)]
pub struct SearchCommand {
    /// Search query.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Search the live style guide instead of returning the builtin
    /// search link.
    #[arg(long)]
    pub web: bool,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl SearchCommand {
    /// Executes the search command.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let resolver = GuidanceResolver::select(super::resolve_web_mode(self.web))?;
        let service = StyleService::new(resolver)?;
        let results = service
            .search_style_guide(&self.query)
            .await
            .context("Style guide search failed")?;

        match format {
            OutputFormat::Text => super::formatting::print_search_results(&results)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&results)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&results)?),
        }

        Ok(())
    }
}
