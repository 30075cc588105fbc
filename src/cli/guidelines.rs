//! Guidelines command — prints the static style guidelines.

use anyhow::Result;
use clap::Parser;

use crate::data::report::{OutputFormat, Scope};
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;

/// Guidelines command options.
#[derive(Parser)]
pub struct GuidelinesCommand {
    /// Scope: comprehensive (default) or a category name.
    #[arg(value_name = "SCOPE", default_value = "comprehensive")]
    pub scope: String,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl GuidelinesCommand {
    /// Executes the guidelines command.
    pub fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let service = StyleService::new(GuidanceResolver::offline())?;
        let entries = service.style_guidelines(Scope::parse(&self.scope));

        if entries.is_empty() {
            anyhow::bail!("Unknown scope: {}", self.scope);
        }

        match format {
            OutputFormat::Text => super::formatting::print_guidelines(&entries)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&entries)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&entries)?),
        }

        Ok(())
    }
}
