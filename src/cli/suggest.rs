//! Suggest command — generates improvement suggestions for text.

use anyhow::Result;
use clap::Parser;

use crate::data::report::{Category, OutputFormat};
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;
use crate::utils::read_text_input;

/// Suggest command options.
#[derive(Parser)]
pub struct SuggestCommand {
    /// Text to inspect. Reads stdin when neither TEXT nor --file is given.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    /// Restrict suggestions to one category.
    #[arg(long)]
    pub category: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl SuggestCommand {
    /// Executes the suggest command.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);
        let text = read_text_input(self.text.as_deref(), self.file.as_deref())?;

        let focus = match self.category.as_deref() {
            Some(name) => {
                let category = Category::parse(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown category: {name}"))?;
                Some(category)
            }
            None => None,
        };

        let service = StyleService::new(GuidanceResolver::offline())?;
        let improvements = service.suggest_improvements(&text, focus).await;

        match format {
            OutputFormat::Text => super::formatting::print_improvements(&improvements)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&improvements)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&improvements)?),
        }

        Ok(())
    }
}
