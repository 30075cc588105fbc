//! Review command — full document review with quality scores.

use anyhow::Result;
use clap::Parser;

use crate::data::report::OutputFormat;
use crate::guidance::GuidanceResolver;
use crate::style::service::StyleService;
use crate::utils::read_text_input;

/// Review command options.
#[derive(Parser)]
pub struct ReviewCommand {
    /// Text to review. Reads stdin when neither TEXT nor --file is given.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to review from a file.
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ReviewCommand {
    /// Executes the review command.
    pub async fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);
        let text = read_text_input(self.text.as_deref(), self.file.as_deref())?;

        // Reviews score locally; no guidance enrichment is involved.
        let service = StyleService::new(GuidanceResolver::offline())?;
        let review = service.review_document(&text).await;

        match format {
            OutputFormat::Text => super::formatting::print_review(&review)?,
            OutputFormat::Json => println!("{}", crate::data::to_json(&review)?),
            OutputFormat::Yaml => println!("{}", crate::data::to_yaml(&review)?),
        }

        Ok(())
    }
}
