//! # style-lint
//!
//! Writing style analysis for technical prose.
//!
//! ## Features
//!
//! - Rule-based style checking across voice, grammar, terminology, and
//!   accessibility
//! - Offline guidance with an optional live style-guide backing
//! - Session-scoped tracking of surfaced issues
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use style_lint::guidance::GuidanceResolver;
//! use style_lint::style::StyleService;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = StyleService::new(GuidanceResolver::offline())?;
//! let report = service
//!     .analyze_content("The user should login first", "comprehensive", false)
//!     .await;
//! println!("{}", report.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod guidance;
pub mod style;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of style-lint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
