//! Style analysis: rule catalog, metrics, engine, session ledger, and
//! the top-level service facade.

pub mod catalog;
pub mod engine;
pub mod ledger;
pub mod metrics;
pub mod review;
pub mod service;

pub use catalog::{Matcher, Rule, RuleCatalog};
pub use engine::{AnalysisEngine, AnalysisOptions};
pub use ledger::{LedgerEntry, LedgerSummary, SessionLedger, EMPTY_SUMMARY_LINE};
pub use metrics::TextMetrics;
pub use review::{
    DimensionScores, DocumentReview, DocumentReviewer, QualityLevel, Recommendations,
    RewriteExample,
};
pub use service::{GuidelineEntry, StyleService};
