//! Guidance-resolver error handling.

use thiserror::Error;

/// Failures while resolving guidance from the style-guide site.
///
/// The analysis engine treats every variant identically: enrichment is
/// omitted and the analysis proceeds. None of these is ever fatal.
#[derive(Error, Debug)]
pub enum GuidanceError {
    /// Network connectivity error.
    #[error("Network error: {0}")]
    Network(String),

    /// The style-guide site returned a non-success status.
    #[error("Style guide request failed: HTTP {0}")]
    HttpStatus(u16),

    /// The fetch did not complete within the resolver timeout.
    #[error("Style guide request timed out")]
    Timeout,

    /// No guidance matched the requested topic or category.
    #[error("No guidance found for {0:?}")]
    NotFound(String),

    /// The operation requires the web resolver.
    #[error("Live guidance is only available in web mode")]
    OfflineMode,
}

// Note: anyhow already has a blanket impl for thiserror::Error types
