//! Guidance resolution: static table (offline) or live fetch (web).
//!
//! The analysis engine depends only on [`GuidanceResolver`]; the backing
//! is chosen once at construction time and behaves identically from the
//! engine's point of view. Any failure degrades to omitted enrichment.

pub mod error;
pub mod offline;
pub mod web;

pub use error::GuidanceError;
pub use offline::StaticGuide;
pub use web::{Page, Relevance, SearchResult, WebGuide};

use crate::data::report::{Category, Guidance};

/// Default style-guide base URL.
pub const DEFAULT_BASE_URL: &str = "https://learn.microsoft.com/en-us/style-guide";

/// Polymorphic guidance resolver with an offline and a web backing.
#[derive(Debug)]
pub enum GuidanceResolver {
    /// Static per-category table; never blocks, never fails.
    Offline(StaticGuide),
    /// Live fetch with an in-memory cache.
    Web(WebGuide),
}

impl GuidanceResolver {
    /// Creates the offline resolver.
    pub fn offline() -> Self {
        GuidanceResolver::Offline(StaticGuide::new())
    }

    /// Creates the web resolver. Fails only on startup problems
    /// (invalid base URL override, client construction).
    pub fn web() -> anyhow::Result<Self> {
        Ok(GuidanceResolver::Web(WebGuide::new()?))
    }

    /// Selects the resolver for `web`: the live fetcher when true,
    /// the static table otherwise.
    pub fn select(web: bool) -> anyhow::Result<Self> {
        if web {
            Self::web()
        } else {
            Ok(Self::offline())
        }
    }

    /// The mode name, for logs and CLI output.
    pub fn mode(&self) -> &'static str {
        match self {
            GuidanceResolver::Offline(_) => "offline",
            GuidanceResolver::Web(_) => "web",
        }
    }

    /// Resolves guidance for a category. The issue message is accepted
    /// for interface stability but only the category drives resolution.
    pub async fn resolve(
        &self,
        category: Category,
        _issue_message: &str,
    ) -> Result<Guidance, GuidanceError> {
        match self {
            GuidanceResolver::Offline(guide) => Ok(guide.resolve(category)),
            GuidanceResolver::Web(guide) => guide.resolve(category).await,
        }
    }

    /// Searches the style guide. Offline mode returns a single fixed
    /// entry pointing at the guide itself.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GuidanceError> {
        match self {
            GuidanceResolver::Offline(_) => Ok(vec![SearchResult {
                section: "style_guide".to_string(),
                title: "Writing Style Guide".to_string(),
                link: format!("{DEFAULT_BASE_URL}/?search={}", urlencode(query)),
                relevance: Relevance::Medium,
                preview: String::new(),
            }]),
            GuidanceResolver::Web(guide) => guide.search(query).await,
        }
    }

    /// Fetches official guidance pages for a topic (web mode only).
    pub async fn official_guidance(&self, topic: &str) -> Result<Vec<Page>, GuidanceError> {
        match self {
            GuidanceResolver::Offline(_) => Err(GuidanceError::OfflineMode),
            GuidanceResolver::Web(guide) => guide.official_guidance(topic).await,
        }
    }
}

/// Percent-encodes a query string for use in a search URL.
fn urlencode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
