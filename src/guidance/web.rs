//! Live guidance fetched from the style-guide site, with caching.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::data::report::{Category, Guidance};
use crate::guidance::error::GuidanceError;
use crate::guidance::offline::category_page;
use crate::guidance::DEFAULT_BASE_URL;

/// How long a fetched page stays fresh in the cache.
const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Per-request timeout on the HTTP client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum preview length in characters.
const PREVIEW_CHARS: usize = 2000;

/// Named style-guide sections searched and used for topic guidance.
const CORE_SECTIONS: &[(&str, &str)] = &[
    ("voice_tone", "brand-voice-above-all-simple-human"),
    ("top_tips", "top-10-tips-style-voice"),
    ("bias_free", "bias-free-communication"),
    ("writing_tips", "global-communications/writing-tips"),
    ("welcome", "welcome"),
    ("word_list", "a-z-word-list-term-collections"),
];

/// A fetched and stripped style-guide page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page title from the HTML `<title>` tag.
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Stripped text content, truncated for display.
    pub preview: String,
    /// Full stripped text content (used for search ranking).
    #[serde(skip)]
    pub text: String,
}

/// Relevance tier for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// Some query terms matched.
    Medium,
    /// At least half the query terms matched.
    High,
}

/// One ranked search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Section name within the style guide.
    pub section: String,
    /// Page title.
    pub title: String,
    /// Page URL.
    pub link: String,
    /// Relevance tier.
    pub relevance: Relevance,
    /// Content preview.
    pub preview: String,
}

struct CachedPage {
    page: Page,
    fetched_at: Instant,
}

/// Markup-stripping patterns, compiled once at construction.
struct Strip {
    script: Regex,
    style: Regex,
    tag: Regex,
    title: Regex,
}

impl Strip {
    fn new() -> Result<Self> {
        Ok(Self {
            script: Regex::new(r"(?is)<script[^>]*>.*?</script>")
                .context("Failed to compile script-strip pattern")?,
            style: Regex::new(r"(?is)<style[^>]*>.*?</style>")
                .context("Failed to compile style-strip pattern")?,
            tag: Regex::new(r"<[^>]+>").context("Failed to compile tag-strip pattern")?,
            title: Regex::new(r"(?i)<title>([^<]+)</title>")
                .context("Failed to compile title pattern")?,
        })
    }
}

/// Web guidance backing: fetches style-guide pages over HTTP, strips
/// markup, and caches results per URL with a 1-hour TTL.
pub struct WebGuide {
    client: Client,
    base_url: String,
    strip: Strip,
    cache: Mutex<HashMap<String, CachedPage>>,
}

impl std::fmt::Debug for WebGuide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebGuide")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WebGuide {
    /// Creates a web guide against the default base URL, honoring the
    /// `STYLE_GUIDE_BASE_URL` override from the environment or settings.
    pub fn new() -> Result<Self> {
        let base = crate::utils::settings::get_env_var("STYLE_GUIDE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    /// Creates a web guide against an explicit base URL.
    pub fn with_base_url(base: &str) -> Result<Self> {
        // Validate early so a bad override fails at startup, not per-call
        let parsed: Url = base
            .parse()
            .with_context(|| format!("Invalid style guide base URL: {base}"))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("style-lint/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            strip: Strip::new()?,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves live guidance for a category by fetching its page.
    pub async fn resolve(&self, category: Category) -> Result<Guidance, GuidanceError> {
        let url = format!("{}/{}", self.base_url, category_page(category));
        let page = self.fetch_page(&url).await?;
        Ok(Guidance {
            text: page.preview,
            link: page.url,
        })
    }

    /// Searches the core style-guide pages for `query`, ranking by the
    /// number of query terms found in each page.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GuidanceError> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for (section, path) in CORE_SECTIONS {
            let url = format!("{}/{path}", self.base_url);
            let page = match self.fetch_page(&url).await {
                Ok(page) => page,
                Err(err) => {
                    // One unreachable page should not sink the search
                    tracing::debug!("Skipping {section} during search: {err}");
                    continue;
                }
            };

            let haystack = page.text.to_lowercase();
            let hits = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
            if hits == 0 {
                continue;
            }

            let relevance = if hits * 2 >= terms.len() {
                Relevance::High
            } else {
                Relevance::Medium
            };
            results.push(SearchResult {
                section: (*section).to_string(),
                title: page.title,
                link: page.url,
                relevance,
                preview: page.preview,
            });
        }

        // Highest relevance first; section order is stable within a tier
        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        results.truncate(5);
        Ok(results)
    }

    /// Fetches official guidance pages for a free-form topic. Topic
    /// keywords map to sections; an unrecognized topic falls back to
    /// all core sections. At most three pages are returned.
    pub async fn official_guidance(&self, topic: &str) -> Result<Vec<Page>, GuidanceError> {
        let topic_lower = topic.to_lowercase();
        let mut sections: Vec<&str> = Vec::new();
        for (keyword, section) in [
            ("voice", "voice_tone"),
            ("tone", "voice_tone"),
            ("tips", "top_tips"),
            ("bias", "bias_free"),
            ("inclusive", "bias_free"),
            ("writing", "writing_tips"),
            ("grammar", "writing_tips"),
            ("words", "word_list"),
            ("terminology", "word_list"),
        ] {
            if topic_lower.contains(keyword) && !sections.contains(&section) {
                sections.push(section);
            }
        }
        if sections.is_empty() {
            sections = CORE_SECTIONS.iter().map(|(s, _)| *s).collect();
        }

        let mut pages = Vec::new();
        for section in sections.into_iter().take(3) {
            let Some((_, path)) = CORE_SECTIONS.iter().find(|(s, _)| *s == section) else {
                continue;
            };
            let url = format!("{}/{path}", self.base_url);
            match self.fetch_page(&url).await {
                Ok(page) => pages.push(page),
                Err(err) => tracing::debug!("Skipping {section} for topic guidance: {err}"),
            }
        }

        if pages.is_empty() {
            return Err(GuidanceError::NotFound(topic.to_string()));
        }
        Ok(pages)
    }

    /// Fetches one page, using the cache when fresh.
    async fn fetch_page(&self, url: &str) -> Result<Page, GuidanceError> {
        if let Some(page) = self.cache_get(url) {
            tracing::debug!("Cache hit for {url}");
            return Ok(page);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GuidanceError::Timeout
                } else {
                    GuidanceError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuidanceError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GuidanceError::Network(e.to_string()))?;

        let page = self.strip_page(url, &body);
        self.cache_put(url, &page);
        Ok(page)
    }

    /// Strips markup from a raw HTML body and builds a [`Page`].
    fn strip_page(&self, url: &str, body: &str) -> Page {
        let title = self
            .strip
            .title
            .captures(body)
            .and_then(|c| c.get(1))
            .map_or_else(|| "Style Guide".to_string(), |m| m.as_str().trim().to_string());

        let without_scripts = self.strip.script.replace_all(body, " ");
        let without_styles = self.strip.style.replace_all(&without_scripts, " ");
        let without_tags = self.strip.tag.replace_all(&without_styles, " ");
        let text = without_tags
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let preview = crate::utils::truncate_chars(&text, PREVIEW_CHARS).to_string();

        Page {
            title,
            url: url.to_string(),
            preview,
            text,
        }
    }

    fn cache_get(&self, url: &str) -> Option<Page> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(url)
            .filter(|c| c.fetched_at.elapsed() < CACHE_TTL)
            .map(|c| c.page.clone())
    }

    fn cache_put(&self, url: &str, page: &Page) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.insert(
            url.to_string(),
            CachedPage {
                page: page.clone(),
                fetched_at: Instant::now(),
            },
        );
    }
}
