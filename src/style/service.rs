//! High-level service facade wiring the catalog, ledger, and resolver.

use serde::{Deserialize, Serialize};

use crate::data::report::{AnalysisReport, Category, Improvement, Scope};
use crate::guidance::{GuidanceError, GuidanceResolver, Page, SearchResult};
use crate::style::catalog::RuleCatalog;
use crate::style::engine::{AnalysisEngine, AnalysisOptions};
use crate::style::ledger::{LedgerSummary, SessionLedger};
use crate::style::review::{DocumentReview, DocumentReviewer};

/// One static guideline entry returned by [`StyleService::style_guidelines`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelineEntry {
    /// Category the guideline covers.
    pub category: Category,
    /// Guideline text.
    pub text: String,
    /// Link to the style-guide page.
    pub link: String,
}

/// The top-level operation surface: one instance per session, shared
/// across calls so the ledger accumulates.
#[derive(Debug)]
pub struct StyleService {
    engine: AnalysisEngine,
    reviewer: DocumentReviewer,
}

impl StyleService {
    /// Creates a service with the given resolver backing.
    pub fn new(resolver: GuidanceResolver) -> anyhow::Result<Self> {
        Self::with_engine(AnalysisEngine::new(
            RuleCatalog::builtin()?,
            SessionLedger::new(),
            resolver,
        ))
    }

    /// Creates a service around an existing engine.
    pub fn with_engine(engine: AnalysisEngine) -> anyhow::Result<Self> {
        Ok(Self {
            engine,
            reviewer: DocumentReviewer::new()?,
        })
    }

    /// The underlying engine.
    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    /// Analyzes text for style issues. `scope` is a free-form scope
    /// string (unknown values match no rules); `dry_run` suppresses
    /// ledger tracking.
    pub async fn analyze_content(&self, text: &str, scope: &str, dry_run: bool) -> AnalysisReport {
        let scope = Scope::parse(scope);
        self.engine
            .analyze(text, scope, AnalysisOptions { dry_run, enrich: true })
            .await
    }

    /// Returns the static guideline entries selected by `scope`. All
    /// categories for a comprehensive scope, one for a category scope,
    /// none for an unknown scope.
    pub fn style_guidelines(&self, scope: Scope) -> Vec<GuidelineEntry> {
        Category::ALL
            .into_iter()
            .filter(|c| scope.selects(*c))
            .map(|category| GuidelineEntry {
                category,
                text: crate::guidance::offline::guideline_text(category).to_string(),
                link: crate::guidance::offline::category_link(category),
            })
            .collect()
    }

    /// Generates improvement suggestions without touching the ledger.
    pub async fn suggest_improvements(
        &self,
        text: &str,
        focus: Option<Category>,
    ) -> Vec<Improvement> {
        self.engine.suggest_improvements(text, focus).await
    }

    /// Searches the style guide for `query` via the configured resolver.
    pub async fn search_style_guide(
        &self,
        query: &str,
    ) -> Result<Vec<SearchResult>, GuidanceError> {
        self.engine.resolver().search(query).await
    }

    /// Fetches official guidance pages for a topic (web resolver only).
    pub async fn official_guidance(&self, topic: &str) -> Result<Vec<Page>, GuidanceError> {
        self.engine.resolver().official_guidance(topic).await
    }

    /// Reviews a full document: dimension quality scores, strengths,
    /// critical issues, prioritized recommendations, rewrite examples,
    /// and next steps. Runs a dry-run comprehensive analysis; the
    /// ledger is not touched.
    pub async fn review_document(&self, text: &str) -> DocumentReview {
        let report = self
            .engine
            .analyze(
                text,
                Scope::Comprehensive,
                AnalysisOptions {
                    dry_run: true,
                    enrich: false,
                },
            )
            .await;
        self.reviewer.review(text, &report)
    }

    /// Summarizes the changes tracked in the current session.
    pub fn github_updates(&self) -> LedgerSummary {
        self.engine.ledger().summarize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ledger::EMPTY_SUMMARY_LINE;

    fn service() -> StyleService {
        StyleService::new(GuidanceResolver::offline()).unwrap()
    }

    #[tokio::test]
    async fn analyze_content_parses_scope_string() {
        let service = service();
        let report = service
            .analyze_content("The user should login first", "terminology", true)
            .await;
        assert!(!report.issues.is_empty());
        assert_eq!(report.scope, "terminology");
    }

    #[tokio::test]
    async fn analyze_content_unknown_scope_is_clean() {
        let service = service();
        let report = service
            .analyze_content("guys login e-mail", "spelling", true)
            .await;
        assert!(report.issues.is_empty());
    }

    #[test]
    fn guidelines_comprehensive_covers_all_categories() {
        let entries = service().style_guidelines(Scope::Comprehensive);
        assert_eq!(entries.len(), Category::ALL.len());
    }

    #[test]
    fn guidelines_single_category() {
        let entries = service().style_guidelines(Scope::Category(Category::Grammar));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Grammar);
        assert!(entries[0].text.contains("active voice"));
    }

    #[test]
    fn guidelines_unknown_scope_is_empty() {
        assert!(service().style_guidelines(Scope::Unmatched).is_empty());
    }

    #[tokio::test]
    async fn updates_reflect_tracked_analyses() {
        let service = service();

        let summary = service.github_updates();
        assert_eq!(summary.lines, vec![EMPTY_SUMMARY_LINE.to_string()]);
        assert_eq!(summary.total, 0);

        let report = service
            .analyze_content("The user should login first", "comprehensive", false)
            .await;
        let summary = service.github_updates();
        assert_eq!(summary.total, report.issues.len());
    }

    #[tokio::test]
    async fn review_document_scores_all_dimensions() {
        let service = service();
        let review = service
            .review_document("The report was reviewed by the guys, then an e-mail was sent.")
            .await;

        assert!(review.scores.accessibility < 10.0);
        assert!(review.scores.compliance < 10.0);
        assert!(review.overall_score < 9.0);
        assert!(!review.strengths.is_empty());
        assert!(!review.recommendations.high_priority.is_empty());
        assert!(!review.next_steps.is_empty());
    }

    #[tokio::test]
    async fn review_document_leaves_ledger_untouched() {
        let service = service();
        service
            .review_document("The user should login to the web site.")
            .await;
        assert_eq!(service.github_updates().total, 0);
    }

    #[tokio::test]
    async fn search_works_offline() {
        let results = service().search_style_guide("voice").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn official_guidance_requires_web() {
        let err = service().official_guidance("voice").await.unwrap_err();
        assert!(matches!(err, GuidanceError::OfflineMode));
    }
}
