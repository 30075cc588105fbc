//! The analysis engine: runs the catalog against input text and builds
//! a scored issue report.

use std::collections::BTreeSet;
use std::time::Duration;

use futures::future::join_all;

use crate::data::report::{AnalysisReport, Category, Improvement, Issue, Scope};
use crate::guidance::GuidanceResolver;
use crate::style::catalog::RuleCatalog;
use crate::style::ledger::SessionLedger;
use crate::style::metrics::TextMetrics;

/// Bound on one guidance-resolution call. A stalled fetch must not
/// stall the engine; on timeout the category's enrichment is omitted.
const RESOLVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Sentence length above which a general readability improvement is
/// suggested.
const LONG_AVG_SENTENCE: f64 = 25.0;

/// Per-call analysis options.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Suppress ledger writes (read-only preview).
    pub dry_run: bool,
    /// Attach resolved guidance per issue category.
    pub enrich: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            enrich: true,
        }
    }
}

/// Runs style rules against text and produces [`AnalysisReport`]s.
///
/// Safe to share across concurrent callers: the catalog is read-only
/// and the ledger serializes its own writes.
#[derive(Debug)]
pub struct AnalysisEngine {
    catalog: RuleCatalog,
    ledger: SessionLedger,
    resolver: GuidanceResolver,
}

impl AnalysisEngine {
    /// Creates an engine from its parts.
    pub fn new(catalog: RuleCatalog, ledger: SessionLedger, resolver: GuidanceResolver) -> Self {
        Self {
            catalog,
            ledger,
            resolver,
        }
    }

    /// Convenience constructor: builtin catalog, fresh ledger, offline
    /// resolver.
    pub fn offline() -> anyhow::Result<Self> {
        Ok(Self::new(
            RuleCatalog::builtin()?,
            SessionLedger::new(),
            GuidanceResolver::offline(),
        ))
    }

    /// The session ledger shared by all analyses on this engine.
    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// The rule catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// The guidance resolver.
    pub fn resolver(&self) -> &GuidanceResolver {
        &self.resolver
    }

    /// Analyzes `text` against the rules selected by `scope`.
    ///
    /// Total over the string domain: malformed or empty input never
    /// fails. Empty text yields zero metrics, zero issues, and a good
    /// status. Each produced issue is appended to the session ledger
    /// unless `opts.dry_run`.
    pub async fn analyze(&self, text: &str, scope: Scope, opts: AnalysisOptions) -> AnalysisReport {
        let metrics = TextMetrics::compute(text);

        if text.trim().is_empty() {
            return AnalysisReport::new(scope, metrics, Vec::new());
        }

        let issues = self.run_rules(text, scope);

        if !opts.dry_run {
            for issue in &issues {
                self.ledger.record(issue);
            }
        }

        let mut report = AnalysisReport::new(scope, metrics, issues);
        if opts.enrich && !report.issues.is_empty() {
            report.guidance_links = self.enrich(&report.issues).await;
        }

        tracing::debug!(
            scope = %scope,
            issues = report.issues.len(),
            status = %report.status,
            "analysis complete"
        );
        report
    }

    /// Evaluates the selected rules in catalog order. A rule produces
    /// at most one issue per call unless it is marked multi-match.
    fn run_rules(&self, text: &str, scope: Scope) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in self.catalog.rules_for(scope) {
            let locations = rule.matcher.find(text);
            if locations.is_empty() {
                continue;
            }

            let take = if rule.multi_match { locations.len() } else { 1 };
            for location in locations.into_iter().take(take) {
                issues.push(Issue {
                    category: rule.category,
                    message: rule.message.to_string(),
                    suggestion: rule.suggestion.to_string(),
                    severity: rule.severity,
                    location,
                });
            }
        }

        issues
    }

    /// Resolves guidance for each distinct category among `issues`,
    /// concurrently and bounded by [`RESOLVER_TIMEOUT`]. Failures are
    /// logged and the category omitted; the report is never blocked.
    async fn enrich(
        &self,
        issues: &[Issue],
    ) -> std::collections::BTreeMap<Category, crate::data::report::Guidance> {
        let categories: BTreeSet<Category> = issues.iter().map(|i| i.category).collect();

        let lookups = categories.into_iter().map(|category| {
            let message = issues
                .iter()
                .find(|i| i.category == category)
                .map_or("", |i| i.message.as_str());
            async move {
                let result =
                    tokio::time::timeout(RESOLVER_TIMEOUT, self.resolver.resolve(category, message))
                        .await;
                match result {
                    Ok(Ok(guidance)) => Some((category, guidance)),
                    Ok(Err(err)) => {
                        tracing::debug!("Guidance resolution failed for {category}: {err}");
                        None
                    }
                    Err(_) => {
                        tracing::debug!("Guidance resolution timed out for {category}");
                        None
                    }
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }

    /// Generates ordered improvement suggestions for `text`, optionally
    /// restricted to one category. Runs a dry-run comprehensive
    /// analysis; the ledger is not touched.
    pub async fn suggest_improvements(
        &self,
        text: &str,
        focus: Option<Category>,
    ) -> Vec<Improvement> {
        let report = self
            .analyze(
                text,
                Scope::Comprehensive,
                AnalysisOptions {
                    dry_run: true,
                    enrich: false,
                },
            )
            .await;

        let mut improvements: Vec<Improvement> = report
            .issues
            .iter()
            .filter(|i| focus.map_or(true, |f| i.category == f))
            .map(|i| Improvement {
                issue: i.message.clone(),
                suggestion: i.suggestion.clone(),
                category: i.category,
                severity: i.severity,
            })
            .collect();

        if report.metrics.avg_words_per_sentence > LONG_AVG_SENTENCE
            && focus.map_or(true, |f| f == Category::Grammar)
        {
            improvements.push(Improvement {
                issue: "Average sentence length is high".to_string(),
                suggestion: "Break long sentences into shorter, clearer ones".to_string(),
                category: Category::Grammar,
                severity: crate::data::report::Severity::Info,
            });
        }

        improvements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::{ReportStatus, Severity};
    use crate::guidance::WebGuide;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::offline().unwrap()
    }

    fn dry() -> AnalysisOptions {
        AnalysisOptions {
            dry_run: true,
            enrich: false,
        }
    }

    // ── totality and empty input ───────────────────────────────────

    #[tokio::test]
    async fn empty_text_is_good_with_zero_metrics() {
        let report = engine().analyze("", Scope::Comprehensive, dry()).await;
        assert_eq!(report.status, ReportStatus::Good);
        assert!(report.issues.is_empty());
        assert_eq!(report.metrics.word_count, 0);
        assert_eq!(report.metrics.sentence_count, 0);
    }

    #[tokio::test]
    async fn whitespace_text_is_good() {
        let report = engine().analyze("  \n ", Scope::Comprehensive, dry()).await;
        assert_eq!(report.status, ReportStatus::Good);
        assert!(report.issues.is_empty());
    }

    // ── determinism ────────────────────────────────────────────────

    #[tokio::test]
    async fn repeated_analysis_is_byte_identical() {
        let engine = engine();
        let text = "The user should login first. The file was deleted.";
        let opts = AnalysisOptions {
            dry_run: true,
            enrich: true,
        };
        let first = engine.analyze(text, Scope::Comprehensive, opts).await;
        let second = engine.analyze(text, Scope::Comprehensive, opts).await;
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    // ── category filtering ─────────────────────────────────────────

    #[tokio::test]
    async fn category_scope_filters_issues() {
        let engine = engine();
        let text = "The user should login first, and the file was deleted by him.";
        let report = engine
            .analyze(text, Scope::Category(Category::Terminology), dry())
            .await;
        assert!(!report.issues.is_empty());
        assert!(report
            .issues
            .iter()
            .all(|i| i.category == Category::Terminology));
    }

    #[tokio::test]
    async fn unknown_scope_matches_nothing() {
        let engine = engine();
        let report = engine
            .analyze("guys login e-mail", Scope::parse("spelling"), dry())
            .await;
        assert!(report.issues.is_empty());
        assert_eq!(report.status, ReportStatus::Good);
    }

    // ── known patterns ─────────────────────────────────────────────

    #[tokio::test]
    async fn login_as_verb_recommends_sign_in() {
        let engine = engine();
        let report = engine
            .analyze(
                "The user should login first",
                Scope::Comprehensive,
                dry(),
            )
            .await;
        let issue = report
            .issues
            .iter()
            .find(|i| i.category == Category::Terminology)
            .expect("terminology issue expected");
        assert_eq!(issue.suggestion, "sign in");
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn issue_order_follows_catalog_order() {
        let engine = engine();
        let text = "The user should login first. The report was reviewed by the guys.";
        let report = engine.analyze(text, Scope::Comprehensive, dry()).await;
        let categories: Vec<_> = report.issues.iter().map(|i| i.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    // ── match capping ──────────────────────────────────────────────

    #[tokio::test]
    async fn single_match_rule_capped_at_one_issue() {
        let engine = engine();
        let text = "Send an e-mail, then another e-mail.";
        let report = engine
            .analyze(text, Scope::Category(Category::Terminology), dry())
            .await;
        let email_issues = report
            .issues
            .iter()
            .filter(|i| i.message.contains("'email'"))
            .count();
        assert_eq!(email_issues, 1);
    }

    #[tokio::test]
    async fn multi_match_rule_reports_each_occurrence() {
        let engine = engine();
        let text = "The file was deleted. The log was rotated.";
        let report = engine
            .analyze(text, Scope::Category(Category::Grammar), dry())
            .await;
        let passive = report
            .issues
            .iter()
            .filter(|i| i.message.contains("Passive voice"))
            .count();
        assert_eq!(passive, 2);
    }

    // ── ledger interaction ─────────────────────────────────────────

    #[tokio::test]
    async fn tracking_appends_one_entry_per_issue() {
        let engine = engine();
        let text = "The user should login first";
        let report = engine
            .analyze(
                text,
                Scope::Comprehensive,
                AnalysisOptions {
                    dry_run: false,
                    enrich: false,
                },
            )
            .await;
        assert_eq!(engine.ledger().total(), report.issues.len());
    }

    #[tokio::test]
    async fn dry_run_leaves_ledger_unchanged() {
        let engine = engine();
        for _ in 0..3 {
            engine
                .analyze("guys login e-mail", Scope::Comprehensive, dry())
                .await;
        }
        assert_eq!(engine.ledger().total(), 0);
    }

    // ── enrichment ─────────────────────────────────────────────────

    #[tokio::test]
    async fn enrichment_covers_issue_categories() {
        let engine = engine();
        let text = "The user should login first";
        let opts = AnalysisOptions {
            dry_run: true,
            enrich: true,
        };
        let report = engine.analyze(text, Scope::Comprehensive, opts).await;

        let categories: BTreeSet<_> = report.issues.iter().map(|i| i.category).collect();
        for category in categories {
            assert!(report.guidance_links.contains_key(&category));
        }
    }

    #[tokio::test]
    async fn resolver_failure_only_omits_guidance() {
        // Port 9 (discard) is closed in practice, so every fetch fails fast
        let failing = AnalysisEngine::new(
            RuleCatalog::builtin().unwrap(),
            SessionLedger::new(),
            GuidanceResolver::Web(WebGuide::with_base_url("http://127.0.0.1:9").unwrap()),
        );
        let working = engine();

        let text = "The user should login first";
        let opts = AnalysisOptions {
            dry_run: true,
            enrich: true,
        };
        let degraded = failing.analyze(text, Scope::Comprehensive, opts).await;
        let full = working.analyze(text, Scope::Comprehensive, opts).await;

        assert!(degraded.guidance_links.is_empty());
        assert_eq!(
            serde_json::to_vec(&degraded.issues).unwrap(),
            serde_json::to_vec(&full.issues).unwrap()
        );
        assert_eq!(degraded.metrics, full.metrics);
        assert_eq!(degraded.status, full.status);
    }

    // ── suggestions ────────────────────────────────────────────────

    #[tokio::test]
    async fn suggestions_filtered_by_focus() {
        let engine = engine();
        let text = "The user should login first, and the file was deleted by him.";
        let all = engine.suggest_improvements(text, None).await;
        let terminology = engine
            .suggest_improvements(text, Some(Category::Terminology))
            .await;
        assert!(terminology.len() < all.len());
        assert!(terminology
            .iter()
            .all(|i| i.category == Category::Terminology));
    }

    #[tokio::test]
    async fn long_average_sentences_add_general_advice() {
        let engine = engine();
        let text = format!("You can {}end.", "really quite thoroughly ".repeat(12));
        let improvements = engine.suggest_improvements(&text, None).await;
        assert!(improvements
            .iter()
            .any(|i| i.issue.contains("sentence length")));
    }

    #[tokio::test]
    async fn suggestions_do_not_touch_ledger() {
        let engine = engine();
        engine
            .suggest_improvements("The user should login first", None)
            .await;
        assert_eq!(engine.ledger().total(), 0);
    }
}
