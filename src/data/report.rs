//! Analysis report types for style checking.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::metrics::TextMetrics;

/// Style dimension a rule or issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Voice and tone (contractions, direct address).
    VoiceTone,
    /// Grammar patterns (passive voice, sentence length).
    Grammar,
    /// Approved terminology.
    Terminology,
    /// Inclusive, bias-free language.
    Accessibility,
}

impl Category {
    /// All categories in rule-evaluation order.
    pub const ALL: [Category; 4] = [
        Category::VoiceTone,
        Category::Grammar,
        Category::Terminology,
        Category::Accessibility,
    ];

    /// Parses a category name (case-insensitive). Returns `None` for
    /// anything that is not one of the four category names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "voice_tone" | "voice-tone" | "voice" => Some(Category::VoiceTone),
            "grammar" => Some(Category::Grammar),
            "terminology" => Some(Category::Terminology),
            "accessibility" => Some(Category::Accessibility),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::VoiceTone => write!(f, "voice_tone"),
            Category::Grammar => write!(f, "grammar"),
            Category::Terminology => write!(f, "terminology"),
            Category::Accessibility => write!(f, "accessibility"),
        }
    }
}

/// Analysis scope: a single category, everything, or nothing.
///
/// Unknown scope strings parse to [`Scope::Unmatched`], which selects no
/// rules. The catalog is advisory, so this is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Run every rule in the catalog.
    Comprehensive,
    /// Run only rules in one category.
    Category(Category),
    /// Unknown scope string; matches no rules.
    Unmatched,
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Comprehensive
    }
}

impl std::str::FromStr for Scope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "comprehensive" | "all" => Ok(Scope::Comprehensive),
            other => match Category::parse(other) {
                Some(category) => Ok(Scope::Category(category)),
                None => {
                    tracing::debug!("Unknown analysis scope {other:?}, matching no rules");
                    Ok(Scope::Unmatched)
                }
            },
        }
    }
}

impl Scope {
    /// Parses a scope from a string (infallible; unknown scopes match nothing).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        // FromStr impl is infallible (unknown values become Unmatched with a log).
        s.parse().unwrap_or(Scope::Unmatched)
    }

    /// Whether rules in `category` are selected by this scope.
    #[must_use]
    pub fn selects(&self, category: Category) -> bool {
        match self {
            Scope::Comprehensive => true,
            Scope::Category(c) => *c == category,
            Scope::Unmatched => false,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Comprehensive => write!(f, "comprehensive"),
            Scope::Category(c) => c.fmt(f),
            Scope::Unmatched => write!(f, "unmatched"),
        }
    }
}

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; never affects report status.
    Info,
    /// Counts toward the needs_improvement/poor thresholds.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single style violation detected in one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Category of the violated rule.
    pub category: Category,
    /// Human-readable description of the violation.
    pub message: String,
    /// Replacement text or structural advice.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
    /// Character offset of the match, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<usize>,
}

/// Resolved guidance for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    /// Authoritative guidance text.
    pub text: String,
    /// Link to the style-guide page the text came from.
    pub link: String,
}

/// Overall report status derived from issue severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Zero issues, or info-level issues only.
    Good,
    /// At least one warning.
    NeedsImprovement,
    /// More than [`POOR_WARNING_THRESHOLD`] warnings.
    Poor,
}

/// Warning count above which a report is rated poor.
pub const POOR_WARNING_THRESHOLD: usize = 5;

impl ReportStatus {
    /// Derives the status from a list of issues. Pure function of the
    /// severities; thresholds are fixed so reports stay comparable.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        if warnings == 0 {
            ReportStatus::Good
        } else if warnings <= POOR_WARNING_THRESHOLD {
            ReportStatus::NeedsImprovement
        } else {
            ReportStatus::Poor
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Good => write!(f, "good"),
            ReportStatus::NeedsImprovement => write!(f, "needs_improvement"),
            ReportStatus::Poor => write!(f, "poor"),
        }
    }
}

/// Complete result of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall status derived from issue severities.
    pub status: ReportStatus,
    /// Scope the analysis ran with.
    pub scope: String,
    /// Word/sentence statistics for the input text.
    pub metrics: TextMetrics,
    /// Issues in rule-evaluation order.
    pub issues: Vec<Issue>,
    /// Resolved guidance per category; entries are omitted when
    /// resolution failed or enrichment was disabled.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub guidance_links: BTreeMap<Category, Guidance>,
}

impl AnalysisReport {
    /// Creates a report, deriving the status from the issues.
    pub fn new(scope: Scope, metrics: TextMetrics, issues: Vec<Issue>) -> Self {
        let status = ReportStatus::from_issues(&issues);
        Self {
            status,
            scope: scope.to_string(),
            metrics,
            issues,
            guidance_links: BTreeMap::new(),
        }
    }

    /// Number of warning-severity issues.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Number of info-severity issues.
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Info)
            .count()
    }
}

/// One prioritized improvement produced by `suggest_improvements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    /// The underlying problem.
    pub issue: String,
    /// What to do about it.
    pub suggestion: String,
    /// Category of the underlying rule.
    pub category: Category,
    /// Severity level.
    pub severity: Severity,
}

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> Issue {
        Issue {
            category: Category::Grammar,
            message: "test".to_string(),
            suggestion: "test".to_string(),
            severity,
            location: None,
        }
    }

    // ── Category / Scope parsing ───────────────────────────────────

    #[test]
    fn category_parse_known() {
        assert_eq!(Category::parse("voice_tone"), Some(Category::VoiceTone));
        assert_eq!(Category::parse("GRAMMAR"), Some(Category::Grammar));
        assert_eq!(Category::parse("terminology"), Some(Category::Terminology));
        assert_eq!(
            Category::parse("accessibility"),
            Some(Category::Accessibility)
        );
    }

    #[test]
    fn category_parse_unknown() {
        assert_eq!(Category::parse("spelling"), None);
    }

    #[test]
    fn scope_parse_comprehensive() {
        assert_eq!(Scope::parse("comprehensive"), Scope::Comprehensive);
        assert_eq!(Scope::parse("all"), Scope::Comprehensive);
        assert_eq!(Scope::parse(""), Scope::Comprehensive);
    }

    #[test]
    fn scope_parse_category() {
        assert_eq!(
            Scope::parse("terminology"),
            Scope::Category(Category::Terminology)
        );
    }

    #[test]
    fn scope_parse_unknown_matches_nothing() {
        let scope = Scope::parse("spelling");
        assert_eq!(scope, Scope::Unmatched);
        for category in Category::ALL {
            assert!(!scope.selects(category));
        }
    }

    #[test]
    fn scope_comprehensive_selects_all() {
        for category in Category::ALL {
            assert!(Scope::Comprehensive.selects(category));
        }
    }

    #[test]
    fn scope_category_selects_only_itself() {
        let scope = Scope::Category(Category::Terminology);
        assert!(scope.selects(Category::Terminology));
        assert!(!scope.selects(Category::Grammar));
    }

    // ── status derivation ──────────────────────────────────────────

    #[test]
    fn status_good_when_empty() {
        assert_eq!(ReportStatus::from_issues(&[]), ReportStatus::Good);
    }

    #[test]
    fn status_good_with_info_only() {
        let issues = vec![issue(Severity::Info), issue(Severity::Info)];
        assert_eq!(ReportStatus::from_issues(&issues), ReportStatus::Good);
    }

    #[test]
    fn status_needs_improvement_with_one_warning() {
        let issues = vec![issue(Severity::Warning)];
        assert_eq!(
            ReportStatus::from_issues(&issues),
            ReportStatus::NeedsImprovement
        );
    }

    #[test]
    fn status_needs_improvement_at_threshold() {
        let issues: Vec<_> = (0..POOR_WARNING_THRESHOLD)
            .map(|_| issue(Severity::Warning))
            .collect();
        assert_eq!(
            ReportStatus::from_issues(&issues),
            ReportStatus::NeedsImprovement
        );
    }

    #[test]
    fn status_poor_above_threshold() {
        let issues: Vec<_> = (0..=POOR_WARNING_THRESHOLD)
            .map(|_| issue(Severity::Warning))
            .collect();
        assert_eq!(ReportStatus::from_issues(&issues), ReportStatus::Poor);
    }

    #[test]
    fn status_info_does_not_count_toward_threshold() {
        let mut issues: Vec<_> = (0..20).map(|_| issue(Severity::Info)).collect();
        issues.push(issue(Severity::Warning));
        assert_eq!(
            ReportStatus::from_issues(&issues),
            ReportStatus::NeedsImprovement
        );
    }

    // ── serialization ──────────────────────────────────────────────

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::NeedsImprovement).unwrap(),
            "\"needs_improvement\""
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::VoiceTone).unwrap(),
            "\"voice_tone\""
        );
    }
}
