//! Document review: per-dimension quality scores and an executive
//! summary derived from a comprehensive analysis.
//!
//! Scores are on a 0-10 scale per dimension. They are a pure function
//! of the issue list, the metrics, and two tone signals (contractions
//! and direct reader address), so reviewing the same text twice yields
//! the same review.

use std::fmt;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::report::{AnalysisReport, Category};
use crate::style::catalog::CONTRACTIONS;
use crate::style::metrics::TextMetrics;

/// Replacements offered in inclusive-language rewrite examples.
const INCLUSIVE_REPLACEMENTS: &[(&str, &str)] = &[
    ("guys", "everyone"),
    ("mankind", "humanity"),
    ("blacklist", "block list"),
    ("whitelist", "allow list"),
    ("master", "primary"),
    ("slave", "secondary"),
];

/// Quality tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    /// Overall score 9 or above.
    Excellent,
    /// Overall score 7 to 9.
    Good,
    /// Overall score 5 to 7.
    NeedsImprovement,
    /// Overall score below 5.
    RequiresMajorRevision,
}

impl QualityLevel {
    /// Maps an overall score to its tier.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            QualityLevel::Excellent
        } else if score >= 7.0 {
            QualityLevel::Good
        } else if score >= 5.0 {
            QualityLevel::NeedsImprovement
        } else {
            QualityLevel::RequiresMajorRevision
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityLevel::Excellent => write!(f, "excellent"),
            QualityLevel::Good => write!(f, "good"),
            QualityLevel::NeedsImprovement => write!(f, "needs_improvement"),
            QualityLevel::RequiresMajorRevision => write!(f, "requires_major_revision"),
        }
    }
}

/// Per-dimension quality scores, each clamped to 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Voice and tone: penalized per voice issue, credited for
    /// contractions and direct reader address.
    pub voice_tone: f64,
    /// Clarity: penalized per grammar issue and for long averages.
    pub clarity: f64,
    /// Accessibility: heavily penalized per inclusive-language issue.
    pub accessibility: f64,
    /// Terminology compliance: penalized per terminology issue.
    pub compliance: f64,
}

impl DimensionScores {
    /// Mean of the four dimensions, rounded to one decimal.
    #[must_use]
    pub fn overall(&self) -> f64 {
        round1((self.voice_tone + self.clarity + self.accessibility + self.compliance) / 4.0)
    }
}

/// One before/after rewrite example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteExample {
    /// What the example demonstrates.
    pub title: String,
    /// The problematic form.
    pub before: String,
    /// The improved form.
    pub after: String,
    /// Why the rewrite is better.
    pub explanation: String,
}

/// Improvement recommendations bucketed by priority. Empty buckets
/// carry a single all-clear line so the review always reads complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    /// Fix before publishing.
    pub high_priority: Vec<String>,
    /// Address in the next revision.
    pub medium_priority: Vec<String>,
    /// Nice to have.
    pub low_priority: Vec<String>,
}

/// Full review of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReview {
    /// Mean dimension score, rounded to one decimal.
    pub overall_score: f64,
    /// Tier for the overall score.
    pub quality_level: QualityLevel,
    /// Per-dimension scores.
    pub scores: DimensionScores,
    /// Word and sentence statistics for the document.
    pub metrics: TextMetrics,
    /// Up to three observed strengths.
    pub strengths: Vec<String>,
    /// Up to three issues needing immediate attention.
    pub critical_issues: Vec<String>,
    /// Prioritized recommendations.
    pub recommendations: Recommendations,
    /// Up to three before/after examples drawn from the findings.
    pub rewrite_examples: Vec<RewriteExample>,
    /// Suggested next steps for the author.
    pub next_steps: Vec<String>,
}

/// Produces [`DocumentReview`]s from a text plus its comprehensive
/// analysis report. Patterns are compiled once at construction.
#[derive(Debug)]
pub struct DocumentReviewer {
    contractions: Regex,
    direct_address: Regex,
}

impl DocumentReviewer {
    /// Compiles the reviewer's tone patterns. Failure is a fatal
    /// startup error, like catalog compilation.
    pub fn new() -> Result<Self> {
        Ok(Self {
            contractions: Regex::new(CONTRACTIONS)
                .context("Failed to compile contraction pattern")?,
            direct_address: Regex::new(r"(?i)\byou\b")
                .context("Failed to compile direct-address pattern")?,
        })
    }

    /// Reviews `text` given its comprehensive analysis `report`.
    /// Pure: no ledger writes, no guidance resolution.
    pub fn review(&self, text: &str, report: &AnalysisReport) -> DocumentReview {
        let scores = self.score(text, report);
        let overall_score = scores.overall();

        DocumentReview {
            overall_score,
            quality_level: QualityLevel::from_score(overall_score),
            scores,
            metrics: report.metrics,
            strengths: strengths(report, &scores),
            critical_issues: critical_issues(report),
            recommendations: self.recommendations(text, report, &scores),
            rewrite_examples: self.rewrite_examples(text, report),
            next_steps: next_steps(overall_score),
        }
    }

    fn score(&self, text: &str, report: &AnalysisReport) -> DimensionScores {
        let issues_in = |category: Category| {
            report.issues.iter().filter(|i| i.category == category).count() as f64
        };
        let contractions = self.contractions.find_iter(text).count() as f64;
        let direct = self.direct_address.find_iter(text).count() as f64;

        let voice_tone = 10.0 - 2.0 * issues_in(Category::VoiceTone)
            + (contractions * 0.5).min(2.0)
            + (direct * 0.2).min(1.0);

        let mut clarity = 10.0 - 1.5 * issues_in(Category::Grammar);
        let avg = report.metrics.avg_words_per_sentence;
        if avg > 25.0 {
            clarity -= (avg - 25.0) * 0.1;
        }

        let accessibility = 10.0 - 3.0 * issues_in(Category::Accessibility);
        let compliance = 10.0 - 2.0 * issues_in(Category::Terminology);

        DimensionScores {
            voice_tone: clamp10(voice_tone),
            clarity: clamp10(clarity),
            accessibility: clamp10(accessibility),
            compliance: clamp10(compliance),
        }
    }

    fn recommendations(
        &self,
        text: &str,
        report: &AnalysisReport,
        scores: &DimensionScores,
    ) -> Recommendations {
        let mut high = Vec::new();
        let mut medium = Vec::new();
        let mut low = Vec::new();

        if has_issues(report, Category::Accessibility) {
            high.push("Replace non-inclusive terms before publishing".to_string());
        }
        if scores.accessibility < 7.0 {
            high.push("Address accessibility concerns first".to_string());
        }

        if scores.voice_tone < 7.0 {
            medium.push("Warm up the tone with contractions and direct address".to_string());
        }
        if scores.clarity < 7.0 {
            medium.push("Simplify long or passive sentences".to_string());
        }
        if report.metrics.avg_words_per_sentence > 25.0 {
            medium.push("Break long sentences into shorter ones".to_string());
        }

        if scores.compliance < 9.0 {
            low.push("Align terminology with the approved word list".to_string());
        }
        if !self.contractions.is_match(text) {
            low.push("Add contractions for a more natural tone".to_string());
        }

        Recommendations {
            high_priority: or_fallback(high, "No critical issues found"),
            medium_priority: or_fallback(medium, "Minor style improvements available"),
            low_priority: or_fallback(low, "Content already reads well"),
        }
    }

    /// Up to three before/after examples, one per finding kind that
    /// actually occurred in the document.
    fn rewrite_examples(&self, text: &str, report: &AnalysisReport) -> Vec<RewriteExample> {
        let mut examples = Vec::new();

        if report
            .issues
            .iter()
            .any(|i| i.message.starts_with("Passive voice"))
        {
            examples.push(RewriteExample {
                title: "Active voice".to_string(),
                before: "The file was deleted by the process.".to_string(),
                after: "The process deleted the file.".to_string(),
                explanation: "Leading with the actor makes the sentence direct and clear"
                    .to_string(),
            });
        }

        let lowered = text.to_lowercase();
        if let Some((term, replacement)) = INCLUSIVE_REPLACEMENTS
            .iter()
            .find(|(term, _)| lowered.contains(term))
        {
            examples.push(RewriteExample {
                title: "Inclusive language".to_string(),
                before: format!("...{term}..."),
                after: format!("...{replacement}..."),
                explanation: format!("Replaced '{term}' with inclusive wording"),
            });
        }

        if !self.contractions.is_match(text) {
            examples.push(RewriteExample {
                title: "Natural tone".to_string(),
                before: "You cannot access this feature.".to_string(),
                after: "You can't access this feature.".to_string(),
                explanation: "Contractions make the tone warmer and more conversational"
                    .to_string(),
            });
        }

        examples.truncate(3);
        examples
    }
}

fn strengths(report: &AnalysisReport, scores: &DimensionScores) -> Vec<String> {
    let mut strengths = Vec::new();

    if scores.voice_tone >= 8.0 {
        strengths.push("Warm, conversational voice and tone".to_string());
    }
    if scores.accessibility >= 9.0 {
        strengths.push("Consistent inclusive language".to_string());
    }
    if report.metrics.word_count > 0 && report.metrics.avg_words_per_sentence <= 20.0 {
        strengths.push("Short sentences keep the text readable".to_string());
    }

    strengths.truncate(3);
    or_fallback(strengths, "Content follows basic writing principles")
}

fn critical_issues(report: &AnalysisReport) -> Vec<String> {
    let mut critical = Vec::new();

    let accessibility = report
        .issues
        .iter()
        .filter(|i| i.category == Category::Accessibility)
        .count();
    if accessibility > 0 {
        critical.push(format!(
            "{accessibility} instance(s) of non-inclusive or gendered language"
        ));
    }

    if report.metrics.avg_words_per_sentence > 30.0 {
        critical.push("Average sentence length is far above the readability target".to_string());
    }

    let passive = report
        .issues
        .iter()
        .filter(|i| i.message.starts_with("Passive voice"))
        .count();
    if passive > 5 {
        critical.push("Heavy passive voice use obscures who does what".to_string());
    }

    critical.truncate(3);
    or_fallback(critical, "No critical issues identified")
}

fn next_steps(overall: f64) -> Vec<String> {
    if overall >= 8.0 {
        vec![
            "Content is ready for publication".to_string(),
            "Consider a final proofreading pass".to_string(),
        ]
    } else if overall >= 6.0 {
        vec![
            "Address the medium-priority recommendations".to_string(),
            "Run another review after revising".to_string(),
        ]
    } else {
        vec![
            "Plan a major revision".to_string(),
            "Start with the high-priority items".to_string(),
        ]
    }
}

fn has_issues(report: &AnalysisReport, category: Category) -> bool {
    report.issues.iter().any(|i| i.category == category)
}

fn or_fallback(lines: Vec<String>, fallback: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![fallback.to_string()]
    } else {
        lines
    }
}

fn clamp10(score: f64) -> f64 {
    score.clamp(0.0, 10.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::{Issue, Scope, Severity};

    fn issue(category: Category, message: &str) -> Issue {
        Issue {
            category,
            message: message.to_string(),
            suggestion: String::new(),
            severity: Severity::Warning,
            location: None,
        }
    }

    fn report_for(text: &str, issues: Vec<Issue>) -> AnalysisReport {
        AnalysisReport::new(Scope::Comprehensive, TextMetrics::compute(text), issues)
    }

    fn reviewer() -> DocumentReviewer {
        DocumentReviewer::new().unwrap()
    }

    // ── quality levels ─────────────────────────────────────────────

    #[test]
    fn quality_level_thresholds() {
        assert_eq!(QualityLevel::from_score(9.0), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(8.9), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(7.0), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(5.0), QualityLevel::NeedsImprovement);
        assert_eq!(
            QualityLevel::from_score(4.9),
            QualityLevel::RequiresMajorRevision
        );
    }

    // ── scoring ────────────────────────────────────────────────────

    #[test]
    fn clean_text_scores_near_perfect() {
        let text = "You'll love this. It's simple and you can start right away.";
        let review = reviewer().review(text, &report_for(text, vec![]));

        assert_eq!(review.quality_level, QualityLevel::Excellent);
        assert!((review.scores.accessibility - 10.0).abs() < f64::EPSILON);
        assert!((review.scores.compliance - 10.0).abs() < f64::EPSILON);
        assert!(review.scores.voice_tone >= 10.0 - f64::EPSILON);
    }

    #[test]
    fn accessibility_issues_penalize_heavily() {
        let text = "Hey guys, the master whitelist is insane.";
        let issues = vec![
            issue(Category::Accessibility, "Potentially non-inclusive term"),
            issue(Category::Accessibility, "Potentially non-inclusive term"),
            issue(Category::Accessibility, "Potentially non-inclusive term"),
            issue(Category::Accessibility, "Potentially non-inclusive term"),
        ];
        let review = reviewer().review(text, &report_for(text, issues));

        // 10 - 3*4 clamps to zero
        assert!(review.scores.accessibility.abs() < f64::EPSILON);
        assert!(review
            .critical_issues
            .iter()
            .any(|line| line.contains("non-inclusive")));
    }

    #[test]
    fn long_average_sentences_reduce_clarity() {
        let long = format!("You can {}end.", "really quite thoroughly ".repeat(12));
        let short = "One. Two. Three.";
        let reviewer = reviewer();

        let long_review = reviewer.review(&long, &report_for(&long, vec![]));
        let short_review = reviewer.review(short, &report_for(short, vec![]));
        assert!(long_review.scores.clarity < short_review.scores.clarity);
    }

    #[test]
    fn overall_is_rounded_mean() {
        let scores = DimensionScores {
            voice_tone: 10.0,
            clarity: 9.0,
            accessibility: 10.0,
            compliance: 8.0,
        };
        assert!((scores.overall() - 9.3).abs() < f64::EPSILON);
    }

    #[test]
    fn review_is_deterministic() {
        let text = "The report was reviewed by the guys.";
        let reviewer = reviewer();
        let report = report_for(
            text,
            vec![
                issue(Category::Grammar, "Passive voice construction detected"),
                issue(Category::Accessibility, "Potentially non-inclusive term"),
            ],
        );
        let first = reviewer.review(text, &report);
        let second = reviewer.review(text, &report);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    // ── summary sections ───────────────────────────────────────────

    #[test]
    fn empty_buckets_carry_fallback_lines() {
        let text = "You'll love this. It's simple.";
        let review = reviewer().review(text, &report_for(text, vec![]));

        assert_eq!(review.recommendations.high_priority, vec![
            "No critical issues found".to_string()
        ]);
        assert_eq!(review.critical_issues, vec![
            "No critical issues identified".to_string()
        ]);
        assert!(!review.strengths.is_empty());
    }

    #[test]
    fn accessibility_findings_drive_high_priority() {
        let text = "Hey guys.";
        let issues = vec![issue(
            Category::Accessibility,
            "Potentially non-inclusive term",
        )];
        let review = reviewer().review(text, &report_for(text, issues));

        assert!(review
            .recommendations
            .high_priority
            .iter()
            .any(|line| line.contains("non-inclusive")));
    }

    // ── rewrite examples ───────────────────────────────────────────

    #[test]
    fn inclusive_example_uses_replacement_table() {
        let text = "Add them to the whitelist.";
        let issues = vec![issue(
            Category::Accessibility,
            "Potentially non-inclusive term",
        )];
        let review = reviewer().review(text, &report_for(text, issues));

        let example = review
            .rewrite_examples
            .iter()
            .find(|e| e.title == "Inclusive language")
            .expect("expected an inclusive-language example");
        assert!(example.before.contains("whitelist"));
        assert!(example.after.contains("allow list"));
    }

    #[test]
    fn missing_contractions_add_natural_tone_example() {
        let text = "You cannot access this feature.";
        let review = reviewer().review(text, &report_for(text, vec![]));

        assert!(review
            .rewrite_examples
            .iter()
            .any(|e| e.title == "Natural tone" && e.after.contains("can't")));
    }

    #[test]
    fn passive_findings_add_active_voice_example() {
        let text = "The file was deleted.";
        let issues = vec![issue(Category::Grammar, "Passive voice construction detected")];
        let review = reviewer().review(text, &report_for(text, issues));

        assert!(review
            .rewrite_examples
            .iter()
            .any(|e| e.title == "Active voice"));
        assert!(review.rewrite_examples.len() <= 3);
    }

    // ── next steps ─────────────────────────────────────────────────

    #[test]
    fn next_steps_follow_score_bands() {
        assert!(next_steps(9.0)[0].contains("ready for publication"));
        assert!(next_steps(6.5)[0].contains("medium-priority"));
        assert!(next_steps(3.0)[0].contains("major revision"));
    }
}
