//! Builtin style rule catalog and matcher types.
//!
//! The catalog is built once at startup and never mutated, so two analyses
//! of the same input always see the same rules in the same order. Matchers
//! are pure; a regex that fails to compile is a fatal startup error.

use anyhow::{Context, Result};
use regex::Regex;

use crate::data::report::{Category, Scope, Severity};

/// Predicate over a text span.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive substring match.
    Phrase(&'static str),
    /// Case-insensitive whole-word match.
    WordBoundary(Regex),
    /// Arbitrary pattern match.
    Pattern(Regex),
    /// Fires once when the pattern never occurs in the text.
    Absence(Regex),
}

impl Matcher {
    /// Builds a case-insensitive whole-word matcher.
    fn word(word: &str) -> Result<Self> {
        let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
            .with_context(|| format!("Failed to compile word matcher for {word:?}"))?;
        Ok(Matcher::WordBoundary(re))
    }

    /// Builds a pattern matcher.
    fn pattern(src: &str) -> Result<Self> {
        let re =
            Regex::new(src).with_context(|| format!("Failed to compile rule pattern {src:?}"))?;
        Ok(Matcher::Pattern(re))
    }

    /// Builds an absence matcher (fires when `src` never matches).
    fn absence(src: &str) -> Result<Self> {
        let re = Regex::new(src)
            .with_context(|| format!("Failed to compile absence pattern {src:?}"))?;
        Ok(Matcher::Absence(re))
    }

    /// Returns the character offsets of all matches in `text`.
    ///
    /// Absence matchers yield a single location-less entry when the
    /// pattern is missing. Offsets are best-effort: phrase matches are
    /// located in the lowercased text, which can drift for non-ASCII
    /// input.
    pub fn find(&self, text: &str) -> Vec<Option<usize>> {
        match self {
            Matcher::Phrase(phrase) => {
                let haystack = text.to_lowercase();
                let needle = phrase.to_lowercase();
                let mut offsets = Vec::new();
                let mut start = 0;
                while let Some(pos) = haystack[start..].find(&needle) {
                    offsets.push(Some(start + pos));
                    start += pos + needle.len();
                }
                offsets
            }
            Matcher::WordBoundary(re) | Matcher::Pattern(re) => {
                re.find_iter(text).map(|m| Some(m.start())).collect()
            }
            Matcher::Absence(re) => {
                if re.is_match(text) {
                    Vec::new()
                } else {
                    vec![None]
                }
            }
        }
    }
}

/// A single style rule: a matcher plus the issue it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable identifier, unique across the catalog.
    pub id: &'static str,
    /// Category the rule belongs to.
    pub category: Category,
    /// The predicate.
    pub matcher: Matcher,
    /// Description of the violation.
    pub message: &'static str,
    /// Replacement text or structural advice.
    pub suggestion: &'static str,
    /// Severity of produced issues.
    pub severity: Severity,
    /// Whether one call may produce multiple issues from this rule.
    /// Default policy is one issue per rule per call to avoid
    /// duplicate-noise inflation.
    pub multi_match: bool,
}

/// Immutable, ordered collection of style rules.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

/// Words flagged as potentially non-inclusive.
const NON_INCLUSIVE_TERMS: &str = "guys|mankind|blacklist|whitelist|master|slave|crazy|insane|lame";

/// Contraction forms whose absence suggests an overly formal tone.
/// Also consulted by the document reviewer for its tone bonus.
pub(crate) const CONTRACTIONS: &str =
    r"(?i)\b(it's|you're|we're|don't|can't|won't|let's|you'll|we'll)\b";

impl RuleCatalog {
    /// Builds the builtin catalog. The only failure mode is a pattern
    /// that does not compile, which is fatal at startup.
    pub fn builtin() -> Result<Self> {
        let rules = vec![
            // ── voice & tone ───────────────────────────────────────
            Rule {
                id: "VT001",
                category: Category::VoiceTone,
                matcher: Matcher::absence(CONTRACTIONS)?,
                message: "No contractions found; the tone may read as stiff",
                suggestion: "Use contractions (it's, you're, we'll) for a warm, natural tone",
                severity: Severity::Info,
                multi_match: false,
            },
            Rule {
                id: "VT002",
                category: Category::VoiceTone,
                matcher: Matcher::pattern(r"(?i)\b(the user|users|one should|people should)\b")?,
                message: "Indirect reader address detected",
                suggestion: "Address readers directly as 'you'",
                severity: Severity::Info,
                multi_match: false,
            },
            // ── grammar ────────────────────────────────────────────
            Rule {
                id: "GR001",
                category: Category::Grammar,
                matcher: Matcher::pattern(r"(?i)\b(is|are|was|were|been|be)\s+\w+ed\b")?,
                message: "Passive voice construction detected",
                suggestion: "Rewrite in active voice for clarity and directness",
                severity: Severity::Warning,
                multi_match: true,
            },
            Rule {
                id: "GR002",
                category: Category::Grammar,
                matcher: Matcher::pattern(r"[.!?]\s*[A-Z][^.!?]{100,}[.!?]")?,
                message: "Long sentence detected",
                suggestion: "Break the sentence into shorter, clearer ones",
                severity: Severity::Info,
                multi_match: true,
            },
            // ── terminology ────────────────────────────────────────
            Rule {
                id: "TM001",
                category: Category::Terminology,
                matcher: Matcher::Phrase("e-mail"),
                message: "Use 'email' instead of 'e-mail' (one word)",
                suggestion: "email",
                severity: Severity::Warning,
                multi_match: false,
            },
            Rule {
                id: "TM002",
                category: Category::Terminology,
                matcher: Matcher::Phrase("web site"),
                message: "Use 'website' instead of 'web site' (one word)",
                suggestion: "website",
                severity: Severity::Warning,
                multi_match: false,
            },
            Rule {
                id: "TM003",
                category: Category::Terminology,
                matcher: Matcher::pattern(r"(?i)\blog\s?in\b")?,
                message: "Use 'sign in' (verb) or 'sign-in' (noun) instead of 'login'",
                suggestion: "sign in",
                severity: Severity::Warning,
                multi_match: false,
            },
            Rule {
                id: "TM004",
                category: Category::Terminology,
                matcher: Matcher::Phrase("a.i."),
                message: "Use 'AI' instead of 'A.I.' (no periods)",
                suggestion: "AI",
                severity: Severity::Warning,
                multi_match: false,
            },
            Rule {
                id: "TM005",
                category: Category::Terminology,
                matcher: Matcher::word("wifi")?,
                message: "Use 'Wi-Fi' (hyphenated, both caps)",
                suggestion: "Wi-Fi",
                severity: Severity::Warning,
                multi_match: false,
            },
            Rule {
                id: "TM006",
                category: Category::Terminology,
                matcher: Matcher::pattern(r"(?i)\bsetup\s+(?:the|your|a|an)\b")?,
                message: "Use 'set up' as the verb; 'setup' is the noun",
                suggestion: "set up",
                severity: Severity::Warning,
                multi_match: false,
            },
            // ── accessibility ──────────────────────────────────────
            Rule {
                id: "AC001",
                category: Category::Accessibility,
                matcher: Matcher::pattern(&format!(r"(?i)\b({NON_INCLUSIVE_TERMS})\b"))?,
                message: "Potentially non-inclusive term",
                suggestion:
                    "Use an inclusive alternative (everyone, allow list, block list, primary/secondary)",
                severity: Severity::Warning,
                multi_match: true,
            },
            Rule {
                id: "AC002",
                category: Category::Accessibility,
                matcher: Matcher::pattern(r"(?i)\b(he|him|his|she|her|hers)\b")?,
                message: "Gendered pronoun in generic reference",
                suggestion: "Use gender-neutral wording such as 'they', or rewrite around the pronoun",
                severity: Severity::Warning,
                multi_match: true,
            },
        ];

        Ok(Self { rules })
    }

    /// Returns the ordered subset of rules selected by `scope`.
    /// An unmatched scope yields an empty set rather than an error;
    /// the catalog is advisory, not strict.
    pub fn rules_for(&self, scope: Scope) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|r| scope.selects(r.category))
            .collect()
    }

    /// All rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
