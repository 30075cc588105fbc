//! Session change ledger: an append-only record of issues observed.
//!
//! The ledger is the only long-lived shared state in the crate. It is
//! scoped to the process lifetime and never persisted; `record` is the
//! only mutating transition apart from an explicit `clear`.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::report::{Category, Issue};

/// Sentinel line returned by [`SessionLedger::summarize`] when nothing
/// has been tracked.
pub const EMPTY_SUMMARY_LINE: &str = "No changes tracked in current session";

/// One condensed record of an issue surfaced during the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// When the issue was recorded.
    pub timestamp: DateTime<Utc>,
    /// Category of the issue.
    pub category: Category,
    /// Issue message (condensed; the full issue is not retained).
    pub message: String,
}

/// Summary of all ledger entries, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// One formatted line per entry.
    pub lines: Vec<String>,
    /// Total number of entries.
    pub total: usize,
    /// When the summary was produced.
    pub date: DateTime<Utc>,
}

impl fmt::Display for LedgerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary of changes")?;
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        for line in &self.lines {
            writeln!(f, "- {line}")?;
        }
        write!(f, "Total updates: {}", self.total)
    }
}

/// Append-only, process-wide log of issues observed per analysis call.
///
/// Cheap to clone; clones share the same underlying entries.
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    entries: Arc<Mutex<Vec<LedgerEntry>>>,
}

impl SessionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a condensed entry for `issue` with the current time.
    /// O(1), never fails; concurrent calls are serialized to preserve
    /// insertion order.
    pub fn record(&self, issue: &Issue) {
        let entry = LedgerEntry {
            timestamp: Utc::now(),
            category: issue.category,
            message: issue.message.clone(),
        };
        self.lock().push(entry);
    }

    /// Returns all entries condensed into one line per entry, in
    /// insertion order. An empty ledger yields the sentinel line and
    /// total 0.
    pub fn summarize(&self) -> LedgerSummary {
        let entries = self.lock();
        let total = entries.len();

        let lines = if entries.is_empty() {
            vec![EMPTY_SUMMARY_LINE.to_string()]
        } else {
            entries
                .iter()
                .map(|e| format!("{} issue identified: {}", e.category, e.message))
                .collect()
        };

        LedgerSummary {
            lines,
            total,
            date: Utc::now(),
        }
    }

    /// Number of recorded entries.
    pub fn total(&self) -> usize {
        self.lock().len()
    }

    /// Empties the ledger. Used for tests and explicit session resets;
    /// not exposed to ordinary analysis callers.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LedgerEntry>> {
        // A poisoned lock only means another thread panicked mid-push;
        // the Vec itself is still valid.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::Severity;

    fn issue(category: Category, message: &str) -> Issue {
        Issue {
            category,
            message: message.to_string(),
            suggestion: String::new(),
            severity: Severity::Warning,
            location: None,
        }
    }

    #[test]
    fn empty_ledger_returns_sentinel() {
        let ledger = SessionLedger::new();
        let summary = ledger.summarize();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.lines, vec![EMPTY_SUMMARY_LINE.to_string()]);
    }

    #[test]
    fn entries_listed_in_insertion_order() {
        let ledger = SessionLedger::new();
        for i in 0..5 {
            ledger.record(&issue(Category::Grammar, &format!("issue {i}")));
        }

        let summary = ledger.summarize();
        assert_eq!(summary.total, 5);
        for (i, line) in summary.lines.iter().enumerate() {
            assert_eq!(line, &format!("grammar issue identified: issue {i}"));
        }
    }

    #[test]
    fn line_format_includes_category() {
        let ledger = SessionLedger::new();
        ledger.record(&issue(Category::Terminology, "Use 'email'"));

        let summary = ledger.summarize();
        assert_eq!(
            summary.lines,
            vec!["terminology issue identified: Use 'email'".to_string()]
        );
    }

    #[test]
    fn clear_empties_the_ledger() {
        let ledger = SessionLedger::new();
        ledger.record(&issue(Category::Grammar, "something"));
        assert_eq!(ledger.total(), 1);

        ledger.clear();
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.summarize().lines, vec![EMPTY_SUMMARY_LINE.to_string()]);
    }

    #[test]
    fn clones_share_entries() {
        let ledger = SessionLedger::new();
        let clone = ledger.clone();
        clone.record(&issue(Category::Accessibility, "shared"));
        assert_eq!(ledger.total(), 1);
    }

    #[test]
    fn concurrent_records_all_land() {
        let ledger = SessionLedger::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        ledger.record(&issue(Category::Grammar, "concurrent"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ledger.total(), 800);
    }

    #[test]
    fn display_includes_total() {
        let ledger = SessionLedger::new();
        ledger.record(&issue(Category::Grammar, "one"));
        let rendered = ledger.summarize().to_string();
        assert!(rendered.contains("grammar issue identified: one"));
        assert!(rendered.contains("Total updates: 1"));
    }
}
