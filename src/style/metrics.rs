//! Word and sentence statistics for raw text.

use serde::{Deserialize, Serialize};

/// Basic text statistics derived from one input string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of sentences (terminal punctuation runs, plus a trailing
    /// fragment without terminal punctuation if non-empty).
    pub sentence_count: usize,
    /// Average words per sentence; 0.0 for empty text.
    pub avg_words_per_sentence: f64,
}

impl TextMetrics {
    /// Computes metrics for `text`. Pure and total: no failure modes,
    /// empty input yields all-zero metrics.
    pub fn compute(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        let sentence_count = count_sentences(text);

        let avg_words_per_sentence = if word_count == 0 {
            0.0
        } else {
            word_count as f64 / sentence_count.max(1) as f64
        };

        Self {
            word_count,
            sentence_count,
            avg_words_per_sentence,
        }
    }

    /// Average words per sentence rounded to one decimal for display.
    #[must_use]
    pub fn avg_display(&self) -> f64 {
        (self.avg_words_per_sentence * 10.0).round() / 10.0
    }
}

/// Counts sentences by splitting on `.`, `!`, `?` runs. A trailing
/// fragment without terminal punctuation still counts if non-empty.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}
