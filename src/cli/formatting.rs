//! Shared display formatting for CLI commands.
//!
//! Pure helpers are extracted from the command modules so they can be
//! unit tested without a terminal.

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::data::report::{AnalysisReport, Improvement, ReportStatus, Severity};
use crate::guidance::{Page, SearchResult};
use crate::style::metrics::TextMetrics;
use crate::style::review::DocumentReview;
use crate::style::service::GuidelineEntry;

/// Returns an emoji icon representing the report status.
pub(crate) fn status_icon(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Good => "\u{2705}",
        ReportStatus::NeedsImprovement => "\u{26a0}\u{fe0f} ",
        ReportStatus::Poor => "\u{274c}",
    }
}

/// Color used for a severity label.
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
    }
}

/// Fixed-width severity label so issue text lines up.
pub(crate) fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "INFO   ",
        Severity::Warning => "WARNING",
    }
}

/// Formats the metrics line of a text report.
pub(crate) fn format_metrics_line(metrics: &TextMetrics) -> String {
    format!(
        "{} words, {} sentences, {} avg words/sentence",
        metrics.word_count,
        metrics.sentence_count,
        metrics.avg_display()
    )
}

/// Writes a severity label in its color to `out`.
fn write_severity(out: &mut StandardStream, severity: Severity) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(severity_color(severity))))?;
    write!(out, "{}", severity_label(severity))?;
    out.reset()?;
    Ok(())
}

/// Prints a full analysis report in text format.
pub(crate) fn print_report(report: &AnalysisReport) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    writeln!(
        out,
        "{} Status: {} (scope: {})",
        status_icon(report.status),
        report.status,
        report.scope
    )?;
    writeln!(out, "   {}", format_metrics_line(&report.metrics))?;
    writeln!(out)?;

    for issue in &report.issues {
        write!(out, "   ")?;
        write_severity(&mut out, issue.severity)?;
        write!(out, " [{}] {}", issue.category, issue.message)?;
        if let Some(location) = issue.location {
            write!(out, " (at {location})")?;
        }
        writeln!(out)?;
        writeln!(out, "           \u{2192} {}", issue.suggestion)?;
    }

    if !report.guidance_links.is_empty() {
        writeln!(out)?;
        writeln!(out, "   Guidance:")?;
        for (category, guidance) in &report.guidance_links {
            writeln!(out, "   - {category}: {}", guidance.link)?;
        }
    }

    Ok(())
}

/// Formats the score line for one review dimension.
pub(crate) fn format_score_line(label: &str, score: f64) -> String {
    format!("   {label:<15} {score:.1}/10")
}

/// Prints a document review in text format.
pub(crate) fn print_review(review: &DocumentReview) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        out,
        "Overall: {:.1}/10 ({})",
        review.overall_score, review.quality_level
    )?;
    out.reset()?;
    writeln!(out, "   {}", format_metrics_line(&review.metrics))?;
    writeln!(out)?;

    writeln!(out, "{}", format_score_line("Voice & tone", review.scores.voice_tone))?;
    writeln!(out, "{}", format_score_line("Clarity", review.scores.clarity))?;
    writeln!(out, "{}", format_score_line("Accessibility", review.scores.accessibility))?;
    writeln!(out, "{}", format_score_line("Terminology", review.scores.compliance))?;

    let sections: [(&str, &[String]); 5] = [
        ("Strengths", &review.strengths),
        ("Critical issues", &review.critical_issues),
        ("High priority", &review.recommendations.high_priority),
        ("Medium priority", &review.recommendations.medium_priority),
        ("Low priority", &review.recommendations.low_priority),
    ];
    for (heading, lines) in sections {
        writeln!(out)?;
        writeln!(out, "   {heading}:")?;
        for line in lines {
            writeln!(out, "   - {line}")?;
        }
    }

    if !review.rewrite_examples.is_empty() {
        writeln!(out)?;
        writeln!(out, "   Examples:")?;
        for example in &review.rewrite_examples {
            writeln!(out, "   - {}: {}", example.title, example.explanation)?;
            writeln!(out, "       before: {}", example.before)?;
            writeln!(out, "       after:  {}", example.after)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "   Next steps:")?;
    for step in &review.next_steps {
        writeln!(out, "   - {step}")?;
    }

    Ok(())
}

/// Prints improvement suggestions in text format.
pub(crate) fn print_improvements(improvements: &[Improvement]) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    if improvements.is_empty() {
        writeln!(out, "\u{2705} No improvements suggested")?;
        return Ok(());
    }

    for improvement in improvements {
        write!(out, "   ")?;
        write_severity(&mut out, improvement.severity)?;
        writeln!(out, " [{}] {}", improvement.category, improvement.issue)?;
        writeln!(out, "           \u{2192} {}", improvement.suggestion)?;
    }

    Ok(())
}

/// Prints static guideline entries in text format.
pub(crate) fn print_guidelines(entries: &[GuidelineEntry]) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    for entry in entries {
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{}", entry.category)?;
        out.reset()?;
        writeln!(out, "   {}", entry.text)?;
        writeln!(out, "   {}", entry.link)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Prints search results in text format.
pub(crate) fn print_search_results(results: &[SearchResult]) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    if results.is_empty() {
        writeln!(out, "No results found")?;
        return Ok(());
    }

    for result in results {
        writeln!(out, "[{:?}] {} ({})", result.relevance, result.title, result.section)?;
        writeln!(out, "   {}", result.link)?;
        if !result.preview.is_empty() {
            writeln!(out, "   {}", crate::utils::truncate_chars(&result.preview, 200))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Prints official guidance pages in text format.
pub(crate) fn print_pages(pages: &[Page]) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    for page in pages {
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{}", page.title)?;
        out.reset()?;
        writeln!(out, "   {}", page.url)?;
        writeln!(out, "   {}", crate::utils::truncate_chars(&page.preview, 500))?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_icons() {
        assert_eq!(status_icon(ReportStatus::Good), "\u{2705}");
        assert_eq!(status_icon(ReportStatus::Poor), "\u{274c}");
    }

    #[test]
    fn severity_labels_fixed_width() {
        assert_eq!(
            severity_label(Severity::Info).len(),
            severity_label(Severity::Warning).len()
        );
    }

    #[test]
    fn severity_colors() {
        assert_eq!(severity_color(Severity::Warning), Color::Yellow);
        assert_eq!(severity_color(Severity::Info), Color::Cyan);
    }

    #[test]
    fn score_lines_align_and_round() {
        assert_eq!(format_score_line("Clarity", 8.25), "   Clarity         8.2/10");
        assert_eq!(
            format_score_line("Voice & tone", 10.0),
            "   Voice & tone    10.0/10"
        );
    }

    #[test]
    fn metrics_line_uses_rounded_average() {
        let metrics = TextMetrics::compute("a b c. d e. f g.");
        let line = format_metrics_line(&metrics);
        assert_eq!(line, "7 words, 3 sentences, 2.3 avg words/sentence");
    }
}
