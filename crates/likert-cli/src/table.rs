//! Console tables for comparison records and answer tallies.

use likert_analysis::{
    estimator::CohortEstimate,
    record::ComparisonRecord,
    tally::AnswerTally,
};

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or("N/A".to_owned(), |v| format!("{v:.2}"))
}

fn fmt_pvalue(value: Option<f64>) -> String {
    value.map_or("N/A".to_owned(), |v| format!("{v:.4}"))
}

/// `[lconf, median, hconf]` with `N/A` when the interval is undefined.
fn fmt_interval(estimate: &CohortEstimate) -> String {
    match (estimate.lower_conf, estimate.median, estimate.upper_conf) {
        (Some(l), Some(m), Some(h)) => format!("[{l:.1}, {m:.1}, {h:.1}]"),
        _ => "N/A".to_owned(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_owned()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Prints one comparison record as a fixed-width table.
pub(crate) fn print_comparison(record: &ComparisonRecord) {
    println!("{}", "*".repeat(100));
    if !record.top_question.is_empty() {
        println!("Top question: {}", record.top_question);
    }
    if !record.description.is_empty() {
        println!("Cohort: {}", record.description);
    }
    println!(
        "Respondents: {} included, {} comparison (sample {}, population {})",
        record.included_respondents,
        record.comparison_respondents,
        record.sample_size,
        record.population_size,
    );
    println!();
    println!(
        "  {:<12} {:<24} {:>4} {:>7} {:>7} {:>18} {:>4} {:>7} {:>7} {:>18} {:>8}",
        "Code",
        "Subquestion",
        "n",
        "Mean",
        "MoE",
        "Median CI",
        "n'",
        "Mean'",
        "MoE'",
        "Median CI'",
        "p-value",
    );
    println!("  {}", "-".repeat(124));
    for row in &record.rows {
        println!(
            "  {:<12} {:<24} {:>4} {:>7} {:>7} {:>18} {:>4} {:>7} {:>7} {:>18} {:>8}",
            truncate(&row.code, 12),
            truncate(&row.subquestion, 24),
            row.include.sample_size,
            fmt_stat(row.include.mean),
            fmt_stat(row.include.margin_of_error),
            fmt_interval(&row.include),
            row.comparison.sample_size,
            fmt_stat(row.comparison.mean),
            fmt_stat(row.comparison.margin_of_error),
            fmt_interval(&row.comparison),
            fmt_pvalue(row.p_value),
        );
    }
    println!("{}", "*".repeat(100));
}

/// Prints the answer distribution of one code within one cohort.
pub(crate) fn print_tally(tally: &AnswerTally, cohort_name: &str) {
    println!("{} — {} ({} respondents)", tally.code, cohort_name, tally.respondents);
    println!("  {:<40} {:>6} {:>8}", "Answer", "Count", "Share");
    println!("  {}", "-".repeat(56));
    for row in tally.rows.iter().chain(std::iter::once(&tally.no_answer)) {
        println!(
            "  {:<40} {:>6} {:>7.1}%",
            truncate(&row.answer, 40),
            row.count,
            row.percentage,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_stat_handles_missing() {
        assert_eq!(fmt_stat(None), "N/A");
        assert_eq!(fmt_stat(Some(0.4)), "0.40");
    }

    #[test]
    fn test_fmt_interval_requires_all_bounds() {
        let mut estimate = CohortEstimate::empty();
        assert_eq!(fmt_interval(&estimate), "N/A");
        estimate.lower_conf = Some(0.0);
        estimate.median = Some(1.0);
        estimate.upper_conf = Some(2.0);
        assert_eq!(fmt_interval(&estimate), "[0.0, 1.0, 2.0]");
    }

    #[test]
    fn test_truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer label", 8), "a longe…");
    }
}
