//! The comparison record: the one artifact the engine hands to renderers.

use serde::{Deserialize, Serialize};

use crate::estimator::CohortEstimate;

/// Statistics for one question code: the include cohort's estimates, the
/// comparison cohort's estimates, and the significance test between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Question code this row describes.
    pub code: String,
    /// Subquestion label, empty for single-part questions.
    pub subquestion: String,
    /// Estimates for the include cohort.
    pub include: CohortEstimate,
    /// Estimates for the comparison cohort.
    pub comparison: CohortEstimate,
    /// Two-sided Mann–Whitney p-value, `None` when either side is empty.
    #[serde(rename = "pvalue")]
    pub p_value: Option<f64>,
}

/// One comparison analysis over an ordered list of question codes.
///
/// Rows keep the caller's code order; metadata describes the cohorts and the
/// parent question so a renderer needs nothing beyond this record. Read-only
/// once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Caller-supplied description of the inclusion criterion.
    pub description: String,
    /// Top-level question text, taken from the first code.
    pub top_question: String,
    /// Possible answers of the first code, in presentation order.
    pub possible_answers: Vec<String>,
    /// Number of respondents in the results table.
    pub sample_size: usize,
    /// Configured estimated population size.
    pub population_size: usize,
    /// Number of respondents in the include cohort.
    pub included_respondents: usize,
    /// Number of respondents in the comparison cohort.
    pub comparison_respondents: usize,
    /// One row per question code, in the order the codes were given.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonRecord {
    /// The row for `code`, if it was part of the analysis.
    #[must_use]
    pub fn row(&self, code: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.code == code)
    }

    /// Question codes in row order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ComparisonRecord {
        ComparisonRecord {
            description: "graduate students".to_owned(),
            top_question: "Over the past two weeks...".to_owned(),
            possible_answers: vec!["In crisis".to_owned(), "Excelling".to_owned()],
            sample_size: 33,
            population_size: 350,
            included_respondents: 12,
            comparison_respondents: 21,
            rows: vec![ComparisonRow {
                code: "MH2".to_owned(),
                subquestion: String::new(),
                include: CohortEstimate::empty(),
                comparison: CohortEstimate::empty(),
                p_value: None,
            }],
        }
    }

    #[test]
    fn test_row_lookup_by_code() {
        let record = record();
        assert!(record.row("MH2").is_some());
        assert!(record.row("MH3").is_none());
        assert_eq!(record.codes().collect::<Vec<_>>(), vec!["MH2"]);
    }

    #[test]
    fn test_json_roundtrip() {
        let record = record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ComparisonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows.len(), record.rows.len());
        assert_eq!(back.description, record.description);
    }
}
