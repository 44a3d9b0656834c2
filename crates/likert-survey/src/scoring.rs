//! Ordinal value mappings from textual Likert answers to signed scores.
//!
//! Four answer scales cover every scored question of the survey:
//!
//! | Scale       | Range  | Anchors                                  |
//! |-------------|--------|------------------------------------------|
//! | `Frequency` | 0..4   | "None of the time" .. "All of the time"  |
//! | `Valence`   | -2..2  | "Strongly negative" .. "Strongly positive" |
//! | `Continuum` | -2..2  | "In crisis" .. "Excelling"               |
//! | `Agreement` | -3..3  | "Strongly disagree" .. "Strongly agree"  |
//!
//! Which scale applies to which question code is survey configuration,
//! assigned once at startup. Scoring *drops* any answer that is not a key of
//! the mapping — free-text fallbacks like "Not applicable" or a missing
//! answer must not show up as a zero score or count toward sample size.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no value mapping configured for question code '{code}'")]
pub struct UnscoredCodeError {
    pub code: String,
}

/// One of the four ordinal answer scales of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerScale {
    Frequency,
    Valence,
    Continuum,
    Agreement,
}

impl AnswerScale {
    /// The ordered answer-to-score mapping of this scale.
    #[must_use]
    pub fn value_mapping(self) -> &'static [(&'static str, i32)] {
        match self {
            AnswerScale::Frequency => &[
                ("None of the time", 0),
                ("Rarely", 1),
                ("Some of the time", 2),
                ("Most of the time", 3),
                ("All of the time", 4),
            ],
            AnswerScale::Valence => &[
                ("Strongly negative", -2),
                ("Negative", -1),
                ("Neutral", 0),
                ("Positive", 1),
                ("Strongly positive", 2),
            ],
            AnswerScale::Continuum => &[
                ("In crisis", -2),
                ("Struggling", -1),
                ("Surviving", 0),
                ("Thriving", 1),
                ("Excelling", 2),
            ],
            AnswerScale::Agreement => &[
                ("Strongly disagree", -3),
                ("Disagree", -2),
                ("Somewhat disagree", -1),
                ("Neither agree nor disagree", 0),
                ("Somewhat agree", 1),
                ("Agree", 2),
                ("Strongly agree", 3),
            ],
        }
    }

    /// Score for one answer, `None` when the answer is not on the scale.
    #[must_use]
    pub fn score_of(self, answer: &str) -> Option<i32> {
        self.value_mapping()
            .iter()
            .find(|(text, _)| *text == answer)
            .map(|(_, score)| *score)
    }
}

/// Per-code scale assignments for one survey instance.
#[derive(Debug, Clone, Default)]
pub struct ScoringTable {
    scales: BTreeMap<String, AnswerScale>,
}

impl ScoringTable {
    /// Builds a table from explicit code-to-scale assignments.
    #[must_use]
    pub fn new(scales: BTreeMap<String, AnswerScale>) -> Self {
        Self { scales }
    }

    /// Assigns `scale` to every code in `codes`. Later assignments win.
    pub fn assign<I, S>(&mut self, scale: AnswerScale, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for code in codes {
            self.scales.insert(code.into(), scale);
        }
    }

    /// The scale assigned to `code`.
    ///
    /// An unassigned code is a configuration gap, not a zero score: callers
    /// must treat this error as "no numeric statistics for this code".
    pub fn scale(&self, code: &str) -> Result<AnswerScale, UnscoredCodeError> {
        self.scales
            .get(code)
            .copied()
            .ok_or_else(|| UnscoredCodeError {
                code: code.to_owned(),
            })
    }

    /// The answer-to-score mapping for `code`.
    pub fn value_mapping(
        &self,
        code: &str,
    ) -> Result<&'static [(&'static str, i32)], UnscoredCodeError> {
        Ok(self.scale(code)?.value_mapping())
    }

    /// Scores a sequence of responses for `code`.
    ///
    /// Responses that are missing or not present in the mapping are dropped,
    /// so the output length is the usable sample size.
    pub fn score(
        &self,
        code: &str,
        responses: &[Option<&str>],
    ) -> Result<Vec<i32>, UnscoredCodeError> {
        let scale = self.scale(code)?;
        Ok(responses
            .iter()
            .filter_map(|response| response.and_then(|answer| scale.score_of(answer)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mh2_table() -> ScoringTable {
        let mut table = ScoringTable::default();
        table.assign(AnswerScale::Continuum, ["MH2"]);
        table
    }

    #[test]
    fn test_continuum_mapping_values() {
        let table = mh2_table();
        let mapping: BTreeMap<_, _> = table
            .value_mapping("MH2")
            .unwrap()
            .iter()
            .copied()
            .collect();
        assert_eq!(mapping["In crisis"], -2);
        assert_eq!(mapping["Struggling"], -1);
        assert_eq!(mapping["Surviving"], 0);
        assert_eq!(mapping["Thriving"], 1);
        assert_eq!(mapping["Excelling"], 2);
    }

    #[test]
    fn test_unassigned_code_is_an_error() {
        let table = mh2_table();
        assert!(table.scale("AE0(SQ001)").is_err());
        assert!(table.score("AE0(SQ001)", &[]).is_err());
    }

    #[test]
    fn test_scoring_drops_unmapped_answers() {
        let table = mh2_table();
        let responses = vec![
            Some("Thriving"),
            Some("Not applicable"),
            None,
            Some("In crisis"),
            Some("No answer"),
        ];
        let scores = table.score("MH2", &responses).unwrap();
        assert_eq!(scores, vec![1, -2]);
    }

    #[test]
    fn test_scoring_never_outgrows_mapped_answers() {
        let table = mh2_table();
        let responses = vec![Some("Surviving"); 4];
        let scores = table.score("MH2", &responses).unwrap();
        assert_eq!(scores.len(), 4);
        let none = table.score("MH2", &[Some("?"), None]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_agreement_scale_is_symmetric() {
        let mapping = AnswerScale::Agreement.value_mapping();
        let scores: Vec<i32> = mapping.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![-3, -2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_later_assignment_wins() {
        let mut table = ScoringTable::default();
        table.assign(AnswerScale::Frequency, ["Q1"]);
        table.assign(AnswerScale::Agreement, ["Q1"]);
        assert_eq!(table.scale("Q1").unwrap(), AnswerScale::Agreement);
    }
}
