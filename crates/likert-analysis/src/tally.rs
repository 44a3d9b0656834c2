//! Answer tallies: counts and percentages per possible answer for a cohort.
//!
//! The tabular companion to the numeric estimates: how many cohort members
//! picked each answer, with percentages over the cohort size and an
//! explicit "No answer" bucket for members who skipped the question.

use likert_survey::{Cohort, QuestionCatalog, ResultsTable, UnknownCodeError};

/// Tally failure: either the code is not a results column, or the catalog
/// has no possible-answer enumeration for it.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TallyError {
    #[display("{_0}")]
    UnknownCode(UnknownCodeError),
    #[display("question code '{code}' is not listed in the question catalog")]
    #[from(skip)]
    NotInCatalog { code: String },
}

/// Count and share of one possible answer within a cohort.
#[derive(Debug, Clone, PartialEq)]
pub struct TallyRow {
    pub answer: String,
    pub count: usize,
    /// Share of the cohort, in percent of cohort members.
    pub percentage: f64,
}

/// Answer distribution of one question code within one cohort.
#[derive(Debug, Clone)]
pub struct AnswerTally {
    pub code: String,
    /// Number of cohort members (including those who did not answer).
    pub respondents: usize,
    /// One row per catalog answer, in presentation order.
    pub rows: Vec<TallyRow>,
    /// Members with no recorded answer.
    pub no_answer: TallyRow,
}

impl AnswerTally {
    /// Tallies the answers of `cohort` for `code`.
    #[expect(clippy::cast_precision_loss)]
    pub fn build(
        table: &ResultsTable,
        catalog: &QuestionCatalog,
        code: &str,
        cohort: &Cohort,
    ) -> Result<Self, TallyError> {
        let answers = catalog
            .possible_answers(code)
            .ok_or_else(|| TallyError::NotInCatalog {
                code: code.to_owned(),
            })?;
        let responses = table.included_responses(code, cohort)?;

        let total = responses.len();
        let percentage = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        let rows = answers
            .iter()
            .map(|answer| {
                let count = responses
                    .iter()
                    .filter(|response| **response == Some(answer.as_str()))
                    .count();
                TallyRow {
                    answer: answer.clone(),
                    count,
                    percentage: percentage(count),
                }
            })
            .collect();

        let missing = responses.iter().filter(|response| response.is_none()).count();
        Ok(Self {
            code: code.to_owned(),
            respondents: total,
            rows,
            no_answer: TallyRow {
                answer: "No answer".to_owned(),
                count: missing,
                percentage: percentage(missing),
            },
        })
    }
}
