//! Orchestrates estimator runs across question codes into one record.

use likert_survey::{
    Cohort, QuestionCatalog, ResultsTable, ScoringTable, SurveyConfig, UnknownCodeError,
};

use crate::{
    estimator::{self, CohortEstimate},
    record::{ComparisonRecord, ComparisonRow},
};

/// Builds [`ComparisonRecord`]s from the loaded survey data.
///
/// Holds shared references to the immutable inputs; one builder serves any
/// number of analyses. An unknown question code aborts the build (it is a
/// configuration error), while a code with no value mapping merely yields a
/// `None`-valued row — sparse or unscoreable slices must not sink a batch.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonBuilder<'a> {
    table: &'a ResultsTable,
    scoring: &'a ScoringTable,
    catalog: &'a QuestionCatalog,
    config: &'a SurveyConfig,
}

impl<'a> ComparisonBuilder<'a> {
    #[must_use]
    pub fn new(
        table: &'a ResultsTable,
        scoring: &'a ScoringTable,
        catalog: &'a QuestionCatalog,
        config: &'a SurveyConfig,
    ) -> Self {
        Self {
            table,
            scoring,
            catalog,
            config,
        }
    }

    /// Runs the comparison for `codes` between `include` and `comparison`.
    ///
    /// When `comparison` is `None` the complement of `include` is used, the
    /// default "this cohort against everyone else" analysis. Record-level
    /// metadata (top question, possible answers) comes from the first code;
    /// callers group codes that share a parent question.
    pub fn build(
        &self,
        codes: &[String],
        include: &Cohort,
        comparison: Option<&Cohort>,
        description: &str,
    ) -> Result<ComparisonRecord, UnknownCodeError> {
        let complement;
        let comparison = match comparison {
            Some(cohort) => cohort,
            None => {
                complement = include.complement();
                &complement
            }
        };

        let mut rows = Vec::with_capacity(codes.len());
        for code in codes {
            rows.push(self.build_row(code, include, comparison)?);
        }

        let first_code = codes.first().map(String::as_str);
        Ok(ComparisonRecord {
            description: description.to_owned(),
            top_question: first_code
                .and_then(|code| self.catalog.top_question(code))
                .unwrap_or_default()
                .to_owned(),
            possible_answers: first_code
                .and_then(|code| self.catalog.possible_answers(code))
                .unwrap_or_default()
                .to_vec(),
            sample_size: self.table.universe().len(),
            population_size: self.config.population,
            included_respondents: include.len(),
            comparison_respondents: comparison.len(),
            rows,
        })
    }

    fn build_row(
        &self,
        code: &str,
        include: &Cohort,
        comparison: &Cohort,
    ) -> Result<ComparisonRow, UnknownCodeError> {
        let subquestion = self.catalog.subquestion(code).unwrap_or_default().to_owned();

        // An unknown code is a configuration error and aborts the build; a
        // code without a value mapping degrades to an unscored row.
        let include_responses = self.table.included_responses(code, include)?;
        let comparison_responses = self.table.included_responses(code, comparison)?;
        let Ok(include_scores) = self.scoring.score(code, &include_responses) else {
            return Ok(ComparisonRow {
                code: code.to_owned(),
                subquestion,
                include: CohortEstimate::empty(),
                comparison: CohortEstimate::empty(),
                p_value: None,
            });
        };
        let comparison_scores = self
            .scoring
            .score(code, &comparison_responses)
            .expect("scale known for code");

        Ok(ComparisonRow {
            code: code.to_owned(),
            subquestion,
            include: CohortEstimate::from_scores(&include_scores, self.config),
            comparison: CohortEstimate::from_scores(&comparison_scores, self.config),
            p_value: estimator::significance(&include_scores, &comparison_scores),
        })
    }
}
