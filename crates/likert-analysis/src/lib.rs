//! Cohort comparison engine for scored survey responses.
//!
//! Given a results table, a scoring table and two cohorts, this crate
//! derives scored response series, estimates per-cohort statistics with
//! finite-population corrections, tests for a distributional difference,
//! and assembles everything into a stable [`record::ComparisonRecord`]
//! that downstream renderers and reports consume.
//!
//! # Pipeline
//!
//! ```text
//! ResultsTable + ScoringTable
//!     ↓ included_responses / score        (per question code)
//! CohortEstimate  ×2  + Mann–Whitney p    (include vs. comparison)
//!     ↓
//! ComparisonRow                            (one per code)
//!     ↓
//! ComparisonRecord                         (+ catalog metadata)
//! ```
//!
//! # Sparse data
//!
//! Row statistics degrade field-by-field to `None` when a cohort slice is
//! too small; a code with no configured value mapping yields a fully
//! `None`-valued row. Neither aborts the batch — partial records are an
//! expected outcome, and "no data for this slice" must stay distinguishable
//! from a true zero.
//!
//! # Examples
//!
//! ```
//! use likert_analysis::builder::ComparisonBuilder;
//! use likert_survey::{
//!     AnswerScale, QuestionCatalog, ResultsTable, RespondentId, ScoringTable, SurveyConfig,
//! };
//!
//! let table = ResultsTable::from_rows(
//!     vec!["MH2".to_owned()],
//!     vec![
//!         (RespondentId::new("1"), vec![Some("Thriving".to_owned())]),
//!         (RespondentId::new("2"), vec![Some("In crisis".to_owned())]),
//!     ],
//! )
//! .unwrap();
//! let mut scoring = ScoringTable::default();
//! scoring.assign(AnswerScale::Continuum, ["MH2"]);
//! let catalog = QuestionCatalog::default();
//! let config = SurveyConfig::with_population(350);
//!
//! let builder = ComparisonBuilder::new(&table, &scoring, &catalog, &config);
//! let include = table.universe().everyone();
//! let record = builder
//!     .build(&["MH2".to_owned()], &include, None, "everyone")
//!     .unwrap();
//! assert_eq!(record.rows.len(), 1);
//! assert_eq!(record.rows[0].include.mean, Some(-0.5));
//! ```

pub mod builder;
pub mod estimator;
pub mod record;
pub mod tally;
