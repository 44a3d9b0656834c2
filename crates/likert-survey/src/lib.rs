//! Core survey data model for Likert-style response analysis.
//!
//! This crate owns the immutable reference data a survey analysis runs over:
//!
//! - [`results`]: the results table of per-respondent answers and the
//!   cohort-filtered views of it
//! - [`cohort`]: respondent-membership sets and the algebra to combine them
//! - [`scoring`]: ordinal value mappings that turn textual answers into
//!   signed integer scores
//! - [`catalog`]: per-question metadata recovered from the survey's
//!   summary-statistics export
//! - [`config`]: sampling parameters (population size, critical value)
//!
//! All data here is loaded once at startup and treated as read-only for the
//! rest of the process. Parsing the export file formats is the caller's
//! concern; this crate only defines the in-memory shapes.

pub use self::{
    catalog::{QuestionCatalog, QuestionInfo},
    cohort::{Cohort, CohortError, CombineLogic, Universe},
    config::SurveyConfig,
    respondent::RespondentId,
    results::{
        LookupError, RespondentNotFoundError, ResultsTable, TableBuildError, UnknownCodeError,
    },
    scoring::{AnswerScale, ScoringTable, UnscoredCodeError},
};

pub mod catalog;
pub mod cohort;
pub mod config;
pub mod respondent;
pub mod results;
pub mod scoring;
