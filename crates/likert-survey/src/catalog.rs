//! Per-question metadata recovered from the summary-statistics export.
//!
//! The statistics export is a row-scanned companion file; parsing it lives
//! with the caller (see the CLI's export reader). The catalog here is the
//! in-memory shape the analysis consumes: top-level question text,
//! subquestion label, and the ordered possible-answer enumeration per code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata for one question code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionInfo {
    /// The "Summary for ..." line of the export.
    pub summary: String,
    /// Text of the top-level (parent) question.
    pub top_question: String,
    /// Subquestion label, empty for single-part questions.
    pub subquestion: String,
    /// Possible answers in presentation order.
    pub possible_answers: Vec<String>,
}

/// Lookup table of question metadata, keyed by question code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: BTreeMap<String, QuestionInfo>,
}

impl QuestionCatalog {
    #[must_use]
    pub fn new(questions: BTreeMap<String, QuestionInfo>) -> Self {
        Self { questions }
    }

    /// Registers metadata for a code, replacing any previous entry.
    pub fn insert(&mut self, code: impl Into<String>, info: QuestionInfo) {
        self.questions.insert(code.into(), info);
    }

    /// Metadata for `code`, if the export mentioned it.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&QuestionInfo> {
        self.questions.get(code)
    }

    /// Top-level question text for `code`.
    #[must_use]
    pub fn top_question(&self, code: &str) -> Option<&str> {
        self.get(code).map(|info| info.top_question.as_str())
    }

    /// Subquestion label for `code`.
    #[must_use]
    pub fn subquestion(&self, code: &str) -> Option<&str> {
        self.get(code).map(|info| info.subquestion.as_str())
    }

    /// Possible answers for `code`, in presentation order.
    #[must_use]
    pub fn possible_answers(&self, code: &str) -> Option<&[String]> {
        self.get(code).map(|info| info.possible_answers.as_slice())
    }

    /// All known codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.questions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
