use serde::{Deserialize, Serialize};

/// Stable identifier of a single survey respondent.
///
/// Respondent IDs come verbatim from the first column of the results export.
/// They are opaque strings; numeric exports compare as strings, so `"10"` and
/// `"010"` are distinct respondents.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[from(String, &str)]
pub struct RespondentId(String);

impl RespondentId {
    /// Creates an ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier as exported.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
