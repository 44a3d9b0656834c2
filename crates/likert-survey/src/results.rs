//! The results table: one answer per respondent per question code.
//!
//! The table is loaded once from the survey's results export and treated as
//! immutable reference data. Cells are `None` where the export had a
//! missing/empty value ("Not completed or Not displayed").
//!
//! Cohort-filtered views *filter, they do not null*: a view over a cohort
//! contains exactly one entry per cohort member, in store order, and no
//! placeholders for non-members. Sample sizes downstream are computed from
//! view lengths, so representing non-members as `None` would corrupt them.

use std::collections::BTreeMap;

use crate::{
    cohort::{Cohort, Universe},
    respondent::RespondentId,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("question code '{code}' is not a column of the results table")]
pub struct UnknownCodeError {
    pub code: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("respondent '{id}' is not present in the results table")]
pub struct RespondentNotFoundError {
    pub id: RespondentId,
}

/// Failure of a single-cell lookup.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LookupError {
    #[display("{_0}")]
    UnknownCode(UnknownCodeError),
    #[display("{_0}")]
    RespondentNotFound(RespondentNotFoundError),
}

/// Failure while assembling a results table from export rows.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableBuildError {
    #[display("duplicate respondent id '{id}' in results table")]
    DuplicateRespondent { id: RespondentId },
    #[display("row for respondent '{id}' has {actual} cells, expected {expected}")]
    RowLength {
        id: RespondentId,
        expected: usize,
        actual: usize,
    },
    #[display("duplicate question code '{code}' in results table")]
    DuplicateCode { code: String },
}

/// Immutable per-respondent answers, keyed by question code.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    universe: Universe,
    columns: BTreeMap<String, Vec<Option<String>>>,
}

impl ResultsTable {
    /// Assembles a table from export rows.
    ///
    /// `codes` names the answer columns; each row carries the respondent ID
    /// and one cell per code, `None` for missing answers. Respondent order
    /// of the rows becomes the store order of the table.
    pub fn from_rows(
        codes: Vec<String>,
        rows: Vec<(RespondentId, Vec<Option<String>>)>,
    ) -> Result<Self, TableBuildError> {
        let mut ids = Vec::with_capacity(rows.len());
        let mut columns: BTreeMap<String, Vec<Option<String>>> = BTreeMap::new();
        for code in &codes {
            if columns
                .insert(code.clone(), Vec::with_capacity(rows.len()))
                .is_some()
            {
                return Err(TableBuildError::DuplicateCode { code: code.clone() });
            }
        }
        for (id, cells) in rows {
            if ids.contains(&id) {
                return Err(TableBuildError::DuplicateRespondent { id });
            }
            if cells.len() != codes.len() {
                return Err(TableBuildError::RowLength {
                    id,
                    expected: codes.len(),
                    actual: cells.len(),
                });
            }
            for (code, cell) in codes.iter().zip(cells) {
                columns.get_mut(code).unwrap().push(cell);
            }
            ids.push(id);
        }
        Ok(Self {
            universe: Universe::new(ids),
            columns,
        })
    }

    /// The universe of all respondents in this table, in store order.
    #[must_use]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Question codes present as columns, in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// `true` if `code` is a column of this table.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.columns.contains_key(code)
    }

    fn column(&self, code: &str) -> Result<&[Option<String>], UnknownCodeError> {
        self.columns
            .get(code)
            .map(Vec::as_slice)
            .ok_or_else(|| UnknownCodeError {
                code: code.to_owned(),
            })
    }

    /// All responses for a code, one entry per respondent in store order.
    pub fn all_responses(
        &self,
        code: &str,
    ) -> Result<Vec<(&RespondentId, Option<&str>)>, UnknownCodeError> {
        let column = self.column(code)?;
        Ok(self
            .universe
            .iter()
            .zip(column)
            .map(|(id, cell)| (id, cell.as_deref()))
            .collect())
    }

    /// Responses of cohort members only, in store order.
    ///
    /// Non-members are excluded entirely; members who left the question
    /// unanswered appear as `None`.
    ///
    /// # Panics
    ///
    /// Panics if `cohort` was derived from a different results table.
    pub fn included_responses(
        &self,
        code: &str,
        cohort: &Cohort,
    ) -> Result<Vec<Option<&str>>, UnknownCodeError> {
        assert!(
            self.universe.same_as(cohort.universe()),
            "cohort universe does not match this results table"
        );
        let column = self.column(code)?;
        Ok(self
            .universe
            .iter()
            .zip(column)
            .filter(|&(id, _)| cohort.contains(id))
            .map(|(_, cell)| cell.as_deref())
            .collect())
    }

    /// The answer one respondent gave for one code.
    pub fn single_response(
        &self,
        code: &str,
        id: &RespondentId,
    ) -> Result<Option<&str>, LookupError> {
        let column = self.column(code)?;
        let position = self
            .universe
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| RespondentNotFoundError { id: id.clone() })?;
        Ok(column[position].as_deref())
    }

    /// The cohort of respondents whose answer for `code` equals `answer`.
    pub fn matching(&self, code: &str, answer: &str) -> Result<Cohort, UnknownCodeError> {
        let column = self.column(code)?;
        let members = self
            .universe
            .iter()
            .zip(column)
            .filter(|(_, cell)| cell.as_deref() == Some(answer))
            .map(|(id, _)| id.clone());
        Ok(self
            .universe
            .cohort(members)
            .expect("matching members come from this universe"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultsTable {
        let codes = vec!["MH2".to_owned(), "PI3".to_owned()];
        let rows = vec![
            (
                RespondentId::new("1"),
                vec![Some("Thriving".to_owned()), Some("Female (cis or trans)".to_owned())],
            ),
            (
                RespondentId::new("2"),
                vec![Some("Struggling".to_owned()), Some("Male (cis or trans)".to_owned())],
            ),
            (RespondentId::new("3"), vec![None, Some("Female (cis or trans)".to_owned())]),
        ];
        ResultsTable::from_rows(codes, rows).unwrap()
    }

    #[test]
    fn test_all_responses_preserves_store_order() {
        let table = table();
        let responses = table.all_responses("MH2").unwrap();
        let answers: Vec<_> = responses.iter().map(|(_, a)| *a).collect();
        assert_eq!(answers, vec![Some("Thriving"), Some("Struggling"), None]);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let table = table();
        assert!(table.all_responses("NOPE").is_err());
        assert!(table.matching("NOPE", "Yes").is_err());
    }

    #[test]
    fn test_included_responses_filters_not_nulls() {
        let table = table();
        let cohort = table.matching("PI3", "Female (cis or trans)").unwrap();
        let view = table.included_responses("MH2", &cohort).unwrap();
        // Two members, one of whom did not answer MH2. No placeholders for
        // the excluded respondent.
        assert_eq!(view, vec![Some("Thriving"), None]);
    }

    #[test]
    fn test_single_response_lookup() {
        let table = table();
        let answer = table
            .single_response("MH2", &RespondentId::new("2"))
            .unwrap();
        assert_eq!(answer, Some("Struggling"));
        assert!(matches!(
            table.single_response("MH2", &RespondentId::new("9")),
            Err(LookupError::RespondentNotFound(_))
        ));
    }

    #[test]
    fn test_matching_builds_a_cohort() {
        let table = table();
        let cohort = table.matching("MH2", "Thriving").unwrap();
        assert_eq!(cohort.len(), 1);
        assert!(cohort.contains(&RespondentId::new("1")));
    }

    #[test]
    fn test_duplicate_respondent_rejected() {
        let codes = vec!["Q".to_owned()];
        let rows = vec![
            (RespondentId::new("1"), vec![None]),
            (RespondentId::new("1"), vec![None]),
        ];
        assert!(matches!(
            ResultsTable::from_rows(codes, rows),
            Err(TableBuildError::DuplicateRespondent { .. })
        ));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let codes = vec!["Q".to_owned(), "Q".to_owned()];
        let rows = vec![(RespondentId::new("1"), vec![None, None])];
        assert!(matches!(
            ResultsTable::from_rows(codes, rows),
            Err(TableBuildError::DuplicateCode { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "cohort universe does not match")]
    fn test_foreign_cohort_panics() {
        let table = table();
        let other = ResultsTable::from_rows(
            vec!["MH2".to_owned()],
            vec![(RespondentId::new("x"), vec![None])],
        )
        .unwrap();
        let foreign = other.universe().everyone();
        let _ = table.included_responses("MH2", &foreign);
    }
}
