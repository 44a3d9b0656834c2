//! Named cohort definitions and their resolution against a results table.
//!
//! A cohort file declares inclusion criteria by name, as rules over
//! question/answer matches:
//!
//! ```json
//! {
//!   "cohorts": [
//!     { "name": "grad",
//!       "description": "Graduate students",
//!       "rule": { "any": [
//!         { "answer": { "code": "SAL1", "is": "I am a PhD level graduate student." } },
//!         { "answer": { "code": "SAL1", "is": "I am a master level graduate student." } }
//!       ] } },
//!     { "name": "grad-fem",
//!       "rule": { "all": [
//!         { "named": "grad" },
//!         { "answer": { "code": "PI3", "is": "Female (cis or trans)" } }
//!       ] } }
//!   ]
//! }
//! ```
//!
//! Rules may reference earlier names with `named`, which keeps definitions
//! acyclic the same way sequential assignment does. The name `everyone` is
//! always available and resolves to the full universe.

use std::{collections::BTreeMap, fs::File, path::Path};

use anyhow::{Context, bail};
use likert_survey::{Cohort, CombineLogic, ResultsTable};
use serde::Deserialize;

/// The name that always resolves to the whole universe.
pub(crate) const EVERYONE: &str = "everyone";

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CohortFile {
    #[serde(default)]
    pub cohorts: Vec<CohortDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CohortDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rule: CohortRule,
}

/// One inclusion rule, composable from answer matches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CohortRule {
    /// Every respondent of the results table.
    Everyone,
    /// Respondents who gave exactly this answer for this code.
    Answer { code: String, is: String },
    /// Union of the sub-rules.
    Any(Vec<CohortRule>),
    /// Intersection of the sub-rules.
    All(Vec<CohortRule>),
    /// Base rule minus the union of the subtracted rules.
    Minus {
        base: Box<CohortRule>,
        subtract: Vec<CohortRule>,
    },
    /// Reference to an earlier cohort definition by name.
    Named(String),
}

/// Cohorts resolved against one results table, by name.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedCohorts {
    cohorts: BTreeMap<String, ResolvedCohort>,
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedCohort {
    pub description: String,
    pub cohort: Cohort,
}

impl ResolvedCohorts {
    /// Resolves every definition in order against `table`.
    pub(crate) fn resolve(file: &CohortFile, table: &ResultsTable) -> anyhow::Result<Self> {
        let mut cohorts = BTreeMap::new();
        cohorts.insert(
            EVERYONE.to_owned(),
            ResolvedCohort {
                description: "all respondents".to_owned(),
                cohort: table.universe().everyone(),
            },
        );
        for def in &file.cohorts {
            if cohorts.contains_key(&def.name) {
                bail!("cohort '{}' is defined twice", def.name);
            }
            let cohort = resolve_rule(&def.rule, table, &cohorts)
                .with_context(|| format!("failed to resolve cohort '{}'", def.name))?;
            cohorts.insert(
                def.name.clone(),
                ResolvedCohort {
                    description: def.description.clone(),
                    cohort,
                },
            );
        }
        Ok(Self { cohorts })
    }

    pub(crate) fn get(&self, name: &str) -> anyhow::Result<&ResolvedCohort> {
        self.cohorts.get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown cohort '{name}' (known: {})",
                self.cohorts.keys().cloned().collect::<Vec<_>>().join(", ")
            )
        })
    }

}

fn resolve_rule(
    rule: &CohortRule,
    table: &ResultsTable,
    resolved: &BTreeMap<String, ResolvedCohort>,
) -> anyhow::Result<Cohort> {
    match rule {
        CohortRule::Everyone => Ok(table.universe().everyone()),
        CohortRule::Answer { code, is } => Ok(table.matching(code, is)?),
        CohortRule::Any(rules) => combine(rules, table, resolved, CombineLogic::Or),
        CohortRule::All(rules) => combine(rules, table, resolved, CombineLogic::And),
        CohortRule::Minus { base, subtract } => {
            let base = resolve_rule(base, table, resolved)?;
            let subtract = subtract
                .iter()
                .map(|rule| resolve_rule(rule, table, resolved))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(Cohort::difference(&base, &subtract)?)
        }
        CohortRule::Named(name) => resolved
            .get(name)
            .map(|c| c.cohort.clone())
            .ok_or_else(|| anyhow::anyhow!("reference to undefined cohort '{name}'")),
    }
}

fn combine(
    rules: &[CohortRule],
    table: &ResultsTable,
    resolved: &BTreeMap<String, ResolvedCohort>,
    logic: CombineLogic,
) -> anyhow::Result<Cohort> {
    let cohorts = rules
        .iter()
        .map(|rule| resolve_rule(rule, table, resolved))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Cohort::combine(&cohorts, logic)?)
}

pub(crate) fn load_cohorts<P>(path: P) -> anyhow::Result<CohortFile>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let cohorts: CohortFile = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(cohorts)
}

#[cfg(test)]
mod tests {
    use likert_survey::RespondentId;

    use super::*;

    fn table() -> ResultsTable {
        let rows = [
            ("1", "PhD", "Female (cis or trans)"),
            ("2", "Undergrad", "Male (cis or trans)"),
            ("3", "Master", "Female (cis or trans)"),
            ("4", "Undergrad", "Female (cis or trans)"),
        ];
        ResultsTable::from_rows(
            vec!["SAL1".to_owned(), "PI3".to_owned()],
            rows.iter()
                .map(|(id, sal, pi)| {
                    (
                        RespondentId::new(*id),
                        vec![Some((*sal).to_owned()), Some((*pi).to_owned())],
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn file(json: &str) -> CohortFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_resolve_answer_and_combinations() {
        let table = table();
        let cohorts = file(
            r#"{ "cohorts": [
                { "name": "grad", "rule": { "any": [
                    { "answer": { "code": "SAL1", "is": "PhD" } },
                    { "answer": { "code": "SAL1", "is": "Master" } }
                ] } },
                { "name": "grad-fem", "rule": { "all": [
                    { "named": "grad" },
                    { "answer": { "code": "PI3", "is": "Female (cis or trans)" } }
                ] } },
                { "name": "not-grad", "rule": { "minus": {
                    "base": "everyone",
                    "subtract": [ { "named": "grad" } ]
                } } }
            ] }"#,
        );
        let resolved = ResolvedCohorts::resolve(&cohorts, &table).unwrap();
        assert_eq!(resolved.get("grad").unwrap().cohort.len(), 2);
        assert_eq!(resolved.get("grad-fem").unwrap().cohort.len(), 2);
        assert_eq!(resolved.get("not-grad").unwrap().cohort.len(), 2);
        assert_eq!(resolved.get(EVERYONE).unwrap().cohort.len(), 4);
    }

    #[test]
    fn test_forward_reference_is_an_error() {
        let table = table();
        let cohorts = file(
            r#"{ "cohorts": [
                { "name": "a", "rule": { "named": "b" } },
                { "name": "b", "rule": "everyone" }
            ] }"#,
        );
        assert!(ResolvedCohorts::resolve(&cohorts, &table).is_err());
    }

    #[test]
    fn test_duplicate_name_is_an_error() {
        let table = table();
        let cohorts = file(
            r#"{ "cohorts": [
                { "name": "a", "rule": "everyone" },
                { "name": "a", "rule": "everyone" }
            ] }"#,
        );
        assert!(ResolvedCohorts::resolve(&cohorts, &table).is_err());
    }

    #[test]
    fn test_unknown_answer_code_is_an_error() {
        let table = table();
        let cohorts = file(
            r#"{ "cohorts": [
                { "name": "x", "rule": { "answer": { "code": "NOPE", "is": "Yes" } } }
            ] }"#,
        );
        assert!(ResolvedCohorts::resolve(&cohorts, &table).is_err());
    }

    #[test]
    fn test_unmatched_answer_resolves_to_empty_cohort() {
        let table = table();
        let cohorts = file(
            r#"{ "cohorts": [
                { "name": "x", "rule": { "answer": { "code": "SAL1", "is": "Postdoc" } } }
            ] }"#,
        );
        let resolved = ResolvedCohorts::resolve(&cohorts, &table).unwrap();
        assert!(resolved.get("x").unwrap().cohort.is_empty());
    }
}
