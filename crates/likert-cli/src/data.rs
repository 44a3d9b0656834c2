//! File loading for the results export and the survey configuration.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, bail};
use likert_survey::{AnswerScale, RespondentId, ResultsTable, ScoringTable, SurveyConfig};
use serde::Deserialize;

/// Survey configuration file: sampling parameters plus the per-scale code
/// assignments for this survey instance.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SurveyFile {
    pub population: usize,
    #[serde(default = "default_zscore")]
    pub zscore: f64,
    #[serde(default)]
    pub scales: ScaleAssignments,
}

fn default_zscore() -> f64 {
    1.96
}

/// Question codes grouped by the answer scale they are scored on.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ScaleAssignments {
    #[serde(default)]
    pub frequency: Vec<String>,
    #[serde(default)]
    pub valence: Vec<String>,
    #[serde(default)]
    pub continuum: Vec<String>,
    #[serde(default)]
    pub agreement: Vec<String>,
}

impl SurveyFile {
    pub(crate) fn config(&self) -> SurveyConfig {
        SurveyConfig {
            population: self.population,
            zscore: self.zscore,
        }
    }

    pub(crate) fn scoring(&self) -> ScoringTable {
        let mut table = ScoringTable::default();
        table.assign(AnswerScale::Frequency, self.scales.frequency.iter().cloned());
        table.assign(AnswerScale::Valence, self.scales.valence.iter().cloned());
        table.assign(AnswerScale::Continuum, self.scales.continuum.iter().cloned());
        table.assign(AnswerScale::Agreement, self.scales.agreement.iter().cloned());
        table
    }
}

pub(crate) fn load_survey<P>(path: P) -> anyhow::Result<SurveyFile>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let survey: SurveyFile = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(survey)
}

/// Loads the results export: respondent IDs in the first column, one answer
/// column per question code, empty cells for missing answers.
pub(crate) fn load_results<P>(path: P) -> anyhow::Result<ResultsTable>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_results(file).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_results<R>(input: R) -> anyhow::Result<ResultsTable>
where
    R: Read,
{
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        bail!("results export has no columns");
    }
    let codes: Vec<String> = headers.iter().skip(1).map(str::to_owned).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(id) = record.get(0) else {
            bail!("results row without a respondent id");
        };
        let cells = (1..headers.len())
            .map(|index| {
                record
                    .get(index)
                    .map(str::trim)
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_owned)
            })
            .collect();
        rows.push((RespondentId::new(id), cells));
    }
    if rows.is_empty() {
        bail!("results export has no respondents");
    }
    Ok(ResultsTable::from_rows(codes, rows)?)
}
