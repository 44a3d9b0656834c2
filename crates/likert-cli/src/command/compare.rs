use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;
use clap::Args;
use likert_analysis::builder::ComparisonBuilder;
use likert_survey::QuestionCatalog;

use crate::{
    cohorts::{self, ResolvedCohorts},
    data,
    schema::{self, ComparisonReport},
    statistics_export, table,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CompareArg {
    /// Path to the results CSV export
    #[arg(long)]
    pub results: PathBuf,

    /// Path to the summary-statistics CSV export
    #[arg(long)]
    pub statistics: Option<PathBuf>,

    /// Path to the survey configuration JSON (population, zscore, scales)
    #[arg(long)]
    pub survey: PathBuf,

    /// Path to the cohort definition JSON
    #[arg(long)]
    pub cohorts: Option<PathBuf>,

    /// Name of the include cohort
    #[arg(long, default_value = cohorts::EVERYONE)]
    pub cohort: String,

    /// Name of the comparison cohort; defaults to everyone not in the
    /// include cohort
    #[arg(long)]
    pub comparison: Option<String>,

    /// Question codes to analyze (comma-separated). Group codes that share
    /// a parent question.
    #[arg(long, value_delimiter = ',', required = true)]
    pub codes: Vec<String>,

    /// Description of the inclusion criterion, for the report
    #[arg(long)]
    pub description: Option<String>,

    /// Write the report JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CompareArg) -> anyhow::Result<()> {
    let results = data::load_results(&arg.results)?;
    let survey = data::load_survey(&arg.survey)?;
    let catalog = match &arg.statistics {
        Some(path) => statistics_export::load_catalog(path)?,
        None => QuestionCatalog::default(),
    };
    let cohort_file = match &arg.cohorts {
        Some(path) => cohorts::load_cohorts(path)?,
        None => {
            if arg.cohort != cohorts::EVERYONE || arg.comparison.is_some() {
                bail!("--cohort/--comparison need a cohort definition file (--cohorts)");
            }
            crate::cohorts::CohortFile::default()
        }
    };
    let resolved = ResolvedCohorts::resolve(&cohort_file, &results)?;

    let include = resolved.get(&arg.cohort)?;
    let comparison = arg
        .comparison
        .as_deref()
        .map(|name| resolved.get(name))
        .transpose()?;

    let config = survey.config();
    let scoring = survey.scoring();
    let builder = ComparisonBuilder::new(&results, &scoring, &catalog, &config);

    let description = arg
        .description
        .clone()
        .unwrap_or_else(|| include.description.clone());
    let record = builder.build(
        &arg.codes,
        &include.cohort,
        comparison.map(|c| &c.cohort),
        &description,
    )?;

    table::print_comparison(&record);

    if let Some(output) = &arg.output {
        let report = ComparisonReport {
            generated_at: Utc::now(),
            cohort: arg.cohort.clone(),
            comparison: arg.comparison.clone(),
            records: vec![record],
        };
        schema::save_report(&report, output)?;
        println!("\nReport saved to: {}", output.display());
    }

    Ok(())
}
