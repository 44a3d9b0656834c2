use std::path::PathBuf;

use clap::Args;
use likert_analysis::tally::AnswerTally;

use crate::{
    cohorts::{self, ResolvedCohorts},
    data, statistics_export, table,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct TallyArg {
    /// Path to the results CSV export
    #[arg(long)]
    pub results: PathBuf,

    /// Path to the summary-statistics CSV export (for the possible answers)
    #[arg(long)]
    pub statistics: PathBuf,

    /// Path to the cohort definition JSON
    #[arg(long)]
    pub cohorts: Option<PathBuf>,

    /// Name of the cohort to tally
    #[arg(long, default_value = cohorts::EVERYONE)]
    pub cohort: String,

    /// Question codes to tally (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub codes: Vec<String>,
}

pub(crate) fn run(arg: &TallyArg) -> anyhow::Result<()> {
    let results = data::load_results(&arg.results)?;
    let catalog = statistics_export::load_catalog(&arg.statistics)?;
    let cohort_file = match &arg.cohorts {
        Some(path) => cohorts::load_cohorts(path)?,
        None => crate::cohorts::CohortFile::default(),
    };
    let resolved = ResolvedCohorts::resolve(&cohort_file, &results)?;
    let include = resolved.get(&arg.cohort)?;

    for (index, code) in arg.codes.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let tally = AnswerTally::build(&results, &catalog, code, &include.cohort)?;
        table::print_tally(&tally, &arg.cohort);
    }
    Ok(())
}
