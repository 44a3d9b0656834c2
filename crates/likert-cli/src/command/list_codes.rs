use std::path::PathBuf;

use clap::Args;

use crate::statistics_export;

#[derive(Debug, Clone, Args)]
pub(crate) struct ListCodesArg {
    /// Path to the summary-statistics CSV export
    #[arg(long)]
    pub statistics: PathBuf,
}

pub(crate) fn run(arg: &ListCodesArg) -> anyhow::Result<()> {
    let catalog = statistics_export::load_catalog(&arg.statistics)?;
    println!("{} question codes", catalog.len());
    println!("  {:<14} {:<28} {:>8}  {}", "Code", "Subquestion", "Answers", "Question");
    println!("  {}", "-".repeat(80));
    for code in catalog.codes() {
        let info = catalog.get(code).expect("listed code");
        println!(
            "  {:<14} {:<28} {:>8}  {}",
            code,
            info.subquestion,
            info.possible_answers.len(),
            info.top_question,
        );
    }
    Ok(())
}
