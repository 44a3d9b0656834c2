use clap::{Parser, Subcommand};

use self::{compare::CompareArg, list_codes::ListCodesArg, tally::TallyArg};

mod compare;
mod list_codes;
mod tally;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compare scored responses of a cohort against a comparison cohort
    Compare(#[clap(flatten)] CompareArg),
    /// Tally answer counts and percentages for a cohort
    Tally(#[clap(flatten)] TallyArg),
    /// List question codes found in the statistics export
    ListCodes(#[clap(flatten)] ListCodesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Compare(arg) => compare::run(&arg)?,
        Mode::Tally(arg) => tally::run(&arg)?,
        Mode::ListCodes(arg) => list_codes::run(&arg)?,
    }
    Ok(())
}
