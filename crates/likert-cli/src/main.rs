mod cohorts;
mod command;
mod data;
mod schema;
mod statistics_export;
mod table;

fn main() -> anyhow::Result<()> {
    command::run()
}
