use crate::command_line::prelude::*;
use crate::docking::batch_runner::run_batch;

pub const NAME: &str = "dock";

pub fn command() -> Command {
    config_args(Command::new(NAME).about("Dock every ligand and write one log per ligand"))
}

pub async fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let config = load_config(matches)?;

    let report = run_batch(&config).await?;

    for failure in &report.failures {
        log::warn!("{}", failure);
    }

    Ok(())
}
