use crate::command_line::prelude::*;
use crate::logs::aggregate::aggregate_logs;

pub const NAME: &str = "aggregate";

pub fn command() -> Command {
    config_args(Command::new(NAME).about("Combine per-ligand logs into one file"))
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let config = load_config(matches)?;

    let count = aggregate_logs(&config.logs_dir, &config.combined_log)?;
    println!(
        "Combined {} logs into {}",
        count,
        config.combined_log.display()
    );

    Ok(())
}
