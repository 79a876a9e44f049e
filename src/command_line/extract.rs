use crate::affinity::report::extract_affinities;
use crate::command_line::prelude::*;
use crate::command_line::print_summary;

pub const NAME: &str = "extract";

pub fn command() -> Command {
    config_args(Command::new(NAME).about("Extract pose affinities from the combined log"))
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let config = load_config(matches)?;

    extract_affinities(&config)?;
    print_summary(&config);

    Ok(())
}
