use crate::affinity::report::extract_affinities;
use crate::command_line::prelude::*;
use crate::command_line::print_summary;
use crate::docking::batch_runner::run_batch;
use crate::logs::aggregate::aggregate_logs;

pub const NAME: &str = "screen";

pub fn command() -> Command {
    config_args(Command::new(NAME).about("Dock, aggregate and extract in one run"))
}

pub async fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let config = load_config(matches)?;

    let report = run_batch(&config).await?;
    if !report.failures.is_empty() {
        log::warn!(
            "{} of {} docking runs failed, see {:?}",
            report.failures.len(),
            report.total(),
            config.logs_dir
        );
    }

    aggregate_logs(&config.logs_dir, &config.combined_log)?;
    let extraction = extract_affinities(&config)?;

    println!(
        "{} poses for {} compounds, {} compounds without results",
        extraction.records.len(),
        extraction.compound_count(),
        extraction.failures.len()
    );
    print_summary(&config);

    Ok(())
}
