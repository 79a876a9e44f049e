use tracing_subscriber::EnvFilter;
use vinascreen::command_line::{aggregate, dock, extract, screen};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = clap::Command::new("vinascreen")
        .about("Batch AutoDock Vina screening")
        .subcommand_required(true)
        .subcommand(dock::command())
        .subcommand(aggregate::command())
        .subcommand(extract::command())
        .subcommand(screen::command());

    let matches = app.get_matches();

    match matches.subcommand() {
        Some((dock::NAME, sub_matches)) => dock::action(sub_matches).await,
        Some((aggregate::NAME, sub_matches)) => aggregate::action(sub_matches),
        Some((extract::NAME, sub_matches)) => extract::action(sub_matches),
        Some((screen::NAME, sub_matches)) => screen::action(sub_matches).await,
        Some((other, _)) => Err(eyre::eyre!("unknown subcommand {}", other)),
        None => Err(eyre::eyre!("no subcommand given")),
    }
}
