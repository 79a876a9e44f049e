#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use crate::config::ScreenConfig;

pub mod aggregate;
pub mod dock;
pub mod extract;
pub mod screen;

pub mod prelude {
    pub use clap::{Arg, ArgMatches, Command};

    pub use super::{config_args, load_config};
}

use prelude::*;

const PATH_OVERRIDES: [(&str, &str); 9] = [
    ("executable", "Docking executable"),
    ("docking-config", "Configuration file passed to the docking tool"),
    ("ligands-dir", "Directory of ligand structure files"),
    ("logs-dir", "Directory for per-ligand logs"),
    ("results-dir", "Directory for docked poses"),
    ("combined-log", "Combined log file"),
    ("csv", "Affinity table output"),
    ("errors", "Error report output"),
    ("id-pattern", "Regex locating the compound identifier in a block header"),
];

/// Arguments shared by every subcommand: a JSON settings file plus overrides.
pub fn config_args(command: Command) -> Command {
    let command = command.arg(
        Arg::new("settings")
            .required(false)
            .long("settings")
            .short('s')
            .num_args(1)
            .help("JSON settings file"),
    );

    PATH_OVERRIDES.iter().fold(command, |command, (name, help)| {
        command.arg(
            Arg::new(*name)
                .required(false)
                .long(*name)
                .num_args(1)
                .help(*help),
        )
    })
}

pub fn load_config(matches: &ArgMatches) -> eyre::Result<ScreenConfig> {
    let mut config = match matches.get_one::<String>("settings") {
        Some(path) => ScreenConfig::from_json_file(path)?,
        None => ScreenConfig::default(),
    };

    let path_arg = |name: &str| matches.get_one::<String>(name).map(PathBuf::from);

    if let Some(p) = path_arg("executable") {
        config.executable = p;
    }
    if let Some(p) = path_arg("docking-config") {
        config.docking_config = p;
    }
    if let Some(p) = path_arg("ligands-dir") {
        config.ligands_dir = p;
    }
    if let Some(p) = path_arg("logs-dir") {
        config.logs_dir = p;
    }
    if let Some(p) = path_arg("results-dir") {
        config.results_dir = p;
    }
    if let Some(p) = path_arg("combined-log") {
        config.combined_log = p;
    }
    if let Some(p) = path_arg("csv") {
        config.csv_path = p;
    }
    if let Some(p) = path_arg("errors") {
        config.error_path = p;
    }
    if let Some(pattern) = matches.get_one::<String>("id-pattern") {
        config.id_pattern = pattern.clone();
    }

    // fail before any stage runs
    config.id_regex()?;

    log::debug!("{:?}", config);

    Ok(config)
}

pub fn print_summary(config: &ScreenConfig) {
    println!("Results saved to {}", config.csv_path.display());
    println!("Error molecules saved to {}", config.error_path.display());
}
