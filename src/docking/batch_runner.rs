#![allow(clippy::print_stdout)]

use std::path::Path;

use tokio::process::Command;

use super::{discover_ligands, ligand_stem, BatchReport, DockingOutcome};
use crate::config::ScreenConfig;
use crate::error::{Result, ScreenError};

pub fn prepare_output_dirs(config: &ScreenConfig) -> Result<()> {
    for dir in [&config.results_dir, &config.logs_dir] {
        std::fs::create_dir_all(dir).map_err(|e| ScreenError::io(dir, e))?;
    }
    Ok(())
}

/// Runs the docking executable on one ligand and waits for it to exit.
///
/// A spawn failure (e.g. the executable is missing) is reported as a failed
/// outcome with the error text standing in for stderr.
pub async fn dock_ligand(config: &ScreenConfig, ligand: &Path) -> DockingOutcome {
    let log_path = config.log_path_for(&ligand_stem(ligand));

    let output = Command::new(&config.executable)
        .arg("--config")
        .arg(&config.docking_config)
        .arg("--batch")
        .arg(ligand)
        .output()
        .await;

    match output {
        Ok(output) => DockingOutcome {
            ligand: ligand.to_owned(),
            log_path,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        },
        Err(e) => {
            log::error!("could not start {:?}: {}", config.executable, e);
            DockingOutcome {
                ligand: ligand.to_owned(),
                log_path,
                stdout: String::new(),
                stderr: format!("{}: {}", config.executable.display(), e),
                exit_code: None,
            }
        }
    }
}

/// Overwrites the run log with stdout, a newline, then stderr.
pub fn write_run_log(outcome: &DockingOutcome) -> Result<()> {
    let contents = format!("{}\n{}", outcome.stdout, outcome.stderr);
    std::fs::write(&outcome.log_path, contents).map_err(|e| ScreenError::io(&outcome.log_path, e))
}

pub async fn run_batch(config: &ScreenConfig) -> Result<BatchReport> {
    let ligands = discover_ligands(&config.ligands_dir, &config.ligand_extension)?;
    prepare_output_dirs(config)?;

    log::info!(
        "docking {} ligands from {:?} with {:?}",
        ligands.len(),
        config.ligands_dir,
        config.executable
    );

    let mut report = BatchReport::default();
    for ligand in ligands {
        println!("Processing ligand: {}", ligand.display());

        let outcome = dock_ligand(config, &ligand).await;
        write_run_log(&outcome)?;

        println!("{}", outcome.stdout);

        if outcome.succeeded() {
            println!("AutoDock Vina executed successfully.");
            report.succeeded += 1;
        } else {
            match outcome.exit_code {
                Some(code) => println!("Error: AutoDock Vina exited with code {}", code),
                None => println!("Error: AutoDock Vina did not exit normally"),
            }
            println!(
                "Error for ligand {}. Check the log file: {}",
                outcome.ligand.display(),
                outcome.log_path.display()
            );
            report.failures.extend(outcome.into_failure());
        }
    }

    log::info!(
        "docked {} ligands, {} failed",
        report.total(),
        report.failures.len()
    );

    Ok(report)
}
