use std::path::{Path, PathBuf};

use crate::error::{Result, ScreenError};

pub mod batch_runner;

/// Captured result of one docking invocation. Only its text is persisted.
#[derive(Debug, Clone)]
pub struct DockingOutcome {
    pub ligand: PathBuf,
    pub log_path: PathBuf,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl DockingOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn into_failure(self) -> Option<ScreenError> {
        if self.succeeded() {
            None
        } else {
            Some(ScreenError::ExternalProcessFailure {
                ligand: self.ligand,
                exit_code: self.exit_code,
            })
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failures: Vec<ScreenError>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }
}

pub fn ligand_stem(ligand: &Path) -> String {
    ligand
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists ligand files with `extension` in `dir`, sorted by file name.
pub fn discover_ligands(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| ScreenError::io(dir, e))?;

    let mut ligands = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ScreenError::io(dir, e))?.path();
        let matches_extension = path
            .extension()
            .map(|ext| ext == extension)
            .unwrap_or(false);

        if matches_extension && path.is_file() {
            ligands.push(path);
        }
    }
    ligands.sort();

    Ok(ligands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_drops_directory_and_extension() {
        assert_eq!(ligand_stem(Path::new("./ligands/DB00945.pdbqt")), "DB00945");
    }

    #[test]
    fn nonzero_exit_is_a_failure() {
        let outcome = DockingOutcome {
            ligand: PathBuf::from("ligands/DB1.pdbqt"),
            log_path: PathBuf::from("logs/DB1_output.log"),
            stdout: String::new(),
            stderr: "boom".to_string(),
            exit_code: Some(1),
        };

        match outcome.into_failure() {
            Some(ScreenError::ExternalProcessFailure { ligand, exit_code }) => {
                assert_eq!(ligand, PathBuf::from("ligands/DB1.pdbqt"));
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
