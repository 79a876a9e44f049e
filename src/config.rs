use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, ScreenError};
use crate::logs::LOG_SUFFIX;

pub const DEFAULT_ID_PATTERN: &str = r"[A-Za-z]+\d+";
pub const DEFAULT_ERROR_MARKER: &str = "PDBQT parsing error";

/// Paths and patterns shared by every stage of a screening run.
///
/// Fields missing from a settings file keep their default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub executable: PathBuf,
    pub docking_config: PathBuf,
    pub ligands_dir: PathBuf,
    pub ligand_extension: String,
    pub logs_dir: PathBuf,
    pub results_dir: PathBuf,
    pub combined_log: PathBuf,
    pub csv_path: PathBuf,
    pub error_path: PathBuf,
    pub id_pattern: String,
    pub error_marker: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("vina"),
            docking_config: PathBuf::from("conf.txt"),
            ligands_dir: PathBuf::from("./ligands"),
            ligand_extension: "pdbqt".to_string(),
            logs_dir: PathBuf::from("./logs"),
            results_dir: PathBuf::from("./VS_results"),
            combined_log: PathBuf::from("./comb_log.txt"),
            csv_path: PathBuf::from("vina_results.csv"),
            error_path: PathBuf::from("vina_errors.txt"),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

impl ScreenConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ScreenError::io(path, e))?;

        serde_json::from_str(&contents).map_err(|source| ScreenError::Settings {
            path: path.to_owned(),
            source,
        })
    }

    pub fn id_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.id_pattern)?)
    }

    /// Per-ligand log location, `<logs_dir>/<stem>_output.log`.
    pub fn log_path_for(&self, ligand_stem: &str) -> PathBuf {
        self.logs_dir.join(format!("{ligand_stem}{LOG_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let config: ScreenConfig =
            serde_json::from_str(r#"{"executable": "/opt/vina/bin/vina", "id_pattern": "DB\\d+"}"#)
                .unwrap();

        assert_eq!(config.executable, PathBuf::from("/opt/vina/bin/vina"));
        assert_eq!(config.id_pattern, r"DB\d+");
        assert_eq!(config.logs_dir, PathBuf::from("./logs"));
        assert_eq!(config.error_marker, DEFAULT_ERROR_MARKER);
    }

    #[test]
    fn log_path_uses_output_suffix() {
        let config = ScreenConfig::default();
        assert_eq!(
            config.log_path_for("DB00945"),
            PathBuf::from("./logs/DB00945_output.log")
        );
    }

    #[test]
    fn invalid_id_pattern_is_rejected() {
        let config = ScreenConfig {
            id_pattern: "[A-Z".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.id_regex(),
            Err(ScreenError::InvalidPattern(_))
        ));
    }
}
