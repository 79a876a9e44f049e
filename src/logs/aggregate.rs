use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use super::{separator_line, LOG_SUFFIX};
use crate::error::{Result, ScreenError};

/// Names of per-ligand logs in `logs_dir`, in byte order ("ligand10" < "ligand2").
pub fn collect_log_files(logs_dir: impl AsRef<Path>) -> Result<Vec<OsString>> {
    let logs_dir = logs_dir.as_ref();
    let entries = std::fs::read_dir(logs_dir).map_err(|e| ScreenError::io(logs_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScreenError::io(logs_dir, e))?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(LOG_SUFFIX) {
            names.push(name);
        }
    }
    names.sort();

    Ok(names)
}

fn write_section(writer: &mut impl Write, name: &str, contents: &str) -> std::io::Result<()> {
    writer.write_all(separator_line(name).as_bytes())?;
    writer.write_all(contents.as_bytes())?;
    writer.write_all(b"\n")
}

/// Rewrites `combined_log` from every per-ligand log in `logs_dir`.
///
/// The combined log is truncated first, so aggregating twice gives the same file.
pub fn aggregate_logs(logs_dir: impl AsRef<Path>, combined_log: impl AsRef<Path>) -> Result<usize> {
    let logs_dir = logs_dir.as_ref();
    let combined_log = combined_log.as_ref();

    let names = collect_log_files(logs_dir)?;

    let file = std::fs::File::create(combined_log).map_err(|e| ScreenError::io(combined_log, e))?;
    let mut writer = std::io::BufWriter::new(file);

    for name in &names {
        let log_path = logs_dir.join(name);
        let contents =
            std::fs::read_to_string(&log_path).map_err(|e| ScreenError::io(&log_path, e))?;

        write_section(&mut writer, &name.to_string_lossy(), &contents)
            .map_err(|e| ScreenError::io(combined_log, e))?;
    }
    writer.flush().map_err(|e| ScreenError::io(combined_log, e))?;

    log::info!(
        "aggregated {} logs from {:?} into {:?}",
        names.len(),
        logs_dir,
        combined_log
    );

    Ok(names.len())
}
