pub mod aggregate;

pub const LOG_SUFFIX: &str = "_output.log";
pub const SEPARATOR_PREFIX: &str = "### Results for ";
pub const SEPARATOR_SUFFIX: &str = " ###";

/// Label line placed in the combined log before each ligand's output.
pub fn separator_line(log_file_name: &str) -> String {
    let stem = log_file_name
        .strip_suffix(LOG_SUFFIX)
        .unwrap_or(log_file_name);
    format!("{SEPARATOR_PREFIX}{stem}{SEPARATOR_SUFFIX}\n")
}
