use std::io::Write;
use std::path::Path;

use super::extract::parse_combined_log;
use super::{Extraction, CSV_HEADER};
use crate::config::ScreenConfig;
use crate::error::{Result, ScreenError};

/// Writes the affinity table. The header row is present even with no records.
pub fn write_results(extraction: &Extraction, csv_path: impl AsRef<Path>) -> Result<()> {
    let csv_path = csv_path.as_ref();
    let file = std::fs::File::create(csv_path).map_err(|e| ScreenError::io(csv_path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(CSV_HEADER)?;
    for record in &extraction.records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ScreenError::io(csv_path, e))?;

    Ok(())
}

pub fn write_error_report(extraction: &Extraction, error_path: impl AsRef<Path>) -> Result<()> {
    let error_path = error_path.as_ref();
    let file = std::fs::File::create(error_path).map_err(|e| ScreenError::io(error_path, e))?;
    let mut writer = std::io::BufWriter::new(file);

    for id in &extraction.failures {
        let failure = ScreenError::CompoundParseFailure { id: id.clone() };
        writeln!(writer, "{}", failure).map_err(|e| ScreenError::io(error_path, e))?;
    }
    writer.flush().map_err(|e| ScreenError::io(error_path, e))?;

    Ok(())
}

pub fn extract_affinities(config: &ScreenConfig) -> Result<Extraction> {
    let id_regex = config.id_regex()?;
    let text = std::fs::read_to_string(&config.combined_log)
        .map_err(|e| ScreenError::io(&config.combined_log, e))?;

    let extraction = parse_combined_log(&text, &id_regex, &config.error_marker);

    write_results(&extraction, &config.csv_path)?;
    write_error_report(&extraction, &config.error_path)?;

    if extraction.skipped_blocks > 0 {
        log::warn!(
            "{} blocks in {:?} had no identifier matching {:?} and were skipped",
            extraction.skipped_blocks,
            config.combined_log,
            config.id_pattern
        );
    }
    log::info!(
        "extracted {} poses for {} compounds, {} compounds with parsing errors",
        extraction.records.len(),
        extraction.compound_count(),
        extraction.failures.len()
    );

    Ok(extraction)
}
