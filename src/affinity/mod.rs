use std::collections::HashSet;

use serde::Serialize;

pub mod extract;
pub mod report;

pub const CSV_HEADER: [&str; 3] = ["ID", "Mode", "Affinity"];

lazy_static::lazy_static! {
    /// Vina pose table row: mode, affinity, then two integer columns. ASCII digits only.
    pub static ref POSE_ROW_RE: regex::Regex = regex::Regex::new(r"^\s+([0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+[0-9]+\s+[0-9]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Mode")]
    pub mode: u64,
    #[serde(rename = "Affinity")]
    pub affinity: f64,
}

/// Everything pulled out of one combined log.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub records: Vec<AffinityRecord>,
    /// Compounds whose docking run reported the parsing-error marker.
    pub failures: Vec<String>,
    /// Blocks with no identifier in their header line.
    pub skipped_blocks: usize,
}

impl Extraction {
    pub fn compound_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
