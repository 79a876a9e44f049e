use regex::Regex;

use super::{AffinityRecord, Extraction, POSE_ROW_RE};
use crate::logs::SEPARATOR_PREFIX;

pub enum BlockResult {
    Poses(Vec<AffinityRecord>),
    ParseError(String),
    NoIdentifier,
}

pub fn parse_pose_row(line: &str) -> Option<(u64, f64)> {
    let captures = POSE_ROW_RE.captures(line)?;
    let mode_text = captures.get(1)?.as_str();
    let affinity_text = captures.get(2)?.as_str();

    match (mode_text.parse::<u64>(), affinity_text.parse::<f64>()) {
        (Ok(mode), Ok(affinity)) => Some((mode, affinity)),
        _ => {
            log::warn!("pose row {:?} matched but could not be converted", line.trim());
            None
        }
    }
}

/// Parses the text following one separator marker.
///
/// The identifier comes from the first line; a block mentioning `error_marker`
/// anywhere yields no poses.
pub fn parse_block(block: &str, id_regex: &Regex, error_marker: &str) -> BlockResult {
    let lines = block.split('\n').collect::<Vec<_>>();

    let id = match lines.first().and_then(|header| id_regex.find(header)) {
        Some(m) => m.as_str().to_string(),
        None => return BlockResult::NoIdentifier,
    };

    if lines.iter().any(|line| line.contains(error_marker)) {
        return BlockResult::ParseError(id);
    }

    let records = lines
        .iter()
        .filter_map(|line| parse_pose_row(line))
        .map(|(mode, affinity)| AffinityRecord {
            id: id.clone(),
            mode,
            affinity,
        })
        .collect();

    BlockResult::Poses(records)
}

pub fn parse_combined_log(text: &str, id_regex: &Regex, error_marker: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for block in text.split(SEPARATOR_PREFIX).skip(1) {
        match parse_block(block, id_regex, error_marker) {
            BlockResult::Poses(records) => extraction.records.extend(records),
            BlockResult::ParseError(id) => extraction.failures.push(id),
            BlockResult::NoIdentifier => extraction.skipped_blocks += 1,
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_ERROR_MARKER, DEFAULT_ID_PATTERN};

    fn id_regex() -> Regex {
        Regex::new(DEFAULT_ID_PATTERN).unwrap()
    }

    #[test]
    fn test_parse_pose_row() {
        assert_eq!(
            parse_pose_row("   1     -7.2      0      0"),
            Some((1, -7.2))
        );
        assert_eq!(parse_pose_row("  12      3.5  0  0"), Some((12, 3.5)));
        // must start with whitespace
        assert_eq!(parse_pose_row("1     -7.2      0      0"), None);
        // affinity needs a fractional part
        assert_eq!(parse_pose_row("   1     -7      0      0"), None);
        assert_eq!(parse_pose_row("mode |   affinity | dist from best mode"), None);
    }

    #[test]
    fn test_mode_wider_than_u32() {
        assert_eq!(
            parse_pose_row("   4294967296     -7.2      0      0"),
            Some((4_294_967_296, -7.2))
        );
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        let line = "   \u{ff11}     -7.2      0      0";
        assert!(!POSE_ROW_RE.is_match(line));

        let block = format!("DB1 ###\n{line}\n   2     -6.9      0      0\n");
        match parse_block(&block, &id_regex(), DEFAULT_ERROR_MARKER) {
            BlockResult::Poses(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].mode, 2);
            }
            _ => panic!("expected poses"),
        }
    }

    #[test]
    fn test_first_identifier_in_header_wins() {
        let block = "ZINC42 DB7 ###\n   1  -5.0  0  0\n";
        match parse_block(block, &id_regex(), DEFAULT_ERROR_MARKER) {
            BlockResult::Poses(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].id, "ZINC42");
            }
            _ => panic!("expected poses"),
        }
    }

    #[test]
    fn test_marker_suppresses_pose_rows() {
        let block = "DB3 ###\n   1  -5.0  0  0\nPDBQT parsing error: unknown atom type\n   2  -4.0  0  0\n";
        assert!(matches!(
            parse_block(block, &id_regex(), DEFAULT_ERROR_MARKER),
            BlockResult::ParseError(id) if id == "DB3"
        ));
    }

    #[test]
    fn test_identifier_only_read_from_header() {
        let block = "### ###\nDB9\n   1  -5.0  0  0\n";
        assert!(matches!(
            parse_block(block, &id_regex(), DEFAULT_ERROR_MARKER),
            BlockResult::NoIdentifier
        ));
    }

    #[test]
    fn test_text_before_first_separator_is_ignored() {
        let text = "   1  -9.9  0  0\n### Results for DB1 ###\n   1  -5.5  0  0\n";
        let extraction = parse_combined_log(text, &id_regex(), DEFAULT_ERROR_MARKER);
        assert_eq!(
            extraction.records,
            vec![AffinityRecord {
                id: "DB1".to_string(),
                mode: 1,
                affinity: -5.5
            }]
        );
    }
}
