//! Reading hours-per-tag CSV exports
//!
//! The first row is a header and is always skipped. Every following row has
//! the tag in column 0 and the hours as a decimal number in column 1; further
//! columns are ignored.

use crate::error::{GsheetError, Result};
use crate::model::{HoursIndex, HoursSequence, TagHours};
use std::path::Path;

/// Parse CSV content into a tag lookup table (later rows win on duplicate tags)
pub fn parse_hours_index(content: &str) -> Result<HoursIndex> {
    let mut index = HoursIndex::new();
    for_each_row(content, |entry| index.insert(entry.tag, entry.hours))?;
    Ok(index)
}

/// Parse CSV content into entries, one per row, in input order
pub fn parse_hours_sequence(content: &str) -> Result<HoursSequence> {
    let mut sequence = HoursSequence::new();
    for_each_row(content, |entry| sequence.push(entry))?;
    Ok(sequence)
}

/// Read a CSV file into a tag lookup table
pub fn read_hours_index_file(path: &Path) -> Result<HoursIndex> {
    let content = read_input(path)?;
    parse_hours_index(&content)
}

/// Read a CSV file into entries in input order
pub fn read_hours_sequence_file(path: &Path) -> Result<HoursSequence> {
    let content = read_input(path)?;
    parse_hours_sequence(&content)
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| GsheetError::Parse(format!("cannot open {}: {}", path.display(), e)))
}

/// Parse every data row and hand it to `sink`, stopping at the first bad row
fn for_each_row(content: &str, mut sink: impl FnMut(TagHours)) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    for result in reader.records() {
        let record = result.map_err(|e| GsheetError::Parse(format!("malformed CSV: {}", e)))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let (tag, raw_hours) = match (record.get(0), record.get(1)) {
            (Some(tag), Some(hours)) => (tag, hours),
            _ => {
                return Err(GsheetError::Parse(format!(
                    "line {}: expected at least 2 columns, found {}",
                    line,
                    record.len()
                )))
            }
        };

        sink(TagHours::new(tag, parse_hours(raw_hours, line)?));
    }

    Ok(())
}

fn parse_hours(raw: &str, line: u64) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(hours) if hours.is_finite() => Ok(hours),
        _ => Err(GsheetError::Parse(format!(
            "line {}: hours value '{}' is not a finite number",
            line, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "tag,hours\nui,3.5\nbackend,2\ninfra,1.0\nui,4.25\n";

    #[test]
    fn test_sequence_keeps_every_row_in_order() {
        let seq = parse_hours_sequence(SAMPLE).unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.entries()[0], TagHours::new("ui", 3.5));
        assert_eq!(seq.entries()[1], TagHours::new("backend", 2.0));
        assert_eq!(seq.entries()[2], TagHours::new("infra", 1.0));
        assert_eq!(seq.entries()[3], TagHours::new("ui", 4.25));
    }

    #[test]
    fn test_index_collapses_duplicates() {
        let index = parse_hours_index(SAMPLE).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("ui"), Some(4.25));
        assert_eq!(index.get("backend"), Some(2.0));
        assert_eq!(index.get("tag"), None, "header must not be read as data");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_hours_sequence("tag,hours\n").unwrap().is_empty());
        assert!(parse_hours_index("").unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_hours_fail() {
        let err = parse_hours_sequence("tag,hours\nui,1.0\ndesign,not-a-number\n").unwrap_err();
        match err {
            GsheetError::Parse(msg) => {
                assert!(msg.contains("line 3"), "{}", msg);
                assert!(msg.contains("not-a-number"), "{}", msg);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_hours_fail() {
        assert!(matches!(
            parse_hours_index("tag,hours\nui,NaN\n"),
            Err(GsheetError::Parse(_))
        ));
        assert!(matches!(
            parse_hours_index("tag,hours\nui,inf\n"),
            Err(GsheetError::Parse(_))
        ));
    }

    #[test]
    fn test_short_row_fails() {
        let err = parse_hours_index("tag,hours\nui,1.0\nlonely\n").unwrap_err();
        match err {
            GsheetError::Parse(msg) => assert!(msg.contains("line 3"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_ignored() {
        let seq = parse_hours_sequence("tag,hours,note\nops, 7.5 ,weekly\n").unwrap();
        assert_eq!(seq.entries(), &[TagHours::new("ops", 7.5)]);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let seq = read_hours_sequence_file(file.path()).unwrap();
        assert_eq!(seq.len(), 4);
        let index = read_hours_index_file(file.path()).unwrap();
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_hours_index_file(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(GsheetError::Parse(_))));
    }
}
