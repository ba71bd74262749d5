//! Species label table loading and lookup.

use crate::constants::UNKNOWN_LABEL;
use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Candidate encodings tried in order when decoding a labels file.
///
/// Each attempt performs BOM sniffing, so BOM-prefixed UTF-8 and UTF-16
/// files resolve on the first try regardless of list position.
const LABEL_ENCODINGS: &[&Encoding] = &[UTF_8, UTF_16LE, UTF_16BE];

/// Names stored for one class index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    /// Scientific (Latin) species name.
    pub scientific_name: String,
    /// Common species name; empty when the source row had no third field.
    pub common_name: String,
}

/// Mapping from model output index to species names.
///
/// Built from a CSV resource with rows of the form
/// `index,scientific_name[,common_name]`. Malformed rows are dropped and a
/// duplicated index keeps the last row seen.
#[derive(Debug, Default)]
pub struct LabelTable {
    entries: HashMap<usize, LabelEntry>,
}

impl LabelTable {
    /// Load a label table from a CSV file.
    ///
    /// The file is trial-decoded as UTF-8, then UTF-16LE, then UTF-16BE;
    /// the first encoding that decodes without errors wins.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::LabelsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let text = decode_labels(&bytes).ok_or_else(|| Error::LabelsUndecodable {
            path: path.to_path_buf(),
        })?;

        let table = Self::parse(&text);
        debug!("Loaded {} label(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse decoded label text into a table.
    fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        for record in reader.records().flatten() {
            // Rows without a leading integer index are silently dropped.
            let Some(index) = record.get(0).and_then(|f| f.trim().parse::<usize>().ok()) else {
                continue;
            };
            // A lone index with no name field is malformed.
            let Some(scientific) = record.get(1) else {
                continue;
            };
            let common = record.get(2).unwrap_or("");

            entries.insert(
                index,
                LabelEntry {
                    scientific_name: scientific.to_string(),
                    common_name: common.to_string(),
                },
            );
        }

        Self { entries }
    }

    /// Look up the names for a class index.
    ///
    /// Absent indices resolve to `("Unknown", "Unknown")` so an inference
    /// result the table cannot explain still yields a displayable label.
    pub fn get(&self, index: usize) -> (&str, &str) {
        self.entries.get(&index).map_or(
            (UNKNOWN_LABEL, UNKNOWN_LABEL),
            |entry| (entry.scientific_name.as_str(), entry.common_name.as_str()),
        )
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode raw label bytes under the first candidate encoding that succeeds.
fn decode_labels(bytes: &[u8]) -> Option<String> {
    LABEL_ENCODINGS.iter().find_map(|encoding| {
        let (text, _, had_errors) = encoding.decode(bytes);
        (!had_errors).then(|| text.into_owned())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_field_rows() {
        let table = LabelTable::parse("0,Quercus alba,White Oak\n1,Acer rubrum,Red Maple\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), ("Quercus alba", "White Oak"));
        assert_eq!(table.get(1), ("Acer rubrum", "Red Maple"));
    }

    #[test]
    fn test_parse_two_field_row_defaults_common_name_empty() {
        let table = LabelTable::parse("4,Danaus plexippus\n");
        assert_eq!(table.get(4), ("Danaus plexippus", ""));
    }

    #[test]
    fn test_parse_drops_non_integer_index_rows() {
        let table = LabelTable::parse("x,Foo,Bar\n2,Panthera leo,Lion\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2), ("Panthera leo", "Lion"));
    }

    #[test]
    fn test_parse_drops_single_field_rows() {
        let table = LabelTable::parse("7\n8,Lynx rufus,Bobcat\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(8), ("Lynx rufus", "Bobcat"));
    }

    #[test]
    fn test_parse_skips_empty_rows() {
        let table = LabelTable::parse("0,Bubo bubo,Eagle-Owl\n\n\n1,Pica pica,Magpie\n");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_duplicate_index_last_row_wins() {
        let table =
            LabelTable::parse("3,Panthera leo,Lion\n3,Panthera leo,African Lion\n");
        assert_eq!(table.get(3), ("Panthera leo", "African Lion"));
    }

    #[test]
    fn test_get_absent_index_returns_unknown() {
        let table = LabelTable::parse("0,Quercus alba,White Oak\n");
        assert_eq!(table.get(999), ("Unknown", "Unknown"));
    }

    #[test]
    fn test_get_on_empty_table_returns_unknown() {
        let table = LabelTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(0), ("Unknown", "Unknown"));
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(b"0,Parus major,Great Tit\n");
        let text = decode_labels(&bytes).unwrap();
        let table = LabelTable::parse(&text);
        // BOM must not corrupt the first index field
        assert_eq!(table.get(0), ("Parus major", "Great Tit"));
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "5,Vulpes vulpes,Red Fox\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let text = decode_labels(&bytes).unwrap();
        let table = LabelTable::parse(&text);
        assert_eq!(table.get(5), ("Vulpes vulpes", "Red Fox"));
    }

    #[test]
    fn test_decode_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "6,Apis mellifera,Honey Bee\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let text = decode_labels(&bytes).unwrap();
        let table = LabelTable::parse(&text);
        assert_eq!(table.get(6), ("Apis mellifera", "Honey Bee"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let table = LabelTable::parse("9,\"Felis catus\",\"Cat, Domestic\"\n");
        assert_eq!(table.get(9), ("Felis catus", "Cat, Domestic"));
    }

    #[test]
    fn test_parse_index_with_surrounding_whitespace() {
        let table = LabelTable::parse(" 12 ,Canis lupus,Gray Wolf\n");
        assert_eq!(table.get(12), ("Canis lupus", "Gray Wolf"));
    }
}
