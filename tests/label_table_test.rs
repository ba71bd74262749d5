//! Integration tests for label table loading with encoding variance.

#![allow(clippy::unwrap_used)]

use naturid::Error;
use naturid::labels::LabelTable;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn utf16le_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[test]
fn test_load_plain_utf8() {
    let file = write_fixture(b"0,Quercus alba,White Oak\n1,Acer rubrum,Red Maple\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0), ("Quercus alba", "White Oak"));
}

#[test]
fn test_load_utf8_with_bom() {
    let file = write_fixture(b"\xEF\xBB\xBF0,Parus major,Great Tit\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.get(0), ("Parus major", "Great Tit"));
}

#[test]
fn test_load_utf16le_with_bom() {
    let file = write_fixture(&utf16le_bytes("3,Panthera leo,Lion\n4,Lynx rufus,Bobcat\n"));
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(3), ("Panthera leo", "Lion"));
    assert_eq!(table.get(4), ("Lynx rufus", "Bobcat"));
}

#[test]
fn test_load_utf16be_with_bom() {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in "2,Danaus plexippus,Monarch\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    let file = write_fixture(&bytes);
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.get(2), ("Danaus plexippus", "Monarch"));
}

#[test]
fn test_load_undecodable_bytes_is_error() {
    // Invalid UTF-8, and an incomplete trailing unit under both UTF-16 orders
    let file = write_fixture(b"\x00\xD8\x41");
    let result = LabelTable::load(file.path());
    assert!(matches!(result, Err(Error::LabelsUndecodable { .. })));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let result = LabelTable::load(std::path::Path::new("/nonexistent/labels.csv"));
    assert!(matches!(result, Err(Error::LabelsRead { .. })));
}

#[test]
fn test_duplicate_index_keeps_last_row() {
    let file = write_fixture(b"3,Panthera leo,Lion\n3,Panthera leo,African Lion\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.get(3), ("Panthera leo", "African Lion"));
}

#[test]
fn test_malformed_rows_are_dropped_silently() {
    let file = write_fixture(b"x,Foo,Bar\n0,Apis mellifera,Honey Bee\n\n-1,Neg,Ative\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0), ("Apis mellifera", "Honey Bee"));
}

#[test]
fn test_two_field_rows_get_empty_common_name() {
    let file = write_fixture(b"5,Corvus corax\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.get(5), ("Corvus corax", ""));
}

#[test]
fn test_absent_index_resolves_to_unknown() {
    let file = write_fixture(b"0,Quercus alba,White Oak\n");
    let table = LabelTable::load(file.path()).unwrap();
    assert_eq!(table.get(7), ("Unknown", "Unknown"));
}
