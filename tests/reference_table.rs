// tests/reference_table.rs
use std::io::Write;
use std::path::PathBuf;

use dm_screen::error::{LoadError, RangeError};
use dm_screen::reference::{load_or_empty, ReferenceTable};

fn shipped() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/d100s.csv")
}

#[test]
fn shipped_table_has_a_hundred_rows() {
    let t = ReferenceTable::load(&shipped()).unwrap();
    assert_eq!(t.len(), 100);
    assert_eq!(t.headers()[0], "Roll");

    let first = t.get(1).unwrap();
    assert_eq!(first.index, 1);
    assert_eq!(first.get("Roll"), Some("1"));
    assert_eq!(first.iter().count(), t.headers().len());

    assert_eq!(t.get(100).unwrap().get("Roll"), Some("100"));
}

#[test]
fn zero_and_past_end_are_range_errors() {
    let t = ReferenceTable::load(&shipped()).unwrap();
    assert_eq!(t.get(0).unwrap_err(), RangeError { index: 0, count: 100 });
    assert_eq!(t.get(101).unwrap_err(), RangeError { index: 101, count: 100 });
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(matches!(ReferenceTable::load(&path), Err(LoadError::Missing { .. })));

    let (table, err) = load_or_empty(&path);
    assert!(table.is_empty());
    assert!(err.unwrap().to_string().contains("nope.csv"));
}

#[test]
fn ragged_rows_are_a_read_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "Roll,Item\n1,Rope\n2,Lamp,extra").unwrap();
    assert!(matches!(ReferenceTable::load(f.path()), Err(LoadError::Read { .. })));
}

#[test]
fn quoted_fields_survive() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "Roll,Item\n1,\"Rope, 50 ft\"").unwrap();
    let t = ReferenceTable::load(f.path()).unwrap();
    assert_eq!(t.get(1).unwrap().get("Item"), Some("Rope, 50 ft"));
}
