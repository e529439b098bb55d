//! Snapshot persistence for `MemoryLedger`.

use assert_matches::assert_matches;
use assettrack_ledger::{LedgerStore, MemoryLedger, StoreError};

#[test]
fn snapshot_round_trip_preserves_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = MemoryLedger::new();
    ledger.put("X1", br#"{"uuid":"X1"}"#.to_vec()).unwrap();
    ledger.put("X2", br#"{"uuid":"X2"}"#.to_vec()).unwrap();
    ledger.save_snapshot(&path).unwrap();

    let restored = MemoryLedger::load_snapshot(&path).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(
        restored.get("X1").unwrap().as_deref(),
        Some(&br#"{"uuid":"X1"}"#[..])
    );
    assert_eq!(restored.get("X3").unwrap(), None);
}

#[test]
fn snapshot_file_is_a_json_object_of_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = MemoryLedger::new();
    ledger.put("k", b"value".to_vec()).unwrap();
    ledger.save_snapshot(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "k": "value" }));
}

#[test]
fn non_utf8_value_refuses_to_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = MemoryLedger::new();
    ledger.put("bin", vec![0xff, 0xfe]).unwrap();

    assert_matches!(ledger.save_snapshot(&path), Err(StoreError::Snapshot(_)));
    assert!(!path.exists());
}

#[test]
fn missing_snapshot_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_matches!(
        MemoryLedger::load_snapshot(&dir.path().join("absent.json")),
        Err(StoreError::Snapshot(_))
    );
}

#[test]
fn malformed_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert_matches!(
        MemoryLedger::load_snapshot(&path),
        Err(StoreError::Snapshot(msg)) if msg.contains("malformed")
    );
}
