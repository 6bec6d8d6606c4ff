#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: create an order
    let mut cmd1 = Command::new(cargo_bin!("ordersystem"));
    cmd1.args(["create", "--id", "order-001", "--price", "100.50", "--tax", "10.05"])
        .arg("--db-path")
        .arg(&db_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());

    // 2. Second run: create another order against the same DB path
    let mut cmd2 = Command::new(cargo_bin!("ordersystem"));
    cmd2.args(["create", "--id", "order-002", "--price", "250.75", "--tax", "25.08"])
        .arg("--db-path")
        .arg(&db_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());

    // 3. Third run: both orders are listed
    let mut cmd3 = Command::new(cargo_bin!("ordersystem"));
    cmd3.arg("list").arg("--db-path").arg(&db_path);

    let output3 = cmd3.output().expect("Failed to execute command");
    assert!(output3.status.success());
    let stdout = String::from_utf8_lossy(&output3.stdout);
    assert!(stdout.contains("order-001,100.50,10.05,110.55"));
    assert!(stdout.contains("order-002,250.75,25.08,275.83"));
}
