#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("cardtime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cardtime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and seed a small dataset useful for many tests:
/// two finished ranges on card `c1` (8h for m1, 2h30m for m2) and a 2d
/// estimate for m1.
pub fn init_db_with_data(db_path: &str) {
    ct().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ct().args([
        "--db",
        db_path,
        "range",
        "c1",
        "add",
        "--member",
        "m1",
        "--start",
        "2025-09-01 09:00",
        "--end",
        "2025-09-01 17:00",
    ])
    .assert()
    .success();

    ct().args([
        "--db",
        db_path,
        "range",
        "c1",
        "add",
        "--member",
        "m2",
        "--start",
        "2025-09-02 10:00",
        "--end",
        "2025-09-02 12:30",
        "--comment",
        "pairing",
    ])
    .assert()
    .success();

    ct().args(["--db", db_path, "estimate", "c1", "2d", "--member", "m1"])
        .assert()
        .success();
}
