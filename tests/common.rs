#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use convtrack::store::{Cell, RecordStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary in test mode, never opening the sheet.
pub fn cvt() -> Command {
    let mut cmd = cargo_bin_cmd!("convtrack");
    cmd.args(["--test", "--no-open"]);
    cmd
}

/// The binary in test mode with opening after save left on.
pub fn cvt_opening() -> Command {
    let mut cmd = cargo_bin_cmd!("convtrack");
    cmd.arg("--test");
    cmd
}

/// Unique sheet path inside the system temp dir; any existing file is removed.
pub fn temp_sheet(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_convtrack.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Append a record through the CLI.
pub fn add_day(sheet: &str, day: &str, morning: &str, closing: &str, transactions: &str) {
    cvt()
        .args([
            "--file",
            sheet,
            "add",
            "--date",
            "10-19-2026",
            "--day",
            day,
            "--morning",
            morning,
            "--closing",
            closing,
            "--transactions",
            transactions,
            "--end-of-day",
            "1500",
            "--comments",
            "steady",
        ])
        .assert()
        .success();
}

/// All rows of the sheet as display strings.
pub fn sheet_rows(sheet: &str) -> Vec<Vec<String>> {
    RecordStore::new(sheet)
        .rows()
        .expect("read sheet")
        .iter()
        .map(|r| r.iter().map(Cell::to_string).collect())
        .collect()
}
