mod common;
use common::{cvt, temp_sheet};
use predicates::str::contains;

#[test]
fn test_init_test_mode_reports_sheet() {
    let sheet = temp_sheet("init_report", "csv");

    cvt()
        .args(["--file", &sheet, "init"])
        .assert()
        .success()
        .stdout(contains(sheet.as_str()))
        .stdout(contains("(csv)"));
}

#[test]
fn test_config_print_shows_defaults() {
    cvt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("sheet_file: conversion_data.xlsx"))
        .stdout(contains("default_day: Mon"));
}
