mod common;
use common::{cvt, sheet_rows, temp_sheet};
use predicates::str::contains;
use std::path::Path;

#[test]
fn test_entry_session_saves_and_resets() {
    let sheet = temp_sheet("entry_session", "xlsx");

    cvt()
        .args(["--file", &sheet, "entry"])
        .write_stdin(concat!(
            "10-19-2026\nWed\n10\n40\n18\n2500\nsunny\ny\ny\n",
            "10-20-2026\nThurs\n20\n15\n3\n900\n\ny\nn\n"
        ))
        .assert()
        .success()
        .stdout(contains("60.00%"))
        .stdout(contains("Data saved successfully!"));

    let rows = sheet_rows(&sheet);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], "Wed");
    assert_eq!(rows[1][8], "sunny");
    assert_eq!(rows[2][0], "10-20-2026");
    assert_eq!(rows[2][5], "-5");
    assert_eq!(rows[2][6], "0.00%");
}

#[test]
fn test_entry_reasks_invalid_numbers() {
    let sheet = temp_sheet("entry_reask", "csv");

    cvt()
        .args(["--file", &sheet, "entry"])
        .write_stdin("\n\n10\nforty\n40\n18\n2500\n\ny\nn\n")
        .assert()
        .success()
        .stderr(contains("Please enter valid numbers for counts and transactions."));

    let rows = sheet_rows(&sheet);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][3], "40");
}

#[test]
fn test_entry_decline_writes_nothing() {
    let sheet = temp_sheet("entry_decline", "xlsx");

    cvt()
        .args(["--file", &sheet, "entry"])
        .write_stdin("\n\n10\n40\n18\n2500\n\nn\nn\n")
        .assert()
        .success()
        .stdout(contains("Nothing saved."));

    assert!(!Path::new(&sheet).exists());
}
