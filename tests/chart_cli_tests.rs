use predicates::str::contains;
use std::fs;

mod common;
use common::{sparse_sheet, temp_out, two_week_sheet, wb};

#[test]
fn test_chart_renders_svg() {
    let sheet = common::write_sheet("chart_renders", &two_week_sheet());
    let out = temp_out("chart_renders", "svg");

    wb().args(["chart", &sheet, "--out", &out])
        .assert()
        .success()
        .stdout(contains("Chart written to"))
        .stdout(contains("Balance:"));

    let svg = fs::read_to_string(&out).expect("chart file written");
    assert!(svg.contains("Working hours balance"));
    assert!(svg.contains("Required"));
    assert!(svg.contains("Undertaken"));
    // 70h worked vs 85h required over the two filled weeks
    assert!(svg.contains("-15.0h"));
}

#[test]
fn test_chart_honors_target_flag() {
    let sheet = common::write_sheet("chart_target_flag", &two_week_sheet());
    let out = temp_out("chart_target_flag", "svg");

    // 7h target on 10 weekdays exactly matches the 70 worked hours
    wb().args(["chart", &sheet, "--out", &out, "--target", "7.0"])
        .assert()
        .success()
        .stdout(contains("0.0h"));
}

#[test]
fn test_chart_reports_no_data_without_failing() {
    let sheet = common::write_sheet("chart_no_data", &sparse_sheet());
    let out = temp_out("chart_no_data", "svg");

    wb().args(["chart", &sheet, "--out", &out])
        .assert()
        .success()
        .stdout(contains("No data available"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_chart_missing_sheet_is_fatal() {
    let out = temp_out("chart_missing_sheet", "svg");

    wb().args(["chart", "/no/such/sheet.csv", "--out", &out])
        .assert()
        .failure()
        .stderr(contains("Sheet retrieval error"));
}

#[test]
fn test_chart_unparseable_date_is_fatal() {
    let sheet = common::write_sheet(
        "chart_bad_date",
        "Data,Início,Fim\nnot-a-date,09:00,17:00\n",
    );
    let out = temp_out("chart_bad_date", "svg");

    wb().args(["chart", &sheet, "--out", &out])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
