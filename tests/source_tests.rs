use workbalance::errors::AppError;
use workbalance::source::{read_sheet, sheet_export_url};

mod common;

#[test]
fn test_read_sheet_maps_empty_cells_to_missing() {
    let sheet = common::write_sheet(
        "source_empty_cells",
        "Data,Início,Fim\n01/09/2025,09:00,\n02/09/2025, ,17:00\n",
    );

    let table = read_sheet(&sheet).expect("read sheet");
    assert_eq!(table.headers, vec!["Data", "Início", "Fim"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].cells[1].as_deref(), Some("09:00"));
    assert_eq!(table.rows[0].cells[2], None);
    // whitespace-only cells are missing too
    assert_eq!(table.rows[1].cells[1], None);
}

#[test]
fn test_read_sheet_tolerates_ragged_rows() {
    let sheet = common::write_sheet(
        "source_ragged",
        "Data,Início,Fim\n01/09/2025,09:00\n",
    );

    let table = read_sheet(&sheet).expect("read sheet");
    assert_eq!(table.rows[0].cells.len(), 3);
    assert_eq!(table.rows[0].cells[2], None);
}

#[test]
fn test_read_sheet_missing_file() {
    let err = read_sheet("/no/such/sheet.csv").unwrap_err();
    assert!(matches!(err, AppError::Retrieval(_)));
}

#[test]
fn test_sheet_export_url_rewrite() {
    let edit = "https://docs.google.com/spreadsheets/d/abc123/edit#gid=0";
    assert_eq!(
        sheet_export_url(edit),
        "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=0"
    );
    // non-Google locations pass through untouched
    assert_eq!(sheet_export_url("sheet.csv"), "sheet.csv");
}
