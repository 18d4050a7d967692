//! End-to-end checks over the public comparison API: payloads are
//! parsed the way the fetcher parses them, reconciled, and exported.

use ui::compare::export::{build_workbook, comparison_matrix, sheet_names};
use ui::compare::{company_label, display_rows, extract_metric};
use ui::core::model::{Report, NOT_AVAILABLE};

fn parse_report(json: &str) -> Report {
    serde_json::from_str(json).expect("report payload should parse")
}

#[test]
fn single_company_flow_produces_one_column_and_one_sheet() {
    let reports = vec![parse_report(
        r#"{"elements": [{"element_name": "Revenue", "fact_value": 100}]}"#,
    )];

    let rows = display_rows(&reports);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].metric, "Revenue");
    assert_eq!(rows[0].values, vec!["100"]);

    // One sheet, two rows: header plus the Revenue row.
    assert_eq!(sheet_names(&reports), vec!["Company 1"]);
    assert_eq!(comparison_matrix(&reports).len(), 2);
    assert!(build_workbook(&reports).unwrap().starts_with(b"PK"));
}

#[test]
fn header_labels_display_columns_and_sheets_share_submission_order() {
    let reports = vec![
        parse_report(
            r#"{"elements": [
                {"element_name": "NameOfTheCompany", "fact_value": "Acme"},
                {"element_name": "Revenue", "fact_value": 100}
            ]}"#,
        ),
        parse_report(
            r#"{"elements": [
                {"element_name": "NameOfTheCompany", "fact_value": "Globex"},
                {"element_name": "Revenue", "fact_value": 250}
            ]}"#,
        ),
        parse_report(r#"{"elements": [{"element_name": "Revenue", "fact_value": 40}]}"#),
    ];

    let labels: Vec<String> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| company_label(report, index))
        .collect();
    assert_eq!(labels, vec!["Acme", "Globex", "Company 3"]);

    // The export header and the sheet tabs carry the same labels in the
    // same order as the display columns.
    let matrix = comparison_matrix(&reports);
    assert_eq!(matrix[0][1..], labels[..]);
    assert_eq!(sheet_names(&reports), labels);

    // Every display row carries one value per report, submission order.
    for row in display_rows(&reports) {
        assert_eq!(row.values.len(), reports.len());
    }
}

#[test]
fn positional_display_and_name_matched_export_stay_distinct() {
    // The second report lists the same metrics in reverse order: the
    // display matrix follows raw positions while the export matrix
    // matches by name.
    let reports = vec![
        parse_report(
            r#"{"elements": [
                {"element_name": "Revenue", "fact_value": 100},
                {"element_name": "Employees", "fact_value": 40}
            ]}"#,
        ),
        parse_report(
            r#"{"elements": [
                {"element_name": "Employees", "fact_value": 90},
                {"element_name": "Revenue", "fact_value": 250}
            ]}"#,
        ),
    ];

    let rows = display_rows(&reports);
    assert_eq!(rows[0].metric, "Revenue");
    assert_eq!(rows[0].values, vec!["100", "90"]);

    let matrix = comparison_matrix(&reports);
    let revenue_row = matrix
        .iter()
        .find(|row| row[0] == "Revenue")
        .expect("revenue row present");
    assert_eq!(revenue_row[1..], ["100".to_string(), "250".to_string()]);
}

#[test]
fn absent_metrics_resolve_to_the_marker_everywhere() {
    let with_extras = parse_report(
        r#"{"elements": [
            {"element_name": "Revenue", "fact_value": 100},
            {"element_name": "Emissions", "fact_value": "12t"}
        ]}"#,
    );
    let sparse = parse_report(r#"{"elements": [{"element_name": "Revenue", "fact_value": 250}]}"#);

    assert_eq!(extract_metric(Some(&sparse), "Emissions"), NOT_AVAILABLE);
    assert_eq!(extract_metric(None, "Emissions"), NOT_AVAILABLE);

    let reports = vec![with_extras, sparse];
    let rows = display_rows(&reports);
    assert_eq!(rows[1].metric, "Emissions");
    assert_eq!(rows[1].values, vec!["12t", NOT_AVAILABLE]);

    let matrix = comparison_matrix(&reports);
    let emissions_row = matrix
        .iter()
        .find(|row| row[0] == "Emissions")
        .expect("emissions row present");
    assert_eq!(emissions_row[2], NOT_AVAILABLE);
}
