use serde_json::json;

use fundex::application::ports::WorkbookWriter;
use fundex::domain::{ExtractionResult, ExtractionTemplate, Sheet};
use fundex::infrastructure::spreadsheet::XlsxWorkbookWriter;

fn rows_from(value: serde_json::Value) -> Vec<serde_json::Map<String, serde_json::Value>> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

fn sample_extraction() -> ExtractionResult {
    ExtractionResult::new(vec![
        Sheet::new(
            "Fund Data".to_string(),
            rows_from(json!([
                {"Data Point": "Fund Name", "Value - Current Period": "Northwind Capital III"},
                {"Data Point": "Fund Size", "Value - Current Period": 250000000},
                {"Data Point": "NAV Date", "Value - Current Period": null},
            ])),
        ),
        Sheet::new(
            "Company Investment Positions".to_string(),
            rows_from(json!([
                {"Company": "Acme Robotics", "IRR": 0.18, "Active": true},
            ])),
        ),
    ])
}

#[tokio::test]
async fn given_extraction_when_rendering_then_buffer_is_a_zip_archive() {
    let writer = XlsxWorkbookWriter::new();

    let buffer = writer
        .render(&sample_extraction(), ExtractionTemplate::FundReportDetail)
        .await
        .unwrap();

    assert!(buffer.len() > 4);
    assert!(buffer.starts_with(b"PK"));
}

#[tokio::test]
async fn given_sheet_name_with_forbidden_characters_then_rendering_still_succeeds() {
    let writer = XlsxWorkbookWriter::new();
    let extraction = ExtractionResult::new(vec![Sheet::new(
        "P&L: Revenue/Costs [2024]?".to_string(),
        rows_from(json!([{"Line": "Revenue", "Amount": 1000}])),
    )]);

    let result = writer
        .render(&extraction, ExtractionTemplate::PortfolioSummary)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_sheet_with_no_rows_then_rendering_still_succeeds() {
    let writer = XlsxWorkbookWriter::new();
    let extraction = ExtractionResult::new(vec![Sheet::new("Fund Data".to_string(), Vec::new())]);

    let result = writer
        .render(&extraction, ExtractionTemplate::FundReportDetail)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_long_sheet_name_then_rendering_still_succeeds() {
    let writer = XlsxWorkbookWriter::new();
    let extraction = ExtractionResult::new(vec![Sheet::new(
        "A sheet name that is much longer than the thirty one character cap".to_string(),
        rows_from(json!([{"Col": "value"}])),
    )]);

    let result = writer
        .render(&extraction, ExtractionTemplate::FundReportDetail)
        .await;

    assert!(result.is_ok());
}
