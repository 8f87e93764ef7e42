use async_trait::async_trait;
use chrono::Utc;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};
use serde_json::Value;

use crate::application::ports::{WorkbookError, WorkbookWriter};
use crate::domain::{ExtractionResult, ExtractionTemplate, Sheet};

const HEADER_FILL: Color = Color::RGB(0x36_60_92);
const MAX_COLUMN_WIDTH: f64 = 50.0;
const MAX_SHEET_NAME: usize = 31;

/// Renders extractions into styled `.xlsx` workbooks: one worksheet per
/// sheet plus a trailing run summary. Rendering is CPU-bound and runs on
/// the blocking pool.
#[derive(Default)]
pub struct XlsxWorkbookWriter;

impl XlsxWorkbookWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorkbookWriter for XlsxWorkbookWriter {
    async fn render(
        &self,
        extraction: &ExtractionResult,
        template: ExtractionTemplate,
    ) -> Result<Vec<u8>, WorkbookError> {
        let extraction = extraction.clone();
        tokio::task::spawn_blocking(move || build_workbook(&extraction, template))
            .await
            .map_err(|e| WorkbookError::RenderFailed(format!("task join error: {e}")))?
            .map_err(|e| WorkbookError::RenderFailed(e.to_string()))
    }
}

fn build_workbook(
    extraction: &ExtractionResult,
    template: ExtractionTemplate,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for sheet in &extraction.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sanitize_sheet_name(&sheet.name))?;
        write_sheet(worksheet, sheet, &header_format)?;
    }

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    summary.write_string_with_format(0, 0, "Metric", &header_format)?;
    summary.write_string_with_format(0, 1, "Value", &header_format)?;
    summary.write_string(1, 0, "Template Used")?;
    summary.write_string(1, 1, template.as_str())?;
    summary.write_string(2, 0, "Total Sheets")?;
    summary.write_number(2, 1, extraction.sheets.len() as f64)?;
    summary.write_string(3, 0, "Generated At")?;
    summary.write_string(3, 1, Utc::now().format("%Y-%m-%d %H:%M:%S").to_string())?;
    summary.set_column_width(0, 18)?;
    summary.set_column_width(1, 24)?;

    workbook.save_to_buffer()
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    header_format: &Format,
) -> Result<(), XlsxError> {
    // Column order follows the order fields first appear across rows.
    let mut columns: Vec<&str> = Vec::new();
    for row in &sheet.rows {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key.as_str());
            }
        }
    }

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, header_format)?;
    }

    for (r, row) in sheet.rows.iter().enumerate() {
        let row_num = (r + 1) as u32;
        for (c, name) in columns.iter().enumerate() {
            let col_num = c as u16;
            match row.get(*name) {
                None | Some(Value::Null) => {}
                Some(Value::Number(n)) => {
                    if let Some(f) = n.as_f64() {
                        worksheet.write_number(row_num, col_num, f)?;
                        widths[c] = widths[c].max(n.to_string().chars().count());
                    }
                }
                Some(Value::Bool(b)) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                    widths[c] = widths[c].max(5);
                }
                Some(Value::String(s)) => {
                    worksheet.write_string(row_num, col_num, s.as_str())?;
                    widths[c] = widths[c].max(s.chars().count());
                }
                Some(other) => {
                    let rendered = other.to_string();
                    widths[c] = widths[c].max(rendered.chars().count());
                    worksheet.write_string(row_num, col_num, rendered)?;
                }
            }
        }
    }

    for (c, width) in widths.iter().enumerate() {
        let width = ((width + 2) as f64).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(c as u16, width)?;
    }

    Ok(())
}

/// Excel forbids `[ ] : * ? / \` in worksheet names and caps them at 31
/// characters.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME)
        .collect();

    if cleaned.trim().is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    }
}
