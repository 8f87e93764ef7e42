use serde_json::{Map, Value};

use crate::domain::{ExtractionResult, ExtractionTemplate, Sheet};

/// Parses the raw LLM output into an [`ExtractionResult`], checking it
/// against the template's expected sheet layout. Expected sheets must be
/// present as arrays of row objects; sheets the model added beyond the
/// template are kept and appended after the expected ones.
pub fn parse_extraction_response(
    raw: &str,
    template: ExtractionTemplate,
) -> Result<ExtractionResult, ResponseSchemaError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ResponseSchemaError::InvalidJson(e.to_string()))?;

    let object = match value {
        Value::Object(map) => map,
        other => return Err(ResponseSchemaError::NotAnObject(type_name(&other))),
    };

    let expected = template.expected_sheets();
    let mut sheets = Vec::with_capacity(object.len());

    for &name in expected {
        let value = object
            .get(name)
            .ok_or_else(|| ResponseSchemaError::MissingSheet(name.to_string()))?;
        sheets.push(Sheet::new(name.to_string(), parse_rows(name, value)?));
    }

    for (name, value) in &object {
        if expected.contains(&name.as_str()) {
            continue;
        }
        sheets.push(Sheet::new(name.clone(), parse_rows(name, value)?));
    }

    Ok(ExtractionResult::new(sheets))
}

fn parse_rows(sheet: &str, value: &Value) -> Result<Vec<Map<String, Value>>, ResponseSchemaError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ResponseSchemaError::MalformedSheet(sheet.to_string()))?;

    let mut rows = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::Object(row) => rows.push(row.clone()),
            _ => {
                return Err(ResponseSchemaError::MalformedRow {
                    sheet: sheet.to_string(),
                    index,
                });
            }
        }
    }
    Ok(rows)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseSchemaError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("expected a JSON object at the top level, got {0}")]
    NotAnObject(&'static str),
    #[error("missing sheet '{0}'")]
    MissingSheet(String),
    #[error("sheet '{0}' is not an array of rows")]
    MalformedSheet(String),
    #[error("row {index} in sheet '{sheet}' is not an object")]
    MalformedRow { sheet: String, index: usize },
}
