use serde_json::{Map, Value};

/// Structured record returned by the LLM, ready to be rendered into a
/// workbook. Sheet order follows the template declaration, with any
/// extra sheets the model produced appended after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Map<String, Value>>,
}

impl ExtractionResult {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl Sheet {
    pub fn new(name: String, rows: Vec<Map<String, Value>>) -> Self {
        Self { name, rows }
    }
}
