//! Parsed CSI tables and row lookups

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

pub const CONNECTIVITY_FRAME: &str = "CONNECTIVITY - FRAME";
pub const FRAME_RELEASES: &str = "FRAME RELEASE ASSIGNMENTS 1 - GENERAL";
pub const FRAME_ADDED_MASS: &str = "FRAME ADDED MASS ASSIGNMENTS";
pub const FRAME_LOCAL_AXES: &str = "FRAME LOCAL AXES ASSIGNMENTS 1 - TYPICAL";
pub const FRAME_SECTION_ASSIGNMENTS: &str = "FRAME SECTION ASSIGNMENTS";

/// A single table record, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub BTreeMap<String, Value>);

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.0.insert(column.to_string(), value.into());
        self
    }

    /// Cell as text. Numbers are rendered, so a label stored as `1`
    /// matches `"1"`.
    pub fn text(&self, column: &str) -> Option<Cow<'_, str>> {
        match self.0.get(column)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    /// Cell as a number, accepting numeric strings
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.0.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Cell as a Yes/No flag. Missing or unrecognised cells are false.
    pub fn flag(&self, column: &str) -> bool {
        match self.0.get(column) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "yes" | "y" | "true" | "1"
            ),
            _ => false,
        }
    }
}

/// Collection of parsed tables, keyed by table name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsiTables {
    tables: HashMap<String, Vec<Row>>,
}

impl CsiTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table
    pub fn insert(&mut self, name: &str, rows: Vec<Row>) {
        self.tables.insert(name.to_string(), rows);
    }

    pub fn table(&self, name: &str) -> Option<&[Row]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    /// Rows of a table, empty when the table is absent
    pub fn rows(&self, name: &str) -> &[Row] {
        self.table(name).unwrap_or(&[])
    }

    /// First row of `table` whose `column` equals `value`
    pub fn find_row(&self, table: &str, column: &str, value: &str) -> Option<&Row> {
        self.table(table)?
            .iter()
            .find(|row| row.text(column).is_some_and(|v| v == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_accessors() {
        let row = Row::new()
            .with("Frame", 12)
            .with("Angle", "30.5")
            .with("TI", "Yes")
            .with("M2I", false)
            .with("MassPerLen", 1.25);

        assert_eq!(row.text("Frame").as_deref(), Some("12"));
        assert_eq!(row.number("Angle"), Some(30.5));
        assert_eq!(row.number("MassPerLen"), Some(1.25));
        assert!(row.flag("TI"));
        assert!(!row.flag("M2I"));
        assert!(!row.flag("M3I"));
        assert_eq!(row.number("Missing"), None);
    }

    #[test]
    fn test_find_row() {
        let tables: CsiTables = serde_json::from_value(json!({
            "FRAME LOCAL AXES ASSIGNMENTS 1 - TYPICAL": [
                {"Frame": "1", "Angle": 0.0},
                {"Frame": 2, "Angle": 90.0},
                {"Frame": "2", "Angle": 45.0}
            ]
        }))
        .unwrap();

        let row = tables.find_row(FRAME_LOCAL_AXES, "Frame", "2").unwrap();
        assert_eq!(row.number("Angle"), Some(90.0));
        assert!(tables.find_row(FRAME_LOCAL_AXES, "Frame", "3").is_none());
        assert!(tables.find_row(FRAME_ADDED_MASS, "Frame", "1").is_none());
        assert!(tables.rows(CONNECTIVITY_FRAME).is_empty());
    }
}
