//! JSON array parser

use std::io::BufReader;
use std::path::Path;

use indexmap::IndexSet;
use serde_json::Value;

use crate::config::LoadConfig;
use crate::error::{LoadError, Result};
use crate::model::{RawCell, RawRow, RawTable};

use super::SourceParser;

/// Parser for JSON arrays of row objects
pub struct JsonParser;

impl SourceParser for JsonParser {
    fn parse(&self, path: &Path, _config: &LoadConfig) -> Result<RawTable> {
        let file = super::open(path)?;
        let shape_error = |reason: &str| LoadError::JsonShape {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        // Handle both arrays and single objects
        let array = match value {
            Value::Array(arr) => arr,
            Value::Object(_) => vec![value],
            _ => return Err(shape_error("expected an array of objects")),
        };

        // Columns are the union of keys, in first-seen order
        let mut column_names: IndexSet<String> = IndexSet::new();
        for item in &array {
            match item {
                Value::Object(obj) => column_names.extend(obj.keys().cloned()),
                _ => return Err(shape_error("array element is not an object")),
            }
        }

        let mut table = RawTable::new(column_names.iter().cloned().collect());

        for (index, item) in array.iter().enumerate() {
            let mut row = RawRow::new(index + 1);
            if let Value::Object(obj) = item {
                for name in &column_names {
                    row.insert(name.as_str(), json_value_to_cell(obj.get(name)));
                }
            }
            table.add_row(row);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("json")
    }
}

fn json_value_to_cell(value: Option<&Value>) -> RawCell {
    match value {
        None | Some(Value::Null) => RawCell::Empty,
        Some(Value::Bool(b)) => RawCell::Bool(*b),
        Some(Value::Number(n)) => n
            .as_f64()
            .map_or_else(|| RawCell::Text(n.to_string()), RawCell::Number),
        Some(Value::String(s)) => RawCell::infer(s),
        // Nested values are kept as their JSON text
        Some(nested @ (Value::Array(_) | Value::Object(_))) => {
            RawCell::Text(nested.to_string())
        }
    }
}
