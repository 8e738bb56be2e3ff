use crate::domain::model::{AttributeValue, Record};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Deserialize a JSON array of objects into records, preserving order.
///
/// Each object contributes its `name` and its `data` object; any other
/// top-level fields are ignored. Missing fields never fail the parse.
pub fn parse(body: &str) -> Result<Vec<Record>> {
    let json_data: Value = serde_json::from_str(body)
        .map_err(|e| EtlError::parse(format!("response is not valid JSON: {}", e)))?;

    let items = match json_data {
        Value::Array(items) => items,
        other => {
            return Err(EtlError::parse(format!(
                "expected a JSON array, got {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect()
}

fn parse_record(index: usize, item: Value) -> Result<Record> {
    let mut obj = match item {
        Value::Object(obj) => obj,
        other => {
            return Err(EtlError::parse(format!(
                "element {} is {}, expected an object",
                index,
                kind(&other)
            )))
        }
    };

    let name = match obj.remove("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            return Err(EtlError::parse(format!(
                "element {}: `name` is {}, expected text",
                index,
                kind(&other)
            )))
        }
    };

    let attributes = match obj.remove("data") {
        None | Some(Value::Null) => HashMap::new(),
        Some(Value::Object(data)) => data
            .into_iter()
            .map(|(key, value)| (key, AttributeValue::from(value)))
            .collect(),
        Some(other) => {
            return Err(EtlError::parse(format!(
                "element {}: `data` is {}, expected an object",
                index,
                kind(&other)
            )))
        }
    };

    Ok(Record { name, attributes })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
