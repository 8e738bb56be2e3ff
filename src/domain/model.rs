use std::collections::HashMap;
use std::fmt;

/// Loosely-typed attribute value taken from a record's `data` object.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Null,
    Boolean(bool),
    /// Keeps the digits exactly as they appeared in the payload.
    Number(serde_json::Number),
    Text(String),
    /// Objects and arrays, kept as-is.
    Nested(serde_json::Value),
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Boolean(b),
            serde_json::Value::Number(n) => AttributeValue::Number(n),
            serde_json::Value::String(s) => AttributeValue::Text(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                AttributeValue::Nested(nested)
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    /// Text form used in exported rows. `Null` has no text form of its own
    /// and renders as the missing-value placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => f.write_str(MISSING_VALUE),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Nested(v) => write!(f, "{}", v),
        }
    }
}

/// Placeholder written when a record carries no usable price.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub name: Option<String>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn price(&self) -> Option<&AttributeValue> {
        self.attribute("price")
    }

    /// Absent names never match.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.as_deref().is_some_and(|name| name.contains(needle))
    }
}

/// Records that passed the name filter, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSet(Vec<Record>);

impl FilteredSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }
}

impl FromIterator<Record> for FilteredSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_value_rendering() {
        assert_eq!(AttributeValue::from(json!(399)).to_string(), "399");
        assert_eq!(AttributeValue::from(json!(1849.99)).to_string(), "1849.99");
        assert_eq!(AttributeValue::from(json!("519.99")).to_string(), "519.99");
        assert_eq!(AttributeValue::from(json!(true)).to_string(), "true");
        assert_eq!(AttributeValue::from(json!(null)).to_string(), "N/A");
        assert_eq!(
            AttributeValue::from(json!({"amount": 10})).to_string(),
            r#"{"amount":10}"#
        );
        assert_eq!(AttributeValue::from(json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn test_name_contains_is_case_sensitive() {
        let record = Record::new("Apple iPad Air");
        assert!(record.name_contains("Apple"));
        assert!(!record.name_contains("apple"));
        assert!(!Record::default().name_contains("Apple"));
    }

    #[test]
    fn test_price_lookup() {
        let record =
            Record::new("Apple Watch").with_attribute("price", AttributeValue::from(json!(399)));
        assert_eq!(record.price(), Some(&AttributeValue::from(json!(399))));
        assert!(Record::new("Apple Pencil").price().is_none());
    }
}
