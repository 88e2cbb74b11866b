//! Shape checks for untrusted JSON documents.
//!
//! Incoming plan payloads arrive as raw `serde_json::Value`s. Rather than
//! failing on the first bad field, checks accumulate into a list of
//! violations so the caller can report every problem at once.

use chrono::DateTime;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single schema violation: where it happened, what the schema wanted,
/// and what the document actually contained.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{path}: expected {expected}, got {actual}")]
pub struct Violation {
    pub path: String,
    pub expected: String,
    pub actual: String,
}

/// Render a value for violation messages without dumping whole subtrees.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 48 => {
            let head: String = s.chars().take(48).collect();
            format!("\"{head}…\"")
        }
        Value::String(s) => format!("\"{s}\""),
        Value::Array(items) => format!("an array of {} items", items.len()),
        Value::Object(_) => "an object".to_string(),
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Accumulates violations while walking a document.
#[derive(Debug, Default)]
pub struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, path: &str, expected: &str, actual: &Value) {
        self.violations.push(Violation {
            path: path.to_string(),
            expected: expected.to_string(),
            actual: describe(actual),
        });
    }

    /// Record a required key that is absent altogether.
    pub fn report_missing(&mut self, path: &str, expected: &str) {
        self.violations.push(Violation {
            path: path.to_string(),
            expected: expected.to_string(),
            actual: "nothing (field is missing)".to_string(),
        });
    }

    /// `Ok(())` if no violations were recorded, the full list otherwise.
    pub fn finish(self) -> Result<(), Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }

    pub fn object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        match value.as_object() {
            Some(map) => Some(map),
            None => {
                self.report(path, "an object", value);
                None
            }
        }
    }

    pub fn array<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
        match value.as_array() {
            Some(items) => Some(items),
            None => {
                self.report(path, "an array", value);
                None
            }
        }
    }

    pub fn string<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a str> {
        match value.as_str() {
            Some(s) => Some(s),
            None => {
                self.report(path, "a string", value);
                None
            }
        }
    }

    pub fn boolean(&mut self, value: &Value, path: &str) -> Option<bool> {
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                self.report(path, "a boolean", value);
                None
            }
        }
    }

    pub fn non_negative_int(&mut self, value: &Value, path: &str) -> Option<u64> {
        match value.as_u64() {
            Some(n) => Some(n),
            None => {
                self.report(path, "a non-negative integer", value);
                None
            }
        }
    }

    pub fn positive_int(&mut self, value: &Value, path: &str) -> Option<u64> {
        match value.as_u64() {
            Some(n) if n > 0 => Some(n),
            _ => {
                self.report(path, "a positive integer", value);
                None
            }
        }
    }

    /// An RFC 3339 datetime string carrying an explicit UTC offset.
    pub fn datetime(&mut self, value: &Value, path: &str) {
        let Some(s) = self.string(value, path) else {
            return;
        };
        if DateTime::parse_from_rfc3339(s).is_err() {
            self.report(path, "an RFC 3339 datetime with UTC offset", value);
        }
    }

    /// Look up a required field, recording a violation when absent.
    fn field<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
        expected: &str,
    ) -> Option<(&'a Value, String)> {
        let path = join(parent, key);
        match obj.get(key) {
            Some(value) => Some((value, path)),
            None => {
                self.report_missing(&path, expected);
                None
            }
        }
    }

    pub fn string_field<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'a str> {
        let (value, path) = self.field(obj, parent, key, "a string")?;
        self.string(value, &path)
    }

    pub fn bool_field(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<bool> {
        let (value, path) = self.field(obj, parent, key, "a boolean")?;
        self.boolean(value, &path)
    }

    pub fn non_negative_int_field(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<u64> {
        let (value, path) = self.field(obj, parent, key, "a non-negative integer")?;
        self.non_negative_int(value, &path)
    }

    pub fn positive_int_field(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<u64> {
        let (value, path) = self.field(obj, parent, key, "a positive integer")?;
        self.positive_int(value, &path)
    }

    pub fn datetime_field(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) {
        if let Some((value, path)) =
            self.field(obj, parent, key, "an RFC 3339 datetime with UTC offset")
        {
            self.datetime(value, &path);
        }
    }

    pub fn array_field<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<(&'a Vec<Value>, String)> {
        let (value, path) = self.field(obj, parent, key, "an array")?;
        let items = self.array(value, &path)?;
        Some((items, path))
    }

    pub fn object_field<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<(&'a Map<String, Value>, String)> {
        let (value, path) = self.field(obj, parent, key, "an object")?;
        let map = self.object(value, &path)?;
        Some((map, path))
    }

    /// Every element must be a string.
    pub fn string_array(&mut self, items: &[Value], path: &str) {
        for (idx, item) in items.iter().enumerate() {
            self.string(item, &format!("{path}[{idx}]"));
        }
    }
}
