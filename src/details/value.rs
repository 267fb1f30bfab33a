//! Loosely typed scalar fields and the falsy-to-placeholder rule

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown in place of any absent or falsy field
pub const NOT_AVAILABLE: &str = "N/A";

/// A scalar field of a detail record. The endpoints return ids as numbers and
/// dates as strings, but nothing enforces that, so any JSON value is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
  pub fn new(value: impl Into<Value>) -> Self {
    Self(value.into())
  }

  pub fn is_truthy(&self) -> bool {
    is_truthy(&self.0)
  }

  /// Display text, or `None` when the value is falsy
  pub fn text(&self) -> Option<String> {
    if !self.is_truthy() {
      return None;
    }
    Some(match &self.0 {
      Value::String(s) => s.clone(),
      // 1.0 reads as 1
      Value::Number(n) if n.is_f64() => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
      other => other.to_string(),
    })
  }
}

/// Null, false, zero and the empty string are falsy; everything else,
/// including empty objects and arrays, is truthy.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

/// Row text for an optional field: the value, or `N/A` when absent or falsy
pub fn display_or_na(value: Option<&FieldValue>) -> String {
  value
    .and_then(FieldValue::text)
    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Two-space indented JSON, keys in source order
pub fn pretty_json(value: &Value) -> String {
  serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Deserialize a sub-object, treating any falsy value as absent. A truthy
/// value that is not an object is present but has no readable fields.
pub(crate) fn truthy_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  let value = Value::deserialize(deserializer)?;
  if !is_truthy(&value) {
    return Ok(None);
  }
  if !value.is_object() {
    return Ok(Some(T::default()));
  }
  Ok(Some(serde_json::from_value(value).unwrap_or_default()))
}

/// Deserialize an arbitrary JSON blob, treating any falsy value as absent
pub(crate) fn truthy_json<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(is_truthy(&value).then_some(value))
}
