//! Normalization of nested option parameters into plain mappings.

use std::num::FpCategory;

use serde_json::{Map, Value};

use super::OptionBuilder;

/// A nested option parameter: either a typed builder or a raw value.
///
/// Typed builders are replaced by their mapping; raw values pass through
/// unchanged, `null` included. The default is `Raw(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptsInput<T> {
    Typed(T),
    Raw(Value),
}

impl<T> OptsInput<T> {
    /// No value; renders as `null`.
    #[must_use]
    pub const fn none() -> Self {
        Self::Raw(Value::Null)
    }
}

impl<T: OptionBuilder> OptsInput<T> {
    #[must_use]
    pub fn to_opts(&self) -> Value {
        match self {
            Self::Typed(builder) => builder.opts(),
            Self::Raw(value) => value.clone(),
        }
    }
}

impl<T> Default for OptsInput<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Value> for OptsInput<T> {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl<T> From<Map<String, Value>> for OptsInput<T> {
    fn from(map: Map<String, Value>) -> Self {
        Self::Raw(Value::Object(map))
    }
}

/// Whether a raw parameter counts as "not given" and should fall back to a default.
#[must_use]
pub fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(true) => false,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
