//! Base validation trait and common utilities
//!
//! Copyright (c) 2025 MCode Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Validation context carrying the JSON path of the value under inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
}

impl ValidationContext {
    /// Create a context rooted at `$`
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        let new_path = if self.path == "$" {
            format!("$.{}", path_segment.as_ref())
        } else {
            format!("{}.{}", self.path, path_segment.as_ref())
        };

        Self { path: new_path }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::root()
    }
}

/// Base trait for document validators
pub trait SchemaValidator {
    /// The type being validated
    type Input: ?Sized;
    /// What validation produces
    type Output;

    /// Validate starting from the document root
    fn validate(&self, input: &Self::Input) -> Self::Output {
        self.validate_with_context(input, &ValidationContext::root())
    }

    /// Validate with a specific path context
    fn validate_with_context(&self, input: &Self::Input, context: &ValidationContext)
        -> Self::Output;
}

/// Helpers for reading a loosely-typed document with neutral defaults
///
/// Indexing a [`Value`] already yields `Null` for absent keys and for the
/// wrong container type, so these only cover the conversions on top of that.
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Items of an array, or an empty slice for anything else
    pub fn items(value: &Value) -> &[Value] {
        value.as_array().map(Vec::as_slice).unwrap_or_default()
    }

    /// String contents, or `""` for anything else
    pub fn text(value: &Value) -> &str {
        value.as_str().unwrap_or_default()
    }

    /// Text form of a name-like value: strings verbatim, `Null` as empty,
    /// anything else as its JSON rendering
    pub fn name_of(value: &Value) -> Cow<'_, str> {
        match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Render a scalar for inclusion in a message
    pub fn describe(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Whether a value carries content: `null`, `false`, `0`, `""`, `[]` and
    /// `{}` all count as absent
    pub fn has_content(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    /// Number of entries in a mapping or sequence; 0 for scalars
    pub fn entry_count(value: &Value) -> usize {
        match value {
            Value::Object(o) => o.len(),
            Value::Array(a) => a.len(),
            _ => 0,
        }
    }

    /// Character length of a string value; 0 for anything else
    pub fn char_len(value: &Value) -> usize {
        Self::text(value).chars().count()
    }

    /// Whether a value is a number inside `range`
    pub fn number_in_range(value: &Value, range: &RangeInclusive<f64>) -> bool {
        value.as_f64().is_some_and(|n| range.contains(&n))
    }

    /// Whether a value is a number equal to `expected`
    pub fn number_equals(value: &Value, expected: usize) -> bool {
        value.as_f64().is_some_and(|n| n == expected as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::root();
        let child = context.child("motivational_core");
        assert_eq!(child.path, "$.motivational_core");

        let grandchild = child.child("top_5");
        assert_eq!(grandchild.path, "$.motivational_core.top_5");
    }

    #[test]
    fn test_validation_context_child_index() {
        let context = ValidationContext::root().child("achievement_stories");
        let indexed = context.child_index(2).child("motivations_expressed");
        assert_eq!(indexed.path, "$.achievement_stories[2].motivations_expressed");
    }

    #[test]
    fn test_items_and_text_default() {
        let doc = json!({"list": [1, 2], "name": "Excel", "number": 3});
        assert_eq!(ValidationHelpers::items(&doc["list"]).len(), 2);
        assert!(ValidationHelpers::items(&doc["name"]).is_empty());
        assert!(ValidationHelpers::items(&doc["absent"]["deeper"]).is_empty());
        assert_eq!(ValidationHelpers::text(&doc["name"]), "Excel");
        assert_eq!(ValidationHelpers::text(&doc["number"]), "");
    }

    #[test]
    fn test_name_of_and_describe() {
        assert_eq!(ValidationHelpers::name_of(&json!("Excel")), "Excel");
        assert_eq!(ValidationHelpers::name_of(&Value::Null), "");
        assert_eq!(ValidationHelpers::name_of(&json!(7)), "7");
        assert_eq!(ValidationHelpers::describe(&json!(10.1)), "10.1");
        assert_eq!(ValidationHelpers::describe(&Value::Null), "null");
        assert_eq!(ValidationHelpers::describe(&json!("2.0")), "2.0");
    }

    #[test]
    fn test_has_content() {
        assert!(!ValidationHelpers::has_content(&Value::Null));
        assert!(!ValidationHelpers::has_content(&json!("")));
        assert!(!ValidationHelpers::has_content(&json!([])));
        assert!(!ValidationHelpers::has_content(&json!({})));
        assert!(!ValidationHelpers::has_content(&json!(0)));
        assert!(!ValidationHelpers::has_content(&json!(false)));
        assert!(ValidationHelpers::has_content(&json!("text")));
        assert!(ValidationHelpers::has_content(&json!(["Excel"])));
    }

    #[test]
    fn test_entry_count_and_char_len() {
        assert_eq!(ValidationHelpers::entry_count(&json!({"a": 1, "b": 2})), 2);
        assert_eq!(ValidationHelpers::entry_count(&json!([1, 2, 3])), 3);
        assert_eq!(ValidationHelpers::entry_count(&json!("abcd")), 0);
        assert_eq!(ValidationHelpers::char_len(&json!("héllo")), 5);
        assert_eq!(ValidationHelpers::char_len(&json!(12345)), 0);
    }

    #[test]
    fn test_number_checks() {
        let range = 0.0..=10.0;
        assert!(ValidationHelpers::number_in_range(&json!(0), &range));
        assert!(ValidationHelpers::number_in_range(&json!(10.0), &range));
        assert!(!ValidationHelpers::number_in_range(&json!(10.1), &range));
        assert!(!ValidationHelpers::number_in_range(&json!(-0.1), &range));
        assert!(!ValidationHelpers::number_in_range(&json!("5"), &range));
        assert!(!ValidationHelpers::number_in_range(&Value::Null, &range));

        assert!(ValidationHelpers::number_equals(&json!(3), 3));
        assert!(ValidationHelpers::number_equals(&json!(3.0), 3));
        assert!(!ValidationHelpers::number_equals(&json!("3"), 3));
    }
}
