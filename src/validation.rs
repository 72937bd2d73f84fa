//! Structural validation of sections input
//!
//! Typed input (`Sections`) can only carry a bad section key; value and item
//! types are enforced by the compiler. Untyped JSON goes through
//! `sections_from_json`, which checks all three in document order and stops at
//! the first violation.

use crate::error::ValidationError;
use crate::types::Sections;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Optional sign, ASCII digits, at most one trailing newline
static NUMERIC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+\n?$").expect("Invalid numeric key regex"));

/// True if a section key is, or looks like, an integer
pub fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEY.is_match(key)
}

/// Check every section key of a typed input
pub fn validate(sections: &Sections) -> Result<(), ValidationError> {
    for section in sections.keys() {
        check_section_key(section)?;
    }
    Ok(())
}

fn check_section_key(section: &str) -> Result<(), ValidationError> {
    if is_numeric_key(section) {
        return Err(ValidationError::InvalidSectionKey {
            section: section.to_string(),
        });
    }
    Ok(())
}

/// Validate untyped JSON and convert it into `Sections`
///
/// An object maps keys to sections. An array is read as a list keyed by
/// position, so any non-empty array fails on key "0"; an empty one is an
/// empty input. Anything else is rejected outright.
pub fn sections_from_json(input: &Value) -> Result<Sections, ValidationError> {
    match input {
        Value::Object(map) => {
            let mut sections = Sections::with_capacity(map.len());
            for (key, values) in map {
                let items = section_items(key, values)?;
                sections.insert(key.clone(), items);
            }
            Ok(sections)
        }
        Value::Array(list) => {
            let mut sections = Sections::with_capacity(list.len());
            for (position, values) in list.iter().enumerate() {
                let key = position.to_string();
                let items = section_items(&key, values)?;
                sections.insert(key, items);
            }
            Ok(sections)
        }
        other => Err(ValidationError::InvalidInputType {
            found: json_type_name(other),
        }),
    }
}

fn section_items(section: &str, values: &Value) -> Result<Vec<String>, ValidationError> {
    check_section_key(section)?;

    let Value::Array(items) = values else {
        return Err(ValidationError::InvalidSectionValues {
            section: section.to_string(),
            found: json_type_name(values),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationError::InvalidSectionItem {
                section: section.to_string(),
                position,
                found: json_type_name(other),
            }),
        })
        .collect()
}

/// Type name reported in validation errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "double",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_keys() {
        for key in ["0", "1", "42", "+7", "-3", "007"] {
            assert!(is_numeric_key(key), "{key} should be numeric");
        }
        for key in ["", "+", "-", "1.5", "1e3", " 1", "1 ", "a1", "color", "0x1f", "١"] {
            assert!(!is_numeric_key(key), "{key:?} should not be numeric");
        }
    }

    #[test]
    fn test_numeric_key_trailing_newline() {
        assert!(is_numeric_key("1\n"));
        assert!(is_numeric_key("-20\n"));
        for key in ["1\n\n", "\n1", "1\r\n", "\n", "1\n2"] {
            assert!(!is_numeric_key(key), "{key:?} should not be numeric");
        }

        let err = sections_from_json(&json!({"1\n": ["a"]})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSectionKey { section: "1\n".into() });
    }

    #[test]
    fn test_validate_typed_sections() {
        let mut sections = Sections::new();
        sections.insert("color".into(), vec!["red".into()]);
        assert_eq!(validate(&sections), Ok(()));

        sections.insert("-12".into(), vec!["x".into()]);
        assert_eq!(
            validate(&sections),
            Err(ValidationError::InvalidSectionKey { section: "-12".into() })
        );
    }

    #[test]
    fn test_json_object_keeps_order() {
        let input = json!({"size": ["S", "M"], "color": ["red"], "fit": []});
        let sections = sections_from_json(&input).unwrap();

        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["size", "color", "fit"]);
        assert_eq!(sections["size"], vec!["S".to_string(), "M".to_string()]);
        assert!(sections["fit"].is_empty());
    }

    #[test]
    fn test_json_item_not_string() {
        let err = sections_from_json(&json!({"x": [1, 2]})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSectionItem {
                section: "x".into(),
                position: 0,
                found: "integer",
            }
        );

        let err = sections_from_json(&json!({"x": ["a", 2.5]})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidSectionItem { position: 1, found: "double", .. }
        ));
    }

    #[test]
    fn test_json_values_not_array() {
        let err = sections_from_json(&json!({"x": "red"})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSectionValues {
                section: "x".into(),
                found: "string",
            }
        );

        let err = sections_from_json(&json!({"x": {"a": "b"}})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSectionValues { found: "object", .. }));
    }

    #[test]
    fn test_json_first_violation_wins() {
        // Key check on "2" comes after the values of "a" are rejected
        let input = json!({"a": null, "2": ["x"]});
        let err = sections_from_json(&input).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSectionValues { found: "null", .. }));

        // Key is checked before its own values
        let input = json!({"2": null});
        let err = sections_from_json(&input).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSectionKey { .. }));
    }

    #[test]
    fn test_json_arrays_have_numeric_keys() {
        let err = sections_from_json(&json!([["a"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSectionKey { section: "0".into() });

        let sections = sections_from_json(&json!([])).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_json_scalar_input_rejected() {
        let err = sections_from_json(&json!("colors")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidInputType { found: "string" });
    }
}
