//! Default value type
//!
//! Registered defaults are plain scalars. Every option currently registered
//! is a boolean, the other variants cover defaults that are not.

use serde::Serialize;
use std::fmt;

/// Scalar default value of a registered option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Text(&'static str),
}

impl DefaultValue {
    /// Boolean view, `None` for non-boolean defaults
    pub fn as_bool(self) -> Option<bool> {
        match self {
            DefaultValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Integer view, `None` for non-integer defaults
    pub fn as_integer(self) -> Option<i64> {
        match self {
            DefaultValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Text view, `None` for non-text defaults
    pub fn as_text(self) -> Option<&'static str> {
        match self {
            DefaultValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(value) => write!(f, "{}", value),
            DefaultValue::Integer(value) => write!(f, "{}", value),
            DefaultValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl PartialEq<bool> for DefaultValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_scalar() {
        assert_eq!(DefaultValue::Bool(false).to_string(), "false");
        assert_eq!(DefaultValue::Integer(3).to_string(), "3");
        assert_eq!(DefaultValue::Text("docker").to_string(), "docker");
    }

    #[test]
    fn test_typed_views() {
        assert_eq!(DefaultValue::Bool(true).as_bool(), Some(true));
        assert_eq!(DefaultValue::Bool(true).as_integer(), None);
        assert_eq!(DefaultValue::Integer(7).as_integer(), Some(7));
        assert_eq!(DefaultValue::Text("x").as_text(), Some("x"));
        assert_eq!(DefaultValue::Text("x").as_bool(), None);
    }

    #[test]
    fn test_compare_with_bool() {
        assert!(DefaultValue::Bool(false) == false);
        assert!(DefaultValue::Bool(false) != true);
        // "false" as text is not the boolean false
        assert!(DefaultValue::Text("false") != false);
    }

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&DefaultValue::Bool(false)).unwrap(),
            "false"
        );
        assert_eq!(serde_json::to_string(&DefaultValue::Integer(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&DefaultValue::Text("docker")).unwrap(),
            "\"docker\""
        );
    }
}
