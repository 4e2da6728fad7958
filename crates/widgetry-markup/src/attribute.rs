//! Attribute templates.

use std::fmt;

/// Text rendered in place of an attribute key that was never supplied.
pub const MISSING_KEY: &str = "undefined";

/// A single markup attribute such as `id="main"` or `hidden`.
///
/// Attributes are produced fresh for every use and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    key: Option<String>,
    value: Option<String>,
}

impl Attribute {
    /// Produce a new attribute from the given parts.
    ///
    /// An empty value is stored as absent, so it serializes as a bare key.
    pub fn new(key: Option<&str>, value: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            value: value.filter(|v| !v.is_empty()).map(str::to_string),
        }
    }

    /// A `key="value"` attribute.
    pub fn pair(key: &str, value: &str) -> Self {
        Self::new(Some(key), Some(value))
    }

    /// A bare attribute with no value.
    pub fn flag(key: &str) -> Self {
        Self::new(Some(key), None)
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Render the attribute as it appears inside an opening tag.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or(MISSING_KEY);
        match &self.value {
            Some(value) => write!(f, "{}=\"{}\"", key, value),
            None => f.write_str(key),
        }
    }
}
