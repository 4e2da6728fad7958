//! Built elements.

use std::fmt;

/// A finished piece of markup produced by an [`ElementBuilder`].
///
/// [`ElementBuilder`]: crate::ElementBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    markup: String,
}

impl Element {
    pub(crate) fn from_markup(markup: String) -> Self {
        Self { markup }
    }

    /// The serialized markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.markup
    }
}
