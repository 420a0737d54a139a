//! Small XML text builders shared by the node and way encoders.

use std::borrow::Cow;

use quick_xml::escape::escape;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How attribute and tag values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Escaping {
    /// Write values untouched, matching documents produced by older tooling.
    /// Callers are expected to run tag values through [`crate::sanitize`].
    #[default]
    Historical,
    /// Escape `&`, `<`, `>`, `"` and `'` so any value yields well-formed XML.
    Full,
}

impl Escaping {
    pub(crate) fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Historical => Cow::Borrowed(value),
            Self::Full => escape(value),
        }
    }
}

/// Ordered element attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub(crate) fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.push((key, value.into()));
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == key)
    }

    /// Render as `key="value"` pairs separated by single spaces.
    pub(crate) fn render(&self, escaping: Escaping) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", escaping.apply(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub(crate) const FIXME_TAG: &str =
    r#"<tag k="fixme" v="Do not upload this without validation!"/>"#;

pub(crate) fn tag_element(key: &str, value: &str, escaping: Escaping) -> String {
    format!(
        "<tag k='{}' v='{}'/>",
        escaping.apply(key),
        escaping.apply(value)
    )
}
