//! Tag value clean-up for collected form data.
//!
//! Provides helpers to:
//! - strip characters that would break the historical attribute quoting; and
//! - turn a `key=value` answer into an overriding tag.
use std::fmt::Display;

use crate::record::Tags;

/// Clean a value before it becomes a tag value.
///
/// `&` becomes the word `and` and every `"` is removed. Other markup
/// characters pass through; see [`crate::Escaping::Full`] for hardened output.
///
/// # Examples
/// ```
/// use osmfile_core::sanitize;
///
/// assert_eq!(sanitize("Fish & \"Chips\""), "Fish and Chips");
/// assert_eq!(sanitize(42), "42");
/// ```
pub fn sanitize(value: impl Display) -> String {
    value.to_string().replace('&', "and").replace('"', "")
}

/// Build a single tag from a form field and its answer.
///
/// An answer containing `=` overrides the field name: the text before the
/// first `=` is the key and the text up to the next `=` is the value.
///
/// # Examples
/// ```
/// use osmfile_core::decompose;
///
/// let plain = decompose("name", "Town Hall");
/// assert_eq!(plain.get("name").map(String::as_str), Some("Town Hall"));
///
/// let overriding = decompose("category", "amenity=cafe");
/// assert_eq!(overriding.get("amenity").map(String::as_str), Some("cafe"));
/// ```
pub fn decompose(field: &str, value: impl Display) -> Tags {
    let cleaned = sanitize(value);
    let mut parts = cleaned.split('=');
    let (key, value) = match (parts.next(), parts.next()) {
        (Some(key), Some(value)) => (key.to_owned(), value.to_owned()),
        _ => (field.to_owned(), cleaned.clone()),
    };
    Tags::from([(key, value)])
}
