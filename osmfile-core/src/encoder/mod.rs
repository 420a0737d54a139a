//! Feature encoder producing OpenStreetMap XML fragments.
//!
//! Responsibilities:
//! - Assemble node and way attributes in a fixed order.
//! - Mint negative identifiers for records without one.
//! - Split raw track references into embedded nodes.
//!
//! Boundaries:
//! - No I/O; fragments are returned to the caller (see [`crate::OsmDocument`]).
//! - Coordinates and tag keys are not validated.
//!
//! Invariants:
//! - A synthetic identifier is issued at most once per encoder.
//! - The written version is always one above the record's version.

use crate::clock::{Clock, SystemClock};
use crate::error::{ElementKind, EncodeError};
use crate::ids::SyntheticIds;
use crate::record::Feature;
use crate::xml::Escaping;

mod node;
mod way;


/// Encode point and path records into `<node>` and `<way>` fragments.
///
/// One encoder should serve one output document so that synthetic
/// identifiers stay unique within it.
///
/// # Examples
/// ```
/// use osmfile_core::{FeatureEncoder, PointRecord};
///
/// # fn main() -> Result<(), osmfile_core::EncodeError> {
/// let encoder = FeatureEncoder::new();
/// let record = PointRecord::new("39.1", "-108.2", "7", "alice").with_tag("amenity", "cafe");
/// let xml = encoder.encode_point(&record)?;
/// assert!(xml.starts_with(r#"  <node id="-1" version="1" timestamp=""#));
/// assert!(xml.contains("<tag k='amenity' v='cafe'/>"));
/// assert_eq!(encoder.next_synthetic_id(), -2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FeatureEncoder<C = SystemClock> {
    ids: SyntheticIds,
    clock: C,
    escaping: Escaping,
}

impl FeatureEncoder<SystemClock> {
    /// Encoder stamping wall-clock UTC timestamps.
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FeatureEncoder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FeatureEncoder<C> {
    /// Encoder drawing timestamps from `clock`.
    pub const fn with_clock(clock: C) -> Self {
        Self {
            ids: SyntheticIds::new(),
            clock,
            escaping: Escaping::Historical,
        }
    }

    /// Select how attribute and tag values are escaped.
    #[must_use]
    pub const fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Escaping mode in effect.
    pub const fn escaping(&self) -> Escaping {
        self.escaping
    }

    /// Identifier the next synthesized element will receive.
    pub fn next_synthetic_id(&self) -> i64 {
        self.ids.peek()
    }

    /// Encode either kind of feature.
    pub fn encode(&self, feature: &Feature) -> Result<String, EncodeError> {
        match feature {
            Feature::Node(point) => self.encode_point(point),
            Feature::Way(path) => self.encode_path(path),
        }
    }
}

/// Written version: one above the record's, or the literal `1` when unknown.
fn next_version(version: Option<u32>) -> String {
    version.map_or_else(|| "1".to_owned(), |value| (u64::from(value) + 1).to_string())
}

fn required<'a>(
    value: Option<&'a str>,
    element: ElementKind,
    field: &'static str,
) -> Result<&'a str, EncodeError> {
    value.ok_or(EncodeError::MissingField { element, field })
}
