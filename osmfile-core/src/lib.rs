//! Core encoding logic for OpenStreetMap XML change files.
//!
//! Feature records collected in the field (GPS tracks, survey forms) are
//! turned into `<node>` and `<way>` fragments and framed into an
//! `<osm version="0.6">` document. Records without an upstream identity get
//! negative placeholder ids, and proposed edits carry `action="modify"` plus
//! a fixme tag so they are reviewed before upload.
//!
//! Attribution (`uid`, `user`) is copied verbatim. Documents published
//! without authentication expose contributor identities; strip those
//! fields upstream when that matters.

#![forbid(unsafe_code)]

pub mod clock;
pub mod document;
pub mod encoder;
pub mod error;
pub mod ids;
pub mod record;
pub mod sanitize;
pub mod xml;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use document::{DEFAULT_GENERATOR, OSM_API_VERSION, OsmDocument};
pub use encoder::FeatureEncoder;
pub use error::{DocumentError, ElementKind, EncodeError};
pub use ids::SyntheticIds;
pub use record::{Feature, PathRecord, PointRecord, Tags};
pub use sanitize::{decompose, sanitize};
pub use xml::Escaping;
