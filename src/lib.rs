//! Facade crate for the osmfile encoder.
//!
//! This crate re-exports the record types, the feature encoder and the
//! document writer from `osmfile-core`.

#![forbid(unsafe_code)]

pub use osmfile_core::{
    Clock, DEFAULT_GENERATOR, DocumentError, ElementKind, EncodeError, Escaping, Feature,
    FeatureEncoder, FixedClock, OSM_API_VERSION, OsmDocument, PathRecord, PointRecord,
    SyntheticIds, SystemClock, TIMESTAMP_FORMAT, Tags, decompose, sanitize,
};
