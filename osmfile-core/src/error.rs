//! Error types produced while encoding features and writing documents.

use std::{fmt, io};

use thiserror::Error;

/// Element being encoded when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A `<node>` element, standalone or embedded in a way.
    Node,
    /// A `<way>` element.
    Way,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Way => f.write_str("way"),
        }
    }
}

/// Errors returned by [`crate::FeatureEncoder`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// A coordinate or attribution field was absent.
    #[error("{element} is missing required field `{field}`")]
    MissingField {
        /// Element that could not be encoded.
        element: ElementKind,
        /// Output attribute name of the missing field.
        field: &'static str,
    },
}

/// Errors returned by [`crate::OsmDocument`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Writing to the sink failed.
    #[error("failed to write OSM document: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Flushing the sink failed.
    #[error("failed to flush OSM document: {source}")]
    Flush {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The footer was already written.
    #[error("OSM document is already closed")]
    Closed,
}
