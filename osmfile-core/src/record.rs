//! Feature records handed to the encoder.
//!
//! Records arrive from upstream collectors (GPS tracks, data-collection
//! forms) and are encoded without further validation. Coordinates stay as
//! text so the output reproduces the input byte for byte.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free-form OpenStreetMap key/value tags.
///
/// A `BTreeMap` keeps emission order deterministic across calls.
pub type Tags = BTreeMap<String, String>;

/// A single geographic point destined for a `<node>` element.
///
/// # Examples
/// ```
/// use osmfile_core::PointRecord;
///
/// let record = PointRecord::new("39.1", "-108.2", "7", "alice")
///     .with_tag("amenity", "cafe");
/// assert_eq!(record.latitude.as_deref(), Some("39.1"));
/// assert!(record.identifier.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointRecord {
    /// Persistent identifier; a synthetic one is minted when absent.
    #[cfg_attr(feature = "serde", serde(default, rename = "id"))]
    pub identifier: Option<i64>,
    /// Last known version; the written version is always one higher.
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: Option<u32>,
    /// Latitude, copied verbatim.
    #[cfg_attr(feature = "serde", serde(default, rename = "lat"))]
    pub latitude: Option<String>,
    /// Longitude, copied verbatim.
    #[cfg_attr(feature = "serde", serde(default, rename = "lon"))]
    pub longitude: Option<String>,
    /// Contributor id (`uid`). Identifying data.
    #[cfg_attr(feature = "serde", serde(default, rename = "uid"))]
    pub owner_id: Option<String>,
    /// Contributor name (`user`). Identifying data.
    #[cfg_attr(feature = "serde", serde(default, rename = "user"))]
    pub owner_name: Option<String>,
    /// Tags; `None` produces a self-closing element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<Tags>,
    /// Marks the record as a proposed edit of existing data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modified: bool,
}

impl PointRecord {
    /// Build a standalone point with the four required fields set.
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        owner_id: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            owner_id: Some(owner_id.into()),
            owner_name: Some(owner_name.into()),
            ..Self::default()
        }
    }

    /// Set a persistent identifier.
    #[must_use]
    pub const fn with_identifier(mut self, identifier: i64) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Set the last known version.
    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Add a tag, creating the tag map on first use.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(Tags::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the tag map.
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Flag the record as a proposed edit.
    #[must_use]
    pub const fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// An ordered point sequence destined for a `<way>` element.
///
/// `references` holds raw track tokens. A token carrying `;` closes the
/// current coordinate group; the text after the delimiter starts the next.
///
/// # Examples
/// ```
/// use osmfile_core::PathRecord;
///
/// let record = PathRecord::new(["39.1", "-108.2", "39.2;-108.3"], "7", "alice");
/// assert_eq!(record.references.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathRecord {
    /// Way-specific identifier; takes precedence over `identifier`.
    #[cfg_attr(feature = "serde", serde(default, rename = "osm_way_id"))]
    pub way_identifier: Option<i64>,
    /// Generic identifier.
    #[cfg_attr(feature = "serde", serde(default, rename = "id", alias = "osm_id"))]
    pub identifier: Option<i64>,
    /// Last known version; the written version is always one higher.
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: Option<u32>,
    /// Contributor id (`uid`). Identifying data.
    #[cfg_attr(feature = "serde", serde(default, rename = "uid"))]
    pub owner_id: Option<String>,
    /// Contributor name (`user`). Identifying data.
    #[cfg_attr(feature = "serde", serde(default, rename = "user"))]
    pub owner_name: Option<String>,
    /// Raw reference tokens in traversal order.
    #[cfg_attr(feature = "serde", serde(default, rename = "refs"))]
    pub references: Vec<String>,
    /// Tags attached to the way itself.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<Tags>,
    /// Marks the record as a proposed edit of existing data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modified: bool,
}

impl PathRecord {
    /// Build a path from raw reference tokens and attribution.
    pub fn new<I, S>(references: I, owner_id: impl Into<String>, owner_name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            references: references.into_iter().map(Into::into).collect(),
            owner_id: Some(owner_id.into()),
            owner_name: Some(owner_name.into()),
            ..Self::default()
        }
    }

    /// Set the way-specific identifier.
    #[must_use]
    pub const fn with_way_identifier(mut self, identifier: i64) -> Self {
        self.way_identifier = Some(identifier);
        self
    }

    /// Set the generic identifier.
    #[must_use]
    pub const fn with_identifier(mut self, identifier: i64) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Set the last known version.
    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Add a tag, creating the tag map on first use.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(Tags::new)
            .insert(key.into(), value.into());
        self
    }

    /// Flag the record as a proposed edit.
    #[must_use]
    pub const fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// One input feature, tagged by element type.
///
/// Serialized as `{"type": "node", ...}` or `{"type": "way", ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Feature {
    /// A standalone point.
    Node(PointRecord),
    /// A point sequence.
    Way(PathRecord),
}
