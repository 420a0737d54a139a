//! `<node>` rendering for standalone and embedded points.

use log::debug;

use super::{FeatureEncoder, next_version, required};
use crate::clock::Clock;
use crate::error::{ElementKind, EncodeError};
use crate::record::{PointRecord, Tags};
use crate::xml::{Attributes, FIXME_TAG, tag_element};

/// Everything needed to render one node once its identifier is known.
pub(super) struct NodeDraft<'a> {
    pub(super) version: Option<u32>,
    pub(super) modified: bool,
    pub(super) timestamp: &'a str,
    pub(super) latitude: &'a str,
    pub(super) longitude: &'a str,
    pub(super) owner_id: &'a str,
    pub(super) owner_name: &'a str,
    pub(super) tags: Option<&'a Tags>,
}

impl<C: Clock> FeatureEncoder<C> {
    /// Encode a standalone point as a `<node>` element.
    ///
    /// A record without a version is written as version `1`. When
    /// `modified` is set the node carries `action="modify"` and, if it has a
    /// tag map, a single fixme tag after its tags.
    pub fn encode_point(&self, record: &PointRecord) -> Result<String, EncodeError> {
        let latitude = required(record.latitude.as_deref(), ElementKind::Node, "lat")?;
        let longitude = required(record.longitude.as_deref(), ElementKind::Node, "lon")?;
        let owner_id = required(record.owner_id.as_deref(), ElementKind::Node, "uid")?;
        let owner_name = required(record.owner_name.as_deref(), ElementKind::Node, "user")?;

        let id = self.ids.resolve(record.identifier);
        let timestamp = self.clock.timestamp();
        let draft = NodeDraft {
            version: record.version,
            modified: record.modified,
            timestamp: &timestamp,
            latitude,
            longitude,
            owner_id,
            owner_name,
            tags: record.tags.as_ref(),
        };
        Ok(self.render_node(id, &draft))
    }

    pub(super) fn render_node(&self, id: i64, draft: &NodeDraft<'_>) -> String {
        let mut attrs = Attributes::default();
        if draft.modified {
            attrs.push("action", "modify");
        }
        attrs.push("id", id.to_string());
        attrs.push("version", next_version(draft.version));
        attrs.push("timestamp", draft.timestamp);
        attrs.push("lat", draft.latitude);
        attrs.push("lon", draft.longitude);
        attrs.push("uid", draft.owner_id);
        attrs.push("user", draft.owner_name);

        let mut osm = format!("  <node {}", attrs.render(self.escaping));
        match draft.tags {
            None => osm.push_str("/>"),
            Some(tags) => {
                osm.push('>');
                for (key, value) in tags {
                    if attrs.contains(key) {
                        continue;
                    }
                    osm.push_str("\n    ");
                    osm.push_str(&tag_element(key, value, self.escaping));
                }
                if draft.modified {
                    osm.push_str("\n    ");
                    osm.push_str(FIXME_TAG);
                }
                osm.push_str("\n  </node>");
            }
        }
        debug!("encoded node {id}");
        osm
    }
}
