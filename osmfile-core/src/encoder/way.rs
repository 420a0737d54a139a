//! `<way>` rendering, including the nodes split out of raw track references.
//!
//! Track exports list one coordinate field per token: latitude, longitude,
//! then altitude and accuracy. A token containing `;` closes the current
//! point; the text after the delimiter is the first field of the next one.

use log::debug;

use super::node::NodeDraft;
use super::{FeatureEncoder, next_version, required};
use crate::clock::Clock;
use crate::error::{ElementKind, EncodeError};
use crate::record::PathRecord;
use crate::xml::{Attributes, FIXME_TAG, tag_element};

const GROUP_DELIMITER: char = ';';
/// Raw track name carried by collectors; never written as a way tag.
const TRACK_KEY: &str = "track";

/// Coordinate fields collected since the last group boundary.
///
/// Fields survive a boundary: a group that only sets its latitude reuses
/// the previous longitude.
#[derive(Debug, Default)]
struct Cursor<'a> {
    slot: usize,
    latitude: Option<&'a str>,
    longitude: Option<&'a str>,
}

impl<'a> Cursor<'a> {
    fn assign(&mut self, field: &'a str) {
        match self.slot {
            0 => self.latitude = Some(field),
            1 => self.longitude = Some(field),
            // Altitude and accuracy are not carried into the output.
            _ => {}
        }
        self.slot = self.slot.saturating_add(1);
    }

    fn close_group(&mut self) -> Result<(&'a str, &'a str), EncodeError> {
        let latitude = required(self.latitude, ElementKind::Node, "lat")?;
        let longitude = required(self.longitude, ElementKind::Node, "lon")?;
        self.slot = 0;
        Ok((latitude, longitude))
    }
}

/// Split raw references into the `(lat, lon)` pairs closed by a delimiter.
///
/// Only the first `;` of a token counts, and only when something precedes
/// it. A group still open at the end of input is dropped.
fn coordinate_groups(references: &[String]) -> Result<Vec<(&str, &str)>, EncodeError> {
    let mut groups = Vec::new();
    let mut cursor = Cursor::default();
    for reference in references {
        let field = match reference.split_once(GROUP_DELIMITER) {
            Some((head, rest)) if !head.is_empty() => {
                groups.push(cursor.close_group()?);
                rest
            }
            _ => reference.as_str(),
        };
        cursor.assign(field);
    }
    if cursor.slot > 0 {
        debug!(
            "dropped trailing coordinate group with {} field(s)",
            cursor.slot
        );
    }
    Ok(groups)
}

impl<C: Clock> FeatureEncoder<C> {
    /// Encode a path as `<node>` lines for its split points followed by a
    /// `<way>` element referencing them.
    ///
    /// The way identifier is resolved from `way_identifier`, then
    /// `identifier`, then a synthetic id. Embedded points receive their own
    /// synthetic ids, the way's timestamp, attribution and action, and start
    /// from version `0`. When `modified` is set a fixme tag follows every
    /// way tag other than `track`.
    pub fn encode_path(&self, record: &PathRecord) -> Result<String, EncodeError> {
        let owner_id = required(record.owner_id.as_deref(), ElementKind::Way, "uid")?;
        let owner_name = required(record.owner_name.as_deref(), ElementKind::Way, "user")?;
        let groups = coordinate_groups(&record.references)?;

        let id = self.ids.resolve(record.way_identifier.or(record.identifier));
        let timestamp = self.clock.timestamp();
        let mut attrs = Attributes::default();
        if record.modified {
            attrs.push("action", "modify");
        }
        attrs.push("id", id.to_string());
        attrs.push("version", next_version(record.version));
        attrs.push("timestamp", timestamp.as_str());
        attrs.push("uid", owner_id);
        attrs.push("user", owner_name);

        let mut lines = Vec::with_capacity(groups.len() + 1);
        let mut members = Vec::with_capacity(groups.len());
        for (latitude, longitude) in groups {
            let node_id = self.ids.allocate();
            let draft = NodeDraft {
                version: Some(0),
                modified: record.modified,
                timestamp: &timestamp,
                latitude,
                longitude,
                owner_id,
                owner_name,
                tags: None,
            };
            lines.push(self.render_node(node_id, &draft));
            members.push(node_id);
        }

        let mut way = format!("  <way {}>", attrs.render(self.escaping));
        for member in &members {
            way.push_str(&format!("\n    <nd ref=\"{member}\"/>"));
        }
        if let Some(tags) = &record.tags {
            for (key, value) in tags {
                if key == TRACK_KEY {
                    continue;
                }
                if !attrs.contains(key) {
                    way.push_str("\n    ");
                    way.push_str(&tag_element(key, value, self.escaping));
                }
                if record.modified {
                    way.push_str("\n    ");
                    way.push_str(FIXME_TAG);
                }
            }
        }
        way.push_str("\n  </way>");
        debug!("encoded way {id} with {} member node(s)", members.len());
        lines.push(way);
        Ok(lines.join("\n"))
    }
}
