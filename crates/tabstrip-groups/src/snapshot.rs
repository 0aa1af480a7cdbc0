//! Snapshot (de)serialization
//!
//! A snapshot is a flat JSON object:
//!
//! ```text
//! {
//!   "identifier": "3f2b…",
//!   "title": "Work",
//!   "collapsed": false,
//!   "color": [0.5, 0.5, 0.5, 1.0],
//!   "tabGUIDs": ["a", "c"]
//! }
//! ```
//!
//! `identifier` and `title` are required. The remaining fields fall back to
//! their defaults when missing or malformed, and unknown keys are ignored.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::color::Color;
use crate::error::GroupError;
use crate::group::TabGroup;
use crate::Result;

pub type Snapshot = Map<String, Value>;

const KEY_IDENTIFIER: &str = "identifier";
const KEY_TITLE: &str = "title";
const KEY_COLLAPSED: &str = "collapsed";
const KEY_COLOR: &str = "color";
const KEY_TAB_GUIDS: &str = "tabGUIDs";

/// Serialized form of a group. Reading goes through the lenient
/// [`TabGroup::from_snapshot`] instead.
#[derive(Serialize)]
struct SnapshotRecord<'a> {
    identifier: &'a str,
    title: &'a str,
    collapsed: bool,
    color: Color,
    #[serde(rename = "tabGUIDs")]
    tab_guids: &'a [String],
}

impl<'a> From<&'a TabGroup> for SnapshotRecord<'a> {
    fn from(group: &'a TabGroup) -> Self {
        Self {
            identifier: group.identifier(),
            title: group.title(),
            collapsed: group.is_collapsed(),
            color: group.color(),
            tab_guids: group.tab_guids(),
        }
    }
}

impl TabGroup {
    pub fn to_snapshot(&self) -> Snapshot {
        match serde_json::to_value(SnapshotRecord::from(self)) {
            Ok(Value::Object(snapshot)) => snapshot,
            other => unreachable!("group snapshot must serialize to an object, got {other:?}"),
        }
    }

    /// Rebuild a group from a snapshot, keeping its identifier
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let identifier = match snapshot.get(KEY_IDENTIFIER) {
            None => return Err(GroupError::MissingField(KEY_IDENTIFIER)),
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::String(_)) => {
                return Err(GroupError::InvalidField {
                    field: KEY_IDENTIFIER,
                    reason: "identifier cannot be empty".to_string(),
                })
            }
            Some(other) => {
                return Err(GroupError::InvalidField {
                    field: KEY_IDENTIFIER,
                    reason: format!("expected string, found {}", type_name(other)),
                })
            }
        };

        let title = match snapshot.get(KEY_TITLE) {
            None => return Err(GroupError::MissingField(KEY_TITLE)),
            Some(Value::String(title)) => title.clone(),
            Some(other) => {
                return Err(GroupError::InvalidField {
                    field: KEY_TITLE,
                    reason: format!("expected string, found {}", type_name(other)),
                })
            }
        };

        let collapsed = match snapshot.get(KEY_COLLAPSED) {
            Some(Value::Bool(collapsed)) => *collapsed,
            None => false,
            Some(other) => {
                tracing::warn!(
                    group_id = %identifier,
                    found = type_name(other),
                    "Malformed collapsed flag in snapshot, defaulting to expanded"
                );
                false
            }
        };

        let color = match snapshot.get(KEY_COLOR) {
            None => Color::default(),
            Some(value) => parse_color(value).unwrap_or_else(|| {
                tracing::warn!(group_id = %identifier, "Malformed color in snapshot, using default");
                Color::default()
            }),
        };

        let guids = match snapshot.get(KEY_TAB_GUIDS) {
            None => Vec::new(),
            Some(Value::Array(items)) => {
                let guids: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                if guids.len() != items.len() {
                    tracing::warn!(
                        group_id = %identifier,
                        skipped = items.len() - guids.len(),
                        "Skipped non-string tab identifiers in snapshot"
                    );
                }
                guids
            }
            Some(other) => {
                tracing::warn!(
                    group_id = %identifier,
                    found = type_name(other),
                    "Malformed tab list in snapshot, starting empty"
                );
                Vec::new()
            }
        };

        let listed = guids.len();
        let group = TabGroup::from_parts(identifier, title, collapsed, color, guids);
        if group.tab_count() < listed {
            tracing::warn!(
                group_id = %group.identifier(),
                dropped = listed - group.tab_count(),
                "Dropped duplicate tab identifiers from snapshot"
            );
        }

        Ok(group)
    }

    /// Like [`TabGroup::from_snapshot`], for an arbitrary JSON value
    pub fn from_snapshot_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(snapshot) => Self::from_snapshot(snapshot),
            _ => Err(GroupError::NotAnObject),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&SnapshotRecord::from(self))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_snapshot_value(&value)
    }
}

fn parse_color(value: &Value) -> Option<Color> {
    let channels = value
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()?;
    Color::from_rgba_slice(&channels)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
