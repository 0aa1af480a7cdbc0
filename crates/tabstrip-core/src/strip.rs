//! Group strip
//!
//! Owns the groups of a vertical tab strip together with one header cell
//! per group. Rows are laid out top to bottom:
//! ```text
//! ▾ Work          <- header
//!     tab a       <- member rows, only while expanded
//!     tab c
//! ▸ Play    (4)   <- collapsed header, members hidden
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tabstrip_groups::TabGroup;
use tabstrip_header::{DrawContext, GroupHeaderCell, Point, Rect, SharedGroup};

use crate::config::StripConfig;
use crate::error::StripError;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    Header { group_id: String },
    Tab { group_id: String, tab_id: String },
}

/// A laid-out row of the strip
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub kind: RowKind,
    pub frame: Rect,
}

/// Result of a click that landed on a disclosure triangle.
/// The strip must be redrawn afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    pub group_id: String,
    /// Collapse state after the toggle
    pub collapsed: bool,
}

struct Entry {
    group: SharedGroup,
    cell: GroupHeaderCell,
}

pub struct GroupStrip {
    config: StripConfig,
    /// Groups in display order
    entries: Vec<Entry>,
}

impl GroupStrip {
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a group and create its header cell
    pub fn add_group(&mut self, group: TabGroup) -> Result<SharedGroup> {
        if self.position(group.identifier()).is_some() {
            return Err(StripError::DuplicateGroup(group.identifier().to_string()));
        }

        tracing::info!(
            group_id = %group.identifier(),
            title = %group.title(),
            tab_count = group.tab_count(),
            "Added group to strip"
        );

        let group = Rc::new(RefCell::new(group));
        let cell = GroupHeaderCell::with_layout(
            &group,
            self.config.header_layout,
            self.config.header_style,
        );
        self.entries.push(Entry {
            group: Rc::clone(&group),
            cell,
        });
        Ok(group)
    }

    /// Rebuild a group from its snapshot and append it
    pub fn add_group_from_snapshot(&mut self, snapshot: &Value) -> Result<SharedGroup> {
        let group = TabGroup::from_snapshot_value(snapshot)?;
        self.add_group(group)
    }

    /// Remove a group and discard its header cell.
    ///
    /// Member tabs are untouched; the returned group lists them so the
    /// caller can reassign or close them.
    pub fn remove_group(&mut self, group_id: &str) -> Result<TabGroup> {
        let index = self
            .position(group_id)
            .ok_or_else(|| StripError::NotFound(group_id.to_string()))?;
        let entry = self.entries.remove(index);
        let group = Rc::try_unwrap(entry.group)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| shared.borrow().clone());

        tracing::info!(
            group_id = %group_id,
            orphaned_tabs = group.tab_count(),
            "Removed group from strip"
        );

        Ok(group)
    }

    pub fn group(&self, group_id: &str) -> Option<SharedGroup> {
        self.position(group_id)
            .map(|index| Rc::clone(&self.entries[index].group))
    }

    /// Groups in display order
    pub fn groups(&self) -> impl Iterator<Item = &SharedGroup> + '_ {
        self.entries.iter().map(|entry| &entry.group)
    }

    pub fn cell(&self, group_id: &str) -> Option<&GroupHeaderCell> {
        self.position(group_id).map(|index| &self.entries[index].cell)
    }

    /// The group a tab belongs to, if any
    pub fn group_for_tab(&self, tab_id: &str) -> Option<SharedGroup> {
        self.entries
            .iter()
            .find(|entry| entry.group.borrow().contains_tab_guid(tab_id))
            .map(|entry| Rc::clone(&entry.group))
    }

    /// Lay out every row starting at `origin`, each `width` wide
    pub fn layout(&self, origin: Point, width: f64) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut y = origin.y;

        for entry in &self.entries {
            let group = entry.group.borrow();
            rows.push(Row {
                kind: RowKind::Header {
                    group_id: group.identifier().to_string(),
                },
                frame: Rect::new(origin.x, y, width, self.config.header_height),
            });
            y += self.config.header_height;

            if group.is_collapsed() {
                continue;
            }
            for tab_id in group.tab_guids() {
                rows.push(Row {
                    kind: RowKind::Tab {
                        group_id: group.identifier().to_string(),
                        tab_id: tab_id.clone(),
                    },
                    frame: Rect::new(origin.x, y, width, self.config.row_height),
                });
                y += self.config.row_height;
            }
        }

        rows
    }

    /// Lay out the strip and draw every group header.
    ///
    /// Returns the rows so the host can draw the member tabs itself.
    pub fn draw(&mut self, origin: Point, width: f64, ctx: &mut dyn DrawContext) -> Result<Vec<Row>> {
        let rows = self.layout(origin, width);
        let header_frames: Vec<Rect> = rows
            .iter()
            .filter_map(|row| match row.kind {
                RowKind::Header { .. } => Some(row.frame),
                RowKind::Tab { .. } => None,
            })
            .collect();

        for (entry, frame) in self.entries.iter_mut().zip(header_frames) {
            entry.cell.draw(frame, ctx)?;
        }

        Ok(rows)
    }

    /// Route a click to the header whose disclosure triangle contains
    /// `point`, toggling that group. Uses the frames of the last draw.
    pub fn click(&mut self, point: Point) -> Option<ClickOutcome> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.cell.disclosure_contains(point))?;

        let mut group = entry.group.borrow_mut();
        let collapsed = group.toggle_collapsed();

        Some(ClickOutcome {
            group_id: group.identifier().to_string(),
            collapsed,
        })
    }

    /// Snapshot of every group, in display order
    pub fn arrangement(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|entry| Value::Object(entry.group.borrow().to_snapshot()))
                .collect(),
        )
    }

    /// Rebuild a strip from [`GroupStrip::arrangement`] output.
    ///
    /// Snapshots that cannot be read and repeated group identifiers are
    /// skipped with a warning.
    pub fn restore(config: StripConfig, arrangement: &Value) -> Result<Self> {
        let snapshots = arrangement.as_array().ok_or_else(|| {
            StripError::InvalidArrangement("expected an array of group snapshots".to_string())
        })?;

        let mut strip = Self::new(config);
        for (index, snapshot) in snapshots.iter().enumerate() {
            if let Err(e) = strip.add_group_from_snapshot(snapshot) {
                tracing::warn!(index, error = %e, "Skipping group snapshot");
            }
        }

        tracing::info!(
            groups = strip.len(),
            skipped = snapshots.len() - strip.len(),
            "Restored group arrangement"
        );

        Ok(strip)
    }

    fn position(&self, group_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.group.borrow().identifier() == group_id)
    }
}

impl Default for GroupStrip {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}
