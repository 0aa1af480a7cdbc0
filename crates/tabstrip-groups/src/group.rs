//! Tab group data structure
//!
//! A group owns an ordered, duplicate-free list of tab identifiers plus the
//! display state of its header row. The identifier is fixed at construction;
//! everything else changes through explicit setters.

use std::collections::HashSet;

use uuid::Uuid;

use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    /// Stable key, never reused across groups
    identifier: String,
    /// Header title
    title: String,
    /// Whether member rows are hidden behind the header
    collapsed: bool,
    /// Display color, independent of collapse state
    color: Color,
    /// Member tab identifiers in display order
    tab_guids: Vec<String>,
    /// Lookup mirror of `tab_guids`
    members: HashSet<String>,
}

/// A partial update to a group's mutable properties.
///
/// Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPatch {
    pub title: Option<String>,
    pub collapsed: Option<bool>,
    pub color: Option<Color>,
}

impl TabGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_parts(
            Uuid::new_v4().to_string(),
            title.into(),
            false,
            Color::default(),
            Vec::new(),
        )
    }

    /// Create a group pre-populated with tabs.
    ///
    /// Duplicates keep their first position.
    pub fn with_tab_guids<I, S>(title: impl Into<String>, guids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(title);
        for guid in guids {
            group.add_tab_guid(guid);
        }
        group
    }

    pub(crate) fn from_parts(
        identifier: String,
        title: String,
        collapsed: bool,
        color: Color,
        guids: Vec<String>,
    ) -> Self {
        let mut group = Self {
            identifier,
            title,
            collapsed,
            color,
            tab_guids: Vec::with_capacity(guids.len()),
            members: HashSet::with_capacity(guids.len()),
        };
        for guid in guids {
            group.push_unique(guid);
        }
        group
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Member tab identifiers in display order
    pub fn tab_guids(&self) -> &[String] {
        &self.tab_guids
    }

    pub fn tab_count(&self) -> usize {
        self.tab_guids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab_guids.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        if self.collapsed != collapsed {
            tracing::debug!(group_id = %self.identifier, collapsed, "Group collapse changed");
        }
        self.collapsed = collapsed;
    }

    /// Flip the collapse state and return the new value
    pub fn toggle_collapsed(&mut self) -> bool {
        self.set_collapsed(!self.collapsed);
        self.collapsed
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Apply every property present in `patch`
    pub fn update(&mut self, patch: GroupPatch) {
        if let Some(title) = patch.title {
            self.set_title(title);
        }
        if let Some(collapsed) = patch.collapsed {
            self.set_collapsed(collapsed);
        }
        if let Some(color) = patch.color {
            self.set_color(color);
        }
    }

    /// Append a tab to the end of the group.
    ///
    /// Returns false (and changes nothing) if the tab is already a member.
    pub fn add_tab_guid(&mut self, guid: impl Into<String>) -> bool {
        let guid = guid.into();
        if self.members.contains(&guid) {
            return false;
        }
        tracing::debug!(group_id = %self.identifier, tab_id = %guid, "Added tab to group");
        self.push_unique(guid);
        true
    }

    /// Remove a tab; later members shift down one position.
    ///
    /// Returns false if the tab was not a member.
    pub fn remove_tab_guid(&mut self, guid: &str) -> bool {
        if !self.members.remove(guid) {
            return false;
        }
        self.tab_guids.retain(|id| id != guid);
        tracing::debug!(group_id = %self.identifier, tab_id = %guid, "Removed tab from group");
        true
    }

    pub fn contains_tab_guid(&self, guid: &str) -> bool {
        self.members.contains(guid)
    }

    /// Position of a tab in display order, `None` if not a member
    pub fn index_of_tab_guid(&self, guid: &str) -> Option<usize> {
        if !self.members.contains(guid) {
            return None;
        }
        self.tab_guids.iter().position(|id| id == guid)
    }

    /// Move a member to a new position, clamped to the end of the group
    pub fn move_tab_guid(&mut self, guid: &str, new_index: usize) -> bool {
        let Some(current_index) = self.index_of_tab_guid(guid) else {
            return false;
        };
        let guid = self.tab_guids.remove(current_index);
        let insert_index = new_index.min(self.tab_guids.len());
        self.tab_guids.insert(insert_index, guid);
        true
    }

    fn push_unique(&mut self, guid: String) {
        if self.members.insert(guid.clone()) {
            self.tab_guids.push(guid);
        }
    }
}
