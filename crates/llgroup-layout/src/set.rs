//! A collection of group layouts, keyed by group name.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::description::{RawGroup, parse_groups};
use crate::error::LayoutError;
use crate::layout::GroupLayout;

/// Layouts in declaration order.
#[derive(Debug, Clone, Default)]
pub struct GroupSet {
    groups: IndexMap<String, GroupLayout>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON array of group descriptions.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Self::from_raw(parse_groups(json)?)
    }

    /// Validate descriptions, stopping at the first invalid group.
    pub fn from_raw(raw: impl IntoIterator<Item = RawGroup>) -> Result<Self, LayoutError> {
        let mut set = Self::new();
        for group in raw {
            set.insert(GroupLayout::from_raw(group)?)?;
        }
        Ok(set)
    }

    /// Add a layout. Group names are unique.
    pub fn insert(&mut self, layout: GroupLayout) -> Result<(), LayoutError> {
        match self.groups.entry(layout.name().to_string()) {
            Entry::Occupied(entry) => Err(LayoutError::DuplicateGroup {
                group: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(layout);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&GroupLayout> {
        self.groups.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupLayout> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
