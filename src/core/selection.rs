//! Selection set for bulk actions

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Which rows the "select all" checkbox acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectAllScope {
    /// Only the rows passing the current filters
    #[default]
    Visible,
    /// The whole unfiltered source list, ignoring active filters
    Source,
}

/// Set of record identifiers checked for bulk action
///
/// Identifiers keep the order in which they were selected, which is also
/// the order they are submitted to the action service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: IndexSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it otherwise
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle_one(&mut self, id: &str) -> bool {
        if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Checked: the selection becomes exactly `ids`. Unchecked: it becomes empty.
    pub fn toggle_all<'a>(&mut self, checked: bool, ids: impl IntoIterator<Item = &'a str>) {
        self.ids.clear();
        if checked {
            self.ids.extend(ids.into_iter().map(str::to_string));
        }
    }

    /// True iff the selection holds exactly as many ids as `ids`, all of them selected
    ///
    /// An empty `ids` list is never "all selected".
    pub fn is_all_selected<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut count = 0;
        for id in ids {
            if !self.ids.contains(id) {
                return false;
            }
            count += 1;
        }
        count > 0 && count == self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bulk-action buttons are shown iff something is selected
    pub fn has_bulk_actions(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Drop ids that are no longer part of the source list
    pub fn retain_known<'a>(&mut self, known: impl IntoIterator<Item = &'a str>) {
        let known: std::collections::HashSet<&str> = known.into_iter().collect();
        self.ids.retain(|id| known.contains(id.as_str()));
    }

    /// Deselect the given ids
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.ids.shift_remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
