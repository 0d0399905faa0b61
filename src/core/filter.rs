//! Free-text search and enumerated dropdown filters

use crate::core::field::FieldKey;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::Serialize;

/// Default sentinel meaning "no constraint" for dropdown filters
pub const DEFAULT_ALL_SENTINEL: &str = "all";

/// Selected value of one dropdown filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(untagged)]
pub enum FilterValue {
    /// Sentinel value: the filter imposes no restriction
    #[default]
    All,
    /// Exact match on the field's text value
    Exact(String),
}

impl FilterValue {
    /// Parse a raw dropdown value
    ///
    /// Only the exact sentinel maps to [`FilterValue::All`]; the comparison is
    /// case-sensitive, so a view configured with `"All"` treats `"all"` as an
    /// ordinary value.
    pub fn parse(raw: &str, sentinel: &str) -> Self {
        if raw == sentinel {
            FilterValue::All
        } else {
            FilterValue::Exact(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }
}

/// Active search query and dropdown filters of one view
///
/// All active predicates are combined with a logical AND.
#[derive(Debug, Clone)]
pub struct FilterState<F: FieldKey> {
    search: String,
    selects: IndexMap<F, FilterValue>,
}

impl<F: FieldKey> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            selects: IndexMap::new(),
        }
    }
}

impl<F: FieldKey> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Current value of a dropdown filter (`All` when never set)
    pub fn get(&self, field: F) -> &FilterValue {
        static ALL: FilterValue = FilterValue::All;
        self.selects.get(&field).unwrap_or(&ALL)
    }

    pub fn set(&mut self, field: F, value: FilterValue) {
        if value.is_all() {
            self.selects.shift_remove(&field);
        } else {
            self.selects.insert(field, value);
        }
    }

    /// Dropdown filters that currently restrict the result
    pub fn active(&self) -> impl Iterator<Item = (F, &str)> {
        self.selects.iter().filter_map(|(field, value)| match value {
            FilterValue::Exact(v) => Some((*field, v.as_str())),
            FilterValue::All => None,
        })
    }

    /// Returns true if no criterion is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.active().next().is_none()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.selects.clear();
    }

    /// Returns true if the record satisfies every active criterion
    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.matches_search(record)
            && self.active().all(|(field, expected)| {
                record
                    .value(field)
                    .as_text()
                    .is_some_and(|actual| actual == expected)
            })
    }

    fn matches_search<R: Record<Field = F>>(&self, record: &R) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        R::search_fields().iter().any(|field| {
            record
                .value(*field)
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }

    /// Apply this filter to a list of records, preserving source order
    pub fn apply<'a, R: Record<Field = F>>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
