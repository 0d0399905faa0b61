//! The reusable list view: record store plus filter, sort, selection and page state

use crate::config::ViewSettings;
use crate::core::error::ValidationError;
use crate::core::field::FieldKey;
use crate::core::filter::{FilterState, FilterValue};
use crate::core::query::{PaginatedResponse, paginate};
use crate::core::record::Record;
use crate::core::selection::{SelectAllScope, Selection};
use crate::core::sort::{SortDirection, SortState};

/// Interactive state of one view, owned by the view itself
#[derive(Debug, Clone)]
pub struct ViewState<F: FieldKey> {
    pub filters: FilterState<F>,
    pub sort: SortState<F>,
    pub selection: Selection,
    pub page: usize,
    pub page_size: usize,
}

/// A list view over an in-memory record store
///
/// Every read (`visible`, `page`) recomputes filter then sort from the
/// source list; nothing is cached, so repeated calls with unchanged state
/// return the same rows.
///
/// # Example
///
/// ```rust,ignore
/// let mut view = ListView::new(discounts, ViewSettings::default());
/// view.set_filter_by_name("status", "Active")?;
/// view.set_sort_by_name("amount:desc")?;
/// for row in view.visible() {
///     println!("{} {}", row.code, row.amount);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    records: Vec<R>,
    state: ViewState<R::Field>,
    settings: ViewSettings,
    editing: Option<String>,
}

impl<R: Record> ListView<R> {
    pub fn new(records: Vec<R>, settings: ViewSettings) -> Self {
        let state = ViewState {
            filters: FilterState::new(),
            sort: R::default_sort(),
            selection: Selection::new(),
            page: 1,
            page_size: settings.page_size,
        };

        Self {
            records,
            state,
            settings,
            editing: None,
        }
    }

    // === Store ===

    /// The unfiltered source list
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Swap the record store, pruning selection and edit state of vanished ids
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.state
            .selection
            .retain_known(self.records.iter().map(|r| r.id()));
        let editing_gone = self
            .editing
            .as_deref()
            .is_some_and(|id| self.get(id).is_none());
        if editing_gone {
            self.editing = None;
        }
        self.state.page = 1;
        tracing::debug!(
            resource = R::resource_name(),
            records = self.records.len(),
            "record store replaced"
        );
    }

    /// Drop records from the store, along with their selection and edit state
    pub fn remove_records(&mut self, ids: &[String]) {
        let before = self.records.len();
        self.records.retain(|r| !ids.iter().any(|id| id == r.id()));
        self.state
            .selection
            .remove_all(ids.iter().map(String::as_str));
        if self
            .editing
            .as_ref()
            .is_some_and(|editing| ids.contains(editing))
        {
            self.editing = None;
        }
        tracing::debug!(
            resource = R::resource_name(),
            removed = before - self.records.len(),
            "records removed"
        );
    }

    /// Append a locally created record
    pub fn insert_record(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn state(&self) -> &ViewState<R::Field> {
        &self.state
    }

    // === Filters ===

    pub fn filters(&self) -> &FilterState<R::Field> {
        &self.state.filters
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.filters.set_search(query);
        self.state.page = 1;
    }

    /// Set a dropdown filter from its raw value
    ///
    /// The configured sentinel (default `"all"`) removes the constraint.
    pub fn set_filter(&mut self, field: R::Field, raw: &str) -> Result<(), ValidationError> {
        if !R::filter_fields().contains(&field) {
            return Err(ValidationError::UnknownFilter {
                resource: R::resource_name().to_string(),
                field: field.name().to_string(),
            });
        }

        let value = FilterValue::parse(raw, &self.settings.all_sentinel);
        self.state.filters.set(field, value);
        self.state.page = 1;
        Ok(())
    }

    pub fn set_filter_by_name(&mut self, name: &str, raw: &str) -> Result<(), ValidationError> {
        let field = R::Field::from_name(name).ok_or_else(|| ValidationError::UnknownFilter {
            resource: R::resource_name().to_string(),
            field: name.to_string(),
        })?;
        self.set_filter(field, raw)
    }

    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.page = 1;
    }

    // === Sort ===

    pub fn sort(&self) -> &SortState<R::Field> {
        &self.state.sort
    }

    pub fn set_sort(&mut self, key: R::Field, direction: SortDirection) -> Result<(), ValidationError> {
        if !R::sort_fields().contains(&key) {
            return Err(ValidationError::UnknownSortKey {
                resource: R::resource_name().to_string(),
                key: key.name().to_string(),
                allowed: R::sort_fields()
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect(),
            });
        }
        self.state.sort = SortState::new(key, direction);
        Ok(())
    }

    pub fn set_sort_by_name(&mut self, expr: &str) -> Result<(), ValidationError> {
        self.state.sort = SortState::parse::<R>(expr)?;
        Ok(())
    }

    /// Header click on a sortable column
    pub fn toggle_sort(&mut self, key: R::Field) -> Result<(), ValidationError> {
        let mut next = self.state.sort;
        next.toggle(key);
        self.set_sort(next.key, next.direction)
    }

    // === Derived rows ===

    /// Filtered then sorted rows
    pub fn visible(&self) -> Vec<&R> {
        let mut rows = self.state.filters.apply(&self.records);
        let ranks = self.settings.ranks.get(self.state.sort.key.name());
        self.state.sort.apply(&mut rows, ranks);
        rows
    }

    /// The current page of visible rows
    ///
    /// A page past the end is clamped to the last page.
    pub fn page(&self) -> PaginatedResponse<&R> {
        let rows = self.visible();
        let last = rows.len().div_ceil(self.state.page_size.max(1)).max(1);
        paginate(rows, self.state.page.min(last), self.state.page_size)
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = page_size.clamp(1, crate::core::query::MAX_PAGE_SIZE);
        self.state.page = 1;
    }

    // === Selection ===

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.state.selection
    }

    /// Toggle one row's checkbox; the id must exist in the source list
    pub fn toggle_one(&mut self, id: &str) -> Result<bool, ValidationError> {
        if self.get(id).is_none() {
            return Err(ValidationError::UnknownRecord {
                resource: R::resource_name().to_string(),
                id: id.to_string(),
            });
        }
        let selected = self.state.selection.toggle_one(id);
        tracing::debug!(resource = R::resource_name(), id, selected, "row selection toggled");
        Ok(selected)
    }

    /// The "select all" checkbox, acting on the configured scope
    pub fn toggle_all(&mut self, checked: bool) {
        let ids: Vec<String> = self.scope_ids().into_iter().map(str::to_string).collect();
        self.state
            .selection
            .toggle_all(checked, ids.iter().map(String::as_str));
    }

    /// State of the "select all" checkbox for the configured scope
    pub fn is_all_selected(&self) -> bool {
        self.state.selection.is_all_selected(self.scope_ids())
    }

    fn scope_ids(&self) -> Vec<&str> {
        match self.settings.select_all_scope {
            SelectAllScope::Visible => self.visible().into_iter().map(|r| r.id()).collect(),
            SelectAllScope::Source => self.records.iter().map(|r| r.id()).collect(),
        }
    }

    // === Edit mode ===

    /// Id of the record currently in edit mode
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Enter edit mode for a record, leaving edit mode on any other
    pub fn begin_edit(&mut self, id: &str) -> Result<(), ValidationError> {
        if self.get(id).is_none() {
            return Err(ValidationError::UnknownRecord {
                resource: R::resource_name().to_string(),
                id: id.to_string(),
            });
        }
        self.editing = Some(id.to_string());
        Ok(())
    }

    /// Write edited fields back into the local store and leave edit mode
    ///
    /// Only the in-memory copy changes; nothing is persisted.
    pub fn save_edit(&mut self, id: &str, edit: impl FnOnce(&mut R)) -> Result<(), ValidationError> {
        if self.editing.as_deref() != Some(id) {
            return Err(ValidationError::UnknownRecord {
                resource: R::resource_name().to_string(),
                id: id.to_string(),
            });
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ValidationError::UnknownRecord {
                resource: R::resource_name().to_string(),
                id: id.to_string(),
            })?;
        edit(record);
        self.editing = None;
        tracing::debug!(resource = R::resource_name(), id, "local edit saved");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::product::{Product, ProductField};

    fn products() -> Vec<Product> {
        vec![
            Product::sample("p1", "Alpha", "Electronics", "Active", 10.0),
            Product::sample("p2", "Beta", "Books", "Draft", 5.0),
            Product::sample("p3", "Gamma", "Books", "Active", 7.5),
        ]
    }

    fn ids(rows: &[&Product]) -> Vec<String> {
        rows.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_filter_then_sort() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_filter(ProductField::Status, "Active").unwrap();
        view.set_sort(ProductField::Price, SortDirection::Desc).unwrap();
        assert_eq!(ids(&view.visible()), vec!["p1", "p3"]);
    }

    #[test]
    fn test_sentinel_clears_filter() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_filter(ProductField::Status, "Draft").unwrap();
        assert_eq!(view.visible().len(), 1);
        view.set_filter(ProductField::Status, "all").unwrap();
        assert_eq!(view.visible().len(), 3);
    }

    #[test]
    fn test_non_filterable_field_rejected() {
        let mut view = ListView::new(products(), ViewSettings::default());
        let err = view.set_filter(ProductField::Price, "10").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownFilter { .. }));
    }

    #[test]
    fn test_toggle_all_visible_scope() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_filter(ProductField::Category, "Books").unwrap();
        view.toggle_all(true);
        assert_eq!(view.selection().len(), 2);
        assert!(view.is_all_selected());
    }

    #[test]
    fn test_toggle_all_source_scope() {
        let settings = ViewSettings {
            select_all_scope: SelectAllScope::Source,
            ..ViewSettings::default()
        };
        let mut view = ListView::new(products(), settings);
        view.set_filter(ProductField::Category, "Books").unwrap();
        view.toggle_all(true);
        assert_eq!(view.selection().len(), 3);
        assert!(view.is_all_selected());
    }

    #[test]
    fn test_toggle_unknown_id_rejected() {
        let mut view = ListView::new(products(), ViewSettings::default());
        assert!(view.toggle_one("nope").is_err());
        assert!(view.selection().is_empty());
    }

    #[test]
    fn test_replace_records_prunes_selection() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.toggle_one("p1").unwrap();
        view.toggle_one("p2").unwrap();
        view.replace_records(products().into_iter().skip(1).collect());
        assert_eq!(view.selection().ids(), vec!["p2".to_string()]);
    }

    #[test]
    fn test_remove_records_prunes_state() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.toggle_one("p1").unwrap();
        view.toggle_one("p3").unwrap();
        view.begin_edit("p1").unwrap();

        view.remove_records(&["p1".to_string(), "p9".to_string()]);
        assert!(view.get("p1").is_none());
        assert_eq!(view.records().len(), 2);
        assert_eq!(view.selection().ids(), vec!["p3".to_string()]);
        assert_eq!(view.editing(), None);
        assert!(view.toggle_one("p1").is_err());
    }

    #[test]
    fn test_edit_mode_is_exclusive() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.begin_edit("p1").unwrap();
        view.begin_edit("p2").unwrap();
        assert_eq!(view.editing(), Some("p2"));
        assert!(view.save_edit("p1", |_| {}).is_err());

        view.save_edit("p2", |p| p.price = 99.0).unwrap();
        assert_eq!(view.editing(), None);
        assert_eq!(view.get("p2").unwrap().price, 99.0);
    }

    #[test]
    fn test_pagination_over_visible() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_page_size(2);
        view.set_page(2);
        let page = view.page();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.total, 3);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_page_past_end_clamps_to_last() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_page_size(2);
        view.set_page(9);
        let page = view.page();
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.data.len(), 1);
        assert!(!page.pagination.has_next);

        view.set_search("no such product");
        view.set_page(4);
        let page = view.page();
        assert_eq!(page.pagination.page, 1);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = ListView::new(products(), ViewSettings::default());
        view.set_page_size(1);
        view.set_page(3);
        view.set_search("a");
        assert_eq!(view.state().page, 1);
    }
}
