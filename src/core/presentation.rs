//! Row and table models handed to the rendering layer

use crate::core::field::{FieldKey, FieldValue};
use crate::core::query::PaginationMeta;
use crate::core::record::Record;
use crate::core::view::ListView;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Badge colors understood by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    #[default]
    Gray,
    Red,
    Blue,
    Orange,
    Purple,
}

/// Static label -> color lookup for one enumerated field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgePalette {
    colors: HashMap<String, BadgeColor>,
}

impl BadgePalette {
    pub fn from_pairs(pairs: &[(&str, BadgeColor)]) -> Self {
        Self {
            colors: pairs
                .iter()
                .map(|(label, color)| (label.to_string(), *color))
                .collect(),
        }
    }

    /// Color for a label; unknown labels render gray
    pub fn color(&self, label: &str) -> BadgeColor {
        self.colors.get(label).copied().unwrap_or_default()
    }
}

/// A colored badge rendered for an enumerated field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub field: &'static str,
    pub label: String,
    pub color: BadgeColor,
}

/// One named cell of a row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub field: &'static str,
    pub value: FieldValue,
}

/// Row affordances; they only toggle local state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Edit,
    Save,
    Cancel,
    More,
}

/// Everything needed to render one row or card
#[derive(Debug, Clone, Serialize)]
pub struct RowModel {
    pub id: String,
    pub selected: bool,
    pub editing: bool,
    pub cells: Vec<Cell>,
    pub badges: Vec<Badge>,
    pub actions: Vec<RowAction>,
}

/// Banner state of a view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewStatus {
    #[default]
    Ready,
    /// No row passes the current filters (or nothing was loaded)
    Empty,
    /// The record provider failed; the view stays usable with an empty store
    Error { message: String },
}

/// The fully derived table for one render pass
#[derive(Debug, Clone, Serialize)]
pub struct TableModel {
    pub resource: &'static str,
    pub rows: Vec<RowModel>,
    pub total_records: usize,
    pub visible_records: usize,
    pub all_selected: bool,
    pub selected_count: usize,
    pub bulk_actions_visible: bool,
    pub bulk_actions: Vec<&'static str>,
    pub sort: String,
    pub status: ViewStatus,
    pub pagination: PaginationMeta,
}

/// Build the row model for one record
pub fn render_row<R: Record>(view: &ListView<R>, record: &R) -> RowModel {
    let settings = view.settings();
    let editing = view.editing() == Some(record.id());

    let cells = R::display_fields()
        .iter()
        .map(|field| Cell {
            field: field.name(),
            value: record.value(*field),
        })
        .collect();

    let badges = R::badge_fields()
        .iter()
        .filter_map(|field| {
            let label = record.value(*field).as_text()?;
            let color = match settings.badges.get(field.name()) {
                Some(palette) => palette.color(&label),
                None => R::palette(*field).unwrap_or_default().color(&label),
            };
            Some(Badge {
                field: field.name(),
                label,
                color,
            })
        })
        .collect();

    let actions = if editing {
        vec![RowAction::Save, RowAction::Cancel]
    } else {
        vec![RowAction::Edit, RowAction::More]
    };

    RowModel {
        id: record.id().to_string(),
        selected: view.selection().contains(record.id()),
        editing,
        cells,
        badges,
        actions,
    }
}

/// Render the current page of a view
///
/// The `status` argument carries load failures; a ready view with no
/// visible rows is reported as [`ViewStatus::Empty`].
pub fn render_table<R: Record>(view: &ListView<R>, status: ViewStatus) -> TableModel {
    let visible_records = view.visible().len();
    let page = view.page();

    let rows: Vec<RowModel> = page
        .data
        .iter()
        .map(|record| render_row(view, *record))
        .collect();

    let status = match status {
        ViewStatus::Ready if visible_records == 0 => ViewStatus::Empty,
        other => other,
    };

    TableModel {
        resource: R::resource_name(),
        rows,
        total_records: view.records().len(),
        visible_records,
        all_selected: view.is_all_selected(),
        selected_count: view.selection().len(),
        bulk_actions_visible: view.selection().has_bulk_actions(),
        bulk_actions: R::bulk_actions().to_vec(),
        sort: view.sort().to_expr(),
        status,
        pagination: page.pagination,
    }
}
