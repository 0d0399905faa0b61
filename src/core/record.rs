//! Record trait defining the core abstraction for all list view rows

use crate::core::field::{FieldKey, FieldValue};
use crate::core::presentation::BadgePalette;
use crate::core::sort::{RankTable, SortState};
use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Base trait for every record shown in a list view.
///
/// A record is one immutable domain entity (thread, product, order,
/// discount, fraud alert...). It exposes:
/// - id: unique string identifier, used for selection
/// - value: projection of any field to a [`FieldValue`], including nested
///   or derived fields such as `engagement.replies`
/// - the per-view field lists for search, filters, sorting and display
///
/// The generic [`ListView`](crate::core::view::ListView) is written once
/// against this trait instead of being re-implemented per view.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Closed set of fields for this record type
    type Field: FieldKey;

    /// Payload collected by the "create" form
    type Draft: Validate + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// The resource name used in URLs and messages (e.g. "discounts")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Project the record to the value of one field
    fn value(&self, field: Self::Field) -> FieldValue;

    /// Fields matched by the free-text search box
    fn search_fields() -> &'static [Self::Field];

    /// Fields offered as dropdown filters
    fn filter_fields() -> &'static [Self::Field];

    /// Fields the table can be sorted by
    fn sort_fields() -> &'static [Self::Field];

    /// Columns rendered for each row
    fn display_fields() -> &'static [Self::Field];

    /// Sort applied when the view is first created
    fn default_sort() -> SortState<Self::Field>;

    /// Bulk actions accepted by this view
    fn bulk_actions() -> &'static [&'static str] {
        &[]
    }

    /// Enumerated columns rendered as colored badges
    fn badge_fields() -> &'static [Self::Field] {
        &[]
    }

    /// Explicit ordering for enumerated fields (e.g. severity)
    fn rank_table(_field: Self::Field) -> Option<RankTable> {
        None
    }

    /// Static label to color lookup for a badge field
    fn palette(_field: Self::Field) -> Option<BadgePalette> {
        None
    }

    /// Field matched by the provider's optional status filter
    fn status_field() -> Option<Self::Field> {
        None
    }

    /// Build a record from a validated draft after a successful create
    fn from_draft(id: String, draft: &Self::Draft) -> Self;
}
