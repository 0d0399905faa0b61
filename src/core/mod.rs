//! Core module containing the generic list view engine

pub mod controller;
pub mod error;
pub mod field;
pub mod filter;
pub mod presentation;
pub mod query;
pub mod record;
pub mod selection;
pub mod service;
pub mod sort;
pub mod view;

pub use controller::{Notification, NotificationLevel, ViewController};
pub use error::{ActionError, ConfigError, LoadError, ValidationError, ViewError};
pub use field::{FieldKey, FieldValue};
pub use filter::{FilterState, FilterValue};
pub use presentation::{BadgeColor, BadgePalette, RowModel, TableModel, ViewStatus};
pub use query::{ListQuery, Page, PageRequest, PaginatedResponse, PaginationMeta};
pub use record::Record;
pub use selection::{SelectAllScope, Selection};
pub use service::{ActionOutcome, ActionService, RecordProvider};
pub use sort::{RankTable, SortDirection, SortState};
pub use view::{ListView, ViewState};
