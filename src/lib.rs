//! # Admin Views
//!
//! A reusable list-view core for admin dashboards: search, dropdown
//! filters, sortable columns, row selection, bulk actions and pagination
//! over an in-memory record store.
//!
//! ## Features
//!
//! - **One Generic Engine**: every view (products, orders, discounts, fraud
//!   alerts, forum threads) is a `Record` implementation, not a copy of the logic
//! - **Typed Fields**: closed field enums generated by `record_fields!`
//! - **Rank Tables**: enumerated labels (severity, fulfilment stage) sort by rank
//! - **Configuration-Based**: page size, select-all scope, palettes and ranks via YAML
//! - **Async Collaborators**: record providers and action services behind traits
//! - **REST Exposure**: list, create and bulk-action routes per view
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use admin_views::prelude::*;
//!
//! let mut view = ListView::new(discounts, ViewSettings::default());
//! view.set_search("spring");
//! view.set_filter_by_name("status", "Active")?;
//! view.set_sort_by_name("amount:desc")?;
//! view.toggle_all(true);
//!
//! let table = render_table(&view, ViewStatus::Ready);
//! assert!(table.bulk_actions_visible);
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        controller::{Notification, NotificationLevel, ViewController},
        error::{ActionError, ConfigError, LoadError, ValidationError, ViewError},
        field::{FieldKey, FieldValue},
        filter::{FilterState, FilterValue},
        presentation::{
            Badge, BadgeColor, BadgePalette, Cell, RowAction, RowModel, TableModel, ViewStatus,
            render_row, render_table,
        },
        query::{ListQuery, Page, PageRequest, PaginatedResponse, PaginationMeta},
        record::Record,
        selection::{SelectAllScope, Selection},
        service::{ActionOutcome, ActionService, RecordProvider},
        sort::{RankTable, SortDirection, SortState},
        view::ListView,
    };

    // === Macros ===
    pub use crate::record_fields;

    // === Views ===
    pub use crate::views::{
        Discount, DiscountField, DiscountKind, FraudAlert, FraudAlertField, Order, OrderField,
        Product, ProductField, Thread, ThreadField,
    };

    // === Storage ===
    pub use crate::storage::InMemoryRecordStore;

    // === Config ===
    pub use crate::config::{ViewConfig, ViewSettings, ViewsConfig};

    // === Server ===
    pub use crate::server::{ServerBuilder, ViewDescriptor, ViewRegistry};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
