//! Concrete dashboard views
//!
//! Each module defines one record type, its field enum and the
//! per-view configuration (searchable, filterable and sortable fields,
//! bulk actions, badge palettes and rank tables).

pub mod macros;

pub mod discount;
pub mod fraud_alert;
pub mod order;
pub mod product;
pub mod thread;

pub use discount::{Discount, DiscountDraft, DiscountField, DiscountKind};
pub use fraud_alert::{AlertSubject, FraudAlert, FraudAlertDraft, FraudAlertField};
pub use order::{Order, OrderDraft, OrderField};
pub use product::{Product, ProductDraft, ProductField};
pub use thread::{Engagement, Thread, ThreadAuthor, ThreadDraft, ThreadField};
