//! Orders view (revenue section)

use crate::core::field::FieldValue;
use crate::core::presentation::{BadgeColor, BadgePalette};
use crate::core::record::Record;
use crate::core::sort::{RankTable, SortState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::record_fields! {
    /// Columns of the orders table
    pub enum OrderField {
        Number => "number",
        Customer => "customer",
        Email => "email",
        Status => "status",
        PaymentStatus => "payment_status",
        Total => "total",
        Items => "items",
        PlacedAt => "placed_at",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    /// `Pending`, `Processing`, `Shipped`, `Delivered` or `Cancelled`
    pub status: String,
    /// `Paid`, `Unpaid` or `Refunded`
    pub payment_status: String,
    pub total: f64,
    pub items: u32,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub total: f64,
    #[validate(range(min = 1))]
    pub items: u32,
}

impl Record for Order {
    type Field = OrderField;
    type Draft = OrderDraft;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::Number => self.number.as_str().into(),
            OrderField::Customer => self.customer_name.as_str().into(),
            OrderField::Email => self.customer_email.as_str().into(),
            OrderField::Status => self.status.as_str().into(),
            OrderField::PaymentStatus => self.payment_status.as_str().into(),
            OrderField::Total => self.total.into(),
            OrderField::Items => self.items.into(),
            OrderField::PlacedAt => self.placed_at.into(),
        }
    }

    fn search_fields() -> &'static [OrderField] {
        &[OrderField::Number, OrderField::Customer, OrderField::Email]
    }

    fn filter_fields() -> &'static [OrderField] {
        &[OrderField::Status, OrderField::PaymentStatus]
    }

    fn sort_fields() -> &'static [OrderField] {
        &[
            OrderField::Number,
            OrderField::Customer,
            OrderField::Status,
            OrderField::Total,
            OrderField::Items,
            OrderField::PlacedAt,
        ]
    }

    fn display_fields() -> &'static [OrderField] {
        &[
            OrderField::Number,
            OrderField::Customer,
            OrderField::Total,
            OrderField::Items,
            OrderField::PlacedAt,
        ]
    }

    fn default_sort() -> SortState<OrderField> {
        SortState::desc(OrderField::PlacedAt)
    }

    fn bulk_actions() -> &'static [&'static str] {
        &["mark_shipped", "cancel", "refund"]
    }

    fn badge_fields() -> &'static [OrderField] {
        &[OrderField::Status, OrderField::PaymentStatus]
    }

    // Fulfilment order rather than alphabetical
    fn rank_table(field: OrderField) -> Option<RankTable> {
        match field {
            OrderField::Status => Some(RankTable::from_pairs(&[
                ("Pending", 1),
                ("Processing", 2),
                ("Shipped", 3),
                ("Delivered", 4),
                ("Cancelled", 5),
            ])),
            _ => None,
        }
    }

    fn palette(field: OrderField) -> Option<BadgePalette> {
        match field {
            OrderField::Status => Some(BadgePalette::from_pairs(&[
                ("Pending", BadgeColor::Yellow),
                ("Processing", BadgeColor::Blue),
                ("Shipped", BadgeColor::Purple),
                ("Delivered", BadgeColor::Green),
                ("Cancelled", BadgeColor::Red),
            ])),
            OrderField::PaymentStatus => Some(BadgePalette::from_pairs(&[
                ("Paid", BadgeColor::Green),
                ("Unpaid", BadgeColor::Yellow),
                ("Refunded", BadgeColor::Gray),
            ])),
            _ => None,
        }
    }

    fn status_field() -> Option<OrderField> {
        Some(OrderField::Status)
    }

    fn from_draft(id: String, draft: &OrderDraft) -> Self {
        let number = format!("ORD-{}", &id[..id.len().min(8)]).to_uppercase();
        Self {
            id,
            number,
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            status: "Pending".to_string(),
            payment_status: "Unpaid".to_string(),
            total: draft.total,
            items: draft.items,
            placed_at: Utc::now(),
        }
    }
}
