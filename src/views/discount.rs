//! Discount codes view

use crate::core::field::FieldValue;
use crate::core::presentation::{BadgeColor, BadgePalette};
use crate::core::record::Record;
use crate::core::sort::SortState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::record_fields! {
    /// Columns of the discounts table
    pub enum DiscountField {
        Code => "code",
        Description => "description",
        Kind => "kind",
        Amount => "amount",
        Status => "status",
        UsageCount => "usage_count",
        UsageLimit => "usage_limit",
        StartsAt => "starts_at",
        EndsAt => "ends_at",
    }
}

/// How a discount amount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

impl DiscountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: String,
    pub code: String,
    pub description: String,
    pub kind: DiscountKind,
    /// Percent for `Percentage`, currency units for `Fixed`
    pub amount: f64,
    /// `Active`, `Scheduled` or `Expired`
    pub status: String,
    pub usage_count: u32,
    pub usage_limit: Option<u32>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Discount {
    /// Human-readable amount, e.g. `20%` or `$50`
    pub fn amount_label(&self) -> String {
        match self.kind {
            DiscountKind::Percentage => format!("{}%", self.amount),
            DiscountKind::Fixed => format!("${}", self.amount),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscountDraft {
    #[validate(length(min = 3, max = 32))]
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub kind: DiscountKind,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[validate(range(min = 1))]
    pub usage_limit: Option<u32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Record for Discount {
    type Field = DiscountField;
    type Draft = DiscountDraft;

    fn resource_name() -> &'static str {
        "discounts"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: DiscountField) -> FieldValue {
        match field {
            DiscountField::Code => self.code.as_str().into(),
            DiscountField::Description => self.description.as_str().into(),
            DiscountField::Kind => self.kind.as_str().into(),
            // Raw number regardless of kind: 50 (fixed) sorts above 20 (percent)
            DiscountField::Amount => self.amount.into(),
            DiscountField::Status => self.status.as_str().into(),
            DiscountField::UsageCount => self.usage_count.into(),
            DiscountField::UsageLimit => self.usage_limit.into(),
            DiscountField::StartsAt => self.starts_at.into(),
            DiscountField::EndsAt => self.ends_at.into(),
        }
    }

    fn search_fields() -> &'static [DiscountField] {
        &[DiscountField::Code, DiscountField::Description]
    }

    fn filter_fields() -> &'static [DiscountField] {
        &[DiscountField::Status, DiscountField::Kind]
    }

    fn sort_fields() -> &'static [DiscountField] {
        &[
            DiscountField::Code,
            DiscountField::Amount,
            DiscountField::UsageCount,
            DiscountField::StartsAt,
            DiscountField::EndsAt,
        ]
    }

    fn display_fields() -> &'static [DiscountField] {
        &[
            DiscountField::Code,
            DiscountField::Kind,
            DiscountField::Amount,
            DiscountField::UsageCount,
            DiscountField::UsageLimit,
            DiscountField::EndsAt,
        ]
    }

    fn default_sort() -> SortState<DiscountField> {
        SortState::desc(DiscountField::StartsAt)
    }

    fn bulk_actions() -> &'static [&'static str] {
        &["activate", "expire", "delete"]
    }

    fn badge_fields() -> &'static [DiscountField] {
        &[DiscountField::Status, DiscountField::Kind]
    }

    fn palette(field: DiscountField) -> Option<BadgePalette> {
        match field {
            DiscountField::Status => Some(BadgePalette::from_pairs(&[
                ("Active", BadgeColor::Green),
                ("Scheduled", BadgeColor::Blue),
                ("Expired", BadgeColor::Gray),
            ])),
            DiscountField::Kind => Some(BadgePalette::from_pairs(&[
                ("percentage", BadgeColor::Purple),
                ("fixed", BadgeColor::Orange),
            ])),
            _ => None,
        }
    }

    fn status_field() -> Option<DiscountField> {
        Some(DiscountField::Status)
    }

    fn from_draft(id: String, draft: &DiscountDraft) -> Self {
        let now = Utc::now();
        let starts_at = draft.starts_at.unwrap_or(now);
        let status = if starts_at > now { "Scheduled" } else { "Active" };

        Self {
            id,
            code: draft.code.to_uppercase(),
            description: draft.description.clone(),
            kind: draft.kind,
            amount: draft.amount,
            status: status.to_string(),
            usage_count: 0,
            usage_limit: draft.usage_limit,
            starts_at,
            ends_at: draft.ends_at,
        }
    }
}
