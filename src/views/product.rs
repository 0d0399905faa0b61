//! Products catalogue view

use crate::core::field::FieldValue;
use crate::core::presentation::{BadgeColor, BadgePalette};
use crate::core::record::Record;
use crate::core::sort::SortState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::record_fields! {
    /// Columns of the products table
    pub enum ProductField {
        Name => "name",
        Description => "description",
        Category => "category",
        Status => "status",
        Price => "price",
        Stock => "stock",
        Sales => "sales",
        UpdatedAt => "updated_at",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// `Active`, `Draft` or `Archived`
    pub status: String,
    pub price: f64,
    pub stock: u32,
    pub sales: u32,
    pub updated_at: DateTime<Utc>,
}

/// Payload of the "new product" form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

impl Record for Product {
    type Field = ProductField;
    type Draft = ProductDraft;

    fn resource_name() -> &'static str {
        "products"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Name => self.name.as_str().into(),
            ProductField::Description => self.description.as_str().into(),
            ProductField::Category => self.category.as_str().into(),
            ProductField::Status => self.status.as_str().into(),
            ProductField::Price => self.price.into(),
            ProductField::Stock => self.stock.into(),
            ProductField::Sales => self.sales.into(),
            ProductField::UpdatedAt => self.updated_at.into(),
        }
    }

    fn search_fields() -> &'static [ProductField] {
        &[ProductField::Name, ProductField::Description]
    }

    fn filter_fields() -> &'static [ProductField] {
        &[ProductField::Category, ProductField::Status]
    }

    fn sort_fields() -> &'static [ProductField] {
        &[
            ProductField::Name,
            ProductField::Price,
            ProductField::Stock,
            ProductField::Sales,
            ProductField::UpdatedAt,
        ]
    }

    fn display_fields() -> &'static [ProductField] {
        &[
            ProductField::Name,
            ProductField::Category,
            ProductField::Price,
            ProductField::Stock,
            ProductField::Sales,
        ]
    }

    fn default_sort() -> SortState<ProductField> {
        SortState::asc(ProductField::Name)
    }

    fn bulk_actions() -> &'static [&'static str] {
        &["publish", "archive", "delete"]
    }

    fn badge_fields() -> &'static [ProductField] {
        &[ProductField::Status]
    }

    fn palette(field: ProductField) -> Option<BadgePalette> {
        match field {
            ProductField::Status => Some(BadgePalette::from_pairs(&[
                ("Active", BadgeColor::Green),
                ("Draft", BadgeColor::Yellow),
                ("Archived", BadgeColor::Gray),
            ])),
            _ => None,
        }
    }

    fn status_field() -> Option<ProductField> {
        Some(ProductField::Status)
    }

    fn from_draft(id: String, draft: &ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            status: "Draft".to_string(),
            price: draft.price,
            stock: draft.stock,
            sales: 0,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
impl Product {
    pub(crate) fn sample(id: &str, name: &str, category: &str, status: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("Sample description for {}", name),
            category: category.to_string(),
            status: status.to_string(),
            price,
            stock: 10,
            sales: 0,
            updated_at: Utc::now(),
        }
    }
}
