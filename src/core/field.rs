//! Field value types, field keys and value ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A polymorphic field value that can hold different types
///
/// Every column a view displays, searches, filters or sorts on is read
/// through this type, so the generic core never needs to know the
/// concrete record layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string slice if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a number if it is numeric
    ///
    /// Integers and floats are both widened to `f64`, so a `Fixed` discount
    /// of 50 and a `Percentage` discount of 20 compare as raw numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Render the value as the text used for searching and filtering
    ///
    /// Returns `None` for `Null`, which therefore never matches a search
    /// query or a non-default filter.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339()),
            FieldValue::Null => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Boolean(_) => 0,
            FieldValue::Integer(_) | FieldValue::Float(_) => 1,
            FieldValue::DateTime(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::Null => 4,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Closed set of fields belonging to one record type
///
/// Each view declares its columns as an enum implementing this trait
/// (usually through [`record_fields!`](crate::record_fields)), so an
/// unknown sort or filter key cannot be represented once parsed.
pub trait FieldKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Wire name of the field (e.g. `"amount"`)
    fn name(&self) -> &'static str;

    /// Every field of the record, in column order
    fn all() -> &'static [Self];

    /// Resolve a wire name back to the field
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.name() == name)
    }
}

/// Locale-aware string ordering
///
/// Letters compare case-insensitively first. When two strings only differ
/// by case, lowercase sorts before uppercase, and identical folds fall back
/// to code point order so the result is a total order.
///
/// Diacritics are not folded: accented letters compare by code point after
/// case folding, so `"éclair"` sorts after `"fudge"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| case_order(x, y))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn case_order(a: char, b: char) -> Ordering {
    match (a.is_lowercase(), b.is_lowercase()) {
        (true, false) if b.is_uppercase() => Ordering::Less,
        (false, true) if a.is_uppercase() => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Compare two non-null field values
///
/// Numbers compare numerically regardless of integer/float representation,
/// strings through [`locale_compare`], timestamps chronologically. Values of
/// different kinds fall back to a fixed kind order
/// (boolean < number < timestamp < text < null).
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x.total_cmp(&y);
    }

    match (a, b) {
        (FieldValue::String(x), FieldValue::String(y)) => locale_compare(x, y),
        (FieldValue::DateTime(x), FieldValue::DateTime(y)) => x.cmp(y),
        (FieldValue::Boolean(x), FieldValue::Boolean(y)) => x.cmp(y),
        _ => a.kind_rank().cmp(&b.kind_rank()),
    }
}
