//! Sort state and comparator

use crate::core::error::ValidationError;
use crate::core::field::{FieldKey, FieldValue, compare_values};
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ValidationError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Explicit ordering for an enumerated field
///
/// Labels missing from the table rank 0, below every listed label.
///
/// ```
/// use admin_views::core::sort::RankTable;
///
/// let severity = RankTable::from_pairs(&[("High", 3), ("Medium", 2), ("Low", 1)]);
/// assert!(severity.rank("High") > severity.rank("Low"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable {
    ranks: HashMap<String, i64>,
}

impl RankTable {
    pub fn from_pairs(pairs: &[(&str, i64)]) -> Self {
        Self {
            ranks: pairs
                .iter()
                .map(|(label, rank)| (label.to_string(), *rank))
                .collect(),
        }
    }

    pub fn rank(&self, label: &str) -> i64 {
        self.ranks.get(label).copied().unwrap_or(0)
    }

    fn project(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::String(label) => FieldValue::Integer(self.rank(&label)),
            other => other,
        }
    }
}

/// The active sort key and direction; exactly one key is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F: FieldKey> {
    pub key: F,
    pub direction: SortDirection,
}

impl<F: FieldKey> SortState<F> {
    pub fn new(key: F, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: F) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: F) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Parse a sort expression for a record type
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    ///
    /// The key must be one of `R::sort_fields()`.
    pub fn parse<R: Record<Field = F>>(expr: &str) -> Result<Self, ValidationError> {
        let (name, direction) = match expr.split_once(':') {
            Some((name, dir)) => (name, dir.parse()?),
            None => (expr, SortDirection::Asc),
        };

        let key = F::from_name(name)
            .filter(|key| R::sort_fields().contains(key))
            .ok_or_else(|| ValidationError::UnknownSortKey {
                resource: R::resource_name().to_string(),
                key: name.to_string(),
                allowed: R::sort_fields()
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect(),
            })?;

        Ok(Self { key, direction })
    }

    /// Column header click: same key flips direction, a new key starts ascending
    pub fn toggle(&mut self, key: F) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }

    /// Render back to `field:direction`
    pub fn to_expr(&self) -> String {
        format!("{}:{}", self.key.name(), self.direction.as_str())
    }

    /// Compare two records under this sort
    ///
    /// `ranks` overrides the record's own rank table for the active key.
    /// Null values sort last in both directions.
    pub fn compare<R: Record<Field = F>>(&self, a: &R, b: &R, ranks: Option<&RankTable>) -> Ordering {
        let fallback = R::rank_table(self.key);
        self.compare_ranked(a, b, ranks.or(fallback.as_ref()))
    }

    /// Sort a list of records in place
    pub fn apply<R: Record<Field = F>>(&self, records: &mut [&R], ranks: Option<&RankTable>) {
        let fallback = R::rank_table(self.key);
        let table = ranks.or(fallback.as_ref());
        records.sort_by(|a, b| self.compare_ranked(*a, *b, table));
    }

    fn compare_ranked<R: Record<Field = F>>(&self, a: &R, b: &R, table: Option<&RankTable>) -> Ordering {
        let (x, y) = (a.value(self.key), b.value(self.key));
        let (x, y) = match table {
            Some(table) => (table.project(x), table.project(y)),
            None => (x, y),
        };

        match (x.is_null(), y.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = compare_values(&x, &y);
                match self.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fraud_alert::{FraudAlert, FraudAlertField};

    fn alerts() -> Vec<FraudAlert> {
        vec![
            FraudAlert::sample("a1", "Low", 1),
            FraudAlert::sample("a2", "High", 4),
            FraudAlert::sample("a3", "Medium", 0),
        ]
    }

    #[test]
    fn test_parse_with_direction() {
        let state = SortState::<FraudAlertField>::parse::<FraudAlert>("amount:desc").unwrap();
        assert_eq!(state.key, FraudAlertField::Amount);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_parse_bare_key_is_ascending() {
        let state = SortState::parse::<FraudAlert>("severity").unwrap();
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(state.to_expr(), "severity:asc");
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = SortState::<FraudAlertField>::parse::<FraudAlert>("popularity").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSortKey { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_direction() {
        let err = SortState::<FraudAlertField>::parse::<FraudAlert>("amount:sideways").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSortDirection("sideways".to_string())
        );
    }

    #[test]
    fn test_severity_sorts_by_rank_not_lexically() {
        let data = alerts();
        let mut rows: Vec<&FraudAlert> = data.iter().collect();
        SortState::desc(FraudAlertField::Severity).apply(&mut rows, None);
        let order: Vec<&str> = rows.iter().map(|a| a.severity.as_str()).collect();
        assert_eq!(order, vec!["High", "Medium", "Low"]);
    }

    #[test]
    fn test_nested_previous_flags_sort() {
        let data = alerts();
        let mut rows: Vec<&FraudAlert> = data.iter().collect();
        SortState::asc(FraudAlertField::PreviousFlags).apply(&mut rows, None);
        let ids: Vec<&str> = rows.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a1", "a2"]);
    }

    #[test]
    fn test_rank_override() {
        let data = alerts();
        let mut rows: Vec<&FraudAlert> = data.iter().collect();
        let inverted = RankTable::from_pairs(&[("High", 1), ("Medium", 2), ("Low", 3)]);
        SortState::desc(FraudAlertField::Severity).apply(&mut rows, Some(&inverted));
        assert_eq!(rows[0].severity, "Low");
    }

    #[test]
    fn test_toggle() {
        let mut state = SortState::asc(FraudAlertField::Amount);
        state.toggle(FraudAlertField::Amount);
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle(FraudAlertField::Severity);
        assert_eq!(state, SortState::asc(FraudAlertField::Severity));
    }
}
