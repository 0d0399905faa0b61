//! Fraud alerts view

use crate::core::field::FieldValue;
use crate::core::presentation::{BadgeColor, BadgePalette};
use crate::core::record::Record;
use crate::core::sort::{RankTable, SortState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::record_fields! {
    /// Columns of the fraud alerts table
    pub enum FraudAlertField {
        Subject => "subject",
        Email => "email",
        AlertType => "alert_type",
        Severity => "severity",
        Status => "status",
        Amount => "amount",
        /// `subject.previous_flags`
        PreviousFlags => "previous_flags",
        DetectedAt => "detected_at",
    }
}

/// Account an alert was raised against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSubject {
    pub name: String,
    pub email: String,
    pub previous_flags: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAlert {
    pub id: String,
    pub subject: AlertSubject,
    pub alert_type: String,
    /// `High`, `Medium` or `Low`
    pub severity: String,
    /// `Open`, `Investigating`, `Resolved` or `Dismissed`
    pub status: String,
    pub amount: f64,
    pub detected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FraudAlertDraft {
    #[validate(length(min = 1))]
    pub subject_name: String,
    #[validate(email)]
    pub subject_email: String,
    #[validate(length(min = 1))]
    pub alert_type: String,
    #[validate(custom(function = "validate_severity"))]
    pub severity: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

fn validate_severity(severity: &str) -> Result<(), validator::ValidationError> {
    match severity {
        "High" | "Medium" | "Low" => Ok(()),
        _ => Err(validator::ValidationError::new("severity")),
    }
}

impl Record for FraudAlert {
    type Field = FraudAlertField;
    type Draft = FraudAlertDraft;

    fn resource_name() -> &'static str {
        "fraud_alerts"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: FraudAlertField) -> FieldValue {
        match field {
            FraudAlertField::Subject => self.subject.name.as_str().into(),
            FraudAlertField::Email => self.subject.email.as_str().into(),
            FraudAlertField::AlertType => self.alert_type.as_str().into(),
            FraudAlertField::Severity => self.severity.as_str().into(),
            FraudAlertField::Status => self.status.as_str().into(),
            FraudAlertField::Amount => self.amount.into(),
            FraudAlertField::PreviousFlags => self.subject.previous_flags.into(),
            FraudAlertField::DetectedAt => self.detected_at.into(),
        }
    }

    fn search_fields() -> &'static [FraudAlertField] {
        &[
            FraudAlertField::Subject,
            FraudAlertField::Email,
            FraudAlertField::AlertType,
        ]
    }

    fn filter_fields() -> &'static [FraudAlertField] {
        &[
            FraudAlertField::Severity,
            FraudAlertField::Status,
            FraudAlertField::AlertType,
        ]
    }

    fn sort_fields() -> &'static [FraudAlertField] {
        &[
            FraudAlertField::Severity,
            FraudAlertField::Amount,
            FraudAlertField::PreviousFlags,
            FraudAlertField::DetectedAt,
        ]
    }

    fn display_fields() -> &'static [FraudAlertField] {
        &[
            FraudAlertField::Subject,
            FraudAlertField::AlertType,
            FraudAlertField::Amount,
            FraudAlertField::PreviousFlags,
            FraudAlertField::DetectedAt,
        ]
    }

    fn default_sort() -> SortState<FraudAlertField> {
        SortState::desc(FraudAlertField::Severity)
    }

    fn bulk_actions() -> &'static [&'static str] {
        &["investigate", "resolve", "dismiss"]
    }

    fn badge_fields() -> &'static [FraudAlertField] {
        &[FraudAlertField::Severity, FraudAlertField::Status]
    }

    fn rank_table(field: FraudAlertField) -> Option<RankTable> {
        match field {
            FraudAlertField::Severity => Some(RankTable::from_pairs(&[
                ("High", 3),
                ("Medium", 2),
                ("Low", 1),
            ])),
            _ => None,
        }
    }

    fn palette(field: FraudAlertField) -> Option<BadgePalette> {
        match field {
            FraudAlertField::Severity => Some(BadgePalette::from_pairs(&[
                ("High", BadgeColor::Red),
                ("Medium", BadgeColor::Orange),
                ("Low", BadgeColor::Yellow),
            ])),
            FraudAlertField::Status => Some(BadgePalette::from_pairs(&[
                ("Open", BadgeColor::Red),
                ("Investigating", BadgeColor::Blue),
                ("Resolved", BadgeColor::Green),
                ("Dismissed", BadgeColor::Gray),
            ])),
            _ => None,
        }
    }

    fn status_field() -> Option<FraudAlertField> {
        Some(FraudAlertField::Status)
    }

    fn from_draft(id: String, draft: &FraudAlertDraft) -> Self {
        Self {
            id,
            subject: AlertSubject {
                name: draft.subject_name.clone(),
                email: draft.subject_email.clone(),
                previous_flags: 0,
            },
            alert_type: draft.alert_type.clone(),
            severity: draft.severity.clone(),
            status: "Open".to_string(),
            amount: draft.amount,
            detected_at: Utc::now(),
        }
    }
}

#[cfg(test)]
impl FraudAlert {
    pub(crate) fn sample(id: &str, severity: &str, previous_flags: u32) -> Self {
        Self {
            id: id.to_string(),
            subject: AlertSubject {
                name: format!("Customer {}", id),
                email: format!("{}@example.com", id),
                previous_flags,
            },
            alert_type: "Chargeback".to_string(),
            severity: severity.to_string(),
            status: "Open".to_string(),
            amount: 100.0,
            detected_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_projection() {
        let alert = FraudAlert::sample("a1", "High", 3);
        assert_eq!(alert.value(FraudAlertField::PreviousFlags), FieldValue::Integer(3));
        assert_eq!(
            alert.value(FraudAlertField::Email),
            FieldValue::String("a1@example.com".to_string())
        );
    }

    #[test]
    fn test_draft_rejects_unknown_severity_and_bad_email() {
        let draft = FraudAlertDraft {
            subject_name: "Dana".to_string(),
            subject_email: "not-an-email".to_string(),
            alert_type: "Velocity".to_string(),
            severity: "Critical".to_string(),
            amount: 10.0,
        };
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("severity"));
        assert!(fields.contains_key("subject_email"));
    }
}
