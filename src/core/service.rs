//! Service traits for loading records and dispatching actions

use crate::core::query::{Page, PageRequest};
use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Bulk action that removes the accepted records from the store
pub const DELETE_ACTION: &str = "delete";

/// Inbound collaborator supplying a view's record store
///
/// Implementations may call a backend, read a database or serve fixtures;
/// the view core only sees pages of records.
#[async_trait]
pub trait RecordProvider<R: Record>: Send + Sync {
    /// Fetch one page of records, optionally restricted to a status
    async fn fetch_records(&self, request: &PageRequest) -> Result<Page<R>>;
}

/// Outbound collaborator executing bulk actions and creates
#[async_trait]
pub trait ActionService<R: Record>: Send + Sync {
    /// Apply a named bulk action to the given records
    async fn submit_bulk_action(&self, action: &str, ids: &[String]) -> Result<ActionOutcome>;

    /// Persist a new record from a validated draft
    async fn create_record(&self, draft: &R::Draft) -> Result<R>;
}

/// Per-record result of a bulk action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Records the action was applied to
    pub succeeded: Vec<String>,
    /// Records the backend refused; they stay selected
    pub failed: Vec<String>,
}

impl ActionOutcome {
    pub fn all_succeeded(ids: &[String]) -> Self {
        Self {
            succeeded: ids.to_vec(),
            failed: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::discount::Discount;

    struct NoopService;

    #[async_trait]
    impl ActionService<Discount> for NoopService {
        async fn submit_bulk_action(&self, _action: &str, ids: &[String]) -> Result<ActionOutcome> {
            Ok(ActionOutcome::all_succeeded(ids))
        }

        async fn create_record(&self, draft: &<Discount as Record>::Draft) -> Result<Discount> {
            Ok(Discount::from_draft("d-new".to_string(), draft))
        }
    }

    // The traits can be used as trait objects
    #[tokio::test]
    async fn test_action_service_object() {
        let service: Box<dyn ActionService<Discount>> = Box::new(NoopService);
        let ids = vec!["d1".to_string(), "d2".to_string()];
        let outcome = service.submit_bulk_action("expire", &ids).await.unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.succeeded, ids);
    }
}
