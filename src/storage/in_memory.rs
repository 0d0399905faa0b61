//! In-memory record store for testing and development

use crate::core::query::{Page, PageRequest};
use crate::core::record::Record;
use crate::core::service::{ActionOutcome, ActionService, DELETE_ACTION, RecordProvider};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A bulk action the store has accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLogEntry {
    pub action: String,
    pub ids: Vec<String>,
    pub at: DateTime<Utc>,
}

/// In-memory record store
///
/// Serves as both the record provider and the action service of a view.
/// Uses RwLock for thread-safe access; clones share the same data.
#[derive(Clone)]
pub struct InMemoryRecordStore<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
    log: Arc<RwLock<Vec<ActionLogEntry>>>,
}

impl<R: Record> InMemoryRecordStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store seeded with fixtures
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn insert(&self, record: R) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.push(record);
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Bulk actions accepted so far, oldest first
    pub fn action_log(&self) -> Result<Vec<ActionLogEntry>> {
        let log = self
            .log
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(log.clone())
    }

    fn matches_status(record: &R, status: Option<&str>) -> bool {
        match (status, R::status_field()) {
            (Some(wanted), Some(field)) => record.value(field).as_text().as_deref() == Some(wanted),
            _ => true,
        }
    }
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordProvider<R> for InMemoryRecordStore<R> {
    async fn fetch_records(&self, request: &PageRequest) -> Result<Page<R>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let matching: Vec<&R> = records
            .iter()
            .filter(|record| Self::matches_status(record, request.status.as_deref()))
            .collect();

        let total_count = matching.len();
        let items = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .cloned()
            .collect();

        Ok(Page { items, total_count })
    }
}

#[async_trait]
impl<R: Record> ActionService<R> for InMemoryRecordStore<R> {
    /// Known ids succeed and unknown ids fail; `delete` removes the records
    async fn submit_bulk_action(&self, action: &str, ids: &[String]) -> Result<ActionOutcome> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let (succeeded, failed): (Vec<String>, Vec<String>) = ids
            .iter()
            .cloned()
            .partition(|id| records.iter().any(|r| r.id() == id));

        if action == DELETE_ACTION {
            records.retain(|r| !succeeded.iter().any(|id| id == r.id()));
        }

        let mut log = self
            .log
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        log.push(ActionLogEntry {
            action: action.to_string(),
            ids: succeeded.clone(),
            at: Utc::now(),
        });

        Ok(ActionOutcome { succeeded, failed })
    }

    async fn create_record(&self, draft: &R::Draft) -> Result<R> {
        let record = R::from_draft(Uuid::new_v4().to_string(), draft);
        self.insert(record.clone())?;
        Ok(record)
    }
}
