//! Async orchestration of a list view and its external collaborators

use crate::config::ViewSettings;
use crate::core::error::{ActionError, LoadError, ValidationError, ViewError};
use crate::core::presentation::{TableModel, ViewStatus, render_table};
use crate::core::query::PageRequest;
use crate::core::record::Record;
use crate::core::service::{ActionOutcome, ActionService, DELETE_ACTION, RecordProvider};
use crate::core::view::ListView;
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A recoverable message shown to the user (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Drives one view: loads its store once, dispatches actions, keeps banners
///
/// The controller never panics on collaborator failures. A failed load
/// leaves an empty store with an error banner; a failed action leaves the
/// store and selection untouched and queues a notification.
pub struct ViewController<R: Record> {
    provider: Arc<dyn RecordProvider<R>>,
    actions: Arc<dyn ActionService<R>>,
    view: ListView<R>,
    status: ViewStatus,
    total_count: usize,
    notifications: Vec<Notification>,
}

impl<R: Record> ViewController<R> {
    pub fn new(
        provider: Arc<dyn RecordProvider<R>>,
        actions: Arc<dyn ActionService<R>>,
        settings: ViewSettings,
    ) -> Self {
        Self {
            provider,
            actions,
            view: ListView::new(Vec::new(), settings),
            status: ViewStatus::Ready,
            total_count: 0,
            notifications: Vec::new(),
        }
    }

    pub fn view(&self) -> &ListView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView<R> {
        &mut self.view
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Total reported by the provider for the last successful load
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Render the current state
    pub fn table(&self) -> TableModel {
        render_table(&self.view, self.status.clone())
    }

    /// Fetch the record store
    ///
    /// Filters, sort and selection changes never refetch; they only refine
    /// what this call loaded.
    pub async fn load(&mut self, request: PageRequest) -> Result<(), ViewError> {
        match self.provider.fetch_records(&request).await {
            Ok(page) => {
                tracing::info!(
                    resource = R::resource_name(),
                    loaded = page.items.len(),
                    total = page.total_count,
                    "records loaded"
                );
                self.total_count = page.total_count;
                self.view.replace_records(page.items);
                self.status = ViewStatus::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = R::resource_name(), error = %e, "record load failed");
                let err = LoadError {
                    resource: R::resource_name().to_string(),
                    message: e.to_string(),
                };
                self.total_count = 0;
                self.view.replace_records(Vec::new());
                self.status = ViewStatus::Error {
                    message: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    /// Dispatch a bulk action for the current selection
    ///
    /// On success the ids the backend accepted are deselected and the ones
    /// it refused stay selected; a delete also drops the accepted records
    /// from the local store. On failure nothing changes.
    pub async fn run_bulk_action(&mut self, action: &str) -> Result<ActionOutcome, ViewError> {
        if !R::bulk_actions().iter().any(|known| *known == action) {
            return Err(ValidationError::UnknownAction {
                resource: R::resource_name().to_string(),
                action: action.to_string(),
            }
            .into());
        }
        if self.view.selection().is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }

        let ids = self.view.selection().ids();
        match self.actions.submit_bulk_action(action, &ids).await {
            Ok(outcome) => {
                tracing::info!(
                    resource = R::resource_name(),
                    action,
                    succeeded = outcome.succeeded.len(),
                    failed = outcome.failed.len(),
                    "bulk action completed"
                );
                if action == DELETE_ACTION {
                    self.view.remove_records(&outcome.succeeded);
                    self.total_count = self.total_count.saturating_sub(outcome.succeeded.len());
                } else {
                    self.view
                        .selection_mut()
                        .remove_all(outcome.succeeded.iter().map(String::as_str));
                }

                if outcome.is_complete() {
                    self.notifications.push(Notification::new(
                        NotificationLevel::Info,
                        format!("{} applied to {} record(s)", action, outcome.succeeded.len()),
                    ));
                } else {
                    self.notifications.push(Notification::new(
                        NotificationLevel::Warning,
                        format!(
                            "{} failed for {} of {} record(s)",
                            action,
                            outcome.failed.len(),
                            ids.len()
                        ),
                    ));
                }
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(resource = R::resource_name(), action, error = %e, "bulk action failed");
                let err = ActionError::Failed {
                    resource: R::resource_name().to_string(),
                    action: action.to_string(),
                    ids,
                    message: e.to_string(),
                };
                self.notifications
                    .push(Notification::new(NotificationLevel::Error, err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Validate a draft, create it through the action service and append it locally
    pub async fn create(&mut self, draft: R::Draft) -> Result<R, ViewError> {
        draft
            .validate()
            .map_err(|e| ValidationError::from_validator(&e))?;

        match self.actions.create_record(&draft).await {
            Ok(record) => {
                tracing::info!(resource = R::resource_name(), id = record.id(), "record created");
                self.view.insert_record(record.clone());
                self.total_count += 1;
                self.notifications.push(Notification::new(
                    NotificationLevel::Info,
                    format!("Created {}", record.id()),
                ));
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(resource = R::resource_name(), error = %e, "create failed");
                let err = ActionError::CreateFailed {
                    resource: R::resource_name().to_string(),
                    message: e.to_string(),
                };
                self.notifications
                    .push(Notification::new(NotificationLevel::Error, err.to_string()));
                Err(err.into())
            }
        }
    }
}
