//! HTTP handlers for view operations
//!
//! The handlers are generic over the record type; one set of routes is
//! mounted per registered view.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::config::ViewSettings;
use crate::core::error::{ActionError, LoadError, ValidationError, ViewError};
use crate::core::presentation::{TableModel, ViewStatus, render_table};
use crate::core::query::{ListQuery, PageRequest};
use crate::core::record::Record;
use crate::core::service::{ActionOutcome, ActionService, RecordProvider};
use crate::core::view::ListView;

/// State shared by the handlers of one view
pub struct ResourceState<R: Record> {
    pub provider: Arc<dyn RecordProvider<R>>,
    pub actions: Arc<dyn ActionService<R>>,
    pub settings: Arc<ViewSettings>,
}

impl<R: Record> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            actions: self.actions.clone(),
            settings: self.settings.clone(),
        }
    }
}

/// Body of `POST /{resource}/actions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkActionRequest {
    pub action: String,
    pub ids: Vec<String>,
}

/// Build the routes of one view
pub fn resource_routes<R: Record>(state: ResourceState<R>) -> Router {
    let base = format!("/{}", R::resource_name());
    let actions = format!("{}/actions", base);

    Router::new()
        .route(&base, get(list_records::<R>).post(create_record::<R>))
        .route(&actions, post(submit_bulk_action::<R>))
        .with_state(state)
}

/// List a view
///
/// GET /{resource}?search=...&filter={"status":"Active"}&sort=amount:desc&page=1&limit=20
///
/// The whole store is fetched once, then search, filters and sort are
/// applied locally before paginating.
pub async fn list_records<R: Record>(
    State(state): State<ResourceState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TableModel>, ViewError> {
    let page = state
        .provider
        .fetch_records(&PageRequest::everything())
        .await
        .map_err(|e| LoadError {
            resource: R::resource_name().to_string(),
            message: e.to_string(),
        })?;

    let mut view = ListView::new(page.items, (*state.settings).clone());

    if let Some(search) = query.search.as_deref() {
        view.set_search(search);
    }
    for (field, raw) in query.filters()? {
        view.set_filter_by_name(&field, &raw)?;
    }
    if let Some(sort) = query.sort.as_deref() {
        view.set_sort_by_name(sort)?;
    }
    if let Some(limit) = query.limit {
        view.set_page_size(limit);
    }
    view.set_page(query.page());

    Ok(Json(render_table(&view, ViewStatus::Ready)))
}

/// Create a record from a draft
///
/// POST /{resource}
pub async fn create_record<R: Record>(
    State(state): State<ResourceState<R>>,
    Json(draft): Json<R::Draft>,
) -> Result<Response, ViewError> {
    draft
        .validate()
        .map_err(|e| ValidationError::from_validator(&e))?;

    let record = state
        .actions
        .create_record(&draft)
        .await
        .map_err(|e| ActionError::CreateFailed {
            resource: R::resource_name().to_string(),
            message: e.to_string(),
        })?;

    tracing::info!(resource = R::resource_name(), id = record.id(), "record created");

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// Apply a bulk action to a set of records
///
/// POST /{resource}/actions
pub async fn submit_bulk_action<R: Record>(
    State(state): State<ResourceState<R>>,
    Json(payload): Json<BulkActionRequest>,
) -> Result<Json<ActionOutcome>, ViewError> {
    if !R::bulk_actions().iter().any(|known| *known == payload.action) {
        return Err(ValidationError::UnknownAction {
            resource: R::resource_name().to_string(),
            action: payload.action,
        }
        .into());
    }
    if payload.ids.is_empty() {
        return Err(ValidationError::EmptySelection.into());
    }

    let outcome = state
        .actions
        .submit_bulk_action(&payload.action, &payload.ids)
        .await
        .map_err(|e| ActionError::Failed {
            resource: R::resource_name().to_string(),
            action: payload.action.clone(),
            ids: payload.ids.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(
        resource = R::resource_name(),
        action = %payload.action,
        succeeded = outcome.succeeded.len(),
        failed = outcome.failed.len(),
        "bulk action completed"
    );

    Ok(Json(outcome))
}
