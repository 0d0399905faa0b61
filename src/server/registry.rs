//! View registry for managing view descriptors and generating their routes

use super::handlers::{ResourceState, resource_routes};
use crate::config::{ViewSettings, ViewsConfig};
use crate::core::field::FieldKey;
use crate::core::record::Record;
use crate::core::service::{ActionService, RecordProvider};
use axum::Router;
use serde::Serialize;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Introspection entry returned by `GET /views`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    pub resource: &'static str,
    pub search_fields: Vec<&'static str>,
    pub filter_fields: Vec<&'static str>,
    pub sort_fields: Vec<&'static str>,
    pub default_sort: String,
    pub bulk_actions: Vec<&'static str>,
    pub page_size: usize,
}

/// Trait that describes how to build routes for a view
///
/// Each registered view (products, discounts, ...) provides its list,
/// create and bulk-action routes once its settings are resolved.
pub trait ViewDescriptor: Send + Sync {
    /// The resource name (e.g. "discounts")
    fn resource_name(&self) -> &'static str;

    /// Describe the view for API discovery
    fn summary(&self, settings: &ViewSettings) -> ViewSummary;

    /// Build the routes for this view:
    /// - GET /{resource}
    /// - POST /{resource}
    /// - POST /{resource}/actions
    fn build_routes(&self, settings: ViewSettings) -> Router;
}

/// Descriptor binding a record type to its collaborators
pub struct RecordView<R: Record> {
    provider: Arc<dyn RecordProvider<R>>,
    actions: Arc<dyn ActionService<R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordView<R> {
    pub fn new(provider: Arc<dyn RecordProvider<R>>, actions: Arc<dyn ActionService<R>>) -> Self {
        Self {
            provider,
            actions,
            _record: PhantomData,
        }
    }
}

fn names<F: FieldKey>(fields: &[F]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name()).collect()
}

impl<R: Record> ViewDescriptor for RecordView<R> {
    fn resource_name(&self) -> &'static str {
        R::resource_name()
    }

    fn summary(&self, settings: &ViewSettings) -> ViewSummary {
        ViewSummary {
            resource: R::resource_name(),
            search_fields: names(R::search_fields()),
            filter_fields: names(R::filter_fields()),
            sort_fields: names(R::sort_fields()),
            default_sort: R::default_sort().to_expr(),
            bulk_actions: R::bulk_actions().to_vec(),
            page_size: settings.page_size,
        }
    }

    fn build_routes(&self, settings: ViewSettings) -> Router {
        resource_routes(ResourceState {
            provider: self.provider.clone(),
            actions: self.actions.clone(),
            settings: Arc::new(settings),
        })
    }
}

/// Registry for all views served by the application
#[derive(Default)]
pub struct ViewRegistry {
    descriptors: BTreeMap<&'static str, Box<dyn ViewDescriptor>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register a view descriptor
    ///
    /// The resource name is used as the key; registering the same
    /// resource twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn ViewDescriptor>) {
        let resource = descriptor.resource_name();
        if self.descriptors.insert(resource, descriptor).is_some() {
            tracing::warn!(resource, "view registered twice, replacing");
        }
    }

    /// Merge the routes of every registered view
    pub fn build_routes(&self, config: &ViewsConfig) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, (resource, descriptor)| {
                router.merge(descriptor.build_routes(config.settings_for(resource)))
            })
    }

    /// Summaries of every registered view, sorted by resource name
    pub fn summaries(&self, config: &ViewsConfig) -> Vec<ViewSummary> {
        self.descriptors
            .iter()
            .map(|(resource, descriptor)| descriptor.summary(&config.settings_for(resource)))
            .collect()
    }

    pub fn resource_names(&self) -> Vec<&'static str> {
        self.descriptors.keys().copied().collect()
    }
}
