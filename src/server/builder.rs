//! ServerBuilder for fluent API to build HTTP servers

use super::registry::{RecordView, ViewRegistry};
use crate::config::ViewsConfig;
use crate::core::record::Record;
use crate::core::service::{ActionService, RecordProvider};
use crate::storage::InMemoryRecordStore;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with one set of routes per view
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config_file("config/views.yaml")?
///     .with_store(InMemoryRecordStore::with_records(discounts))
///     .register_view::<Product>(catalogue_client.clone(), catalogue_client)
///     .build()?;
/// ```
pub struct ServerBuilder {
    registry: ViewRegistry,
    configs: Vec<ViewsConfig>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            registry: ViewRegistry::new(),
            configs: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Add a view configuration; later configurations win per view
    pub fn with_config(mut self, config: ViewsConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Load and add a YAML view configuration
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = ViewsConfig::from_yaml_file(path)?;
        Ok(self.with_config(config))
    }

    /// Add routes that are not views (auth, webhooks, ...)
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a view backed by a record provider and an action service
    pub fn register_view<R: Record>(
        mut self,
        provider: impl RecordProvider<R> + 'static,
        actions: impl ActionService<R> + 'static,
    ) -> Self {
        tracing::debug!(resource = R::resource_name(), "registering view");
        self.registry
            .register(Box::new(RecordView::<R>::new(Arc::new(provider), Arc::new(actions))));
        self
    }

    /// Register a view served from an in-memory store
    pub fn with_store<R: Record>(self, store: InMemoryRecordStore<R>) -> Self {
        self.register_view(store.clone(), store)
    }

    /// Build the final router
    ///
    /// This generates:
    /// - list, create and bulk-action routes for every view
    /// - `GET /health`
    /// - `GET /views` for API discovery
    pub fn build(self) -> Result<Router> {
        let config = ViewsConfig::merge(self.configs);

        for view in &config.views {
            if !self.registry.resource_names().contains(&view.name.as_str()) {
                tracing::warn!(view = %view.name, "configuration for unregistered view");
            }
        }

        let summaries = Arc::new(self.registry.summaries(&config));
        let mut app = Router::new()
            .route("/health", get(health_check))
            .route(
                "/views",
                get(move || {
                    let summaries = summaries.clone();
                    async move { Json((*summaries).clone()) }
                }),
            )
            .merge(self.registry.build_routes(&config));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "admin-views"
    }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::discount::Discount;
    use crate::views::product::Product;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ServerBuilder::new();
        assert!(builder.registry.resource_names().is_empty());
        assert!(builder.configs.is_empty());
        assert!(builder.custom_routes.is_empty());
    }

    #[test]
    fn test_with_store_registers_view() {
        let builder = ServerBuilder::new()
            .with_store(InMemoryRecordStore::<Product>::new())
            .with_store(InMemoryRecordStore::<Discount>::new());
        assert_eq!(builder.registry.resource_names(), vec!["discounts", "products"]);
    }

    #[test]
    fn test_with_custom_routes_appends_router() {
        let builder = ServerBuilder::new()
            .with_custom_routes(Router::new())
            .with_custom_routes(Router::new());
        assert_eq!(builder.custom_routes.len(), 2);
    }

    #[test]
    fn test_with_config_file_missing_fails() {
        let result = ServerBuilder::new().with_config_file("/nonexistent/views.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_produces_router() {
        let result = ServerBuilder::new()
            .with_config(ViewsConfig::default())
            .with_store(InMemoryRecordStore::<Product>::new())
            .build();
        assert!(result.is_ok());
    }
}
