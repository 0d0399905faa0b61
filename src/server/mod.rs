//! Server module for exposing registered views over HTTP
//!
//! `ServerBuilder` mounts, for every registered view:
//! - `GET /{resource}` listing with search, filters, sort and pagination
//! - `POST /{resource}` creating a record from a validated draft
//! - `POST /{resource}/actions` applying a bulk action
//!
//! plus `GET /health` and `GET /views` for API discovery.

pub mod builder;
pub mod handlers;
pub mod registry;

pub use builder::ServerBuilder;
pub use handlers::{BulkActionRequest, ResourceState};
pub use registry::{RecordView, ViewDescriptor, ViewRegistry, ViewSummary};
