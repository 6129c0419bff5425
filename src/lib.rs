//! Declarative REST collection endpoints for Rust.
//!
//! Turns a set of caller-supplied data-access hooks into a REST-style
//! collection endpoint handler: list (with optional filtering and
//! pagination), create, fetch-by-id, and update-by-id, plus computed
//! ("derived") output fields. All persistence, filtering, and counting
//! stays in the hooks; this crate owns path resolution, method dispatch,
//! entity formatting, and envelope assembly.
//!
//! # Core Components
//!
//! - [`CollectionResource`] - The handler; one entry point, [`CollectionResource::run`]
//! - [`hooks`] - Capability traits the caller implements ([`CreateHook`],
//!   [`GetByIdHook`], [`UpdateByIdHook`], and the [`ListStrategy`] variants)
//! - [`DerivedFields`] - Output-only fields computed from an entity at
//!   response time
//! - [`ResponseWriter`] - The transport seam: set a status, send a JSON body
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use collection_resource::{CollectionResource, Request, ResponseWriter};
//! use serde_json::{Value, json};
//!
//! # struct NullResponse;
//! # impl ResponseWriter for NullResponse {
//! #     fn set_status(&mut self, _status: http::StatusCode) {}
//! #     fn send_json(&mut self, _body: Value) {}
//! # }
//! # async fn example() -> collection_resource::CollectionResult<()> {
//! let resource = CollectionResource::builder(["api", "friends"])
//!     .field("fullName", |entity: &Value| {
//!         json!(format!(
//!             "{} {}",
//!             entity["firstName"].as_str().unwrap_or_default(),
//!             entity["lastName"].as_str().unwrap_or_default()
//!         ))
//!     })
//!     .get_by_id_hook(|id: String| async move {
//!         Ok(json!({ "id": id, "firstName": "Grace", "lastName": "Hopper" }))
//!     })
//!     .build();
//!
//! let request = Request::get("/api/friends/42");
//! let mut response = NullResponse;
//! resource.run(&request, &mut response).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The resource never constructs or persists entities; it treats them as
//! opaque JSON values and only merges derived fields into the output copy.

pub mod error;
pub mod fields;
pub mod hooks;
pub mod request;
pub mod resource;
pub mod response;

// Re-export commonly used types for convenience
pub use error::{CollectionError, CollectionResult};
pub use fields::DerivedFields;
pub use hooks::{
    Count, CreateHook, GetByIdHook, HookError, HookResult, ListAllHook, ListStrategy,
    PagedListHook, UpdateByIdHook,
};
pub use request::Request;
pub use resource::{CollectionResource, CollectionResourceBuilder};
pub use response::{Envelope, ResponseWriter};
