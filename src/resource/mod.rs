//! The collection resource handler.
//!
//! A [`CollectionResource`] is built once from a mount prefix, an optional
//! set of derived fields, and a partial hook table, then handles any number
//! of independent requests through [`CollectionResource::run`]. Every
//! invocation is a single stateless pass from path classification through
//! dispatch to the JSON envelope; nothing survives between calls.

mod builder;
mod ops;
mod route;

pub use builder::CollectionResourceBuilder;

use crate::error::CollectionResult;
use crate::fields::DerivedFields;
use crate::hooks::Hooks;
use crate::request::Request;
use crate::response::ResponseWriter;
use http::StatusCode;
use log::{debug, info, warn};
use route::Route;
use serde_json::json;

/// REST-style collection endpoint handler.
///
/// Configuration is immutable after [`build`](CollectionResourceBuilder::build);
/// concurrent `run` invocations share nothing mutable.
pub struct CollectionResource {
    pub(crate) prefix: Vec<String>,
    pub(crate) fields: DerivedFields,
    pub(crate) hooks: Hooks,
}

impl CollectionResource {
    /// Start building a resource mounted at the given path prefix.
    pub fn builder<I, S>(prefix: I) -> CollectionResourceBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CollectionResourceBuilder::new(prefix.into_iter().map(Into::into).collect())
    }

    /// Handle one request.
    ///
    /// Classifies the path, dispatches on method, and writes the JSON
    /// envelope to `response`. An unresolvable path is answered directly
    /// with status 404 and body `{"error": "URL not found"}` (and `Ok(())`
    /// returned); every other failure is returned as an error with nothing
    /// written, for the embedding transport to translate.
    pub async fn run(
        &self,
        request: &Request,
        response: &mut dyn ResponseWriter,
    ) -> CollectionResult<()> {
        let request_id = uuid::Uuid::new_v4().to_string();
        info!(
            "collection resource processing {} {} (request: '{}')",
            request.method(),
            request.path().unwrap_or("<no path>"),
            request_id
        );

        // The resolver only fails when the request carries no path.
        let route = match route::resolve(request.path(), &self.prefix) {
            Ok(route) => route,
            Err(_) => {
                warn!(
                    "request carries no resolvable path (request: '{}')",
                    request_id
                );
                response.set_status(StatusCode::NOT_FOUND);
                response.send_json(json!({ "error": "URL not found" }));
                return Ok(());
            }
        };

        if let Route::Item { trailing, .. } = &route {
            if !trailing.is_empty() {
                debug!(
                    "ignoring trailing path segments {:?} (request: '{}')",
                    trailing, request_id
                );
            }
        }

        match self.dispatch(&route, request).await {
            Ok(envelope) => {
                debug!(
                    "collection resource completed successfully (request: '{}')",
                    request_id
                );
                response.send_json(serde_json::to_value(envelope)?);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "collection resource failed: {} (request: '{}')",
                    e, request_id
                );
                Err(e)
            }
        }
    }
}
