//! Operation dispatch and the four operation implementations.
//!
//! Dispatch is exhaustive over the closed set of (route, method) pairs; an
//! unmapped pair is an explicit [`CollectionError::MethodNotAllowed`], never
//! an empty response. Each operation checks its capability slot, invokes
//! the hook, formats the result, and assembles the envelope.

use super::CollectionResource;
use super::route::Route;
use crate::error::{CollectionError, CollectionResult};
use crate::hooks::ListStrategy;
use crate::request::Request;
use crate::response::Envelope;
use http::Method;
use serde_json::Value;

impl CollectionResource {
    pub(super) async fn dispatch(
        &self,
        route: &Route,
        request: &Request,
    ) -> CollectionResult<Envelope> {
        let method = request.method();
        match route {
            Route::Collection if *method == Method::POST => self.create(request).await,
            Route::Collection if *method == Method::GET => self.list(request).await,
            Route::Item { id, .. } if *method == Method::GET => self.get_by_id(id).await,
            Route::Item { id, .. } if *method == Method::PUT => {
                self.update_by_id(id, request).await
            }
            route => Err(CollectionError::method_not_allowed(
                method.clone(),
                route.kind(),
            )),
        }
    }

    /// Forward the body verbatim to the create hook and wrap the entity.
    async fn create(&self, request: &Request) -> CollectionResult<Envelope> {
        let hook = self
            .hooks
            .create
            .as_deref()
            .ok_or_else(|| CollectionError::unsupported_operation("create"))?;

        let created = hook
            .create(request.body().clone())
            .await
            .map_err(CollectionError::hook)?;
        Ok(Envelope::item(self.fields.format(&created)))
    }

    async fn list(&self, request: &Request) -> CollectionResult<Envelope> {
        let strategy = self
            .hooks
            .list
            .as_ref()
            .ok_or_else(|| CollectionError::unsupported_operation("list"))?;

        match strategy {
            ListStrategy::Unpaginated(hook) => {
                let rows = hook.rows().await.map_err(CollectionError::hook)?;
                Ok(Envelope::list(self.format_rows(&rows)))
            }
            ListStrategy::Paginated(hook) => {
                let pagination = hook.pagination(request);
                let filter = hook.filter(request);

                // Count and rows have no ordering dependency; both see the
                // same filter/pagination snapshot. Either failure discards
                // the other result.
                let (count, rows) =
                    tokio::try_join!(hook.count(&filter), hook.rows(&filter, &pagination))
                        .map_err(CollectionError::hook)?;

                let envelope = Envelope::list(self.format_rows(&rows));
                match count.advertised_total() {
                    Some(total) => Ok(envelope.with_pagination(attach_total(pagination, total))),
                    None => Ok(envelope),
                }
            }
        }
    }

    async fn get_by_id(&self, id: &str) -> CollectionResult<Envelope> {
        let hook = self
            .hooks
            .get_by_id
            .as_deref()
            .ok_or_else(|| CollectionError::unsupported_operation("get-by-id"))?;

        let entity = hook.get_by_id(id).await.map_err(CollectionError::hook)?;
        Ok(Envelope::item(self.fields.format(&entity)))
    }

    /// The hook receives the full request so it can read the body itself.
    async fn update_by_id(&self, id: &str, request: &Request) -> CollectionResult<Envelope> {
        let hook = self
            .hooks
            .update_by_id
            .as_deref()
            .ok_or_else(|| CollectionError::unsupported_operation("update-by-id"))?;

        let entity = hook
            .update_by_id(id, request)
            .await
            .map_err(CollectionError::hook)?;
        Ok(Envelope::item(self.fields.format(&entity)))
    }

    fn format_rows(&self, rows: &[Value]) -> Vec<Value> {
        rows.iter().map(|row| self.fields.format(row)).collect()
    }
}

/// Shallow-merge the hook's pagination fields with the advertised total.
///
/// A non-object pagination value contributes no fields of its own.
fn attach_total(pagination: Value, total: u64) -> Value {
    let mut fields = pagination.as_object().cloned().unwrap_or_default();
    fields.insert("total".to_owned(), Value::from(total));
    Value::Object(fields)
}
