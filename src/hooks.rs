//! Capability traits for caller-supplied data access.
//!
//! The resource implements no persistence of its own: every operation
//! delegates to one of the hooks defined here. Hooks are registered on the
//! builder as an optional capability table; a dispatch path whose hook is
//! absent fails with [`crate::CollectionError::UnsupportedOperation`] rather
//! than defaulting to a no-op.
//!
//! The single-method hooks ([`CreateHook`], [`GetByIdHook`],
//! [`UpdateByIdHook`], [`ListAllHook`]) have blanket implementations for
//! async closures, so simple resources can be wired up without naming a
//! struct:
//!
//! ```rust
//! use collection_resource::{CollectionResource, ListStrategy};
//! use serde_json::json;
//!
//! let _resource = CollectionResource::builder(["api", "items"])
//!     .list_strategy(ListStrategy::unpaginated(|| async {
//!         Ok(vec![json!({ "id": "1" })])
//!     }))
//!     .build();
//! ```

use crate::request::Request;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Error type hooks report; carried through unchanged as the source of
/// [`crate::CollectionError::Hook`].
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for hook implementations.
pub type HookResult<T> = Result<T, HookError>;

/// Creates an entity from an opaque request body.
///
/// The body is forwarded verbatim (JSON `null` when the transport provided
/// none); validating it is the hook's business.
#[async_trait]
pub trait CreateHook: Send + Sync {
    async fn create(&self, body: Value) -> HookResult<Value>;
}

/// Fetches a single entity by the identifier taken from the item route.
#[async_trait]
pub trait GetByIdHook: Send + Sync {
    async fn get_by_id(&self, id: &str) -> HookResult<Value>;
}

/// Updates a single entity by identifier.
///
/// Receives the full request so it can read the body (or anything else)
/// itself.
#[async_trait]
pub trait UpdateByIdHook: Send + Sync {
    async fn update_by_id(&self, id: &str, request: &Request) -> HookResult<Value>;
}

/// Produces every row of the collection, with no filtering or pagination.
#[async_trait]
pub trait ListAllHook: Send + Sync {
    async fn rows(&self) -> HookResult<Vec<Value>>;
}

/// Filtered, paginated listing.
///
/// `pagination` and `filter` derive their values synchronously from the
/// request; `count` and `rows` are then issued concurrently against that
/// same snapshot. Both values are opaque to the resource: the filter is
/// only threaded through, and the pagination object is shallow-merged into
/// the response envelope together with the advertised total.
#[async_trait]
pub trait PagedListHook: Send + Sync {
    /// Derive the pagination parameters from the request.
    fn pagination(&self, request: &Request) -> Value;

    /// Derive the filter from the request.
    fn filter(&self, request: &Request) -> Value;

    /// Count the rows matching the filter, if the backend can say.
    async fn count(&self, filter: &Value) -> HookResult<Count>;

    /// Fetch the page of rows for the filter and pagination snapshot.
    async fn rows(&self, filter: &Value, pagination: &Value) -> HookResult<Vec<Value>>;
}

/// Row count reported by [`PagedListHook::count`].
///
/// An explicit present/absent marker instead of a bare number, so a backend
/// that cannot count cheaply says so in the type. For envelope purposes
/// `Known(0)` behaves like `Unknown`: the response carries no `pagination`
/// block either way, so a legitimately empty result set is indistinguishable
/// from "no count available" on the wire. That quirk is part of the response
/// contract; callers who need to tell the cases apart must do so out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// The backend counted the matching rows.
    Known(u64),
    /// The backend cannot (or chose not to) produce a total.
    Unknown,
}

impl Count {
    /// The total to advertise in the pagination block, if any.
    ///
    /// Returns `None` for `Unknown` and for `Known(0)`.
    pub fn advertised_total(&self) -> Option<u64> {
        match self {
            Count::Known(total) if *total > 0 => Some(*total),
            _ => None,
        }
    }
}

impl From<u64> for Count {
    fn from(total: u64) -> Self {
        Count::Known(total)
    }
}

impl From<Option<u64>> for Count {
    fn from(total: Option<u64>) -> Self {
        match total {
            Some(total) => Count::Known(total),
            None => Count::Unknown,
        }
    }
}

/// How the list operation fetches its rows, fixed at configuration time.
pub enum ListStrategy {
    /// A single rows hook; the envelope never carries pagination.
    Unpaginated(Box<dyn ListAllHook>),
    /// The four-part paged hook; the envelope carries pagination when the
    /// hook advertises a non-zero total.
    Paginated(Box<dyn PagedListHook>),
}

impl ListStrategy {
    /// Wrap an unpaginated rows hook.
    pub fn unpaginated(hook: impl ListAllHook + 'static) -> Self {
        ListStrategy::Unpaginated(Box::new(hook))
    }

    /// Wrap a paged list hook.
    pub fn paginated(hook: impl PagedListHook + 'static) -> Self {
        ListStrategy::Paginated(Box::new(hook))
    }
}

impl fmt::Debug for ListStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStrategy::Unpaginated(_) => f.write_str("ListStrategy::Unpaginated"),
            ListStrategy::Paginated(_) => f.write_str("ListStrategy::Paginated"),
        }
    }
}

/// The capability table assembled by the builder.
///
/// Every slot is optional; dispatch checks presence per operation.
#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) create: Option<Box<dyn CreateHook>>,
    pub(crate) get_by_id: Option<Box<dyn GetByIdHook>>,
    pub(crate) update_by_id: Option<Box<dyn UpdateByIdHook>>,
    pub(crate) list: Option<ListStrategy>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("create", &self.create.is_some())
            .field("get_by_id", &self.get_by_id.is_some())
            .field("update_by_id", &self.update_by_id.is_some())
            .field("list", &self.list)
            .finish()
    }
}

// Blanket impls so plain async closures can serve as hooks. Closure hooks
// take owned arguments; the trait-object path hands out clones.

#[async_trait]
impl<F, Fut> CreateHook for F
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = HookResult<Value>> + Send + 'static,
{
    async fn create(&self, body: Value) -> HookResult<Value> {
        (self)(body).await
    }
}

#[async_trait]
impl<F, Fut> GetByIdHook for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = HookResult<Value>> + Send + 'static,
{
    async fn get_by_id(&self, id: &str) -> HookResult<Value> {
        (self)(id.to_owned()).await
    }
}

#[async_trait]
impl<F, Fut> UpdateByIdHook for F
where
    F: Fn(String, Request) -> Fut + Send + Sync,
    Fut: Future<Output = HookResult<Value>> + Send + 'static,
{
    async fn update_by_id(&self, id: &str, request: &Request) -> HookResult<Value> {
        (self)(id.to_owned(), request.clone()).await
    }
}

#[async_trait]
impl<F, Fut> ListAllHook for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = HookResult<Vec<Value>>> + Send + 'static,
{
    async fn rows(&self) -> HookResult<Vec<Value>> {
        (self)().await
    }
}
