//! Builder for [`CollectionResource`].

use super::CollectionResource;
use crate::fields::DerivedFields;
use crate::hooks::{CreateHook, GetByIdHook, Hooks, ListStrategy, UpdateByIdHook};
use serde_json::Value;

/// Assembles the immutable configuration of a [`CollectionResource`].
///
/// Every hook slot is optional: a resource built without, say, a create
/// hook answers POST with
/// [`UnsupportedOperation`](crate::CollectionError::UnsupportedOperation)
/// rather than silently doing nothing.
#[derive(Debug)]
pub struct CollectionResourceBuilder {
    prefix: Vec<String>,
    fields: DerivedFields,
    hooks: Hooks,
}

impl CollectionResourceBuilder {
    pub(crate) fn new(prefix: Vec<String>) -> Self {
        Self {
            prefix,
            fields: DerivedFields::new(),
            hooks: Hooks::default(),
        }
    }

    /// Register a derived output field.
    ///
    /// The computer runs against the entity on every response; on a name
    /// collision the derived value overwrites the entity's own field.
    pub fn field(
        mut self,
        name: impl Into<String>,
        computer: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.fields.insert(name, computer);
        self
    }

    /// Set the hook backing POST at the collection root.
    pub fn create_hook(mut self, hook: impl CreateHook + 'static) -> Self {
        self.hooks.create = Some(Box::new(hook));
        self
    }

    /// Set the hook backing GET on an item route.
    pub fn get_by_id_hook(mut self, hook: impl GetByIdHook + 'static) -> Self {
        self.hooks.get_by_id = Some(Box::new(hook));
        self
    }

    /// Set the hook backing PUT on an item route.
    pub fn update_by_id_hook(mut self, hook: impl UpdateByIdHook + 'static) -> Self {
        self.hooks.update_by_id = Some(Box::new(hook));
        self
    }

    /// Set the strategy backing GET at the collection root.
    pub fn list_strategy(mut self, strategy: ListStrategy) -> Self {
        self.hooks.list = Some(strategy);
        self
    }

    /// Finish building. Infallible: a partial hook table is a valid
    /// configuration.
    pub fn build(self) -> CollectionResource {
        CollectionResource {
            prefix: self.prefix,
            fields: self.fields,
            hooks: self.hooks,
        }
    }
}
