//! Transport-agnostic request representation.
//!
//! The embedding web framework constructs a [`Request`] from whatever its
//! native request object looks like. The resource only ever reads the four
//! things declared here: method, URL path, query parameters, and body.

use http::Method;
use serde_json::Value;
use std::collections::HashMap;

/// Inbound request as seen by a [`crate::CollectionResource`].
///
/// The path excludes any query string; query parameters travel in their own
/// map. A request may carry no path at all (the resource answers 404), and
/// the body defaults to JSON `null` when the transport provides none.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: Option<String>,
    query: HashMap<String, String>,
    body: Value,
}

impl Request {
    /// Create a request with the given method and no path, query, or body.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path: None,
            query: HashMap::new(),
            body: Value::Null,
        }
    }

    /// Create a GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET).with_path(path)
    }

    /// Create a POST request for the given path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST).with_path(path)
    }

    /// Create a PUT request for the given path.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT).with_path(path)
    }

    /// Set the URL path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a query parameter.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL path, if the transport provided one.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// All query parameters.
    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// A single query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// The JSON body; `Value::Null` when the transport provided none.
    pub fn body(&self) -> &Value {
        &self.body
    }
}
