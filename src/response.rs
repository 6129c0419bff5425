//! The outbound transport seam and the success envelope.

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Outbound side of the transport boundary.
///
/// The embedding framework implements this over its native response object.
/// The resource calls `set_status` only for the 404 path-not-resolved case
/// and `send_json` exactly once per handled request; all other failures are
/// returned as errors for the caller to translate.
pub trait ResponseWriter {
    /// Set the HTTP status code for the response.
    fn set_status(&mut self, status: StatusCode);

    /// Send a JSON body.
    fn send_json(&mut self, body: Value);
}

/// JSON wrapper returned for every successful operation.
///
/// Single-entity operations carry the formatted entity under `data`; list
/// operations carry an array. The `pagination` block appears only when the
/// paged list hook advertised a non-zero total (see [`crate::hooks::Count`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
}

impl Envelope {
    /// Envelope for a single formatted entity.
    pub fn item(data: Value) -> Self {
        Self {
            data,
            pagination: None,
        }
    }

    /// Envelope for a list of formatted entities, without pagination.
    pub fn list(rows: Vec<Value>) -> Self {
        Self {
            data: Value::Array(rows),
            pagination: None,
        }
    }

    /// Attach a pagination block.
    pub fn with_pagination(mut self, pagination: Value) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
