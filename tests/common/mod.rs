//! Shared helpers for collection-resource integration tests.

use collection_resource::ResponseWriter;
use http::StatusCode;
use serde_json::Value;

/// Response writer that records what the resource wrote.
#[derive(Debug, Default)]
pub struct RecordingResponse {
    pub status: Option<StatusCode>,
    pub body: Option<Value>,
}

impl RecordingResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseWriter for RecordingResponse {
    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn send_json(&mut self, body: Value) {
        self.body = Some(body);
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
