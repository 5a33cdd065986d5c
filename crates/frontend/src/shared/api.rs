//! Backend boundary used by edit sessions
//!
//! The transport itself (fetch, auth headers, response envelopes) lives
//! outside this crate; implementors return the unwrapped `data` payload.

use async_trait::async_trait;
use contracts::shared::record::Record;
use serde_json::Value;
use thiserror::Error;

/// Errors reported by the backend boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// JSON request/response boundary of the console backend
#[async_trait(?Send)]
pub trait EntityApi {
    /// GET `url`, returning the response payload
    async fn get(&self, url: &str) -> Result<Value, ApiError>;

    /// POST `body` to `url`, returning the response payload
    async fn post(&self, url: &str, body: &Record) -> Result<Value, ApiError>;
}

/// Interpret a response payload as a record
pub fn expect_record(value: Value) -> Result<Record, ApiError> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(ApiError::InvalidResponse(format!(
            "expected JSON object, got {}",
            contracts::shared::record::value_kind(&other)
        ))),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend for session tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryApi {
        pub responses: HashMap<String, Value>,
        pub posted: RefCell<Vec<(String, Record)>>,
        pub fail_post: Option<ApiError>,
    }

    impl MemoryApi {
        pub fn with_response(mut self, url: &str, value: Value) -> Self {
            self.responses.insert(url.to_string(), value);
            self
        }
    }

    #[async_trait(?Send)]
    impl EntityApi for MemoryApi {
        async fn get(&self, url: &str) -> Result<Value, ApiError> {
            self.responses.get(url).cloned().ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("no record at {}", url),
            })
        }

        async fn post(&self, url: &str, body: &Record) -> Result<Value, ApiError> {
            if let Some(err) = &self.fail_post {
                return Err(err.clone());
            }
            self.posted.borrow_mut().push((url.to_string(), body.clone()));
            Ok(Value::Bool(true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_record() {
        assert!(expect_record(json!({"a": 1})).is_ok());
        assert!(matches!(
            expect_record(json!([1])),
            Err(ApiError::InvalidResponse(_))
        ));
    }
}
