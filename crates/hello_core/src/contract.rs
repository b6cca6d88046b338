use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HELLO_MESSAGE: &str = "Hello World!!!";
pub const OK_STATUS_CODE: u16 = 200;

/// Payload serialized into the envelope `body`. Field order is part of the
/// wire format: `message` first, then `input`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelloBody {
    pub message: String,
    pub input: Value,
}

impl HelloBody {
    pub fn new(input: Value) -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
            input,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: OK_STATUS_CODE,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeError {
    message: String,
}

impl EnvelopeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EnvelopeError {}

impl From<serde_json::Error> for EnvelopeError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("failed to serialize hello body: {error}"))
    }
}

/// Wraps `event` in a [`HelloBody`] and returns it as a 200 envelope.
///
/// The event is embedded as-is; no validation is performed.
pub fn build_hello_response(event: &Value) -> Result<ResponseEnvelope, EnvelopeError> {
    let body = serde_json::to_string(&HelloBody::new(event.clone()))?;
    Ok(ResponseEnvelope::ok(body))
}
