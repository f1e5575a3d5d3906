//! JSON method codec.
//!
//! Wire layout:
//!
//! - call: `{"method": "...", "arguments": {key: value}}`
//!
//! Calls decode in two stages: [`PendingCall::from_bytes`] reads the method
//! name and leaves the arguments as raw JSON, [`PendingCall::into_call`]
//! decodes them. A receiver can answer a method it does not serve without
//! ever looking at its arguments.
//!
//! - success reply: `{"success": value}`
//! - error reply: `{"error": {"code": "...", "message": "...", "details": ...}}`
//! - not-implemented reply: zero bytes

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::call::{MethodCall, MethodError, MethodResponse};
use super::value::{ArgumentMap, EncodableValue};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed method call: {0}")]
    MalformedCall(#[source] serde_json::Error),

    #[error("malformed arguments for {method}: {source}")]
    MalformedArguments {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed method reply: {0}")]
    MalformedReply(#[source] serde_json::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ReplyEnvelopeRef<'a> {
    Success(&'a EncodableValue),
    Error(&'a MethodError),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplyEnvelope {
    Success(EncodableValue),
    Error(MethodError),
}

/// A call whose method name is known but whose arguments are still raw.
/// 已知方法名、参数尚未解码的调用。
#[derive(Debug, Deserialize)]
pub struct PendingCall {
    pub method: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

impl PendingCall {
    /// Read only the envelope. Argument values are not inspected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::MalformedCall)
    }

    /// Decode the arguments. A missing or `null` argument map is empty.
    pub fn into_call(self) -> Result<MethodCall, CodecError> {
        let arguments = if self.arguments.is_null() {
            ArgumentMap::new()
        } else {
            serde_json::from_value(self.arguments).map_err(|source| {
                CodecError::MalformedArguments {
                    method: self.method.clone(),
                    source,
                }
            })?
        };
        Ok(MethodCall::new(self.method, arguments))
    }
}

impl MethodCall {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(CodecError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::MalformedCall)
    }
}

impl MethodResponse {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let envelope = match self {
            MethodResponse::Success(value) => ReplyEnvelopeRef::Success(value),
            MethodResponse::Error(err) => ReplyEnvelopeRef::Error(err),
            MethodResponse::NotImplemented => return Ok(Vec::new()),
        };
        serde_json::to_vec(&envelope).map_err(CodecError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.is_empty() {
            return Ok(MethodResponse::NotImplemented);
        }
        let envelope: ReplyEnvelope =
            serde_json::from_slice(bytes).map_err(CodecError::MalformedReply)?;
        Ok(match envelope {
            ReplyEnvelope::Success(value) => MethodResponse::Success(value),
            ReplyEnvelope::Error(err) => MethodResponse::Error(err),
        })
    }
}
