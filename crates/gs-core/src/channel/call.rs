use serde::{Deserialize, Serialize};

use super::value::{ArgumentMap, EncodableValue};

/// One request dispatched through a logical channel.
/// 通过逻辑通道分发的一次调用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: ArgumentMap,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: ArgumentMap) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Look up an argument. An explicit `Null` counts as absent.
    pub fn argument(&self, key: &str) -> Option<&EncodableValue> {
        self.arguments.get(key).filter(|value| !value.is_null())
    }
}

/// Structured failure carried back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<EncodableValue>,
}

/// The single reply produced for a [`MethodCall`].
/// 一次调用产生的唯一响应。
///
/// The three variants are disjoint: a caller can always tell a method that
/// does not exist apart from a method that ran and failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodResponse {
    Success(EncodableValue),
    Error(MethodError),
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<EncodableValue>) -> Self {
        MethodResponse::Success(value.into())
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResponse::Error(MethodError {
            code: code.into(),
            message: message.into(),
            details: None,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success(_))
    }

    /// Error code, if this is an error reply.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResponse::Error(err) => Some(&err.code),
            _ => None,
        }
    }
}
