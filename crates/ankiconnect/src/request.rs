//! The AnkiConnect request/response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Protocol version sent with every request and the minimum accepted from
/// the server.
pub const PROTOCOL_VERSION: u32 = 6;

/// The request format expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a, P> {
    pub action: &'a str,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

impl<'a, P> Request<'a, P> {
    pub fn new(action: &'a str, version: u32, key: Option<&'a str>, params: Option<P>) -> Self {
        Self {
            action,
            version,
            key,
            params,
        }
    }
}

/// The response format returned by AnkiConnect.
///
/// `result` stays untyped until the error slot has been checked, so a
/// failed call never trips over a result shape it did not promise.
#[derive(Debug, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl Response {
    /// Unwrap the envelope into the caller's expected type.
    pub fn into_result<R: DeserializeOwned>(self) -> Result<R> {
        if let Some(message) = self.error {
            return Err(Error::from_envelope(message));
        }

        let was_null = self.result.is_null();
        serde_json::from_value(self.result).map_err(|e| {
            if was_null {
                Error::EmptyResponse
            } else {
                Error::Json(e)
            }
        })
    }

    /// Check the error slot only, discarding whatever the result holds.
    pub fn into_unit(self) -> Result<()> {
        match self.error {
            Some(message) => Err(Error::from_envelope(message)),
            None => Ok(()),
        }
    }
}
