use serde::de::DeserializeOwned;

use crate::error::{CoreError, ParseError, RpcError};

/// Every call carries the same id: the engine never has two requests in
/// flight, so responses need no correlation.
pub(super) const REQUEST_ID: u64 = 1;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) method: &'a str,
    pub(super) params: Vec<serde_json::Value>,
    pub(super) id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub(super) fn new(method: &'a str, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

/// A decoded response envelope: exactly one of result or error.
#[derive(Debug, PartialEq)]
pub(super) enum RpcOutcome {
    Success(serde_json::Value),
    Failure(serde_json::Value),
}

/// Decode a response body into an [`RpcOutcome`].
///
/// The body must be a JSON object carrying a `result` or an `error` key;
/// any other object (a gateway's own error JSON, say) is not an envelope.
/// A non-null `error` wins over any `result`, so a node error is never
/// masked by a malformed result payload.
pub(super) fn decode_envelope(body: &str) -> Result<RpcOutcome, ParseError> {
    let mut envelope: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ParseError::Envelope(format!("{e}; body={body}")))?;

    if !envelope.contains_key("result") && !envelope.contains_key("error") {
        return Err(ParseError::Envelope(format!(
            "neither result nor error present; body={body}"
        )));
    }

    match envelope.remove("error") {
        Some(err) if !err.is_null() => Ok(RpcOutcome::Failure(err)),
        _ => Ok(RpcOutcome::Success(
            envelope
                .remove("result")
                .unwrap_or(serde_json::Value::Null),
        )),
    }
}

/// Decode a success payload into the method's typed result.
pub(super) fn decode_result<T: DeserializeOwned>(
    method: &str,
    raw: serde_json::Value,
) -> Result<T, ParseError> {
    if raw.is_null() {
        return Err(ParseError::NullResult {
            method: method.to_owned(),
        });
    }
    serde_json::from_value(raw).map_err(|e| ParseError::Result {
        method: method.to_owned(),
        message: e.to_string(),
    })
}

/// Parse a JSON-RPC error value into a structured `CoreError`.
///
/// The JSON-RPC spec defines errors as `{"code": <int>, "message": <string>}`
/// with an optional `data` member. If the error value matches that shape, we
/// produce a `ServerError`; otherwise the raw JSON text is carried in
/// `NonStandard`.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> CoreError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => RpcError::ServerError {
            code: parsed.code,
            message: parsed.message,
            data: parsed.data,
        }
        .into(),
        Err(_) => RpcError::NonStandard(err.to_string()).into(),
    }
}
