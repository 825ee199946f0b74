use crate::types::Address;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("address {0} is not subscribed")]
    NotSubscribed(Address),

    #[error("RPC failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Failures of the round trip itself, or errors reported by the node.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error(
        "JSON-RPC error {code}: {message}{}",
        .data.as_ref().map(|data| format!(" (data: {data})")).unwrap_or_default()
    )]
    ServerError {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("JSON-RPC error: {0}")]
    NonStandard(String),
}

/// Malformed data in a response that otherwise arrived intact.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("hex quantity `{0}` is missing the 0x prefix")]
    MissingHexPrefix(String),

    #[error("invalid hex quantity `{0}`")]
    InvalidHex(String),

    #[error("hex quantity `{0}` does not fit in 64 bits")]
    HexOverflow(String),

    #[error("decode JSON-RPC envelope: {0}")]
    Envelope(String),

    #[error("invalid {method} result: {message}")]
    Result { method: String, message: String },

    #[error("{method} returned null")]
    NullResult { method: String },
}
