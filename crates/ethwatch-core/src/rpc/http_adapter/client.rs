use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};
use crate::hex::parse_quantity;
use crate::types::{Block, BlockHeight};

use super::super::EthereumRpc;
use super::connection::parse_connection;
use super::protocol::{
    decode_envelope, decode_result, parse_jsonrpc_error, JsonRpcRequest, RpcOutcome,
};

const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

/// Ethereum JSON-RPC client over HTTP(S).
///
/// Sends one POST per call and surfaces the first failure; there is no
/// retry, batching, or caching.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpRpcClient {
    /// Create a new client for an HTTP(S) endpoint.
    ///
    /// With `timeout` unset a request waits for the node indefinitely. When
    /// set, it bounds the whole round trip and expiry is reported as a
    /// transport error.
    pub fn new(connection: &str, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let url = parse_connection(connection)?;

        let mut builder = reqwest::Client::builder().tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(RpcError::Transport)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn rpc_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        debug!(rpc.method = method, rpc.params = params.len(), "rpc call");
        let req = JsonRpcRequest::new(method, params);

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        let outcome = match decode_envelope(&body) {
            Ok(outcome) => outcome,
            // Proxies and gateways answer failures with HTML; that is a
            // transport problem, not a malformed node reply.
            Err(_) if !status.is_success() => {
                return Err(RpcError::HttpStatus {
                    status: status.as_u16(),
                    body,
                }
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        match outcome {
            RpcOutcome::Failure(err) => Err(parse_jsonrpc_error(err)),
            RpcOutcome::Success(result) => Ok(result),
        }
    }
}

#[async_trait]
impl EthereumRpc for HttpRpcClient {
    async fn block_number(&self) -> Result<BlockHeight, CoreError> {
        let raw = self.rpc_call(ETH_BLOCK_NUMBER, Vec::new()).await?;
        let quantity: String = decode_result(ETH_BLOCK_NUMBER, raw)?;
        Ok(BlockHeight(parse_quantity(&quantity)?))
    }

    async fn block_with_transactions(&self, height: BlockHeight) -> Result<Block, CoreError> {
        let raw = self
            .rpc_call(
                ETH_GET_BLOCK_BY_NUMBER,
                vec![serde_json::json!(height.to_hex()), serde_json::json!(true)],
            )
            .await?;
        Ok(decode_result::<Block>(ETH_GET_BLOCK_BY_NUMBER, raw)?)
    }
}
