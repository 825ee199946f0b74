//! Ethereum JSON-RPC abstraction layer.
//!
//! Defines the [`EthereumRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpRpcClient;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{Block, BlockHeight};

/// Minimal trait covering the node methods the engine needs.
///
/// Each method performs at most one round trip and never retries.
#[async_trait]
pub trait EthereumRpc: Send + Sync {
    /// `eth_blockNumber`: the node's current head height.
    async fn block_number(&self) -> Result<BlockHeight, CoreError>;

    /// `eth_getBlockByNumber` with full transaction objects.
    async fn block_with_transactions(&self, height: BlockHeight) -> Result<Block, CoreError>;
}
