use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{CoreError, ParseError, RpcError};
use crate::types::{Block, BlockHeight};

use super::EthereumRpc;

/// A mock node for testing. Serves a canned head height and blocks from a
/// `HashMap` populated via the builder pattern, and counts every call so
/// tests can assert that no round trip happened.
pub struct MockRpc {
    height: BlockHeight,
    blocks: HashMap<BlockHeight, Block>,
    node_error: Option<(i64, String)>,
    calls: AtomicUsize,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            height: BlockHeight(0),
            blocks: HashMap::new(),
            node_error: None,
        }
    }

    /// Number of trait calls served so far, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.node_error {
            Some((code, message)) => Err(RpcError::ServerError {
                code: *code,
                message: message.clone(),
                data: None,
            }
            .into()),
            None => Ok(()),
        }
    }
}

pub struct MockRpcBuilder {
    height: BlockHeight,
    blocks: HashMap<BlockHeight, Block>,
    node_error: Option<(i64, String)>,
}

impl MockRpcBuilder {
    pub fn with_height(mut self, height: u64) -> Self {
        self.height = BlockHeight(height);
        self
    }

    pub fn with_block(mut self, height: u64, block: Block) -> Self {
        self.blocks.insert(BlockHeight(height), block);
        self
    }

    /// Make every call fail as if the node returned a JSON-RPC error object.
    pub fn with_node_error(mut self, code: i64, message: &str) -> Self {
        self.node_error = Some((code, message.to_owned()));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            height: self.height,
            blocks: self.blocks,
            node_error: self.node_error,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EthereumRpc for MockRpc {
    async fn block_number(&self) -> Result<BlockHeight, CoreError> {
        self.record_call()?;
        Ok(self.height)
    }

    async fn block_with_transactions(&self, height: BlockHeight) -> Result<Block, CoreError> {
        self.record_call()?;
        // A real node answers `null` for heights it does not have yet.
        self.blocks.get(&height).cloned().ok_or_else(|| {
            ParseError::NullResult {
                method: "eth_getBlockByNumber".to_owned(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_block_behaves_like_null_result() {
        let rpc = MockRpc::builder().with_height(7).build();
        let err = rpc
            .block_with_transactions(BlockHeight(7))
            .await
            .expect_err("unknown block must fail");
        assert!(matches!(err, CoreError::Parse(ParseError::NullResult { .. })));
        assert_eq!(rpc.calls(), 1);
    }

    #[tokio::test]
    async fn node_error_applies_to_every_method() {
        let rpc = MockRpc::builder()
            .with_height(3)
            .with_node_error(-32000, "header not found")
            .build();

        assert!(matches!(
            rpc.block_number().await,
            Err(CoreError::Rpc(RpcError::ServerError { code: -32000, .. }))
        ));
        assert!(matches!(
            rpc.block_with_transactions(BlockHeight(3)).await,
            Err(CoreError::Rpc(RpcError::ServerError { code: -32000, .. }))
        ));
        assert_eq!(rpc.calls(), 2);
    }
}
