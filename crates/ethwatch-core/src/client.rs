//! `ChainClient`: the engine behind every front-end command.
//!
//! Combines an [`EthereumRpc`] backend with an owned [`SubscriberStore`].
//! Transaction queries only look at the block at the node's current head;
//! earlier blocks are never scanned.

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreError;
use crate::registry::{MemoryStore, SubscriberStore};
use crate::rpc::EthereumRpc;
use crate::types::{Address, Block, BlockHeight, Transaction};

pub struct ChainClient<S = MemoryStore> {
    rpc: Arc<dyn EthereumRpc>,
    store: S,
}

impl ChainClient<MemoryStore> {
    /// Create a client with an empty in-memory subscriber set.
    pub fn new(rpc: Arc<dyn EthereumRpc>) -> Self {
        Self::with_store(rpc, MemoryStore::new())
    }
}

impl<S: SubscriberStore> ChainClient<S> {
    pub fn with_store(rpc: Arc<dyn EthereumRpc>, store: S) -> Self {
        Self { rpc, store }
    }

    /// Query the node's current head height.
    pub async fn current_block_height(&self) -> Result<BlockHeight, CoreError> {
        self.rpc.block_number().await
    }

    /// Transactions in the latest block sent from or to `address`, in block
    /// order.
    ///
    /// Input validation and the subscription check both run before any
    /// request reaches the node.
    pub async fn transactions_for_address(
        &self,
        address: &str,
    ) -> Result<Vec<Transaction>, CoreError> {
        let address = Address::new(address)?;
        if !self.store.is_subscribed(&address) {
            return Err(CoreError::NotSubscribed(address));
        }

        let height = self.rpc.block_number().await?;
        let block = self.rpc.block_with_transactions(height).await?;
        debug!(
            %height,
            block.hash = %block.hash,
            block.txs = block.transactions.len(),
            "scanning latest block"
        );

        Ok(filter_transactions(block, &address))
    }

    pub fn subscribe_address(&mut self, address: &str) -> Result<bool, CoreError> {
        let address = Address::new(address)?;
        Ok(self.store.subscribe(address))
    }

    pub fn unsubscribe_address(&mut self, address: &str) -> Result<bool, CoreError> {
        let address = Address::new(address)?;
        Ok(self.store.unsubscribe(&address))
    }

    /// Membership check; an empty string is never subscribed.
    pub fn is_subscribed(&self, address: &str) -> bool {
        Address::new(address)
            .map(|address| self.store.is_subscribed(&address))
            .unwrap_or(false)
    }

    pub fn subscribers(&self) -> Vec<Address> {
        self.store.subscribers()
    }
}

/// Keep the transactions of `block` that touch `address`, preserving order.
pub fn filter_transactions(block: Block, address: &Address) -> Vec<Transaction> {
    block
        .transactions
        .into_iter()
        .filter(|tx| tx.touches(address))
        .collect()
}
