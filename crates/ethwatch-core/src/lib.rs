pub mod client;
pub mod error;
pub mod hex;
pub mod registry;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;

pub use client::ChainClient;
pub use error::{CoreError, ParseError, RpcError};
pub use registry::{MemoryStore, SubscriberStore};
pub use types::{Address, Block, BlockHeight, Transaction};
