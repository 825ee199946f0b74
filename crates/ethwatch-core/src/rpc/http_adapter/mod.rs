//! Native JSON-RPC client for Ethereum compatible endpoints.
//!
//! Implements [`EthereumRpc`](super::EthereumRpc) over HTTP POST using
//! `reqwest`, one request per call with a fixed request id.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
