//! Shared test helpers for `ethwatch-core` unit tests.
//!
//! Builder functions for addresses, transactions, and blocks so that tests
//! across modules share a single source of truth for dummy data.

use crate::types::{Address, Block, Transaction};

pub fn addr(raw: &str) -> Address {
    Address::new(raw).expect("test address must be non-empty")
}

/// Build a zero-value transaction in block `0x5`. Pass `to = None` for a
/// contract creation.
pub fn make_tx(hash: &str, from: &str, to: Option<&str>) -> Transaction {
    Transaction {
        hash: hash.to_owned(),
        block_number: "0x5".to_owned(),
        from: addr(from),
        to: to.map(addr),
        value: "0x0".to_owned(),
    }
}

pub fn make_block(hash: &str, transactions: Vec<Transaction>) -> Block {
    Block {
        hash: hash.to_owned(),
        transactions,
    }
}
