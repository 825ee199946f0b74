//! Domain types for the ethwatch engine.
//!
//! Contains the account identifier (`Address`), the chain position
//! (`BlockHeight`), and the decoded block contents (`Block`, `Transaction`)
//! as returned by `eth_getBlockByNumber` with full transaction objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::hex::encode_quantity;

// ==============================================================================
// Address
// ==============================================================================

/// An account identifier as it appears on the wire.
///
/// Opaque and case-sensitive: two addresses match only if their strings are
/// byte-for-byte equal. The only validation is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::InvalidInput("address must not be empty".to_owned()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ==============================================================================
// Block Height
// ==============================================================================

/// A block number, wrapped for type safety.
///
/// Never cached: every read of the current height goes back to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// The `0x`-prefixed quantity form used as a JSON-RPC block parameter.
    pub fn to_hex(self) -> String {
        encode_quantity(self.0)
    }
}

impl std::ops::Deref for BlockHeight {
    type Target = u64;

    fn deref(&self) -> &u64 {
        &self.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==============================================================================
// Block Contents
// ==============================================================================

/// A transaction as listed inside a full block.
///
/// `block_number` and `value` stay hex strings exactly as the node sent them;
/// no arithmetic is done on either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    pub block_number: String,
    pub from: Address,
    /// `None` for contract-creation transactions.
    pub to: Option<Address>,
    pub value: String,
}

impl Transaction {
    /// True if `address` is the sender or the recipient.
    pub fn touches(&self, address: &Address) -> bool {
        self.from == *address || self.to.as_ref() == Some(address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub hash: String,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_rejects_empty() {
        let err = Address::new("").expect_err("empty address must be rejected");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn address_comparison_is_case_sensitive() {
        let lower = Address::new("0xabc").expect("valid address");
        let upper = Address::new("0xABC").expect("valid address");
        assert_ne!(lower, upper);
        assert!(lower == *"0xabc");
    }

    #[test]
    fn block_height_renders_hex_param() {
        assert_eq!(BlockHeight(0).to_hex(), "0x0");
        assert_eq!(BlockHeight(16).to_hex(), "0x10");
        assert_eq!(BlockHeight(19_000_000).to_hex(), "0x121eac0");
    }

    #[test]
    fn transaction_decodes_null_recipient() {
        let tx: Transaction = serde_json::from_value(serde_json::json!({
            "hash": "0xaa",
            "blockNumber": "0x5",
            "from": "0x01",
            "to": null,
            "value": "0x0",
            "gas": "0x5208"
        }))
        .expect("transaction must decode");

        assert_eq!(tx.to, None);
        assert!(tx.touches(&Address::new("0x01").expect("valid address")));
        assert!(!tx.touches(&Address::new("0x02").expect("valid address")));
    }
}
