//! Subscriber registry: the set of addresses allowed to query transactions.
//!
//! [`SubscriberStore`] is the storage seam; [`MemoryStore`] is the in-memory
//! backend used by default. A store is owned by one `ChainClient` and lives
//! exactly as long as it does.

use std::collections::HashSet;

use crate::types::Address;

/// Membership capability over a set of addresses.
///
/// Mutations take `&mut self`: a store is driven by a single worker, so
/// exclusive access is enforced by the borrow checker rather than a lock.
/// Wrap the owning client in a `Mutex` before sharing it across tasks.
pub trait SubscriberStore: Send + Sync {
    fn is_subscribed(&self, address: &Address) -> bool;

    /// Add `address`. Returns `true` once the address is a member; adding an
    /// existing member is not an error.
    fn subscribe(&mut self, address: Address) -> bool;

    /// Remove `address` if present. Returns `true` once the address is no
    /// longer a member, whether or not it was one before.
    fn unsubscribe(&mut self, address: &Address) -> bool;

    /// Current members in ascending order.
    fn subscribers(&self) -> Vec<Address>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    subscribers: HashSet<Address>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for MemoryStore {
    fn is_subscribed(&self, address: &Address) -> bool {
        self.subscribers.contains(address)
    }

    fn subscribe(&mut self, address: Address) -> bool {
        self.subscribers.insert(address);
        true
    }

    fn unsubscribe(&mut self, address: &Address) -> bool {
        self.subscribers.remove(address);
        !self.subscribers.contains(address)
    }

    fn subscribers(&self) -> Vec<Address> {
        let mut out: Vec<Address> = self.subscribers.iter().cloned().collect();
        out.sort();
        out
    }
}
