//! # In-Memory Store
//!
//! [`ReceiptStore`] backed by two `RwLock<HashMap<..>>` maps.
//!
//! ## Thread Safety
//! Locks are held only for the duration of a single map operation and never
//! across an `.await`, so a plain `std::sync::RwLock` is enough.

use std::collections::HashMap;
use std::sync::RwLock;

use receipt_core::Receipt;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::{ReceiptStore, StoredReceipt};

/// Process-lifetime receipt storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: RwLock<HashMap<String, StoredReceipt>>,
    points: RwLock<HashMap<String, i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn put_receipt(&self, receipt: Receipt) -> StoreResult<()> {
        let mut receipts = self
            .receipts
            .write()
            .map_err(|_| StoreError::LockPoisoned("receipts"))?;

        if receipts.contains_key(&receipt.id) {
            return Err(StoreError::Duplicate(receipt.id));
        }

        debug!(receipt_id = %receipt.id, items = receipt.items.len(), "Storing receipt");
        receipts.insert(receipt.id.clone(), StoredReceipt::new(receipt));
        Ok(())
    }

    fn put_points(&self, id: &str, points: i64) -> StoreResult<()> {
        let mut map = self
            .points
            .write()
            .map_err(|_| StoreError::LockPoisoned("points"))?;

        debug!(receipt_id = %id, points, "Storing points");
        map.insert(id.to_string(), points);
        Ok(())
    }

    fn get_points(&self, id: &str) -> StoreResult<Option<i64>> {
        let map = self
            .points
            .read()
            .map_err(|_| StoreError::LockPoisoned("points"))?;
        Ok(map.get(id).copied())
    }

    fn get_receipt(&self, id: &str) -> StoreResult<Option<StoredReceipt>> {
        let receipts = self
            .receipts
            .read()
            .map_err(|_| StoreError::LockPoisoned("receipts"))?;
        Ok(receipts.get(id).cloned())
    }

    fn len(&self) -> StoreResult<usize> {
        let receipts = self
            .receipts
            .read()
            .map_err(|_| StoreError::LockPoisoned("receipts"))?;
        Ok(receipts.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn receipt(id: &str) -> Receipt {
        Receipt {
            id: id.to_string(),
            retailer: "Target".to_string(),
            ..Receipt::default()
        }
    }

    #[test]
    fn test_put_and_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        store.put_receipt(receipt("a")).unwrap();
        store.put_points("a", 28).unwrap();

        assert_eq!(store.get_points("a").unwrap(), Some(28));
        assert_eq!(store.get_receipt("a").unwrap().map(|r| r.receipt), Some(receipt("a")));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let store = MemoryStore::new();
        assert_eq!(store.get_points("missing").unwrap(), None);
        assert!(store.get_receipt("missing").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_receipt_is_rejected() {
        let store = MemoryStore::new();
        store.put_receipt(receipt("a")).unwrap();

        assert_eq!(
            store.put_receipt(receipt("a")),
            Err(StoreError::Duplicate("a".to_string()))
        );
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_points_are_replaced() {
        let store = MemoryStore::new();
        store.put_points("a", 1).unwrap();
        store.put_points("a", -3).unwrap();
        assert_eq!(store.get_points("a").unwrap(), Some(-3));
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let id = format!("receipt-{n}");
                    store.put_receipt(receipt(&id)).unwrap();
                    store.put_points(&id, n).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 8);
        assert_eq!(store.get_points("receipt-5").unwrap(), Some(5));
    }
}
