//! # receipt-store: Id-Keyed Receipt Storage
//!
//! The storage seam between the HTTP layer and receipt-core. The core never
//! touches it; the API layer hands in parsed receipts and scores and reads
//! scores back by id.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.put_receipt(receipt)                                    │
//! │       │  store.put_points(id, points)                                  │
//! │       │  store.get_points(id)                                          │
//! │       ▼                                                                 │
//! │  ReceiptStore (trait)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryStore                                                           │
//! │  ├── receipts: RwLock<HashMap<id, StoredReceipt>>                     │
//! │  └── points:   RwLock<HashMap<id, i64>>                               │
//! │                                                                         │
//! │  Lives for the lifetime of the process. Nothing is persisted.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::Receipt;
//! use receipt_store::{MemoryStore, ReceiptStore};
//!
//! let store = MemoryStore::new();
//! let receipt = Receipt { id: "abc".to_string(), ..Receipt::default() };
//!
//! store.put_receipt(receipt).unwrap();
//! store.put_points("abc", 42).unwrap();
//! assert_eq!(store.get_points("abc").unwrap(), Some(42));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use receipt_core::Receipt;
use serde::{Deserialize, Serialize};

// =============================================================================
// Stored Receipt
// =============================================================================

/// A receipt together with the moment it was accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReceipt {
    #[serde(flatten)]
    pub receipt: Receipt,
    pub processed_at: DateTime<Utc>,
}

impl StoredReceipt {
    /// Wraps a receipt, stamping it with the current time.
    pub fn new(receipt: Receipt) -> Self {
        StoredReceipt {
            receipt,
            processed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.receipt.id
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Narrow id-keyed storage for receipts and their scores.
///
/// Implementations must be safe to share between request handlers.
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under its own id. Fails if the id is taken.
    fn put_receipt(&self, receipt: Receipt) -> StoreResult<()>;

    /// Stores (or replaces) the score for an id.
    fn put_points(&self, id: &str, points: i64) -> StoreResult<()>;

    fn get_points(&self, id: &str) -> StoreResult<Option<i64>>;

    fn get_receipt(&self, id: &str) -> StoreResult<Option<StoredReceipt>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
