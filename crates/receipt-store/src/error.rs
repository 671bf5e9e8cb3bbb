//! # Store Error Types
//!
//! Error types for id-keyed storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← Serialized for HTTP clients                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A receipt with this id is already stored.
    ///
    /// ## When This Occurs
    /// - The caller reused an id instead of generating a fresh one
    #[error("Receipt '{0}' already exists")]
    Duplicate(String),

    /// A thread panicked while holding a store lock.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
