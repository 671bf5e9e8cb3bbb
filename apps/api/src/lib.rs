//! # Receipt API
//!
//! HTTP server that scores submitted receipts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Receipt API Server                             │
//! │                                                                         │
//! │  ┌────────────────┐  ┌──────────────────┐  ┌──────────────────────────┐│
//! │  │  routes        │  │  processor       │  │  receipt-store           ││
//! │  │                │  │                  │  │                          ││
//! │  │ • process      │─►│ • assign uuid    │─►│ • MemoryStore            ││
//! │  │ • points       │  │ • parse/validate │  │                          ││
//! │  │ • receipt      │  │ • score          │  │                          ││
//! │  │ • health       │  │                  │  │                          ││
//! │  └────────────────┘  └──────────────────┘  └──────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPTS_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `RECEIPTS_PORT` - HTTP port (default: 8080)
//! - `RECEIPTS_VALIDATE` - Validate receipts before scoring (default: true)
//! - `RECEIPTS_LOG_FILTER` - Log filter when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod error;
pub mod processor;
pub mod routes;

use std::sync::Arc;

use receipt_store::{MemoryStore, ReceiptStore};

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use processor::ReceiptProcessor;
pub use routes::router;

/// Shared application state.
pub struct AppState {
    pub processor: ReceiptProcessor,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>, config: &ApiConfig) -> Self {
        AppState {
            processor: ReceiptProcessor::new(store, config.validate),
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory(config: &ApiConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }
}
