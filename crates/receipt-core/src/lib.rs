//! # receipt-core: Receipt Parsing and Points Scoring
//!
//! This crate turns a loosely typed receipt (every field a string) into a
//! strongly typed [`Receipt`] and scores it. Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (HTTP, JSON)                        │   │
//! │  │     POST /receipts/process      GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UnparsedReceipt + id                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │   date   │  │   time   │  │   item   │  │   receipt    │   │   │
//! │  │   │ YYYY-MM- │  │  HH:MM   │  │  price   │  │ aggregation, │   │   │
//! │  │   │    DD    │  │          │  │          │  │ total check  │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────┬───────┘   │   │
//! │  │                                                    ▼           │   │
//! │  │                                             ┌──────────────┐   │   │
//! │  │                                             │    points    │   │   │
//! │  │                                             └──────────────┘   │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ Receipt + i64                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 receipt-store (id-keyed maps)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`date`] - `YYYY-MM-DD` grammar and calendar validation
//! - [`time`] - `H:MM` / `HH:MM` grammar and clock validation
//! - [`item`] - Line item price parsing
//! - [`receipt`] - Receipt composition, error aggregation, total check
//! - [`points`] - The seven scoring rules
//! - [`error`] - Error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{points, Receipt, UnparsedLineItem, UnparsedReceipt};
//!
//! let raw = UnparsedReceipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![UnparsedLineItem::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! let receipt = Receipt::parse("7fb1377b", &raw, true).unwrap();
//! assert_eq!(points::calculate(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod date;
pub mod error;
pub mod item;
pub mod points;
pub mod receipt;
pub mod time;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use date::Date;
pub use error::{
    DateError, ErrorKind, ErrorList, LineItemError, ReceiptError, ReceiptFieldError,
    ReceiptResult, TimeError,
};
pub use item::{LineItem, UnparsedLineItem};
pub use points::PointsBreakdown;
pub use receipt::{Receipt, UnparsedReceipt, TOTAL_TOLERANCE};
pub use time::Time;

// =============================================================================
// Scenario Tests
// =============================================================================
