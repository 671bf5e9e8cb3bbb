//! # Receipt Processor
//!
//! Glue between the HTTP handlers, the pure core and the store.
//!
//! ```text
//! UnparsedReceipt ──► new id ──► Receipt::parse ──► points::breakdown
//!                                                        │
//!                         store.put_receipt ◄────────────┤
//!                         store.put_points  ◄────────────┘
//! ```
//!
//! Nothing is stored for a receipt that fails to parse or validate.

use std::sync::Arc;

use receipt_core::{points, Receipt, UnparsedReceipt};
use receipt_store::{ReceiptStore, StoredReceipt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Outcome of a successfully processed receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub id: String,
    pub points: i64,
}

/// Parses, scores and stores receipts.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: Arc<dyn ReceiptStore>,
    validate: bool,
}

impl ReceiptProcessor {
    pub fn new(store: Arc<dyn ReceiptStore>, validate: bool) -> Self {
        ReceiptProcessor { store, validate }
    }

    /// Assigns a fresh id to `raw`, scores it and stores both.
    pub fn process(&self, raw: &UnparsedReceipt) -> ApiResult<Processed> {
        let id = Uuid::new_v4().to_string();

        let receipt = Receipt::parse(id.as_str(), raw, self.validate).map_err(|e| {
            warn!(
                receipt_id = %e.id(),
                kind = %e.kind(),
                causes = e.causes().len(),
                "Rejected receipt"
            );
            ApiError::from(e)
        })?;

        let breakdown = points::breakdown(&receipt);
        let points = breakdown.total();
        debug!(receipt_id = %id, ?breakdown, "Scored receipt");

        let retailer = receipt.retailer.clone();
        self.store.put_receipt(receipt)?;
        self.store.put_points(&id, points)?;

        info!(receipt_id = %id, retailer = %retailer, points, "Processed receipt");
        Ok(Processed { id, points })
    }

    /// Points previously awarded to `id`.
    pub fn points(&self, id: &str) -> ApiResult<i64> {
        self.store
            .get_points(id)?
            .ok_or_else(|| ApiError::not_found("Receipt", id))
    }

    pub fn receipt(&self, id: &str) -> ApiResult<StoredReceipt> {
        self.store
            .get_receipt(id)?
            .ok_or_else(|| ApiError::not_found("Receipt", id))
    }

    pub fn validates(&self) -> bool {
        self.validate
    }
}
