//! # Receipts
//!
//! Composes the date, time and line-item parsers into a full receipt.
//!
//! ## Parse Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt::parse(id, raw, validate)                    │
//! │                                                                         │
//! │  Phase 1: structural (every field attempted, nothing short-circuits)   │
//! │  ├── Date::parse(purchase_date, false)                                 │
//! │  ├── Time::parse(purchase_time, false)                                 │
//! │  ├── LineItem::parse(item) for every item                              │
//! │  └── total as f64                                                      │
//! │           │                                                             │
//! │           ├── any failure ──► ReceiptError::ParsingFailure             │
//! │           ▼                                                             │
//! │  Phase 2: semantic (only when validate = true)                         │
//! │  ├── date in calendar                                                  │
//! │  ├── time on the clock                                                 │
//! │  └── |total − Σ item.price| < 0.001                                    │
//! │           │                                                             │
//! │           └── any failure ──► ReceiptError::InvalidReceipt             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date::Date;
use crate::error::{ErrorList, ReceiptError, ReceiptFieldError, ReceiptResult};
use crate::item::{LineItem, UnparsedLineItem};
use crate::time::Time;

/// Largest accepted gap between the declared total and the item sum.
pub const TOTAL_TOLERANCE: f64 = 0.001;

// =============================================================================
// Unparsed Receipt
// =============================================================================

/// A receipt exactly as it arrived on the wire. Every field is a string.
///
/// ## Wire Format
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
///
/// Missing fields deserialize as empty strings so they are reported by the
/// parser rather than by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct UnparsedReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<UnparsedLineItem>,
    pub total: String,
}

// =============================================================================
// Receipt
// =============================================================================

/// A fully typed receipt, the sole input to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Assigned by the caller before parsing. Opaque here.
    pub id: String,
    pub retailer: String,
    pub purchase_date: Date,
    pub purchase_time: Time,
    pub items: Vec<LineItem>,
    pub total: f64,
}

impl Receipt {
    /// Parses a raw receipt, optionally validating it as a whole.
    ///
    /// On failure the error still carries the best-effort receipt. Items
    /// that failed to parse are left out of it.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::{Receipt, UnparsedLineItem, UnparsedReceipt};
    ///
    /// let raw = UnparsedReceipt {
    ///     retailer: "Target".to_string(),
    ///     purchase_date: "2022-01-01".to_string(),
    ///     purchase_time: "13:01".to_string(),
    ///     items: vec![UnparsedLineItem::new("Pepsi - 12-oz", "1.25")],
    ///     total: "1.25".to_string(),
    /// };
    ///
    /// let receipt = Receipt::parse("abc", &raw, true).unwrap();
    /// assert_eq!(receipt.id, "abc");
    /// assert_eq!(receipt.total, 1.25);
    /// ```
    pub fn parse(
        id: impl Into<String>,
        raw: &UnparsedReceipt,
        validate: bool,
    ) -> ReceiptResult<Receipt> {
        let id = id.into();
        let mut causes = ErrorList::new();

        let purchase_date = causes
            .collect(
                Date::parse(&raw.purchase_date, false).map_err(ReceiptFieldError::PurchaseDate),
            )
            .unwrap_or_default();

        let purchase_time = causes
            .collect(
                Time::parse(&raw.purchase_time, false).map_err(ReceiptFieldError::PurchaseTime),
            )
            .unwrap_or_default();

        let items = raw
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                causes.collect(
                    LineItem::parse(item).map_err(|source| ReceiptFieldError::Item { index, source }),
                )
            })
            .collect();

        let total = causes
            .collect(raw.total.parse::<f64>().map_err(|source| ReceiptFieldError::Total {
                input: raw.total.clone(),
                source,
            }))
            .unwrap_or_default();

        let receipt = Receipt {
            id: id.clone(),
            retailer: raw.retailer.clone(),
            purchase_date,
            purchase_time,
            items,
            total,
        };

        if !causes.is_empty() {
            return Err(ReceiptError::ParsingFailure {
                id,
                input: Box::new(raw.clone()),
                receipt: Box::new(receipt),
                causes,
            });
        }

        if validate {
            let causes = receipt.validation_failures();
            if !causes.is_empty() {
                return Err(ReceiptError::InvalidReceipt {
                    id,
                    receipt: Box::new(receipt),
                    causes,
                });
            }
        }

        Ok(receipt)
    }

    /// Runs the semantic checks on an already parsed receipt.
    pub fn validate(&self) -> ReceiptResult<()> {
        let causes = self.validation_failures();
        if causes.is_empty() {
            return Ok(());
        }
        Err(ReceiptError::InvalidReceipt {
            id: self.id.clone(),
            receipt: Box::new(self.clone()),
            causes,
        })
    }

    /// Sum of every item price.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    fn validation_failures(&self) -> ErrorList<ReceiptFieldError> {
        let mut causes = ErrorList::new();

        if let Err(e) = self.purchase_date.validate() {
            causes.push(ReceiptFieldError::PurchaseDate(e));
        }
        if let Err(e) = self.purchase_time.validate() {
            causes.push(ReceiptFieldError::PurchaseTime(e));
        }

        let computed = self.items_total();
        // NaN totals never satisfy the tolerance.
        let consistent = (self.total - computed).abs() < TOTAL_TOLERANCE;
        if !consistent {
            causes.push(ReceiptFieldError::TotalMismatch {
                declared: self.total,
                computed,
            });
        }

        causes
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
