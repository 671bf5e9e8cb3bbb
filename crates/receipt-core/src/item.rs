//! # Line Items
//!
//! One purchased product: a free-text description and a price.
//!
//! Prices are not range checked. Negative prices parse and flow through to
//! scoring unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{strip_spaces, LineItemError};

/// A line item exactly as it arrived on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct UnparsedLineItem {
    pub short_description: String,
    pub price: String,
}

impl UnparsedLineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        UnparsedLineItem {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A parsed line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Copied verbatim, surrounding whitespace included.
    pub short_description: String,
    pub price: f64,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: f64) -> Self {
        LineItem {
            short_description: short_description.into(),
            price,
        }
    }

    /// Parses the price of a raw item.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::item::{LineItem, UnparsedLineItem};
    ///
    /// let item = LineItem::parse(&UnparsedLineItem::new("Gatorade", "2.25")).unwrap();
    /// assert_eq!(item.price, 2.25);
    ///
    /// assert!(LineItem::parse(&UnparsedLineItem::new("Gatorade", "  ")).is_err());
    /// ```
    pub fn parse(raw: &UnparsedLineItem) -> Result<LineItem, LineItemError> {
        if strip_spaces(&raw.price).is_empty() {
            return Err(LineItemError::EmptyPrice {
                description: raw.short_description.clone(),
            });
        }

        let price = raw
            .price
            .parse::<f64>()
            .map_err(|source| LineItemError::ParsingFailure {
                description: raw.short_description.clone(),
                price: raw.price.clone(),
                source,
            })?;

        Ok(LineItem {
            short_description: raw.short_description.clone(),
            price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_item() {
        let item = LineItem::parse(&UnparsedLineItem::new("Mountain Dew 12PK", "6.49")).unwrap();
        assert_eq!(item, LineItem::new("Mountain Dew 12PK", 6.49));
    }

    #[test]
    fn test_description_is_verbatim() {
        let raw = UnparsedLineItem::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00");
        let item = LineItem::parse(&raw).unwrap();
        assert_eq!(item.short_description, "   Klarbrunn 12-PK 12 FL OZ  ");
        assert_eq!(item.price, 12.0);
    }

    #[test]
    fn test_negative_price_is_accepted() {
        let item = LineItem::parse(&UnparsedLineItem::new("Refund", "-12.00")).unwrap();
        assert_eq!(item.price, -12.0);
    }

    #[test]
    fn test_empty_price() {
        for price in ["", "   "] {
            let err = LineItem::parse(&UnparsedLineItem::new("Gatorade", price)).unwrap_err();
            assert_eq!(
                err,
                LineItemError::EmptyPrice {
                    description: "Gatorade".to_string()
                }
            );
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_unparseable_price() {
        for price in ["two dollars", "2.2.5", "$2.25", "2,25"] {
            let err = LineItem::parse(&UnparsedLineItem::new("Gatorade", price)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParsingFailure);
            match err {
                LineItemError::ParsingFailure { price: got, .. } => assert_eq!(got, price),
                other => panic!("expected parsing failure, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wire_format() {
        let raw: UnparsedLineItem =
            serde_json::from_str(r#"{"shortDescription":"Gatorade","price":"2.25"}"#).unwrap();
        assert_eq!(raw, UnparsedLineItem::new("Gatorade", "2.25"));

        let missing: UnparsedLineItem = serde_json::from_str(r#"{"shortDescription":"x"}"#).unwrap();
        assert_eq!(missing.price, "");
    }
}
