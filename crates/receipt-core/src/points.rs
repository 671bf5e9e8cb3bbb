//! # Points Engine
//!
//! Scores a parsed [`Receipt`] with seven independent rules.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                          Points                               │
//! │  ─  ────────────────────────────  ───────────────────────────────────  │
//! │  1  Retailer name                 1 per letter or digit                │
//! │  2  Round dollar total            50 if total % 1.00 == 0              │
//! │  3  Quarter multiple total        25 if total % 0.25 == 0              │
//! │  4  Item pairs                    5 per two items                      │
//! │  5  Description length            ceil(price × 0.2) when the trimmed   │
//! │                                   description length is a nonzero      │
//! │                                   multiple of 3 (negative prices give  │
//! │                                   negative points)                     │
//! │  6  Odd purchase day              6                                    │
//! │  7  Purchase between 14:00-16:00  10 (both ends exclusive)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never validates its input: an out-of-range hour simply falls
//! outside the afternoon window.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date::Date;
use crate::item::LineItem;
use crate::receipt::Receipt;
use crate::time::Time;

pub const ROUND_DOLLAR_POINTS: i64 = 50;
pub const QUARTER_MULTIPLE_POINTS: i64 = 25;
pub const ITEM_PAIR_POINTS: i64 = 5;
pub const ODD_DAY_POINTS: i64 = 6;
pub const AFTERNOON_POINTS: i64 = 10;

/// Price multiplier for items whose description length is a multiple of 3.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsBreakdown {
    pub retailer_name: i64,
    pub round_dollar_total: i64,
    pub quarter_multiple_total: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_purchase_day: i64,
    pub afternoon_purchase: i64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: round_dollar_points(receipt.total),
            quarter_multiple_total: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, i64::saturating_add),
            odd_purchase_day: odd_day_points(receipt.purchase_date),
            afternoon_purchase: afternoon_points(receipt.purchase_time),
        }
    }

    /// Sum of all rule contributions. May be zero or negative.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn total(&self) -> i64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}

/// Scores a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::points::calculate;
/// use receipt_core::{Date, LineItem, Receipt, Time};
///
/// let receipt = Receipt {
///     id: "abc".to_string(),
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: Date::new(2022, 3, 20),
///     purchase_time: Time::new(14, 33),
///     items: vec![LineItem::new("Gatorade", 2.25); 4],
///     total: 9.00,
/// };
///
/// assert_eq!(calculate(&receipt), 109);
/// ```
pub fn calculate(receipt: &Receipt) -> i64 {
    breakdown(receipt).total()
}

pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown::for_receipt(receipt)
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_name_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as i64
}

fn is_multiple_of(value: f64, multiple: f64) -> bool {
    value % multiple == 0.0
}

fn round_dollar_points(total: f64) -> i64 {
    if is_multiple_of(total, 1.0) {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: f64) -> i64 {
    if is_multiple_of(total, 0.25) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> i64 {
    (item_count / 2) as i64 * ITEM_PAIR_POINTS
}

fn description_points(item: &LineItem) -> i64 {
    let length = item.short_description.trim_matches(' ').chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }
    (item.price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as i64
}

fn odd_day_points(date: Date) -> i64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(time: Time) -> i64 {
    match (time.hour(), time.minute()) {
        (14, minute) if minute > 0 => AFTERNOON_POINTS,
        (15, _) => AFTERNOON_POINTS,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn target_receipt() -> Receipt {
        Receipt {
            id: "target".to_string(),
            retailer: "Target".to_string(),
            purchase_date: Date::new(2022, 1, 1),
            purchase_time: Time::new(13, 1),
            items: vec![
                LineItem::new("Mountain Dew 12PK", 6.49),
                LineItem::new("Emils Cheese Pizza", 12.25),
                LineItem::new("Knorr Creamy Chicken", 1.26),
                LineItem::new("Doritos Nacho Cheese", 3.35),
                LineItem::new("   Klarbrunn 12-PK 12 FL OZ  ", 12.00),
            ],
            total: 35.35,
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            id: "corner".to_string(),
            retailer: "M&M Corner Market".to_string(),
            purchase_date: Date::new(2022, 3, 20),
            purchase_time: Time::new(14, 33),
            items: vec![LineItem::new("Gatorade", 2.25); 4],
            total: 9.00,
        }
    }

    #[test]
    fn test_target_receipt() {
        let receipt = target_receipt();
        assert_eq!(
            breakdown(&receipt),
            PointsBreakdown {
                retailer_name: 6,
                round_dollar_total: 0,
                quarter_multiple_total: 0,
                item_pairs: 10,
                item_descriptions: 6,
                odd_purchase_day: 6,
                afternoon_purchase: 0,
            }
        );
        assert_eq!(calculate(&receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let receipt = corner_market_receipt();
        assert_eq!(
            breakdown(&receipt),
            PointsBreakdown {
                retailer_name: 14,
                round_dollar_total: 50,
                quarter_multiple_total: 25,
                item_pairs: 10,
                item_descriptions: 0,
                odd_purchase_day: 0,
                afternoon_purchase: 10,
            }
        );
        assert_eq!(calculate(&receipt), 109);
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let receipt = target_receipt();
        assert_eq!(calculate(&receipt), calculate(&receipt.clone()));
    }

    #[test]
    fn test_retailer_name_points() {
        let cases = [
            ("", 0),
            ("Target", 6),
            ("P2W Games", 8),
            ("Firehouse Subs", 13),
            ("Waffle-House", 11),
            ("???   Game'n' - sSTop3", 11),
            ("?!____=-@=-=^^-?", 0),
            ("Café Zürich", 10),
        ];
        for (retailer, expected) in cases {
            assert_eq!(retailer_name_points(retailer), expected, "{retailer:?}");
        }
    }

    #[test]
    fn test_round_dollar_points() {
        let cases = [
            (0.00, 50),
            (1.00, 50),
            (5.25, 0),
            (10.50, 0),
            (5.00, 50),
            (3.76, 0),
            (20.29, 0),
            (100.50, 0),
            (0.50, 0),
            (-6.30, 0),
            (-9.00, 50),
        ];
        for (total, expected) in cases {
            assert_eq!(round_dollar_points(total), expected, "{total}");
        }
    }

    #[test]
    fn test_quarter_multiple_points() {
        let cases = [
            (0.00, 25),
            (0.25, 25),
            (0.50, 25),
            (0.75, 25),
            (9.00, 25),
            (35.35, 0),
            (1.10, 0),
            (-2.25, 25),
            (-2.20, 0),
        ];
        for (total, expected) in cases {
            assert_eq!(quarter_multiple_points(total), expected, "{total}");
        }
    }

    #[test]
    fn test_round_and_quarter_both_fire() {
        assert_eq!(round_dollar_points(4.0) + quarter_multiple_points(4.0), 75);
    }

    #[test]
    fn test_item_pair_points() {
        let cases = [(0, 0), (1, 0), (2, 5), (3, 5), (4, 10), (5, 10), (6, 15), (7, 15), (8, 20)];
        for (count, expected) in cases {
            assert_eq!(item_pair_points(count), expected, "{count} items");
        }
    }

    #[test]
    fn test_description_points() {
        let cases = [
            (LineItem::new("Mountain Dew 12PK", 6.49), 0),
            (LineItem::new("Emils Cheese Pizza", 12.25), 3),
            (LineItem::new("Knorr Creamy Chicken", 1.26), 0),
            (LineItem::new("Doritos Nacho Cheese", 3.35), 0),
            (LineItem::new("   Klarbrunn 12-PK 12 FL OZ  ", 12.00), 3),
            (LineItem::new("abc", 0.01), 1),
        ];
        for (item, expected) in cases {
            assert_eq!(description_points(&item), expected, "{item:?}");
        }
    }

    #[test]
    fn test_negative_price_gives_negative_points() {
        let item = LineItem::new("   Klarbrunn 12-PK 12 FL OZ  ", -12.00);
        assert_eq!(description_points(&item), -2);

        let mut receipt = target_receipt();
        receipt.items = vec![item];
        receipt.retailer = String::new();
        receipt.total = -12.00;
        receipt.purchase_date = Date::new(2022, 1, 2);
        // round dollar 50 + quarter 25 - 2
        assert_eq!(calculate(&receipt), 73);

        receipt.total = -12.10;
        assert_eq!(calculate(&receipt), -2);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let mut receipt = target_receipt();
        receipt.items = vec![LineItem::new("abc", 1e300)];
        receipt.total = 1e300;
        assert_eq!(description_points(&receipt.items[0]), i64::MAX);
        assert_eq!(calculate(&receipt), i64::MAX);

        receipt.items = vec![LineItem::new("abc", 1e300); 2];
        receipt.total = 2e300;
        assert_eq!(breakdown(&receipt).item_descriptions, i64::MAX);
        assert_eq!(calculate(&receipt), i64::MAX);

        receipt.items = vec![LineItem::new("abc", -1e300); 2];
        receipt.total = -2e300;
        assert_eq!(breakdown(&receipt).item_descriptions, i64::MIN);
        assert!(calculate(&receipt) < 0);
    }

    #[test]
    fn test_empty_description_earns_nothing() {
        assert_eq!(description_points(&LineItem::new("", 100.0)), 0);
        assert_eq!(description_points(&LineItem::new("     ", 100.0)), 0);
        assert_eq!(description_points(&LineItem::default()), 0);
    }

    #[test]
    fn test_description_trims_spaces_only() {
        // The tab is not trimmed, so the length is 4.
        assert_eq!(description_points(&LineItem::new("\tabc", 10.0)), 0);
        assert_eq!(description_points(&LineItem::new("  abc  ", 10.0)), 2);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points(Date::new(2022, 1, 1)), 6);
        assert_eq!(odd_day_points(Date::new(2022, 1, 31)), 6);
        assert_eq!(odd_day_points(Date::new(2022, 1, 2)), 0);
        assert_eq!(odd_day_points(Date::new(2022, 1, 20)), 0);
    }

    #[test]
    fn test_afternoon_points() {
        let cases = [
            (Time::new(13, 59), 0),
            (Time::new(14, 0), 0),
            (Time::new(14, 1), 10),
            (Time::new(14, 59), 10),
            (Time::new(15, 0), 10),
            (Time::new(15, 59), 10),
            (Time::new(16, 0), 0),
            (Time::new(16, 1), 0),
            (Time::new(24, 0), 0),
            (Time::new(99, 99), 0),
        ];
        for (time, expected) in cases {
            assert_eq!(afternoon_points(time), expected, "{time}");
        }
    }
}
