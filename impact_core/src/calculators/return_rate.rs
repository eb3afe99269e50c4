//! # Return Rate Calculation
//!
//! Estimates what share of reusable units come back, and therefore how many
//! must be re-bought each year (the shrinkage rate).
//!
//! ## Policy
//!
//! - When every line item (the bottle-station item included) carries the same
//!   non-zero `reusable_return_percentage`, that percentage is used as-is, even
//!   if the observed return counts disagree.
//! - A `reusable_return_percentage` of zero means "not set".
//! - Otherwise the rate is the plain average of each item's observed
//!   `round(returned * 100 / issued)`, not weighted by volume. With no
//!   observations the rate is 100.
//! - Rates are capped at 100. More units returned than issued counts as a
//!   full return.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::calculators::return_rate::calculate;
//! use impact_core::inventory::ReusableLineItem;
//!
//! let item = |returned: f64, issued: f64| ReusableLineItem {
//!     product_id: "mug".to_string(),
//!     cases_purchased: 1.0,
//!     case_cost: None,
//!     reusable_return_percentage: 0.0,
//!     reusable_return_count: returned,
//!     reusable_item_count: issued,
//! };
//!
//! let summary = calculate(&[item(80.0, 100.0), item(40.0, 50.0)], |_| false, false);
//! assert_eq!(summary.return_rate, 80.0);
//! assert_eq!(summary.shrinkage_rate, 20.0);
//! assert!(!summary.all_items_have_same_percentage);
//! ```

use serde::{Deserialize, Serialize};

use crate::inventory::ReusableLineItem;
use crate::units::round2;

/// Return rate with no usable data
pub const DEFAULT_RETURN_RATE: f64 = 100.0;

/// Ceiling for any per-item or declared rate; shrinkage is never negative
pub const MAX_RETURN_RATE: f64 = 100.0;

/// Return and shrinkage rates, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRateSummary {
    pub return_rate: f64,
    pub shrinkage_rate: f64,
    pub all_items_have_same_percentage: bool,
}

impl Default for ReturnRateSummary {
    fn default() -> Self {
        ReturnRateSummary {
            return_rate: DEFAULT_RETURN_RATE,
            shrinkage_rate: 0.0,
            all_items_have_same_percentage: false,
        }
    }
}

/// Calculate the return-rate summary.
///
/// # Arguments
///
/// * `items` - every reusable line item, bottle-station item included
/// * `is_bottle_station` - identifies the bottle-station item, which only takes
///   part in the "same percentage" check
/// * `round_return_rate` - round the return rate itself to 2 decimals
pub fn calculate<F>(items: &[ReusableLineItem], is_bottle_station: F, round_return_rate: bool) -> ReturnRateSummary
where
    F: Fn(&ReusableLineItem) -> bool,
{
    let all_items_have_same_percentage = all_same_percentage(items);

    let foodware: Vec<&ReusableLineItem> = items.iter().filter(|item| !is_bottle_station(item)).collect();

    let observed: Vec<f64> = foodware
        .iter()
        .filter(|item| item.reusable_return_count != 0.0 && item.reusable_item_count != 0.0)
        .map(|item| {
            (item.reusable_return_count * 100.0 / item.reusable_item_count)
                .round()
                .clamp(0.0, MAX_RETURN_RATE)
        })
        .collect();

    let average = if observed.is_empty() {
        DEFAULT_RETURN_RATE
    } else {
        observed.iter().sum::<f64>() / observed.len() as f64
    };

    let mut return_rate = if all_items_have_same_percentage {
        foodware
            .first()
            .map(|item| item.reusable_return_percentage.min(MAX_RETURN_RATE))
            .unwrap_or(DEFAULT_RETURN_RATE)
    } else {
        average
    };

    if round_return_rate {
        return_rate = round2(return_rate);
    }

    ReturnRateSummary {
        return_rate,
        shrinkage_rate: round2(100.0 - return_rate),
        all_items_have_same_percentage,
    }
}

fn all_same_percentage(items: &[ReusableLineItem]) -> bool {
    let Some(first) = items.first() else {
        return false;
    };
    let pct = first.reusable_return_percentage;
    pct > 0.0 && items.iter().all(|item| item.reusable_return_percentage == pct)
}
