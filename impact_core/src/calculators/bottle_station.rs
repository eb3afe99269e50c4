//! # Bottle-Filling Stations
//!
//! Single-use bottles avoided by refill stations. Every reusable line item
//! whose product id is in the bottle-station catalog is a station purchase;
//! a project without one yields all-zero results.
//!
//! ```text
//! stations      = Σ cases × units_per_case
//! bottles_saved = stations × bottles_filled_per_station_per_day × operating_days
//! avoided mass  = Σ line bottles_saved × replaced_bottle_weight_lbs
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::constants::emission_factor;
use crate::errors::CalcResult;
use crate::inventory::{BottleStationUsage, ReusableLineItem};

/// Annual impacts avoided by bottle-filling stations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BottleStationResults {
    pub station_count: f64,
    /// One-time purchase cost of the stations
    pub station_cost: f64,
    pub bottles_saved: f64,
    pub avoided_weight_lbs: f64,
    pub avoided_ghg_mtco2e: f64,
    pub avoided_water_gal: f64,
    /// What the avoided bottles would have cost
    pub avoided_cost: f64,
}

/// Calculate bottle-station results.
pub fn calculate(
    items: &[ReusableLineItem],
    usage: Option<&BottleStationUsage>,
    catalog: &ProductCatalog,
) -> CalcResult<BottleStationResults> {
    let bottles_per_station = usage
        .map(|u| u.bottles_filled_per_station_per_day * u.operating_days)
        .unwrap_or(0.0);

    let mut results = BottleStationResults::default();
    let mut lines = 0;

    for item in items {
        let Some(product) = catalog.bottle_station_product(&item.product_id) else {
            continue;
        };
        let factor = emission_factor(&product.replaced_bottle_material)?;

        let stations = item.cases_purchased * product.units_per_case;
        let bottles = stations * bottles_per_station;
        let weight_lbs = bottles * product.replaced_bottle_weight_lbs().0;

        results.station_count += stations;
        results.station_cost += item.cases_purchased * item.case_cost.unwrap_or(product.case_cost);
        results.bottles_saved += bottles;
        results.avoided_weight_lbs += weight_lbs;
        results.avoided_ghg_mtco2e += weight_lbs * factor.mtco2e_per_lb;
        results.avoided_water_gal += weight_lbs * factor.water_gal_per_lb;
        results.avoided_cost += bottles * product.replaced_bottle_unit_cost;
        lines += 1;
    }

    debug!(
        lines,
        station_count = results.station_count,
        bottles_saved = results.bottles_saved,
        "bottle stations"
    );

    Ok(results)
}
