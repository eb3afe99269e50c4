//! # Transportation Emissions
//!
//! Freight emissions for moving reusables by truck.
//!
//! This is an aggregate approximation: the total mass of purchased reusable
//! items is multiplied by the total distance of every logged truck trip. It is
//! not a per-shipment model.
//!
//! ```text
//! GHG (MTCO2e) = (Σ weight_lbs / 2000) × Σ distance_mi × CARGO_TRUCK_MTCO2E_PER_TON_MILE
//! ```

use tracing::debug;

use crate::constants::CARGO_TRUCK_MTCO2E_PER_TON_MILE;
use crate::inventory::TruckTransportationCost;
use crate::units::{MetricTons, Pounds, ShortTons};

/// Calculate truck freight emissions.
///
/// # Arguments
///
/// * `item_weights` - purchased weight of each reusable line item
/// * `costs` - logged truck trips
pub fn calculate(item_weights: &[Pounds], costs: &[TruckTransportationCost]) -> MetricTons {
    let total_weight: Pounds = item_weights.iter().copied().sum();
    let tons: ShortTons = total_weight.into();
    let total_miles: f64 = costs.iter().map(|c| c.distance_in_miles).sum();

    let ghg = MetricTons(tons.0 * total_miles * CARGO_TRUCK_MTCO2E_PER_TON_MILE);
    debug!(tons = tons.0, total_miles, ghg_mtco2e = ghg.0, "transportation emissions");
    ghg
}
