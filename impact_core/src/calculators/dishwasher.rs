//! # Dishwasher Utility Calculation
//!
//! Annual electricity, gas and water for one commercial dishwasher, with the
//! cost of each at the project's utility rates and the CO2 from the energy.
//!
//! ## Method
//!
//! 1. Look up the machine's annual profile by (type, temperature, ENERGY STAR).
//!    An unmodeled combination is an error, never zero usage.
//! 2. Scale the profile by `racks_per_day × operating_days` over the table's
//!    reference rack-days.
//! 3. Machine energy is always electric. Booster and building heater energy
//!    is electric or gas depending on each heater's fuel (kWh → therms for gas).
//! 4. Cost = usage × rate; CO2 = usage × fixed lbs-CO2-per-kWh / per-therm.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::calculators::dishwasher::calculate;
//! use impact_core::constants::{DishwasherType, HeaterFuel, UtilityRates, WashTemperature};
//! use impact_core::inventory::Dishwasher;
//!
//! let machine = Dishwasher {
//!     dishwasher_type: DishwasherType::UnderCounter,
//!     temperature: WashTemperature::High,
//!     energy_star_certified: true,
//!     racks_per_day: 75.0,
//!     operating_days: 365.0,
//!     new_racks_per_day: None,
//!     new_operating_days: None,
//!     booster_water_heater_fuel: HeaterFuel::Electric,
//!     building_water_heater_fuel: HeaterFuel::Gas,
//! };
//!
//! let stats = calculate(&UtilityRates::new(0.12, 1.10, 0.01), &machine).unwrap();
//! assert!(stats.gas_usage > 0.0);
//! assert!((stats.water_usage - 23_542.5).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    dishwasher_profile, HeaterFuel, UtilityRates, ELECTRIC_LBS_CO2_PER_KWH, GAS_LBS_CO2_PER_THERM,
    KWH_PER_THERM,
};
use crate::errors::{CalcError, CalcResult};
use crate::inventory::Dishwasher;
use crate::units::{MetricTons, Pounds};

use super::Comparison;

/// Annual utility usage for one or more dishwashers.
///
/// Usage is kWh / therms / gallons; CO2 weights are pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DishwasherStats {
    pub electric_usage: f64,
    pub electric_co2_weight: f64,
    pub electric_cost: f64,
    pub gas_usage: f64,
    pub gas_co2_weight: f64,
    pub gas_cost: f64,
    pub water_usage: f64,
    pub water_cost: f64,
}

impl DishwasherStats {
    pub fn add(&mut self, other: &DishwasherStats) {
        self.electric_usage += other.electric_usage;
        self.electric_co2_weight += other.electric_co2_weight;
        self.electric_cost += other.electric_cost;
        self.gas_usage += other.gas_usage;
        self.gas_co2_weight += other.gas_co2_weight;
        self.gas_cost += other.gas_cost;
        self.water_usage += other.water_usage;
        self.water_cost += other.water_cost;
    }

    pub fn minus(&self, other: &DishwasherStats) -> DishwasherStats {
        DishwasherStats {
            electric_usage: self.electric_usage - other.electric_usage,
            electric_co2_weight: self.electric_co2_weight - other.electric_co2_weight,
            electric_cost: self.electric_cost - other.electric_cost,
            gas_usage: self.gas_usage - other.gas_usage,
            gas_co2_weight: self.gas_co2_weight - other.gas_co2_weight,
            gas_cost: self.gas_cost - other.gas_cost,
            water_usage: self.water_usage - other.water_usage,
            water_cost: self.water_cost - other.water_cost,
        }
    }

    /// Electric plus gas utility cost plus water cost
    pub fn total_cost(&self) -> f64 {
        self.electric_cost + self.gas_cost + self.water_cost
    }

    /// Electric plus gas CO2, in pounds
    pub fn total_co2_weight(&self) -> Pounds {
        Pounds(self.electric_co2_weight + self.gas_co2_weight)
    }

    /// Electric plus gas CO2, in metric tons
    pub fn total_co2_mt(&self) -> MetricTons {
        self.total_co2_weight().into()
    }
}

/// Every dishwasher summed at baseline and at forecast usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DishwashingResults {
    pub baseline: DishwasherStats,
    pub forecast: DishwasherStats,
    pub change: DishwasherStats,
}

impl DishwashingResults {
    /// Total utility cost comparison
    pub fn cost(&self) -> Comparison {
        Comparison::new(self.baseline.total_cost(), self.forecast.total_cost())
    }

    /// CO2 comparison, in metric tons
    pub fn co2_mt(&self) -> Comparison {
        Comparison::new(self.baseline.total_co2_mt().0, self.forecast.total_co2_mt().0)
    }

    /// Water comparison, in gallons
    pub fn water(&self) -> Comparison {
        Comparison::new(self.baseline.water_usage, self.forecast.water_usage)
    }
}

fn validate(dishwasher: &Dishwasher) -> CalcResult<()> {
    if !dishwasher.racks_per_day.is_finite() || dishwasher.racks_per_day < 0.0 {
        return Err(CalcError::invalid_input(
            "racks_per_day",
            dishwasher.racks_per_day.to_string(),
            "Racks per day must be a finite, non-negative number",
        ));
    }
    if !(0.0..=366.0).contains(&dishwasher.operating_days) {
        return Err(CalcError::invalid_input(
            "operating_days",
            dishwasher.operating_days.to_string(),
            "Operating days must be between 0 and 366",
        ));
    }
    Ok(())
}

/// Calculate annual usage, cost and CO2 for one dishwasher.
///
/// # Returns
///
/// * `Ok(DishwasherStats)` - annual figures at the machine's racks and days
/// * `Err(CalcError::MissingDishwasherProfile)` - configuration not in the table
/// * `Err(CalcError::InvalidInput)` - non-finite or negative racks, or days out of range
pub fn calculate(rates: &UtilityRates, dishwasher: &Dishwasher) -> CalcResult<DishwasherStats> {
    validate(dishwasher)?;

    let profile = dishwasher_profile(
        dishwasher.dishwasher_type,
        dishwasher.temperature,
        dishwasher.energy_star_certified,
    )?;

    let scale = dishwasher.racks_per_day * dishwasher.operating_days / profile.reference_rack_days();

    let mut electric_kwh = profile.machine_kwh * scale;
    let mut gas_kwh = 0.0;
    for (fuel, heater_kwh) in [
        (dishwasher.booster_water_heater_fuel, profile.booster_heater_kwh),
        (dishwasher.building_water_heater_fuel, profile.building_heater_kwh),
    ] {
        match fuel {
            HeaterFuel::Electric => electric_kwh += heater_kwh * scale,
            HeaterFuel::Gas => gas_kwh += heater_kwh * scale,
        }
    }

    let electric_usage = electric_kwh;
    let gas_usage = gas_kwh / KWH_PER_THERM;
    let water_usage = profile.water_gallons * scale;

    debug!(
        dishwasher_type = ?dishwasher.dishwasher_type,
        scale,
        electric_usage,
        gas_usage,
        water_usage,
        "dishwasher usage"
    );

    Ok(DishwasherStats {
        electric_usage,
        electric_co2_weight: electric_usage * ELECTRIC_LBS_CO2_PER_KWH,
        electric_cost: electric_usage * rates.electric_per_kwh,
        gas_usage,
        gas_co2_weight: gas_usage * GAS_LBS_CO2_PER_THERM,
        gas_cost: gas_usage * rates.gas_per_therm,
        water_usage,
        water_cost: water_usage * rates.water_per_gallon,
    })
}

/// Sum every dishwasher at baseline and forecast usage.
///
/// Any dishwasher that fails to calculate fails the whole run.
pub fn calculate_all(rates: &UtilityRates, dishwashers: &[Dishwasher]) -> CalcResult<DishwashingResults> {
    let mut baseline = DishwasherStats::default();
    let mut forecast = DishwasherStats::default();

    for dishwasher in dishwashers {
        baseline.add(&calculate(rates, dishwasher)?);
        forecast.add(&calculate(rates, &dishwasher.forecast_usage())?);
    }

    Ok(DishwashingResults {
        baseline,
        forecast,
        change: forecast.minus(&baseline),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DishwasherType, WashTemperature};

    const RATES: UtilityRates = UtilityRates::new(0.10, 1.00, 0.01);

    fn machine() -> Dishwasher {
        Dishwasher {
            dishwasher_type: DishwasherType::StationarySingleTankDoor,
            temperature: WashTemperature::High,
            energy_star_certified: true,
            racks_per_day: 280.0,
            operating_days: 365.0,
            new_racks_per_day: None,
            new_operating_days: None,
            booster_water_heater_fuel: HeaterFuel::Electric,
            building_water_heater_fuel: HeaterFuel::Electric,
        }
    }

    #[test]
    fn test_reference_basis_matches_table() {
        let d = machine();
        let stats = calculate(&RATES, &d).unwrap();
        let p = dishwasher_profile(d.dishwasher_type, d.temperature, d.energy_star_certified).unwrap();

        let expected_kwh = p.machine_kwh + p.booster_heater_kwh + p.building_heater_kwh;
        assert!((stats.electric_usage - expected_kwh).abs() < 1e-6);
        assert_eq!(stats.gas_usage, 0.0);
        assert_eq!(stats.gas_cost, 0.0);
        assert!((stats.water_usage - p.water_gallons).abs() < 1e-6);
        assert!((stats.electric_cost - expected_kwh * 0.10).abs() < 1e-6);
        assert!((stats.electric_co2_weight - expected_kwh * ELECTRIC_LBS_CO2_PER_KWH).abs() < 1e-6);
        assert!((stats.water_cost - p.water_gallons * 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_usage_scales_with_rack_days() {
        let full = calculate(&RATES, &machine()).unwrap();
        let mut half = machine();
        half.racks_per_day = 140.0;
        let half = calculate(&RATES, &half).unwrap();
        assert!((half.water_usage * 2.0 - full.water_usage).abs() < 1e-6);
        assert!((half.electric_cost * 2.0 - full.electric_cost).abs() < 1e-6);
    }

    #[test]
    fn test_gas_building_heater() {
        let mut d = machine();
        d.building_water_heater_fuel = HeaterFuel::Gas;
        let stats = calculate(&RATES, &d).unwrap();
        let p = dishwasher_profile(d.dishwasher_type, d.temperature, true).unwrap();

        let therms = p.building_heater_kwh / KWH_PER_THERM;
        assert!((stats.gas_usage - therms).abs() < 1e-6);
        assert!((stats.gas_co2_weight - therms * GAS_LBS_CO2_PER_THERM).abs() < 1e-6);
        assert!((stats.electric_usage - (p.machine_kwh + p.booster_heater_kwh)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_usage() {
        let mut d = machine();
        d.operating_days = 0.0;
        let stats = calculate(&RATES, &d).unwrap();
        assert_eq!(stats, DishwasherStats::default());
    }

    #[test]
    fn test_unmodeled_combination_is_error() {
        let mut d = machine();
        d.dishwasher_type = DishwasherType::PotPanUtensil;
        d.temperature = WashTemperature::Low;
        let err = calculate(&RATES, &d).unwrap_err();
        assert!(matches!(err, CalcError::MissingDishwasherProfile { .. }));
    }

    #[test]
    fn test_negative_racks() {
        let mut d = machine();
        d.racks_per_day = -1.0;
        assert_eq!(calculate(&RATES, &d).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_usage_rejected() {
        for racks in [f64::NAN, f64::INFINITY] {
            let mut d = machine();
            d.racks_per_day = racks;
            assert_eq!(calculate(&RATES, &d).unwrap_err().error_code(), "INVALID_INPUT");
        }
        let mut d = machine();
        d.operating_days = f64::NAN;
        assert_eq!(calculate(&RATES, &d).unwrap_err().error_code(), "INVALID_INPUT");

        // Forecast usage goes through the same checks
        let mut d = machine();
        d.new_racks_per_day = Some(f64::NAN);
        assert!(calculate_all(&RATES, &[d]).is_err());
    }

    #[test]
    fn test_calculate_all_baseline_and_forecast() {
        let mut d = machine();
        d.new_racks_per_day = Some(560.0);
        let results = calculate_all(&RATES, &[d.clone(), machine()]).unwrap();

        let single = calculate(&RATES, &machine()).unwrap();
        assert!((results.baseline.water_usage - 2.0 * single.water_usage).abs() < 1e-6);
        assert!((results.forecast.water_usage - 3.0 * single.water_usage).abs() < 1e-6);
        assert!((results.change.water_usage - single.water_usage).abs() < 1e-6);
        assert!(results.cost().change > 0.0);
    }

    #[test]
    fn test_calculate_all_empty() {
        let results = calculate_all(&RATES, &[]).unwrap();
        assert_eq!(results, DishwashingResults::default());
    }
}
