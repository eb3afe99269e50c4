//! Commercial dishwasher annual consumption table.
//!
//! Rows follow the ENERGY STAR commercial dishwasher savings calculator
//! assumptions: each machine type has a reference rack volume, machines run
//! 365 days a year, and idle energy accrues over 18 idle hours per day.
//! Heater energy is the electric-equivalent energy needed to lift the
//! machine's annual water volume (70°F at the building heater, a further
//! 40°F at the booster for high-temperature machines).
//!
//! Pot, pan & utensil washers are only rated as high-temperature machines, so
//! no low-temperature rows exist for them. Asking for one is a configuration
//! error.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Machine category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishwasherType {
    UnderCounter,
    StationarySingleTankDoor,
    PotPanUtensil,
    SingleTankConveyor,
    MultiTankConveyor,
}

impl DishwasherType {
    pub const ALL: [DishwasherType; 5] = [
        DishwasherType::UnderCounter,
        DishwasherType::StationarySingleTankDoor,
        DishwasherType::PotPanUtensil,
        DishwasherType::SingleTankConveyor,
        DishwasherType::MultiTankConveyor,
    ];

    /// Racks per day the table's annual figures assume
    pub fn reference_racks_per_day(self) -> f64 {
        match self {
            DishwasherType::UnderCounter => 75.0,
            DishwasherType::StationarySingleTankDoor => 280.0,
            DishwasherType::PotPanUtensil => 280.0,
            DishwasherType::SingleTankConveyor => 400.0,
            DishwasherType::MultiTankConveyor => 600.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DishwasherType::UnderCounter => "Under Counter",
            DishwasherType::StationarySingleTankDoor => "Stationary Single Tank Door",
            DishwasherType::PotPanUtensil => "Pot, Pan & Utensil",
            DishwasherType::SingleTankConveyor => "Single Tank Conveyor",
            DishwasherType::MultiTankConveyor => "Multi Tank Conveyor",
        }
    }
}

impl std::fmt::Display for DishwasherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Final rinse temperature class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WashTemperature {
    /// High-temperature sanitizing (booster heater to 180°F)
    High,
    /// Low-temperature chemical sanitizing
    Low,
}

impl std::fmt::Display for WashTemperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WashTemperature::High => write!(f, "High"),
            WashTemperature::Low => write!(f, "Low"),
        }
    }
}

/// Fuel feeding a water heater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeaterFuel {
    #[default]
    Electric,
    Gas,
}

/// Annual consumption of one machine at the reference basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DishwasherProfile {
    /// Machine (idle and wash motor) electricity, kWh/yr
    pub machine_kwh: f64,
    /// Booster heater energy, kWh/yr (zero for low-temperature machines)
    pub booster_heater_kwh: f64,
    /// Building water heater energy, kWh/yr
    pub building_heater_kwh: f64,
    /// Water consumed, gal/yr
    pub water_gallons: f64,
    /// Racks per day these figures assume
    pub reference_racks_per_day: f64,
    /// Operating days per year these figures assume
    pub reference_operating_days: f64,
}

impl DishwasherProfile {
    /// Rack-days per year the row was computed for
    pub fn reference_rack_days(&self) -> f64 {
        self.reference_racks_per_day * self.reference_operating_days
    }
}

pub const REFERENCE_OPERATING_DAYS: f64 = 365.0;
pub const IDLE_HOURS_PER_DAY: f64 = 18.0;

const WATER_LBS_PER_GALLON: f64 = 8.34;
const BTU_PER_KWH: f64 = 3412.14;
const ELECTRIC_HEATER_EFFICIENCY: f64 = 0.98;
const BUILDING_HEATER_RISE_F: f64 = 70.0;
const BOOSTER_HEATER_RISE_F: f64 = 40.0;

fn heater_kwh_per_gallon(rise_f: f64) -> f64 {
    WATER_LBS_PER_GALLON * rise_f / BTU_PER_KWH / ELECTRIC_HEATER_EFFICIENCY
}

type ProfileKey = (DishwasherType, WashTemperature, bool);

/// (type, temperature, energy star, idle kW, gallons per rack)
#[rustfmt::skip]
const MACHINE_SPECS: &[(DishwasherType, WashTemperature, bool, f64, f64)] = &[
    (DishwasherType::UnderCounter,             WashTemperature::High, true,  0.50, 0.86),
    (DishwasherType::UnderCounter,             WashTemperature::High, false, 0.76, 1.09),
    (DishwasherType::UnderCounter,             WashTemperature::Low,  true,  0.50, 1.19),
    (DishwasherType::UnderCounter,             WashTemperature::Low,  false, 0.50, 1.73),
    (DishwasherType::StationarySingleTankDoor, WashTemperature::High, true,  0.70, 0.89),
    (DishwasherType::StationarySingleTankDoor, WashTemperature::High, false, 0.87, 1.29),
    (DishwasherType::StationarySingleTankDoor, WashTemperature::Low,  true,  0.60, 1.18),
    (DishwasherType::StationarySingleTankDoor, WashTemperature::Low,  false, 0.60, 2.10),
    (DishwasherType::PotPanUtensil,            WashTemperature::High, true,  1.20, 0.58),
    (DishwasherType::PotPanUtensil,            WashTemperature::High, false, 1.20, 0.70),
    (DishwasherType::SingleTankConveyor,       WashTemperature::High, true,  1.50, 0.70),
    (DishwasherType::SingleTankConveyor,       WashTemperature::High, false, 1.93, 0.87),
    (DishwasherType::SingleTankConveyor,       WashTemperature::Low,  true,  1.50, 0.79),
    (DishwasherType::SingleTankConveyor,       WashTemperature::Low,  false, 1.50, 1.31),
    (DishwasherType::MultiTankConveyor,        WashTemperature::High, true,  2.25, 0.54),
    (DishwasherType::MultiTankConveyor,        WashTemperature::High, false, 2.59, 0.97),
    (DishwasherType::MultiTankConveyor,        WashTemperature::Low,  true,  2.00, 0.54),
    (DishwasherType::MultiTankConveyor,        WashTemperature::Low,  false, 2.00, 1.04),
];

static CONSUMPTION_TABLE: Lazy<HashMap<ProfileKey, DishwasherProfile>> = Lazy::new(|| {
    let building_per_gal = heater_kwh_per_gallon(BUILDING_HEATER_RISE_F);
    let booster_per_gal = heater_kwh_per_gallon(BOOSTER_HEATER_RISE_F);

    MACHINE_SPECS
        .iter()
        .map(|&(kind, temperature, energy_star, idle_kw, gal_per_rack)| {
            let racks = kind.reference_racks_per_day();
            let water_gallons = gal_per_rack * racks * REFERENCE_OPERATING_DAYS;
            let booster_heater_kwh = match temperature {
                WashTemperature::High => water_gallons * booster_per_gal,
                WashTemperature::Low => 0.0,
            };
            let profile = DishwasherProfile {
                machine_kwh: idle_kw * IDLE_HOURS_PER_DAY * REFERENCE_OPERATING_DAYS,
                booster_heater_kwh,
                building_heater_kwh: water_gallons * building_per_gal,
                water_gallons,
                reference_racks_per_day: racks,
                reference_operating_days: REFERENCE_OPERATING_DAYS,
            };
            ((kind, temperature, energy_star), profile)
        })
        .collect()
});

/// Look up the consumption profile for a machine configuration.
///
/// Returns [`CalcError::MissingDishwasherProfile`] for unmodeled combinations.
pub fn dishwasher_profile(
    dishwasher_type: DishwasherType,
    temperature: WashTemperature,
    energy_star_certified: bool,
) -> CalcResult<DishwasherProfile> {
    CONSUMPTION_TABLE
        .get(&(dishwasher_type, temperature, energy_star_certified))
        .copied()
        .ok_or_else(|| CalcError::MissingDishwasherProfile {
            dishwasher_type: format!("{:?}", dishwasher_type),
            temperature: temperature.to_string(),
            energy_star_certified,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(CONSUMPTION_TABLE.len(), MACHINE_SPECS.len());
    }

    #[test]
    fn test_under_counter_high_energy_star() {
        let p = dishwasher_profile(DishwasherType::UnderCounter, WashTemperature::High, true).unwrap();
        // 0.86 gal/rack * 75 racks * 365 days
        assert!((p.water_gallons - 23_542.5).abs() < 0.01);
        // 0.5 kW * 18 h * 365 d
        assert!((p.machine_kwh - 3285.0).abs() < 0.01);
        assert!(p.booster_heater_kwh > 0.0);
        assert_eq!(p.reference_rack_days(), 75.0 * 365.0);
    }

    #[test]
    fn test_low_temperature_has_no_booster() {
        let p = dishwasher_profile(DishwasherType::SingleTankConveyor, WashTemperature::Low, false).unwrap();
        assert_eq!(p.booster_heater_kwh, 0.0);
        assert!(p.building_heater_kwh > 0.0);
    }

    #[test]
    fn test_energy_star_uses_less_water() {
        for kind in DishwasherType::ALL {
            let es = dishwasher_profile(kind, WashTemperature::High, true).unwrap();
            let standard = dishwasher_profile(kind, WashTemperature::High, false).unwrap();
            assert!(es.water_gallons < standard.water_gallons, "{kind}");
        }
    }

    #[test]
    fn test_unmodeled_combination() {
        let err = dishwasher_profile(DishwasherType::PotPanUtensil, WashTemperature::Low, true).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_DISHWASHER_PROFILE");
        assert!(err.is_configuration_error());
    }
}
