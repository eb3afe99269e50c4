//! # Constant Tables
//!
//! Read-only reference data, built once on first use and never mutated:
//!
//! - [`emission_factors`] - GHG and water factors per pound of material
//! - [`utility_rates`] - commercial electric, gas and water prices per US state
//! - [`dishwasher`] - annual dishwasher consumption by machine configuration
//!
//! Every lookup returns a [`CalcResult`](crate::errors::CalcResult); a key with
//! no row is an error, never a zero.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::constants::{emission_factor, rates_for_state};
//!
//! let pet = emission_factor("PET").unwrap();
//! assert!(pet.mtco2e_per_lb > 0.0);
//!
//! assert!(rates_for_state("ZZ").is_err());
//! ```

pub mod dishwasher;
pub mod emission_factors;
pub mod utility_rates;

pub use dishwasher::{dishwasher_profile, DishwasherProfile, DishwasherType, HeaterFuel, WashTemperature};
pub use emission_factors::{emission_factor, EmissionFactor};
pub use utility_rates::{rates_for_state, UtilityRates};

/// Grid-average CO2 emitted per kWh of electricity (lbs, eGRID US average)
pub const ELECTRIC_LBS_CO2_PER_KWH: f64 = 0.852;

/// CO2 emitted per therm of natural gas burned (lbs)
pub const GAS_LBS_CO2_PER_THERM: f64 = 11.7;

/// Energy content of one therm of natural gas (kWh)
pub const KWH_PER_THERM: f64 = 29.3071;

/// Cargo truck emissions per short-ton of freight per mile (metric tons CO2e)
pub const CARGO_TRUCK_MTCO2E_PER_TON_MILE: f64 = 0.000168;
