//! Material emission factors.
//!
//! Greenhouse-gas factors are source-reduction values from the EPA Waste
//! Reduction Model (WARM), converted from MTCO2e per short ton to MTCO2e per
//! pound. Water factors are cradle-to-gate process water per pound of
//! finished material.
//!
//! Material names are matched case-insensitively with surrounding whitespace
//! ignored, so catalog entries like `"PET"` and `" pet "` resolve to the same row.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Per-pound impact factors for one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Metric tons CO2-equivalent per pound of material
    pub mtco2e_per_lb: f64,
    /// Gallons of water consumed per pound of material
    pub water_gal_per_lb: f64,
}

fn factor(mtco2e_per_short_ton: f64, water_gal_per_lb: f64) -> EmissionFactor {
    EmissionFactor {
        mtco2e_per_lb: mtco2e_per_short_ton / 2000.0,
        water_gal_per_lb,
    }
}

/// (material name, MTCO2e per short ton, gallons of water per lb)
#[rustfmt::skip]
const FACTOR_ROWS: &[(&str, f64, f64)] = &[
    ("aluminum",             4.81, 3.63),
    ("bagasse",              1.24, 2.10),
    ("ceramic",              1.70, 0.95),
    ("coated paper",         3.88, 5.40),
    ("corrugated cardboard", 5.58, 4.75),
    ("cotton",               6.60, 9.80),
    ("glass",                0.53, 0.33),
    ("hdpe",                 1.52, 0.89),
    ("ldpe",                 1.80, 0.97),
    ("molded fiber",         1.35, 2.60),
    ("paper",                7.64, 6.10),
    ("pet",                  2.17, 1.17),
    ("pla",                  1.96, 2.93),
    ("polypropylene",        1.52, 0.85),
    ("polystyrene",          2.50, 1.05),
    ("silicone",             3.10, 1.60),
    ("stainless steel",      6.55, 4.20),
    ("wood",                 0.62, 0.40),
];

static EMISSION_FACTORS: Lazy<HashMap<&'static str, EmissionFactor>> = Lazy::new(|| {
    FACTOR_ROWS
        .iter()
        .map(|&(name, ghg, water)| (name, factor(ghg, water)))
        .collect()
});

fn normalize(material: &str) -> String {
    material.trim().to_lowercase()
}

/// Look up the emission factor for a material.
///
/// Returns [`CalcError::MissingEmissionFactor`] when the material has no row.
pub fn emission_factor(material: &str) -> CalcResult<EmissionFactor> {
    EMISSION_FACTORS
        .get(normalize(material).as_str())
        .copied()
        .ok_or_else(|| CalcError::missing_emission_factor(material))
}

/// All material names with a factor, sorted
pub fn known_materials() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = EMISSION_FACTORS.keys().copied().collect();
    names.sort_unstable();
    names
}
