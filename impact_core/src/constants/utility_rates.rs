//! Commercial utility rates by US state.
//!
//! Electric and gas figures are average commercial retail prices (EIA);
//! water is the average combined water and sewer charge per gallon.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Utility prices used to cost dishwasher usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilityRates {
    /// Dollars per kWh
    pub electric_per_kwh: f64,
    /// Dollars per therm
    pub gas_per_therm: f64,
    /// Dollars per gallon
    pub water_per_gallon: f64,
}

impl UtilityRates {
    pub const fn new(electric_per_kwh: f64, gas_per_therm: f64, water_per_gallon: f64) -> Self {
        UtilityRates {
            electric_per_kwh,
            gas_per_therm,
            water_per_gallon,
        }
    }
}

/// (state code, $/kWh, $/therm, $/gallon)
#[rustfmt::skip]
const STATE_RATES: &[(&str, f64, f64, f64)] = &[
    ("AK", 0.2045, 1.1120, 0.0142),
    ("AL", 0.1342, 1.4870, 0.0098),
    ("AR", 0.1061, 1.2030, 0.0087),
    ("AZ", 0.1187, 1.0760, 0.0112),
    ("CA", 0.2248, 1.3840, 0.0156),
    ("CO", 0.1258, 0.8960, 0.0109),
    ("CT", 0.2156, 1.3120, 0.0148),
    ("DC", 0.1574, 1.4410, 0.0161),
    ("DE", 0.1183, 1.2290, 0.0104),
    ("FL", 0.1246, 1.4280, 0.0101),
    ("GA", 0.1194, 1.2140, 0.0117),
    ("HI", 0.3987, 3.8750, 0.0133),
    ("IA", 0.1098, 0.8720, 0.0093),
    ("ID", 0.0891, 0.8380, 0.0081),
    ("IL", 0.1152, 0.9210, 0.0107),
    ("IN", 0.1264, 0.9650, 0.0096),
    ("KS", 0.1201, 1.0420, 0.0099),
    ("KY", 0.1156, 1.1080, 0.0103),
    ("LA", 0.1129, 1.0970, 0.0079),
    ("MA", 0.2231, 1.5340, 0.0152),
    ("MD", 0.1272, 1.3370, 0.0138),
    ("ME", 0.1927, 1.5720, 0.0115),
    ("MI", 0.1319, 0.8910, 0.0121),
    ("MN", 0.1236, 0.8640, 0.0102),
    ("MO", 0.1085, 1.0880, 0.0106),
    ("MS", 0.1233, 1.1510, 0.0084),
    ("MT", 0.1164, 0.9030, 0.0090),
    ("NC", 0.1052, 1.1240, 0.0113),
    ("ND", 0.0987, 0.7820, 0.0088),
    ("NE", 0.0973, 0.8570, 0.0085),
    ("NH", 0.1984, 1.4690, 0.0124),
    ("NJ", 0.1491, 1.0330, 0.0131),
    ("NM", 0.1113, 0.9140, 0.0094),
    ("NV", 0.1074, 0.8950, 0.0097),
    ("NY", 0.1876, 1.0640, 0.0135),
    ("OH", 0.1181, 0.9470, 0.0116),
    ("OK", 0.0968, 1.0190, 0.0089),
    ("OR", 0.1098, 1.1630, 0.0127),
    ("PA", 0.1217, 1.0860, 0.0125),
    ("RI", 0.2167, 1.4020, 0.0136),
    ("SC", 0.1127, 1.1370, 0.0108),
    ("SD", 0.1062, 0.8480, 0.0086),
    ("TN", 0.1228, 1.0710, 0.0095),
    ("TX", 0.0953, 0.8830, 0.0105),
    ("UT", 0.0962, 0.8290, 0.0083),
    ("VA", 0.0979, 1.1450, 0.0119),
    ("VT", 0.1894, 1.2980, 0.0111),
    ("WA", 0.1045, 1.1890, 0.0144),
    ("WI", 0.1257, 0.8760, 0.0100),
    ("WV", 0.1103, 0.9920, 0.0118),
    ("WY", 0.1031, 0.8110, 0.0082),
];

static UTILITY_RATES: Lazy<HashMap<&'static str, UtilityRates>> = Lazy::new(|| {
    STATE_RATES
        .iter()
        .map(|&(state, electric, gas, water)| (state, UtilityRates::new(electric, gas, water)))
        .collect()
});

/// Look up utility rates for a two-letter state code (case-insensitive).
///
/// Returns [`CalcError::UnknownRegion`] when the state has no entry.
pub fn rates_for_state(state: &str) -> CalcResult<UtilityRates> {
    UTILITY_RATES
        .get(state.trim().to_uppercase().as_str())
        .copied()
        .ok_or_else(|| CalcError::unknown_region(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_and_dc() {
        assert_eq!(STATE_RATES.len(), 51);
        assert_eq!(UTILITY_RATES.len(), 51);
    }

    #[test]
    fn test_lookup() {
        let ca = rates_for_state("ca").unwrap();
        assert_eq!(ca, UtilityRates::new(0.2248, 1.3840, 0.0156));
    }

    #[test]
    fn test_unknown_region() {
        let err = rates_for_state("ZZ").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_REGION");
        assert!(err.is_configuration_error());
    }
}
