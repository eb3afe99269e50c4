//! # Unit Types
//!
//! Type-safe wrappers for the weight and volume units the engine works in.
//! They are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## US Customary Units (Primary)
//!
//! Emission factors and the dishwasher table are published per pound and per
//! gallon, so the engine computes in US customary units and converts to metric
//! only for display:
//! - Weight: pounds (lb), ounces (oz), short tons (2000 lb)
//! - Metric weight: grams (g), kilograms (kg), metric tons (t)
//! - Volume: US gallons (gal), liters (L)
//!
//! ## Example
//!
//! ```rust
//! use impact_core::units::{Ounces, Pounds, ShortTons};
//!
//! let cup = Ounces(8.0);
//! let lbs: Pounds = cup.into();
//! assert_eq!(lbs.0, 0.5);
//!
//! let tons: ShortTons = Pounds(4000.0).into();
//! assert_eq!(tons.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};

pub const OUNCES_PER_POUND: f64 = 16.0;
pub const GRAMS_PER_POUND: f64 = 453.59237;
pub const POUNDS_PER_SHORT_TON: f64 = 2000.0;
pub const POUNDS_PER_METRIC_TON: f64 = 2204.62262;
pub const LITERS_PER_GALLON: f64 = 3.785411784;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in ounces
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ounces(pub f64);

/// Weight in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Weight in short tons (1 ton = 2000 lb)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortTons(pub f64);

/// Weight in metric tons (1 t = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTons(pub f64);

impl From<Ounces> for Pounds {
    fn from(oz: Ounces) -> Self {
        Pounds(oz.0 / OUNCES_PER_POUND)
    }
}

impl From<Grams> for Pounds {
    fn from(g: Grams) -> Self {
        Pounds(g.0 / GRAMS_PER_POUND)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * 1000.0 / GRAMS_PER_POUND)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * GRAMS_PER_POUND / 1000.0)
    }
}

impl From<Pounds> for ShortTons {
    fn from(lb: Pounds) -> Self {
        ShortTons(lb.0 / POUNDS_PER_SHORT_TON)
    }
}

impl From<Pounds> for MetricTons {
    fn from(lb: Pounds) -> Self {
        MetricTons(lb.0 / POUNDS_PER_METRIC_TON)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gal.0 * LITERS_PER_GALLON)
    }
}

// ============================================================================
// Catalog weight units
// ============================================================================

/// Unit a catalog product's weight is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Pound,
    Ounce,
    Gram,
    Kilogram,
}

impl WeightUnit {
    /// Convert a raw weight in this unit to pounds.
    pub fn to_pounds(self, value: f64) -> Pounds {
        match self {
            WeightUnit::Pound => Pounds(value),
            WeightUnit::Ounce => Ounces(value).into(),
            WeightUnit::Gram => Grams(value).into(),
            WeightUnit::Kilogram => Kilograms(value).into(),
        }
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to 2 decimals.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

// ============================================================================
// Summation
// ============================================================================

macro_rules! impl_sum {
    ($($type:ty),*) => {
        $(
            impl std::iter::Sum for $type {
                fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                    Self(iter.map(|v| v.0).sum())
                }
            }
        )*
    };
}

impl_sum!(Pounds);
