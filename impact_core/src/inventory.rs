//! # Project Inventory
//!
//! `ProjectInventory` is the normalized snapshot the engine calculates from.
//! An inventory-aggregation service assembles it from persisted records. The
//! engine never mutates it.
//!
//! ## Structure
//!
//! ```text
//! ProjectInventory
//! ├── state | utility_rates       (exactly one; see resolve_utility_rates)
//! ├── single_use_items: Vec<SingleUseLineItem>
//! ├── reusable_items: Vec<ReusableLineItem>
//! ├── dishwashers: Vec<Dishwasher>
//! ├── transportation_costs: Vec<TruckTransportationCost>
//! ├── labor_costs: Vec<LaborCost>
//! ├── other_expenses: Vec<OtherExpense>
//! ├── waste_hauling: Vec<WasteHaulingCost>
//! ├── bottle_station_usage: Option<BottleStationUsage>
//! └── currency, display_as_metric
//! ```
//!
//! ## Example
//!
//! ```rust
//! use impact_core::inventory::ProjectInventory;
//!
//! let inventory = ProjectInventory::for_state("CA");
//! let rates = inventory.resolve_utility_rates().unwrap();
//! assert!(rates.electric_per_kwh > 0.0);
//!
//! let json = serde_json::to_string_pretty(&inventory).unwrap();
//! assert!(json.contains("\"CA\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{rates_for_state, DishwasherType, HeaterFuel, UtilityRates, WashTemperature};
use crate::errors::{CalcError, CalcResult};
use crate::frequency::Frequency;

fn default_currency() -> String {
    "USD".to_string()
}

/// Normalized project snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInventory {
    /// Two-letter US state code used to look up utility rates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Explicit utility rates (mutually exclusive with `state`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_rates: Option<UtilityRates>,

    #[serde(default)]
    pub single_use_items: Vec<SingleUseLineItem>,

    #[serde(default)]
    pub reusable_items: Vec<ReusableLineItem>,

    #[serde(default)]
    pub dishwashers: Vec<Dishwasher>,

    #[serde(default)]
    pub transportation_costs: Vec<TruckTransportationCost>,

    #[serde(default)]
    pub labor_costs: Vec<LaborCost>,

    #[serde(default)]
    pub other_expenses: Vec<OtherExpense>,

    #[serde(default)]
    pub waste_hauling: Vec<WasteHaulingCost>,

    /// Refill counts for the bottle-station item, if the project has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottle_station_usage: Option<BottleStationUsage>,

    /// ISO currency code all costs are recorded in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Report summary weights and volumes in metric units
    #[serde(default)]
    pub display_as_metric: bool,
}

impl Default for ProjectInventory {
    fn default() -> Self {
        ProjectInventory {
            state: None,
            utility_rates: None,
            single_use_items: Vec::new(),
            reusable_items: Vec::new(),
            dishwashers: Vec::new(),
            transportation_costs: Vec::new(),
            labor_costs: Vec::new(),
            other_expenses: Vec::new(),
            waste_hauling: Vec::new(),
            bottle_station_usage: None,
            currency: default_currency(),
            display_as_metric: false,
        }
    }
}

impl ProjectInventory {
    /// Create an empty inventory that takes its utility rates from a state.
    pub fn for_state(state: impl Into<String>) -> Self {
        ProjectInventory {
            state: Some(state.into()),
            ..Default::default()
        }
    }

    /// Create an empty inventory with explicit utility rates.
    pub fn with_rates(rates: UtilityRates) -> Self {
        ProjectInventory {
            utility_rates: Some(rates),
            ..Default::default()
        }
    }

    /// Resolve the utility rates this inventory uses.
    ///
    /// Exactly one of `state` and `utility_rates` must be present. Supplying both
    /// is [`CalcError::ConflictingUtilitySource`], neither is
    /// [`CalcError::MissingField`], and a state with no table entry is
    /// [`CalcError::UnknownRegion`].
    pub fn resolve_utility_rates(&self) -> CalcResult<UtilityRates> {
        match (&self.state, &self.utility_rates) {
            (Some(state), Some(_)) => Err(CalcError::ConflictingUtilitySource {
                state: state.clone(),
            }),
            (Some(state), None) => rates_for_state(state),
            (None, Some(rates)) => Ok(*rates),
            (None, None) => Err(CalcError::missing_field("state | utility_rates")),
        }
    }
}

/// A recurring single-use purchase, before (baseline) and after (forecast)
/// switching to reusables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleUseLineItem {
    pub product_id: String,

    /// How often `cases_purchased` cases are bought
    pub frequency: Frequency,

    /// Cases bought per occurrence today
    pub cases_purchased: f64,

    /// Price per case today; the catalog's price when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_cost: Option<f64>,

    /// Cases bought per occurrence after the switch
    pub new_cases_purchased: f64,

    /// Price per case after the switch; falls back to `case_cost`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_case_cost: Option<f64>,
}

/// A one-time reusable purchase plus its return tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReusableLineItem {
    pub product_id: String,

    pub cases_purchased: f64,

    /// Price per case; the catalog's price when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_cost: Option<f64>,

    /// Expected return rate in percent. Zero means "not set".
    #[serde(default)]
    pub reusable_return_percentage: f64,

    /// Units observed coming back
    #[serde(default)]
    pub reusable_return_count: f64,

    /// Units observed going out
    #[serde(default)]
    pub reusable_item_count: f64,
}

/// A commercial dishwasher, at current and projected usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dishwasher {
    #[serde(rename = "type")]
    pub dishwasher_type: DishwasherType,

    pub temperature: WashTemperature,

    pub energy_star_certified: bool,

    pub racks_per_day: f64,

    pub operating_days: f64,

    /// Racks per day after the switch; defaults to `racks_per_day`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_racks_per_day: Option<f64>,

    /// Operating days after the switch; defaults to `operating_days`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_operating_days: Option<f64>,

    #[serde(default)]
    pub booster_water_heater_fuel: HeaterFuel,

    #[serde(default)]
    pub building_water_heater_fuel: HeaterFuel,
}

impl Dishwasher {
    /// The same machine at its forecast usage
    pub fn forecast_usage(&self) -> Dishwasher {
        Dishwasher {
            racks_per_day: self.new_racks_per_day.unwrap_or(self.racks_per_day),
            operating_days: self.new_operating_days.unwrap_or(self.operating_days),
            ..self.clone()
        }
    }
}

/// Truck deliveries (e.g. a dishwashing service hauling reusables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckTransportationCost {
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub distance_in_miles: f64,
}

/// Additional staff time; a negative cost is a saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCost {
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub frequency: Frequency,
}

/// Any other operating cost change; a negative cost is a saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherExpense {
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub frequency: Frequency,
}

/// Waste and recycling hauling service, before and after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteHaulingCost {
    #[serde(default)]
    pub service_type: String,
    pub monthly_cost: f64,
    pub new_monthly_cost: f64,
}

/// How heavily the bottle-filling stations are used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BottleStationUsage {
    pub bottles_filled_per_station_per_day: f64,
    pub operating_days: f64,
}
