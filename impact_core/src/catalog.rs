//! # Product Catalog
//!
//! Products referenced by inventory line items, keyed by product id. A catalog
//! is always passed explicitly to the calculators, so different organizations
//! can price and weigh the same product id differently.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::catalog::{CatalogProduct, ProductCatalog};
//! use impact_core::units::WeightUnit;
//!
//! let catalog = ProductCatalog::new().with_single_use(CatalogProduct {
//!     id: "cup-12oz".to_string(),
//!     description: "12 oz hot cup".to_string(),
//!     material: "paper".to_string(),
//!     unit_weight: 0.5,
//!     weight_unit: WeightUnit::Ounce,
//!     units_per_case: 1000.0,
//!     case_cost: 85.0,
//! });
//!
//! let cup = catalog.single_use_product("cup-12oz").unwrap();
//! assert_eq!(cup.unit_weight_lbs().0, 0.03125);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::units::{Pounds, WeightUnit};

/// A single-use or reusable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,

    #[serde(default)]
    pub description: String,

    /// Material name; must have an emission factor
    pub material: String,

    /// Weight of one unit, in `weight_unit`
    pub unit_weight: f64,

    #[serde(default)]
    pub weight_unit: WeightUnit,

    pub units_per_case: f64,

    /// Default price per case
    #[serde(default)]
    pub case_cost: f64,
}

impl CatalogProduct {
    pub fn unit_weight_lbs(&self) -> Pounds {
        self.weight_unit.to_pounds(self.unit_weight)
    }
}

/// A bottle-filling station and the single-use bottle each refill replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleStationProduct {
    pub id: String,

    #[serde(default)]
    pub description: String,

    /// Stations per case (usually 1)
    pub units_per_case: f64,

    /// Default price per case
    #[serde(default)]
    pub case_cost: f64,

    /// Material of the replaced single-use bottle
    pub replaced_bottle_material: String,

    /// Weight of one replaced bottle, in `weight_unit`
    pub replaced_bottle_unit_weight: f64,

    #[serde(default)]
    pub weight_unit: WeightUnit,

    /// What one replaced bottle would have cost
    #[serde(default)]
    pub replaced_bottle_unit_cost: f64,
}

impl BottleStationProduct {
    pub fn replaced_bottle_weight_lbs(&self) -> Pounds {
        self.weight_unit.to_pounds(self.replaced_bottle_unit_weight)
    }
}

/// Products available to a calculation, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub single_use: HashMap<String, CatalogProduct>,

    #[serde(default)]
    pub reusable: HashMap<String, CatalogProduct>,

    #[serde(default)]
    pub bottle_station: HashMap<String, BottleStationProduct>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a single-use product
    pub fn with_single_use(mut self, product: CatalogProduct) -> Self {
        self.single_use.insert(product.id.clone(), product);
        self
    }

    /// Builder: add a reusable product
    pub fn with_reusable(mut self, product: CatalogProduct) -> Self {
        self.reusable.insert(product.id.clone(), product);
        self
    }

    /// Builder: add a bottle-station product
    pub fn with_bottle_station(mut self, product: BottleStationProduct) -> Self {
        self.bottle_station.insert(product.id.clone(), product);
        self
    }

    pub fn single_use_product(&self, id: &str) -> Option<&CatalogProduct> {
        self.single_use.get(id)
    }

    pub fn reusable_product(&self, id: &str) -> Option<&CatalogProduct> {
        self.reusable.get(id)
    }

    pub fn bottle_station_product(&self, id: &str) -> Option<&BottleStationProduct> {
        self.bottle_station.get(id)
    }

    /// True when `id` names a bottle-station product
    pub fn is_bottle_station(&self, id: &str) -> bool {
        self.bottle_station.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> BottleStationProduct {
        BottleStationProduct {
            id: "station".to_string(),
            description: String::new(),
            units_per_case: 1.0,
            case_cost: 1200.0,
            replaced_bottle_material: "PET".to_string(),
            replaced_bottle_unit_weight: 10.0,
            weight_unit: WeightUnit::Gram,
            replaced_bottle_unit_cost: 0.25,
        }
    }

    #[test]
    fn test_bottle_station_lookup() {
        let catalog = ProductCatalog::new().with_bottle_station(station());
        assert!(catalog.is_bottle_station("station"));
        assert!(!catalog.is_bottle_station("cup"));
        assert!(catalog.reusable_product("station").is_none());
        let lbs = catalog.bottle_station_product("station").unwrap().replaced_bottle_weight_lbs();
        assert!((lbs.0 - 0.0220462).abs() < 1e-6);
    }

    #[test]
    fn test_catalog_json() {
        let json = r#"{
            "reusable": {
                "mug": {"id": "mug", "material": "ceramic", "unit_weight": 0.75, "units_per_case": 36, "case_cost": 90}
            }
        }"#;
        let catalog: ProductCatalog = serde_json::from_str(json).unwrap();
        let mug = catalog.reusable_product("mug").unwrap();
        assert_eq!(mug.weight_unit, WeightUnit::Pound);
        assert_eq!(mug.unit_weight_lbs().0, 0.75);
        assert!(catalog.single_use.is_empty());
    }
}
