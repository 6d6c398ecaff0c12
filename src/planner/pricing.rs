use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Category;
use crate::planner::constants::*;

/// Unit prices used by the cost estimator.
///
/// Any field missing from a price file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceConfig {
    pub beer: f64,
    pub wine: f64,
    pub spirit: f64,
    pub champagne: f64,
    pub no_alc: f64,

    /// Price of a bottle on the synthetic toast line.
    pub toast: f64,

    pub mixer_per_liter: f64,
    pub soft_drink_per_liter: f64,
    pub ice_per_bag: f64,
    pub garnish: f64,
}

impl PriceConfig {
    pub fn unit_price(&self, category: Category) -> f64 {
        match category {
            Category::Beer => self.beer,
            Category::Wine => self.wine,
            Category::Spirit => self.spirit,
            Category::Champagne => self.champagne,
            Category::NoAlc => self.no_alc,
        }
    }

    /// Load prices from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: PriceConfig = serde_json::from_str(&content)?;
        info!("Loaded price config from {}", path.display());
        Ok(config)
    }
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            beer: category_unit_price(Category::Beer),
            wine: category_unit_price(Category::Wine),
            spirit: category_unit_price(Category::Spirit),
            champagne: category_unit_price(Category::Champagne),
            no_alc: category_unit_price(Category::NoAlc),
            toast: TOAST_UNIT_PRICE,
            mixer_per_liter: MIXER_PRICE_PER_LITER,
            soft_drink_per_liter: SOFT_DRINK_PRICE_PER_LITER,
            ice_per_bag: ICE_PRICE_PER_BAG,
            garnish: GARNISH_UNIT_PRICE,
        }
    }
}
