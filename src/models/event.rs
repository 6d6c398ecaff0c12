use serde::Serialize;

use crate::models::Category;

/// Relative consumption weight per beverage category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeights {
    pub beer: f64,
    pub wine: f64,
    pub spirit: f64,
    pub champagne: f64,
    pub no_alc: f64,
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Beer => self.beer,
            Category::Wine => self.wine,
            Category::Spirit => self.spirit,
            Category::Champagne => self.champagne,
            Category::NoAlc => self.no_alc,
        }
    }

    /// Mean of the Beer, Wine and Spirit weights, used to scale total demand.
    ///
    /// Champagne and No-Alc weights do not contribute.
    pub fn intensity(&self) -> f64 {
        (self.beer + self.wine + self.spirit) / 3.0
    }
}

/// A named event profile with preset category weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventArchetype {
    pub id: &'static str,
    pub label: &'static str,
    pub weights: CategoryWeights,
}
