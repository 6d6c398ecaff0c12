use serde::Serialize;

use crate::models::Category;

/// One purchasable line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub label: String,
    pub category: Category,

    /// Whole bottles or cans to buy.
    pub containers: u32,

    pub unit_price: f64,

    /// Whether toast bottles were added to this line.
    pub is_toast: bool,
}

impl BreakdownItem {
    pub fn new(label: impl Into<String>, category: Category, containers: u32, unit_price: f64) -> Self {
        Self {
            label: label.into(),
            category,
            containers,
            unit_price,
            is_toast: false,
        }
    }

    pub fn cost(&self) -> f64 {
        self.containers as f64 * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glassware {
    pub kind: String,
    pub count: u32,
}

/// Output of a full calculator run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_servings: u32,
    pub breakdown: Vec<BreakdownItem>,
    pub mixer_liters: u32,
    pub soft_drink_liters: u32,
    pub ice_bags: u32,
    pub garnishes: u32,
    pub glassware: Vec<Glassware>,
    pub suggested_cocktails: Vec<String>,

    /// Whole currency units, rounded up.
    pub estimated_cost: u32,
}

impl CalculationResult {
    /// Containers allocated to a category across all lines.
    pub fn containers_for(&self, category: Category) -> u32 {
        self.breakdown
            .iter()
            .filter(|b| b.category == category)
            .fold(0u32, |acc, b| acc.saturating_add(b.containers))
    }

    pub fn total_containers(&self) -> u32 {
        self.breakdown
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(b.containers))
    }
}
