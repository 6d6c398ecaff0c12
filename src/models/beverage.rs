use std::fmt;

use serde::{Deserialize, Serialize};

/// Beverage category used for weighting, pricing and glassware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Beer,
    Wine,
    Spirit,
    Champagne,
    #[serde(rename = "No-Alc")]
    NoAlc,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Beer,
        Category::Wine,
        Category::Spirit,
        Category::Champagne,
        Category::NoAlc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Beer => "Beer",
            Category::Wine => "Wine",
            Category::Spirit => "Spirit",
            Category::Champagne => "Champagne",
            Category::NoAlc => "No-Alc",
        }
    }

    /// Parse a category name, case-insensitive. Accepts "noalc" and "no-alc".
    pub fn parse(input: &str) -> Option<Category> {
        let normalized = input.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "beer" => Some(Category::Beer),
            "wine" => Some(Category::Wine),
            "spirit" | "spirits" => Some(Category::Spirit),
            "champagne" => Some(Category::Champagne),
            "noalc" => Some(Category::NoAlc),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A purchasable beverage from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeverageOption {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,

    /// Single serving volume in ml.
    pub serving_ml: u32,

    /// Container (bottle/can) volume in ml.
    pub container_ml: u32,

    pub servings_per_container: u32,
}

impl BeverageOption {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        category: Category,
        serving_ml: u32,
        container_ml: u32,
    ) -> Self {
        Self {
            id,
            label,
            category,
            serving_ml,
            container_ml,
            servings_per_container: container_ml / serving_ml,
        }
    }
}
