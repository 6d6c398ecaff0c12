pub mod allocation;
pub mod calculations;
pub mod constants;
pub mod lookup;
pub mod pipeline;
pub mod pricing;
pub mod suggestions;

pub use allocation::{allocate, apply_toast, shares, toast_containers};
pub use calculations::{
    estimate_ancillaries, estimate_cost, ice_bags, recommend_glassware, servings_per_hour,
    soft_drink_liters, total_servings, Ancillaries,
};
pub use constants::*;
pub use lookup::{resolve_beverage, resolve_event, Lookup};
pub use pipeline::calculate_needs;
pub use pricing::PriceConfig;
pub use suggestions::{suggest_cocktails, suggestion_pool};
