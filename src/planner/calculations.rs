use crate::models::{BreakdownItem, Category, CategoryWeights, Glassware, GuestBreakdown};
use crate::planner::constants::*;
use crate::planner::pricing::PriceConfig;

/// Round up to a whole, non-negative count.
#[inline]
pub(crate) fn ceil_count(value: f64) -> u32 {
    value.ceil().max(0.0) as u32
}

/// Servings consumed per hour across all drinking tiers.
pub fn servings_per_hour(guests: &GuestBreakdown) -> f64 {
    guests.light as f64 * LIGHT_SERVINGS_PER_HOUR
        + guests.average as f64 * AVERAGE_SERVINGS_PER_HOUR
        + guests.heavy as f64 * HEAVY_SERVINGS_PER_HOUR
}

/// Total alcoholic servings for the event.
///
/// Formula: ceil(servings_per_hour * hours * intensity), where intensity is
/// the mean Beer/Wine/Spirit weight of the event.
pub fn total_servings(guests: &GuestBreakdown, duration_hours: u32, weights: &CategoryWeights) -> u32 {
    let raw = servings_per_hour(guests) * duration_hours as f64;
    ceil_count(raw * weights.intensity())
}

/// Liters of soft drinks for non-drinkers: one 330 ml serving per hour plus one.
pub fn soft_drink_liters(guests: &GuestBreakdown, duration_hours: u32) -> u32 {
    let servings = guests.non_drinking as f64 * (duration_hours as f64 + 1.0);
    ceil_count(servings * SOFT_DRINK_SERVING_ML / 1000.0)
}

/// Mixers, ice, garnishes and glassware derived from an allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ancillaries {
    pub mixer_liters: u32,
    pub ice_bags: u32,
    pub garnishes: u32,
    pub glassware: Vec<Glassware>,
}

fn containers_in(breakdown: &[BreakdownItem], category: Category) -> u32 {
    breakdown
        .iter()
        .filter(|b| b.category == category)
        .fold(0u32, |acc, b| acc.saturating_add(b.containers))
}

pub fn mixer_liters(spirit_containers: u32) -> u32 {
    ceil_count(spirit_containers as f64 * MIXER_LITERS_PER_SPIRIT_BOTTLE)
}

pub fn garnish_count(spirit_containers: u32) -> u32 {
    ceil_count(spirit_containers as f64 * GARNISHES_PER_SPIRIT_BOTTLE)
}

/// Bags of ice for the whole guest list.
pub fn ice_bags(total_guests: u32) -> u32 {
    ceil_count(total_guests as f64 * ICE_KG_PER_GUEST / ICE_BAG_KG)
}

/// Glassware needed for the categories that have at least one container.
pub fn recommend_glassware(breakdown: &[BreakdownItem], guests: &GuestBreakdown) -> Vec<Glassware> {
    let mut glassware = Vec::new();
    let total = guests.total() as f64;
    let regulars = guests.average as f64 + guests.heavy as f64;

    if containers_in(breakdown, Category::Wine) > 0 {
        glassware.push(Glassware {
            kind: "Wine Glasses".to_string(),
            count: ceil_count(guests.drinkers() as f64 * WINE_GLASS_SHARE * GLASS_SPARE_FACTOR),
        });
    }
    if containers_in(breakdown, Category::Champagne) > 0 {
        glassware.push(Glassware {
            kind: "Flutes".to_string(),
            count: ceil_count(total * FLUTE_SHARE * GLASS_SPARE_FACTOR),
        });
    }
    if containers_in(breakdown, Category::Spirit) > 0 {
        glassware.push(Glassware {
            kind: "Tumblers/Highballs".to_string(),
            count: ceil_count(regulars * GLASS_SPARE_FACTOR),
        });
    }
    if containers_in(breakdown, Category::Beer) > 0 {
        glassware.push(Glassware {
            kind: "Pint Glasses".to_string(),
            count: ceil_count(regulars * PINT_SHARE * GLASS_SPARE_FACTOR),
        });
    }

    glassware
}

/// Derive every ancillary from the allocation and guest list.
pub fn estimate_ancillaries(breakdown: &[BreakdownItem], guests: &GuestBreakdown) -> Ancillaries {
    let spirit = containers_in(breakdown, Category::Spirit);

    Ancillaries {
        mixer_liters: mixer_liters(spirit),
        ice_bags: ice_bags(guests.total()),
        garnishes: garnish_count(spirit),
        glassware: recommend_glassware(breakdown, guests),
    }
}

/// Total estimated cost, rounded up to a whole currency unit.
pub fn estimate_cost(
    breakdown: &[BreakdownItem],
    extras: &Ancillaries,
    soft_drink_liters: u32,
    prices: &PriceConfig,
) -> u32 {
    let drinks: f64 = breakdown.iter().map(BreakdownItem::cost).sum();
    let extras_cost = extras.mixer_liters as f64 * prices.mixer_per_liter
        + soft_drink_liters as f64 * prices.soft_drink_per_liter
        + extras.ice_bags as f64 * prices.ice_per_bag
        + extras.garnishes as f64 * prices.garnish;

    ceil_count(drinks + extras_cost)
}
