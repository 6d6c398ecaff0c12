use std::collections::BTreeMap;

use crate::models::{AllocationMode, BeverageOption, BreakdownItem, Category, CategoryWeights};
use crate::planner::calculations::ceil_count;
use crate::planner::constants::{GUESTS_PER_TOAST_BOTTLE, TOAST_LABEL};
use crate::planner::pricing::PriceConfig;

/// Fraction of total servings assigned to each option, in input order.
///
/// An empty custom ratio map behaves like archetype mode. A zero denominator
/// yields a zero share.
pub fn shares(options: &[&BeverageOption], mode: &AllocationMode, weights: &CategoryWeights) -> Vec<f64> {
    match mode {
        AllocationMode::CustomRatio(ratios) if !ratios.is_empty() => custom_shares(options, ratios),
        AllocationMode::CustomRatio(_) | AllocationMode::Archetype => archetype_shares(options, weights),
    }
}

fn archetype_shares(options: &[&BeverageOption], weights: &CategoryWeights) -> Vec<f64> {
    let total_weight: f64 = options.iter().map(|o| weights.get(o.category)).sum();

    options
        .iter()
        .map(|o| {
            if total_weight > 0.0 {
                weights.get(o.category) / total_weight
            } else {
                0.0
            }
        })
        .collect()
}

fn custom_shares(options: &[&BeverageOption], ratios: &BTreeMap<Category, u32>) -> Vec<f64> {
    options
        .iter()
        .map(|o| {
            let percent = ratios.get(&o.category).copied().unwrap_or(0) as f64;
            let in_category = options.iter().filter(|x| x.category == o.category).count();
            if in_category > 0 {
                (percent / 100.0) / in_category as f64
            } else {
                0.0
            }
        })
        .collect()
}

/// Split total servings across the selected options and round up to containers.
pub fn allocate(
    total_servings: u32,
    options: &[&BeverageOption],
    mode: &AllocationMode,
    weights: &CategoryWeights,
    prices: &PriceConfig,
) -> Vec<BreakdownItem> {
    options
        .iter()
        .zip(shares(options, mode, weights))
        .map(|(option, share)| {
            let servings = total_servings as f64 * share;
            let containers = ceil_count(servings / option.servings_per_container as f64);
            BreakdownItem::new(
                option.label,
                option.category,
                containers,
                prices.unit_price(option.category),
            )
        })
        .collect()
}

/// Champagne bottles needed for a toast round: one per six guests.
pub fn toast_containers(total_guests: u32) -> u32 {
    ceil_count(total_guests as f64 / GUESTS_PER_TOAST_BOTTLE)
}

/// Add toast bottles to the first champagne line, or append a toast line.
pub fn apply_toast(breakdown: &mut Vec<BreakdownItem>, total_guests: u32, prices: &PriceConfig) {
    let bottles = toast_containers(total_guests);

    match breakdown.iter_mut().find(|b| b.category == Category::Champagne) {
        Some(existing) => {
            existing.containers = existing.containers.saturating_add(bottles);
            existing.is_toast = true;
        }
        None => {
            let mut item = BreakdownItem::new(TOAST_LABEL, Category::Champagne, bottles, prices.toast);
            item.is_toast = true;
            breakdown.push(item);
        }
    }
}
