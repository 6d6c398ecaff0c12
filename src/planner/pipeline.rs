use log::debug;
use rand::Rng;

use crate::models::{BeverageOption, CalculationResult, PartyPlan};
use crate::planner::allocation::{allocate, apply_toast};
use crate::planner::calculations::{
    estimate_ancillaries, estimate_cost, soft_drink_liters, total_servings,
};
use crate::planner::constants::{event_or_default, find_beverage};
use crate::planner::pricing::PriceConfig;
use crate::planner::suggestions::suggest_cocktails;

/// Recompute the full shopping list for a plan.
///
/// Deterministic apart from the order of suggested cocktails, which is drawn
/// from `rng`. Unknown beverage ids are ignored.
pub fn calculate_needs<R: Rng + ?Sized>(
    plan: &PartyPlan,
    prices: &PriceConfig,
    rng: &mut R,
) -> CalculationResult {
    let selection = &plan.selection;
    let guests = &plan.guests;
    let duration = plan.duration();
    let event = event_or_default(&selection.event_id);

    let soft_liters = soft_drink_liters(guests, duration);

    if selection.beverages.is_empty() && !selection.toast {
        debug!("Empty selection without toast, nothing to allocate");
        return CalculationResult {
            soft_drink_liters: soft_liters,
            ..CalculationResult::default()
        };
    }

    let total = total_servings(guests, duration, &event.weights);
    debug!(
        "{} servings for {} drinkers over {}h ({})",
        total,
        guests.drinkers(),
        duration,
        event.id
    );

    let options: Vec<&BeverageOption> = selection
        .beverages
        .iter()
        .filter_map(|id| find_beverage(id))
        .collect();

    let mut breakdown = allocate(total, &options, &selection.mode, &event.weights, prices);
    if selection.toast {
        apply_toast(&mut breakdown, guests.total(), prices);
    }

    let extras = estimate_ancillaries(&breakdown, guests);
    let estimated_cost = estimate_cost(&breakdown, &extras, soft_liters, prices);
    debug!("Estimated cost {} for {} lines", estimated_cost, breakdown.len());

    CalculationResult {
        total_servings: total,
        breakdown,
        mixer_liters: extras.mixer_liters,
        soft_drink_liters: soft_liters,
        ice_bags: extras.ice_bags,
        garnishes: extras.garnishes,
        glassware: extras.glassware,
        suggested_cocktails: suggest_cocktails(&selection.beverages, rng),
        estimated_cost,
    }
}
