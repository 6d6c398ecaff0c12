use crate::models::{CalculationResult, Category, PartyPlan};
use crate::planner::constants::{event_or_default, BEVERAGES, EVENT_TYPES};

pub const SHARE_TITLE: &str = "Party Planner";
pub const SHARE_TEXT: &str = "Calculated the perfect shopping list for my party!";

/// Display the shopping list for a plan.
pub fn display_results(plan: &PartyPlan, result: &CalculationResult) {
    let event = event_or_default(&plan.selection.event_id);

    println!();
    println!("=== Party Shopping List ===");
    println!(
        "{} | {} hour(s) | {} drinkers, {} non-drinkers",
        event.label,
        plan.duration(),
        plan.guests.drinkers(),
        plan.guests.non_drinking
    );
    println!();

    if result.breakdown.is_empty() {
        println!("No drinks selected.");
    } else {
        let width = result
            .breakdown
            .iter()
            .map(|b| b.label.len())
            .max()
            .unwrap_or(10);

        for item in &result.breakdown {
            let toast = if item.is_toast { "  [Toast]" } else { "" };
            println!(
                "  {:<width$}  {:>4} x {:<9} @ £{:>5.2}{}",
                item.label,
                item.containers,
                container_word(item.category),
                item.unit_price,
                toast,
                width = width
            );
        }
    }

    println!();
    println!("--- Extras ---");
    println!("Mixers:       {} L", result.mixer_liters);
    println!("Soft drinks:  {} L", result.soft_drink_liters);
    println!("Ice:          {} bag(s) (2kg)", result.ice_bags);
    println!("Garnishes:    {}", result.garnishes);

    if !result.glassware.is_empty() {
        println!();
        println!("--- Glassware ---");
        for glass in &result.glassware {
            println!("  {}: {}", glass.kind, glass.count);
        }
    }

    if !result.suggested_cocktails.is_empty() {
        println!();
        println!("Try making: {}", result.suggested_cocktails.join(", "));
    }

    println!();
    println!("--- Summary ---");
    println!("Total servings: {}", result.total_servings);
    println!("Estimated cost: £{}", result.estimated_cost);
    println!();
}

fn container_word(category: Category) -> &'static str {
    match category {
        Category::Beer => "cans",
        Category::NoAlc => "cartons",
        _ => "bottles",
    }
}

/// Display the beverage and event catalogs.
pub fn display_catalog() {
    println!();
    println!("=== Beverages ({} items) ===", BEVERAGES.len());
    for category in Category::ALL {
        println!();
        println!("{}:", category);
        for option in BEVERAGES.iter().filter(|b| b.category == category) {
            println!(
                "  {:<11} {} ({} ml serving, {} per {} ml)",
                option.id,
                option.label,
                option.serving_ml,
                option.servings_per_container,
                option.container_ml
            );
        }
    }

    println!();
    println!("=== Event Types ===");
    for event in EVENT_TYPES.iter() {
        let w = &event.weights;
        println!(
            "  {:<14} {:<26} Beer {:.1} Wine {:.1} Spirit {:.1} Champagne {:.1} No-Alc {:.1}",
            event.id, event.label, w.beer, w.wine, w.spirit, w.champagne, w.no_alc
        );
    }
    println!();
}

/// One-line summary suitable for sharing.
pub fn share_text(result: &CalculationResult) -> String {
    format!(
        "{}: {} {} drinks, ~£{}.",
        SHARE_TITLE, SHARE_TEXT, result.total_servings, result.estimated_cost
    )
}
