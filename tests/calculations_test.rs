#[macro_use]
extern crate assert_float_eq;

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use party_planner_rs::models::{AllocationMode, Category, GuestBreakdown, PartyPlan, SelectionState};
use party_planner_rs::planner::{
    calculate_needs, event_or_default, find_beverage, shares, suggestion_pool, total_servings,
    PriceConfig, EVENT_TYPES, MAX_DURATION_HOURS, MIN_DURATION_HOURS, TOAST_LABEL,
};

fn plan(guests: GuestBreakdown, hours: u32, event: &str, drinks: &[&str], toast: bool) -> PartyPlan {
    PartyPlan {
        guests,
        duration_hours: hours,
        selection: SelectionState {
            beverages: drinks.iter().map(|d| d.to_string()).collect(),
            event_id: event.to_string(),
            toast,
            mode: AllocationMode::Archetype,
        },
    }
}

fn run(plan: &PartyPlan) -> party_planner_rs::CalculationResult {
    let mut rng = StdRng::seed_from_u64(42);
    calculate_needs(plan, &PriceConfig::default(), &mut rng)
}

#[test]
fn test_default_house_party_example() {
    let result = run(&PartyPlan::default());

    assert_eq!(result.total_servings, 26);
    assert_eq!(result.breakdown.len(), 3);

    let lager = &result.breakdown[0];
    assert_eq!(lager.category, Category::Beer);
    assert_eq!(lager.containers, 10);

    let wine = &result.breakdown[1];
    assert_eq!(wine.category, Category::Wine);
    assert_eq!(wine.containers, 2);

    let gin = &result.breakdown[2];
    assert_eq!(gin.category, Category::Spirit);
    assert_eq!(gin.containers, 1);

    assert_eq!(result.mixer_liters, 3);
    assert_eq!(result.soft_drink_liters, 3);
    assert_eq!(result.ice_bags, 4);
    assert_eq!(result.garnishes, 4);

    let glass: Vec<(&str, u32)> = result
        .glassware
        .iter()
        .map(|g| (g.kind.as_str(), g.count))
        .collect();
    assert_eq!(
        glass,
        vec![("Wine Glasses", 9), ("Tumblers/Highballs", 9), ("Pint Glasses", 5)]
    );

    // 15 + 16 + 20 drinks, 4.5 + 4.5 + 6 + 1.2 extras
    assert_eq!(result.estimated_cost, 68);
}

#[test]
fn test_toast_adds_bottles_without_champagne_selected() {
    let result = run(&plan(GuestBreakdown::new(2, 4, 2, 2), 3, "house_party", &["lager"], true));

    let toast = result.breakdown.last().unwrap();
    assert_eq!(toast.label, TOAST_LABEL);
    assert_eq!(toast.containers, 2);
    assert!(toast.is_toast);

    // ceil(10 guests * 0.5 * 1.5)
    let flutes = result.glassware.iter().find(|g| g.kind == "Flutes").unwrap();
    assert_eq!(flutes.count, 8);
}

#[test]
fn test_toast_adds_bottles_to_selected_champagne() {
    let guests = GuestBreakdown::new(2, 4, 2, 2);
    let without = run(&plan(guests, 3, "wedding", &["prosecco", "gin"], false));
    let with = run(&plan(guests, 3, "wedding", &["prosecco", "gin"], true));

    assert_eq!(with.breakdown.len(), without.breakdown.len());
    assert_eq!(with.breakdown[0].containers, without.breakdown[0].containers + 2);
    assert!(with.breakdown[0].is_toast);
}

#[test]
fn test_toast_only_selection() {
    let result = run(&plan(GuestBreakdown::new(0, 0, 0, 7), 2, "dinner", &[], true));

    assert_eq!(result.total_servings, 0);
    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.breakdown[0].containers, 2);
    assert!(result.estimated_cost > 0);
}

#[test]
fn test_empty_selection_is_free() {
    let result = run(&plan(GuestBreakdown::new(3, 3, 3, 4), 4, "house_party", &[], false));

    assert!(result.breakdown.is_empty());
    assert_eq!(result.estimated_cost, 0);
    assert_eq!(result.total_servings, 0);
    assert!(result.suggested_cocktails.is_empty());
    // 4 * 5 * 330 ml = 6.6 L
    assert_eq!(result.soft_drink_liters, 7);
}

#[test]
fn test_servings_monotonic_in_tiers_and_duration() {
    for event in EVENT_TYPES.iter() {
        let mut previous = 0;
        for hours in MIN_DURATION_HOURS..=MAX_DURATION_HOURS {
            let servings = total_servings(&GuestBreakdown::new(1, 2, 3, 0), hours, &event.weights);
            assert!(servings >= previous);
            previous = servings;
        }

        let base = GuestBreakdown::new(1, 1, 1, 0);
        let base_servings = total_servings(&base, 3, &event.weights);
        for bumped in [
            GuestBreakdown::new(2, 1, 1, 0),
            GuestBreakdown::new(1, 2, 1, 0),
            GuestBreakdown::new(1, 1, 2, 0),
            GuestBreakdown::new(1, 1, 1, 5),
        ] {
            assert!(total_servings(&bumped, 3, &event.weights) >= base_servings);
        }
    }
}

#[test]
fn test_archetype_shares_sum_to_one() {
    let options: Vec<_> = ["stout", "rose_wine", "champagne", "brandy", "mocktail", "vodka"]
        .iter()
        .filter_map(|id| find_beverage(id))
        .collect();

    for event in EVENT_TYPES.iter() {
        let total: f64 = shares(&options, &AllocationMode::Archetype, &event.weights)
            .iter()
            .sum();
        assert_float_absolute_eq!(total, 1.0, 1e-9);
    }
}

#[test]
fn test_custom_ratio_single_category_takes_everything() {
    let mut p = plan(
        GuestBreakdown::new(2, 4, 2, 0),
        3,
        "house_party",
        &["lager", "ipa", "white_wine", "gin"],
        false,
    );
    let mut ratios = BTreeMap::new();
    ratios.insert(Category::Beer, 100);
    ratios.insert(Category::Wine, 0);
    ratios.insert(Category::Spirit, 0);
    p.selection.mode = AllocationMode::CustomRatio(ratios);

    let result = run(&p);

    // 26 servings split between two beers, one serving per can.
    assert_eq!(result.containers_for(Category::Beer), 26);
    assert_eq!(result.containers_for(Category::Wine), 0);
    assert_eq!(result.containers_for(Category::Spirit), 0);
    assert_eq!(result.mixer_liters, 0);
    assert!(result.glassware.iter().all(|g| g.kind == "Pint Glasses"));
}

#[test]
fn test_unknown_ids_are_ignored() {
    let known = run(&plan(GuestBreakdown::new(2, 2, 2, 0), 2, "house_party", &["gin"], false));
    let mixed = run(&plan(
        GuestBreakdown::new(2, 2, 2, 0),
        2,
        "house_party",
        &["absinthe", "gin"],
        false,
    ));
    assert_eq!(known.breakdown, mixed.breakdown);
}

#[test]
fn test_unknown_event_uses_house_party() {
    let guests = GuestBreakdown::new(2, 4, 2, 2);
    let unknown = run(&plan(guests, 3, "rave", &["lager"], false));
    let house = run(&plan(guests, 3, "house_party", &["lager"], false));
    assert_eq!(unknown, house);
    assert_eq!(event_or_default("rave").id, "house_party");
}

#[test]
fn test_recalculation_is_idempotent_except_suggestions() {
    let p = plan(
        GuestBreakdown::new(1, 5, 3, 2),
        5,
        "cocktail_hour",
        &["vodka", "gin", "tequila", "rum_white"],
        true,
    );
    let prices = PriceConfig::default();
    let pool = suggestion_pool(&p.selection.beverages);

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let mut a = calculate_needs(&p, &prices, &mut rng_a);
    let mut b = calculate_needs(&p, &prices, &mut rng_b);

    for name in a.suggested_cocktails.iter().chain(b.suggested_cocktails.iter()) {
        assert!(pool.contains(&name.as_str()));
    }
    assert_eq!(a.suggested_cocktails.len(), 3);

    a.suggested_cocktails.clear();
    b.suggested_cocktails.clear();
    assert_eq!(a, b);
}

#[test]
fn test_custom_prices_change_cost_only() {
    let p = PartyPlan::default();
    let mut prices = PriceConfig::default();
    prices.spirit = 30.0;

    let mut rng = StdRng::seed_from_u64(3);
    let result = calculate_needs(&p, &prices, &mut rng);
    let baseline = run(&p);

    assert_eq!(result.total_containers(), baseline.total_containers());
    assert_eq!(result.estimated_cost, baseline.estimated_cost + 10);
}

fn with_ratios(drinks: &[&str], ratios: &[(Category, u32)]) -> PartyPlan {
    let mut p = plan(GuestBreakdown::new(2, 4, 2, 0), 3, "house_party", drinks, false);
    p.selection.mode = AllocationMode::CustomRatio(ratios.iter().copied().collect());
    p
}

#[test]
fn test_custom_ratios_under_100_under_allocate() {
    let result = run(&with_ratios(&["lager"], &[(Category::Beer, 50)]));

    // Half of 26 servings.
    assert_eq!(result.total_servings, 26);
    assert_eq!(result.containers_for(Category::Beer), 13);
}

#[test]
fn test_custom_ratios_over_100_over_allocate() {
    let result = run(&with_ratios(
        &["lager", "red_wine"],
        &[(Category::Beer, 100), (Category::Wine, 100)],
    ));

    // Each category receives the full 26 servings, double the demand.
    assert_eq!(result.total_servings, 26);
    assert_eq!(result.containers_for(Category::Beer), 26);
    assert_eq!(result.containers_for(Category::Wine), 6);
}
