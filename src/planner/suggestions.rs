use rand::seq::SliceRandom;
use rand::Rng;

use crate::planner::constants::{COCKTAIL_SUGGESTIONS, MAX_SUGGESTIONS};

/// Every classic cocktail reachable from the selection, first occurrence wins.
pub fn suggestion_pool(selection: &[String]) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();

    for id in selection {
        if let Some(cocktails) = COCKTAIL_SUGGESTIONS.get(id.as_str()) {
            for &name in cocktails.iter() {
                if !pool.contains(&name) {
                    pool.push(name);
                }
            }
        }
    }

    pool
}

/// Pick up to three cocktails from the pool in random order.
pub fn suggest_cocktails<R: Rng + ?Sized>(selection: &[String], rng: &mut R) -> Vec<String> {
    let mut pool = suggestion_pool(selection);
    pool.shuffle(rng);
    pool.into_iter()
        .take(MAX_SUGGESTIONS)
        .map(String::from)
        .collect()
}
