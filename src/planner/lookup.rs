use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::models::{BeverageOption, EventArchetype};
use crate::planner::constants::{BEVERAGES, EVENT_TYPES, FUZZY_MATCH_THRESHOLD};

/// Outcome of resolving free text against a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Exact id or label match.
    Exact(T),

    /// Fuzzy candidates, best first.
    Candidates(Vec<T>),

    NotFound,
}

fn resolve<T: Copy>(input: &str, entries: &[T], keys: impl Fn(&T) -> [&'static str; 2]) -> Lookup<T> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Lookup::NotFound;
    }

    if let Some(hit) = entries
        .iter()
        .find(|e| keys(*e).iter().any(|k| k.to_lowercase() == needle))
    {
        return Lookup::Exact(*hit);
    }

    let mut scored: Vec<(T, f64)> = entries
        .iter()
        .map(|e| {
            let score = keys(e)
                .iter()
                .map(|k| jaro_winkler(&k.to_lowercase(), &needle))
                .fold(0.0, f64::max);
            (*e, score)
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    if scored.is_empty() {
        Lookup::NotFound
    } else {
        Lookup::Candidates(scored.into_iter().map(|(e, _)| e).collect())
    }
}

/// Resolve a beverage by id or label, falling back to fuzzy matching.
pub fn resolve_beverage(input: &str) -> Lookup<&'static BeverageOption> {
    let entries: Vec<&'static BeverageOption> = BEVERAGES.iter().collect();
    resolve(input, &entries, |b| [b.id, b.label])
}

/// Resolve an event archetype by id or label, falling back to fuzzy matching.
pub fn resolve_event(input: &str) -> Lookup<&'static EventArchetype> {
    let entries: Vec<&'static EventArchetype> = EVENT_TYPES.iter().collect();
    resolve(input, &entries, |e| [e.id, e.label])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_id_and_label() {
        match resolve_beverage("GIN") {
            Lookup::Exact(b) => assert_eq!(b.id, "gin"),
            other => panic!("expected exact match, got {:?}", other),
        }
        match resolve_event("Wedding Reception") {
            Lookup::Exact(e) => assert_eq!(e.id, "wedding"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_fuzzy_candidates() {
        match resolve_beverage("tequilla") {
            Lookup::Candidates(c) => assert_eq!(c[0].id, "tequila"),
            other => panic!("expected candidates, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        assert_eq!(resolve_beverage("xyzzy"), Lookup::NotFound);
        assert_eq!(resolve_event(""), Lookup::NotFound);
    }
}
