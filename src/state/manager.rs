use std::collections::BTreeMap;

use log::debug;

use crate::error::{PlannerError, Result};
use crate::models::{clamp_duration, AllocationMode, Category, GuestTier, PartyPlan};
use crate::planner::constants::{find_beverage, find_event};

/// Owns a party plan and applies the edits a user can make to it.
pub struct PartyStateManager {
    plan: PartyPlan,
}

impl PartyStateManager {
    pub fn new(plan: PartyPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &PartyPlan {
        &self.plan
    }

    pub fn into_plan(self) -> PartyPlan {
        self.plan
    }

    /// Change a guest tier by `delta`, never dropping below zero.
    pub fn update_guest(&mut self, tier: GuestTier, delta: i64) {
        self.plan.guests.update(tier, delta);
    }

    pub fn set_guests(&mut self, tier: GuestTier, count: u32) {
        let current = self.plan.guests.get(tier) as i64;
        self.plan.guests.update(tier, count as i64 - current);
    }

    /// Set the event length, clamped to 1-8 hours.
    pub fn set_duration(&mut self, hours: u32) {
        self.plan.duration_hours = clamp_duration(hours);
    }

    /// Add a beverage to the selection. Adding an already selected id is a no-op.
    pub fn add_beverage(&mut self, id: &str) -> Result<()> {
        if find_beverage(id).is_none() {
            return Err(PlannerError::UnknownBeverage(id.to_string()));
        }
        if !self.plan.selection.contains(id) {
            self.plan.selection.beverages.push(id.to_string());
            debug!("Added beverage {}", id);
        }
        Ok(())
    }

    /// Remove a beverage. Returns whether it was selected.
    pub fn remove_beverage(&mut self, id: &str) -> bool {
        let before = self.plan.selection.beverages.len();
        self.plan.selection.beverages.retain(|b| b != id);
        before != self.plan.selection.beverages.len()
    }

    pub fn clear_beverages(&mut self) {
        self.plan.selection.beverages.clear();
    }

    /// Switch event type. Custom ratios are discarded.
    pub fn set_event(&mut self, id: &str) -> Result<()> {
        if find_event(id).is_none() {
            return Err(PlannerError::UnknownEvent(id.to_string()));
        }
        self.plan.selection.event_id = id.to_string();
        self.reset_ratios();
        Ok(())
    }

    pub fn set_toast(&mut self, enabled: bool) {
        self.plan.selection.toast = enabled;
    }

    /// Set a category percentage (clamped to 0-100) and switch to custom ratios.
    pub fn set_ratio(&mut self, category: Category, percent: u32) {
        let percent = percent.min(100);
        if self.plan.selection.mode == AllocationMode::Archetype {
            self.plan.selection.mode = AllocationMode::CustomRatio(BTreeMap::new());
        }
        if let AllocationMode::CustomRatio(ratios) = &mut self.plan.selection.mode {
            ratios.insert(category, percent);
        }
    }

    /// Go back to the event archetype weights.
    pub fn reset_ratios(&mut self) {
        self.plan.selection.mode = AllocationMode::Archetype;
    }

    /// Current custom percentage for a category, zero when unset.
    pub fn ratio_for(&self, category: Category) -> u32 {
        match &self.plan.selection.mode {
            AllocationMode::CustomRatio(ratios) => ratios.get(&category).copied().unwrap_or(0),
            AllocationMode::Archetype => 0,
        }
    }

    /// Sum of the custom percentages, or zero in archetype mode.
    pub fn ratio_total(&self) -> u32 {
        match &self.plan.selection.mode {
            AllocationMode::CustomRatio(ratios) => ratios.values().sum(),
            AllocationMode::Archetype => 0,
        }
    }

    /// Distinct categories of the selected beverages, in selection order.
    pub fn active_categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for id in &self.plan.selection.beverages {
            if let Some(option) = find_beverage(id) {
                if !categories.contains(&option.category) {
                    categories.push(option.category);
                }
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_beverage_has_set_semantics() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.add_beverage("gin").unwrap();
        manager.add_beverage("vodka").unwrap();
        assert_eq!(
            manager.plan().selection.beverages,
            vec!["lager", "white_wine", "gin", "vodka"]
        );
    }

    #[test]
    fn test_add_unknown_beverage_fails() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        let err = manager.add_beverage("absinthe").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownBeverage(_)));
    }

    #[test]
    fn test_remove_beverage() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        assert!(manager.remove_beverage("lager"));
        assert!(!manager.remove_beverage("lager"));
        assert_eq!(manager.plan().selection.beverages, vec!["white_wine", "gin"]);
    }

    #[test]
    fn test_set_event_resets_ratios() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.set_ratio(Category::Beer, 70);
        assert_eq!(manager.ratio_total(), 70);

        manager.set_event("wedding").unwrap();
        assert_eq!(manager.plan().selection.mode, AllocationMode::Archetype);
        assert_eq!(manager.plan().selection.event_id, "wedding");
        assert!(manager.set_event("rave").is_err());
    }

    #[test]
    fn test_set_ratio_clamps_and_accumulates() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.set_ratio(Category::Beer, 150);
        manager.set_ratio(Category::Wine, 20);
        assert_eq!(manager.ratio_total(), 120);
        assert_eq!(manager.ratio_for(Category::Beer), 100);
        assert_eq!(manager.ratio_for(Category::Spirit), 0);

        manager.reset_ratios();
        assert_eq!(manager.ratio_for(Category::Beer), 0);
    }

    #[test]
    fn test_huge_guest_counts_do_not_panic() {
        use crate::planner::{calculate_needs, PriceConfig};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.set_guests(GuestTier::Light, u32::MAX);
        manager.set_guests(GuestTier::Average, 1);
        manager.update_guest(GuestTier::NonDrinking, i64::MAX);
        manager.add_beverage("ipa").unwrap();
        manager.set_toast(true);

        let mut rng = StdRng::seed_from_u64(11);
        let result = calculate_needs(manager.plan(), &PriceConfig::default(), &mut rng);
        assert_eq!(manager.plan().guests.non_drinking, u32::MAX);
        assert_eq!(result.total_servings, u32::MAX);
        assert!(result.containers_for(Category::Beer) > 0);
        assert!(result.breakdown.iter().any(|b| b.is_toast));
        assert!(result.estimated_cost > 0);
    }

    #[test]
    fn test_duration_and_guest_clamping() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.set_duration(20);
        assert_eq!(manager.plan().duration_hours, 8);
        manager.set_duration(0);
        assert_eq!(manager.plan().duration_hours, 1);

        manager.update_guest(GuestTier::Light, -5);
        assert_eq!(manager.plan().guests.light, 0);
        manager.set_guests(GuestTier::Heavy, 7);
        assert_eq!(manager.plan().guests.heavy, 7);
    }

    #[test]
    fn test_active_categories_in_order() {
        let mut manager = PartyStateManager::new(PartyPlan::default());
        manager.add_beverage("red_wine").unwrap();
        assert_eq!(
            manager.active_categories(),
            vec![Category::Beer, Category::Wine, Category::Spirit]
        );
    }
}
