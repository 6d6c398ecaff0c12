use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, GuestBreakdown};
use crate::planner::constants::{
    DEFAULT_DURATION_HOURS, DEFAULT_EVENT_ID, DEFAULT_SELECTION, MAX_DURATION_HOURS,
    MIN_DURATION_HOURS,
};

/// How total servings are split across the selected beverages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "ratios", rename_all = "snake_case")]
pub enum AllocationMode {
    /// Weights come from the chosen event archetype.
    #[default]
    Archetype,

    /// User-supplied percentage per category. The values need not sum to 100.
    CustomRatio(BTreeMap<Category, u32>),
}

/// The user's drink choices for the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Selected beverage ids in insertion order, without duplicates.
    pub beverages: Vec<String>,

    pub event_id: String,

    /// Include a champagne toast round.
    #[serde(default)]
    pub toast: bool,

    #[serde(default)]
    pub mode: AllocationMode,
}

impl SelectionState {
    pub fn contains(&self, id: &str) -> bool {
        self.beverages.iter().any(|b| b == id)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            beverages: DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect(),
            event_id: DEFAULT_EVENT_ID.to_string(),
            toast: false,
            mode: AllocationMode::Archetype,
        }
    }
}

/// Everything the calculator needs for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyPlan {
    pub guests: GuestBreakdown,
    pub duration_hours: u32,
    pub selection: SelectionState,
}

impl PartyPlan {
    /// Duration clamped to the supported range.
    pub fn duration(&self) -> u32 {
        clamp_duration(self.duration_hours)
    }
}

impl Default for PartyPlan {
    fn default() -> Self {
        Self {
            guests: GuestBreakdown::new(2, 4, 2, 2),
            duration_hours: DEFAULT_DURATION_HOURS,
            selection: SelectionState::default(),
        }
    }
}

pub fn clamp_duration(hours: u32) -> u32 {
    hours.clamp(MIN_DURATION_HOURS, MAX_DURATION_HOURS)
}
