use serde::{Deserialize, Serialize};

/// Drinking tier of an attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestTier {
    Light,
    Average,
    Heavy,
    NonDrinking,
}

impl GuestTier {
    pub const ALL: [GuestTier; 4] = [
        GuestTier::Light,
        GuestTier::Average,
        GuestTier::Heavy,
        GuestTier::NonDrinking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GuestTier::Light => "Light drinkers",
            GuestTier::Average => "Average drinkers",
            GuestTier::Heavy => "Heavy drinkers",
            GuestTier::NonDrinking => "Non-drinkers",
        }
    }
}

/// Headcount per drinking tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestBreakdown {
    pub light: u32,
    pub average: u32,
    pub heavy: u32,
    #[serde(rename = "nonDrinkers")]
    pub non_drinking: u32,
}

impl GuestBreakdown {
    pub fn new(light: u32, average: u32, heavy: u32, non_drinking: u32) -> Self {
        Self {
            light,
            average,
            heavy,
            non_drinking,
        }
    }

    pub fn get(&self, tier: GuestTier) -> u32 {
        match tier {
            GuestTier::Light => self.light,
            GuestTier::Average => self.average,
            GuestTier::Heavy => self.heavy,
            GuestTier::NonDrinking => self.non_drinking,
        }
    }

    fn slot_mut(&mut self, tier: GuestTier) -> &mut u32 {
        match tier {
            GuestTier::Light => &mut self.light,
            GuestTier::Average => &mut self.average,
            GuestTier::Heavy => &mut self.heavy,
            GuestTier::NonDrinking => &mut self.non_drinking,
        }
    }

    pub fn increment(&mut self, tier: GuestTier) {
        let slot = self.slot_mut(tier);
        *slot = slot.saturating_add(1);
    }

    /// Decrement a tier, never going below zero.
    pub fn decrement(&mut self, tier: GuestTier) {
        let slot = self.slot_mut(tier);
        *slot = slot.saturating_sub(1);
    }

    /// Apply a signed delta to a tier, clamped at zero.
    pub fn update(&mut self, tier: GuestTier, delta: i64) {
        let slot = self.slot_mut(tier);
        *slot = (*slot as i64).saturating_add(delta).clamp(0, u32::MAX as i64) as u32;
    }

    /// Guests in any drinking tier, saturating at `u32::MAX`.
    pub fn drinkers(&self) -> u32 {
        self.light.saturating_add(self.average).saturating_add(self.heavy)
    }

    pub fn total(&self) -> u32 {
        self.drinkers().saturating_add(self.non_drinking)
    }
}
