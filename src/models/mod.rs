mod beverage;
mod event;
mod guests;
mod plan;
mod result;

pub use beverage::{BeverageOption, Category};
pub use event::{CategoryWeights, EventArchetype};
pub use guests::{GuestBreakdown, GuestTier};
pub use plan::{clamp_duration, AllocationMode, PartyPlan, SelectionState};
pub use result::{BreakdownItem, CalculationResult, Glassware};
