mod manager;
mod persistence;

pub use manager::PartyStateManager;
pub use persistence::{load_or_default, load_plan, save_plan};
