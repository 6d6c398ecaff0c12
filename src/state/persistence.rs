use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::PartyPlan;

/// Load a party plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<PartyPlan> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let plan: PartyPlan = serde_json::from_str(&content)?;
    info!("Loaded plan from {}", path.display());
    Ok(plan)
}

/// Load a plan, or the default plan if the file does not exist yet.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<PartyPlan> {
    let path = path.as_ref();
    if path.exists() {
        load_plan(path)
    } else {
        info!("No plan at {}, starting from defaults", path.display());
        Ok(PartyPlan::default())
    }
}

/// Save a party plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &PartyPlan) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    info!("Saved plan to {}", path.display());
    Ok(())
}
