use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{Category, GuestTier};
use crate::planner::constants::{find_beverage, EVENT_TYPES, MAX_DURATION_HOURS, MIN_DURATION_HOURS};
use crate::planner::lookup::{resolve_beverage, Lookup};
use crate::state::PartyStateManager;

/// Top-level actions in the interactive planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    ShowResults,
    EditGuests,
    SetDuration,
    SetEvent,
    AddDrink,
    RemoveDrink,
    ToggleToast,
    CustomizeRatios,
    UsePresetRatios,
    Done,
}

impl PlanAction {
    const ALL: [PlanAction; 10] = [
        PlanAction::ShowResults,
        PlanAction::EditGuests,
        PlanAction::SetDuration,
        PlanAction::SetEvent,
        PlanAction::AddDrink,
        PlanAction::RemoveDrink,
        PlanAction::ToggleToast,
        PlanAction::CustomizeRatios,
        PlanAction::UsePresetRatios,
        PlanAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            PlanAction::ShowResults => "Show shopping list",
            PlanAction::EditGuests => "Edit guests",
            PlanAction::SetDuration => "Set duration",
            PlanAction::SetEvent => "Set event type",
            PlanAction::AddDrink => "Add a drink",
            PlanAction::RemoveDrink => "Remove a drink",
            PlanAction::ToggleToast => "Toggle champagne toast",
            PlanAction::CustomizeRatios => "Customize alcohol ratios",
            PlanAction::UsePresetRatios => "Use event presets",
            PlanAction::Done => "Done",
        }
    }
}

/// Ask which edit to make next.
pub fn prompt_action() -> Result<PlanAction> {
    let labels: Vec<&str> = PlanAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(PlanAction::ALL[selection])
}

fn prompt_count(prompt: &str, current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid count: {}", input)))
}

/// Prompt for every guest tier.
pub fn prompt_guests(manager: &mut PartyStateManager) -> Result<()> {
    for tier in GuestTier::ALL {
        let current = manager.plan().guests.get(tier);
        let count = prompt_count(tier.label(), current)?;
        manager.set_guests(tier, count);
    }
    Ok(())
}

/// Prompt for the event length.
pub fn prompt_duration(manager: &mut PartyStateManager) -> Result<()> {
    let prompt = format!(
        "Duration in hours ({}-{})",
        MIN_DURATION_HOURS, MAX_DURATION_HOURS
    );
    let hours = prompt_count(&prompt, manager.plan().duration_hours)?;
    manager.set_duration(hours);
    Ok(())
}

/// Pick an event type. Changing it drops custom ratios.
pub fn prompt_event(manager: &mut PartyStateManager) -> Result<()> {
    let labels: Vec<&str> = EVENT_TYPES.iter().map(|e| e.label).collect();
    let current = EVENT_TYPES
        .iter()
        .position(|e| e.id == manager.plan().selection.event_id)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Event type")
        .items(&labels)
        .default(current)
        .interact()?;

    manager.set_event(EVENT_TYPES[selection].id)
}

/// Add a drink by name with fuzzy matching.
pub fn prompt_add_beverage(manager: &mut PartyStateManager) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Drink to add (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }

    let chosen = match resolve_beverage(input) {
        Lookup::Exact(option) => Some(option),
        Lookup::NotFound => {
            println!("No matching drink found for '{}'", input);
            None
        }
        Lookup::Candidates(candidates) if candidates.len() == 1 => {
            let option = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", option.label))
                .default(true)
                .interact()?;
            confirm.then_some(option)
        }
        Lookup::Candidates(candidates) => {
            let options: Vec<_> = candidates.into_iter().take(5).collect();
            let mut labels: Vec<&str> = options.iter().map(|o| o.label).collect();
            labels.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            options.get(selection).copied()
        }
    };

    if let Some(option) = chosen {
        manager.add_beverage(option.id)?;
        println!("Added: {}", option.label);
    }

    Ok(())
}

/// Remove one of the selected drinks.
pub fn prompt_remove_beverage(manager: &mut PartyStateManager) -> Result<()> {
    let selected = manager.plan().selection.beverages.clone();
    if selected.is_empty() {
        println!("No drinks selected.");
        return Ok(());
    }

    let labels: Vec<&str> = selected
        .iter()
        .map(|id| find_beverage(id).map(|b| b.label).unwrap_or(id.as_str()))
        .collect();

    let selection = Select::new()
        .with_prompt("Remove which drink?")
        .items(&labels)
        .default(0)
        .interact()?;

    manager.remove_beverage(&selected[selection]);
    Ok(())
}

/// Prompt a percentage for each active category.
pub fn prompt_ratios(manager: &mut PartyStateManager) -> Result<()> {
    let categories: Vec<Category> = manager.active_categories();
    if categories.is_empty() {
        println!("Select some drinks first.");
        return Ok(());
    }

    for category in categories {
        let current = manager.ratio_for(category);
        let percent = prompt_count(&format!("{} %", category), current)?;
        manager.set_ratio(category, percent);
    }

    let total = manager.ratio_total();
    if total != 100 {
        println!("Note: ratios total {}%, not 100%.", total);
    }
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
