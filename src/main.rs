use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::Path;

use party_planner_rs::cli::{parse_ratio, Cli, Command};
use party_planner_rs::error::{PlannerError, Result};
use party_planner_rs::interface::{
    display_catalog, display_results, prompt_action, prompt_add_beverage, prompt_duration,
    prompt_event, prompt_guests, prompt_ratios, prompt_remove_beverage, prompt_yes_no,
    share_text, write_csv, write_json, PlanAction,
};
use party_planner_rs::models::{GuestTier, PartyPlan};
use party_planner_rs::planner::{calculate_needs, resolve_beverage, resolve_event, Lookup, PriceConfig};
use party_planner_rs::state::{load_or_default, load_plan, save_plan, PartyStateManager};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let prices = load_prices(cli.prices.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file, &prices),
        Command::Calc {
            light,
            average,
            heavy,
            non_drinkers,
            duration,
            event,
            drinks,
            toast,
            ratios,
            json,
            seed,
        } => {
            let mut manager = PartyStateManager::new(PartyPlan::default());
            manager.set_guests(GuestTier::Light, light);
            manager.set_guests(GuestTier::Average, average);
            manager.set_guests(GuestTier::Heavy, heavy);
            manager.set_guests(GuestTier::NonDrinking, non_drinkers);
            manager.set_duration(duration);
            manager.set_event(&resolve_event_id(&event)?)?;
            manager.set_toast(toast);

            manager.clear_beverages();
            for drink in &drinks {
                manager.add_beverage(&resolve_beverage_id(drink)?)?;
            }

            for ratio in &ratios {
                let (category, percent) = parse_ratio(ratio).ok_or_else(|| {
                    PlannerError::InvalidInput(format!("Invalid ratio '{}', expected Category=percent", ratio))
                })?;
                manager.set_ratio(category, percent);
            }

            cmd_calc(&manager.into_plan(), &prices, json, seed)
        }
        Command::Catalog => {
            display_catalog();
            Ok(())
        }
        Command::Export { csv, json } => cmd_export(&cli.file, &prices, csv, json),
        Command::Reset {
            guests,
            drinks,
            ratios,
        } => cmd_reset(&cli.file, guests, drinks, ratios),
    }
}

fn load_prices(path: Option<&str>) -> Result<PriceConfig> {
    match path {
        Some(path) => PriceConfig::load(path),
        None => Ok(PriceConfig::default()),
    }
}

/// Resolve a drink name without prompting, taking the best fuzzy match.
fn resolve_beverage_id(input: &str) -> Result<String> {
    match resolve_beverage(input) {
        Lookup::Exact(option) => Ok(option.id.to_string()),
        Lookup::Candidates(candidates) => {
            let best = candidates[0];
            eprintln!("Using '{}' for '{}'", best.label, input);
            Ok(best.id.to_string())
        }
        Lookup::NotFound => Err(PlannerError::UnknownBeverage(input.to_string())),
    }
}

fn resolve_event_id(input: &str) -> Result<String> {
    match resolve_event(input) {
        Lookup::Exact(event) => Ok(event.id.to_string()),
        Lookup::Candidates(candidates) => {
            let best = candidates[0];
            eprintln!("Using '{}' for '{}'", best.label, input);
            Ok(best.id.to_string())
        }
        Lookup::NotFound => Err(PlannerError::UnknownEvent(input.to_string())),
    }
}

/// Interactively edit the saved plan.
fn cmd_plan(file_path: &str, prices: &PriceConfig) -> Result<()> {
    let path = Path::new(file_path);
    let mut manager = PartyStateManager::new(load_or_default(path)?);
    let mut rng = rand::thread_rng();

    display_results(manager.plan(), &calculate_needs(manager.plan(), prices, &mut rng));

    loop {
        match prompt_action()? {
            PlanAction::ShowResults => {
                let result = calculate_needs(manager.plan(), prices, &mut rng);
                display_results(manager.plan(), &result);
                println!("{}", share_text(&result));
            }
            PlanAction::EditGuests => prompt_guests(&mut manager)?,
            PlanAction::SetDuration => prompt_duration(&mut manager)?,
            PlanAction::SetEvent => prompt_event(&mut manager)?,
            PlanAction::AddDrink => prompt_add_beverage(&mut manager)?,
            PlanAction::RemoveDrink => prompt_remove_beverage(&mut manager)?,
            PlanAction::ToggleToast => {
                let enabled = !manager.plan().selection.toast;
                manager.set_toast(enabled);
                println!("Champagne toast {}.", if enabled { "on" } else { "off" });
            }
            PlanAction::CustomizeRatios => prompt_ratios(&mut manager)?,
            PlanAction::UsePresetRatios => manager.reset_ratios(),
            PlanAction::Done => break,
        }
    }

    let save = prompt_yes_no("Save party plan?", true)?;
    if save {
        save_plan(path, manager.plan())?;
        println!("Party plan saved.");
    }

    Ok(())
}

/// Calculate and print a one-off shopping list.
fn cmd_calc(plan: &PartyPlan, prices: &PriceConfig, json: bool, seed: Option<u64>) -> Result<()> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let result = calculate_needs(plan, prices, rng.as_mut());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_results(plan, &result);
    }

    Ok(())
}

/// Export the saved plan's shopping list.
fn cmd_export(
    file_path: &str,
    prices: &PriceConfig,
    csv: Option<String>,
    json: Option<String>,
) -> Result<()> {
    if csv.is_none() && json.is_none() {
        println!("Please specify at least one output:");
        println!("  --csv <FILE>   Shopping list as CSV");
        println!("  --json <FILE>  Full result as JSON");
        return Ok(());
    }

    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Party plan file not found: {}", file_path);
        eprintln!("Run 'plan' first to create one.");
        return Ok(());
    }

    let plan = load_plan(path)?;
    let result = calculate_needs(&plan, prices, &mut rand::thread_rng());

    if let Some(csv) = csv {
        write_csv(&result, Path::new(&csv))?;
        println!("Shopping list written to {}", csv);
    }
    if let Some(json) = json {
        write_json(&result, Path::new(&json))?;
        println!("Result written to {}", json);
    }

    Ok(())
}

/// Reset parts of the saved plan.
fn cmd_reset(file_path: &str, guests: bool, drinks: bool, ratios: bool) -> Result<()> {
    if !guests && !drinks && !ratios {
        println!("Please specify at least one reset option:");
        println!("  --guests  Restore default guests and duration");
        println!("  --drinks  Clear all selected drinks");
        println!("  --ratios  Return to event preset ratios");
        return Ok(());
    }

    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Party plan file not found: {}", file_path);
        return Ok(());
    }

    let mut manager = PartyStateManager::new(load_plan(path)?);
    let defaults = PartyPlan::default();

    if guests {
        for tier in GuestTier::ALL {
            manager.set_guests(tier, defaults.guests.get(tier));
        }
        manager.set_duration(defaults.duration_hours);
        println!("Reset guests and duration to defaults.");
    }

    if drinks {
        manager.clear_beverages();
        println!("Cleared selected drinks.");
    }

    if ratios {
        manager.reset_ratios();
        println!("Returned to event preset ratios.");
    }

    save_plan(path, manager.plan())?;
    println!("Party plan saved.");

    Ok(())
}
