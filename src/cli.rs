use clap::{Parser, Subcommand};

/// Party Planner: estimate drinks, ice, glassware and cost for an event.
#[derive(Parser, Debug)]
#[command(name = "party_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the party plan JSON file.
    #[arg(short, long, default_value = "party_plan.json")]
    pub file: String,

    /// Optional JSON file overriding unit prices.
    #[arg(long)]
    pub prices: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the saved plan interactively and show the shopping list.
    Plan,

    /// Calculate a shopping list from flags without touching the plan file.
    Calc {
        /// Light drinkers.
        #[arg(long, default_value = "0")]
        light: u32,

        /// Average drinkers.
        #[arg(long, default_value = "0")]
        average: u32,

        /// Heavy drinkers.
        #[arg(long, default_value = "0")]
        heavy: u32,

        /// Guests who do not drink alcohol.
        #[arg(long, default_value = "0")]
        non_drinkers: u32,

        /// Event length in hours (1-8).
        #[arg(short, long, default_value = "3")]
        duration: u32,

        /// Event type id or name.
        #[arg(short, long, default_value = "house_party")]
        event: String,

        /// Drinks to stock (comma-separated ids or names).
        #[arg(long, value_delimiter = ',')]
        drinks: Vec<String>,

        /// Add a champagne toast round.
        #[arg(long)]
        toast: bool,

        /// Custom category ratio, e.g. Beer=60 (repeatable).
        #[arg(long = "ratio")]
        ratios: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Seed for the cocktail suggestion shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available drinks and event types.
    Catalog,

    /// Export the saved plan's shopping list.
    Export {
        /// Output CSV file.
        #[arg(long)]
        csv: Option<String>,

        /// Output JSON file.
        #[arg(long)]
        json: Option<String>,
    },

    /// Reset parts of the saved plan.
    Reset {
        /// Restore the default guest list and duration.
        #[arg(long)]
        guests: bool,

        /// Clear all selected drinks.
        #[arg(long)]
        drinks: bool,

        /// Return to event preset ratios.
        #[arg(long)]
        ratios: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

/// Parse a `Category=percent` pair.
pub fn parse_ratio(input: &str) -> Option<(crate::models::Category, u32)> {
    let (name, percent) = input.split_once('=')?;
    let category = crate::models::Category::parse(name)?;
    let percent = percent.trim().parse().ok()?;
    Some((category, percent))
}
