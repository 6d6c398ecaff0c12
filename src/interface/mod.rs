pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_csv, write_json};
pub use prompts::{
    prompt_action, prompt_add_beverage, prompt_duration, prompt_event, prompt_guests,
    prompt_ratios, prompt_remove_beverage, prompt_yes_no, PlanAction,
};
pub use render::{display_catalog, display_results, share_text};
