use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{BeverageOption, Category, CategoryWeights, EventArchetype};

// ─────────────────────────────────────────────────────────────────────────────
// Demand
// ─────────────────────────────────────────────────────────────────────────────

/// Servings per hour for each drinking tier.
pub const LIGHT_SERVINGS_PER_HOUR: f64 = 0.5;
pub const AVERAGE_SERVINGS_PER_HOUR: f64 = 1.0;
pub const HEAVY_SERVINGS_PER_HOUR: f64 = 1.5;

/// Soft drink serving for non-drinkers, in ml.
pub const SOFT_DRINK_SERVING_ML: f64 = 330.0;

pub const MIN_DURATION_HOURS: u32 = 1;
pub const MAX_DURATION_HOURS: u32 = 8;
pub const DEFAULT_DURATION_HOURS: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Toast
// ─────────────────────────────────────────────────────────────────────────────

/// Guests served by one bottle during the toast.
pub const GUESTS_PER_TOAST_BOTTLE: f64 = 6.0;

pub const TOAST_LABEL: &str = "Champagne (Toast)";

// ─────────────────────────────────────────────────────────────────────────────
// Ancillaries
// ─────────────────────────────────────────────────────────────────────────────

pub const MIXER_LITERS_PER_SPIRIT_BOTTLE: f64 = 3.0;
pub const GARNISHES_PER_SPIRIT_BOTTLE: f64 = 4.0;

/// Kilograms of ice per guest.
pub const ICE_KG_PER_GUEST: f64 = 0.75;
pub const ICE_BAG_KG: f64 = 2.0;

/// Spare glasses factor applied to every glassware count.
pub const GLASS_SPARE_FACTOR: f64 = 1.5;
pub const WINE_GLASS_SHARE: f64 = 0.7;
pub const FLUTE_SHARE: f64 = 0.5;
pub const PINT_SHARE: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Pricing defaults (GBP)
// ─────────────────────────────────────────────────────────────────────────────

pub const BEER_UNIT_PRICE: f64 = 1.5;
pub const WINE_UNIT_PRICE: f64 = 8.0;
pub const SPIRIT_UNIT_PRICE: f64 = 20.0;
pub const CHAMPAGNE_UNIT_PRICE: f64 = 12.0;
pub const NO_ALC_UNIT_PRICE: f64 = 5.0;
pub const TOAST_UNIT_PRICE: f64 = 15.0;

pub const MIXER_PRICE_PER_LITER: f64 = 1.5;
pub const SOFT_DRINK_PRICE_PER_LITER: f64 = 1.5;
pub const ICE_PRICE_PER_BAG: f64 = 1.5;
pub const GARNISH_UNIT_PRICE: f64 = 0.3;

// ─────────────────────────────────────────────────────────────────────────────
// Suggestions
// ─────────────────────────────────────────────────────────────────────────────

pub const MAX_SUGGESTIONS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Defaults for a fresh plan
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_EVENT_ID: &str = "house_party";
pub const DEFAULT_SELECTION: [&str; 3] = ["lager", "white_wine", "gin"];

/// Minimum Jaro-Winkler score for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Every beverage a guest list can be stocked with.
pub static BEVERAGES: [BeverageOption; 17] = [
    // Beer & cider
    BeverageOption::new("lager", "Lager (e.g. Peroni, Stella)", Category::Beer, 330, 330),
    BeverageOption::new("ipa", "IPA / Craft Beer", Category::Beer, 330, 330),
    BeverageOption::new("cider", "Cider", Category::Beer, 330, 330),
    BeverageOption::new("stout", "Stout / Guinness", Category::Beer, 440, 440),
    // Wine
    BeverageOption::new("red_wine", "Red Wine (Cabernet/Merlot)", Category::Wine, 150, 750),
    BeverageOption::new("white_wine", "White Wine (Sauvignon/Pinot)", Category::Wine, 150, 750),
    BeverageOption::new("rose_wine", "Rose Wine", Category::Wine, 150, 750),
    // Sparkling
    BeverageOption::new("prosecco", "Prosecco", Category::Champagne, 125, 750),
    BeverageOption::new("champagne", "Champagne", Category::Champagne, 125, 750),
    // Spirits
    BeverageOption::new("vodka", "Vodka", Category::Spirit, 50, 700),
    BeverageOption::new("gin", "Gin", Category::Spirit, 50, 700),
    BeverageOption::new("whiskey", "Whiskey / Bourbon", Category::Spirit, 50, 700),
    BeverageOption::new("rum_white", "White Rum", Category::Spirit, 50, 700),
    BeverageOption::new("rum_dark", "Dark / Spiced Rum", Category::Spirit, 50, 700),
    BeverageOption::new("tequila", "Tequila", Category::Spirit, 50, 700),
    BeverageOption::new("brandy", "Brandy / Cognac", Category::Spirit, 50, 700),
    // No alcohol
    BeverageOption::new("mocktail", "Mocktail Ingredients", Category::NoAlc, 200, 1000),
];

/// Event profiles. The first entry is the fallback for unknown ids.
pub static EVENT_TYPES: [EventArchetype; 5] = [
    EventArchetype {
        id: "house_party",
        label: "House Party / Birthday",
        weights: CategoryWeights { beer: 1.2, wine: 0.8, spirit: 1.2, champagne: 0.5, no_alc: 0.5 },
    },
    EventArchetype {
        id: "wedding",
        label: "Wedding Reception",
        weights: CategoryWeights { beer: 0.8, wine: 1.5, spirit: 0.8, champagne: 1.2, no_alc: 0.3 },
    },
    EventArchetype {
        id: "dinner",
        label: "Dinner Party",
        weights: CategoryWeights { beer: 0.5, wine: 2.0, spirit: 0.5, champagne: 0.8, no_alc: 0.5 },
    },
    EventArchetype {
        id: "cocktail_hour",
        label: "Cocktail Hour",
        weights: CategoryWeights { beer: 0.5, wine: 0.8, spirit: 1.5, champagne: 1.5, no_alc: 0.2 },
    },
    EventArchetype {
        id: "professional",
        label: "Professional / Networking",
        weights: CategoryWeights { beer: 1.0, wine: 1.2, spirit: 0.2, champagne: 0.2, no_alc: 1.0 },
    },
];

/// Classic cocktails keyed by beverage id.
pub static COCKTAIL_SUGGESTIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("gin", &["Gin & Tonic", "Tom Collins", "Negroni", "Bramble"]);
        m.insert("vodka", &["Vodka Martini", "Moscow Mule", "Cosmopolitan", "Espresso Martini"]);
        m.insert("rum_white", &["Mojito", "Daiquiri", "Pina Colada"]);
        m.insert("rum_dark", &["Dark & Stormy", "Mai Tai", "Rum Punch"]);
        m.insert("whiskey", &["Old Fashioned", "Whiskey Sour", "Highball"]);
        m.insert("tequila", &["Margarita", "Paloma", "Tequila Sunrise"]);
        m.insert("prosecco", &["Aperol Spritz", "Hugo Spritz", "Bellini"]);
        m.insert("champagne", &["French 75", "Kir Royale", "Mimosa"]);
        m
    });

/// Look up a beverage by id.
pub fn find_beverage(id: &str) -> Option<&'static BeverageOption> {
    BEVERAGES.iter().find(|b| b.id == id)
}

/// Look up an event archetype by id.
pub fn find_event(id: &str) -> Option<&'static EventArchetype> {
    EVENT_TYPES.iter().find(|e| e.id == id)
}

/// Event archetype for an id, falling back to the first profile.
pub fn event_or_default(id: &str) -> &'static EventArchetype {
    find_event(id).unwrap_or(&EVENT_TYPES[0])
}

/// Default unit price for a category.
pub fn category_unit_price(category: Category) -> f64 {
    match category {
        Category::Beer => BEER_UNIT_PRICE,
        Category::Wine => WINE_UNIT_PRICE,
        Category::Spirit => SPIRIT_UNIT_PRICE,
        Category::Champagne => CHAMPAGNE_UNIT_PRICE,
        Category::NoAlc => NO_ALC_UNIT_PRICE,
    }
}
