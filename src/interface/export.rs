use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::CalculationResult;

/// Write the shopping list as CSV: one row per drink line, then the extras.
pub fn write_csv(result: &CalculationResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "category", "quantity", "unit", "unit_price", "line_cost"])?;

    for item in &result.breakdown {
        wtr.write_record([
            item.label.clone(),
            item.category.to_string(),
            item.containers.to_string(),
            "container".to_string(),
            format!("{:.2}", item.unit_price),
            format!("{:.2}", item.cost()),
        ])?;
    }

    let extras = [
        ("Mixers", result.mixer_liters, "liter"),
        ("Soft Drinks", result.soft_drink_liters, "liter"),
        ("Ice", result.ice_bags, "2kg bag"),
        ("Garnishes", result.garnishes, "unit"),
    ];
    for (label, quantity, unit) in extras {
        let quantity = quantity.to_string();
        wtr.write_record([label, "Extras", quantity.as_str(), unit, "", ""])?;
    }

    for glass in &result.glassware {
        let count = glass.count.to_string();
        wtr.write_record([glass.kind.as_str(), "Glassware", count.as_str(), "glass", "", ""])?;
    }

    wtr.flush()?;
    info!("Wrote shopping list CSV to {}", path.display());
    Ok(())
}

/// Write the full result as pretty JSON.
pub fn write_json(result: &CalculationResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    info!("Wrote shopping list JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakdownItem, Category, Glassware};

    fn sample_result() -> CalculationResult {
        CalculationResult {
            total_servings: 12,
            breakdown: vec![BreakdownItem::new("Gin", Category::Spirit, 1, 20.0)],
            mixer_liters: 3,
            soft_drink_liters: 2,
            ice_bags: 2,
            garnishes: 4,
            glassware: vec![Glassware {
                kind: "Tumblers/Highballs".to_string(),
                count: 6,
            }],
            suggested_cocktails: vec!["Negroni".to_string()],
            estimated_cost: 35,
        }
    }

    #[test]
    fn test_write_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        write_csv(&sample_result(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "item,category,quantity,unit,unit_price,line_cost");
        assert_eq!(lines[1], "Gin,Spirit,1,container,20.00,20.00");
        assert_eq!(lines.len(), 1 + 1 + 4 + 1);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        write_json(&sample_result(), &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["estimatedCost"], 35);
        assert_eq!(value["breakdown"][0]["category"], "Spirit");
    }
}
