//! Item list formatting
//!
//! Numbered rows in insertion order; the number shown is the position the
//! session's `delete` command takes.

use crate::models::Item;
use crate::reports::ReportFormat;

/// Shown when the ledger has no items
pub const EMPTY_STATE: &str = "No items added yet.";

/// Format the item list as an aligned table
pub fn format_item_list(items: &[Item], format: &ReportFormat) -> String {
    if items.is_empty() {
        return format!("Items (0)\n{}\n", EMPTY_STATE);
    }

    let prices: Vec<String> = items.iter().map(|i| format.format_money(i.price)).collect();

    let num_width = items.len().to_string().len();
    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let price_width = prices.iter().map(|p| p.chars().count()).max().unwrap_or(5).max(5);

    let mut output = format!("Items ({})\n", items.len());

    for (i, (item, price)) in items.iter().zip(&prices).enumerate() {
        output.push_str(&format!(
            "{:>num_width$}.  {:<name_width$}  {:>price_width$}\n",
            i + 1,
            item.name,
            price,
            num_width = num_width,
            name_width = name_width,
            price_width = price_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Ledger};

    #[test]
    fn test_empty_list() {
        let out = format_item_list(&[], &ReportFormat::default());
        assert_eq!(out, "Items (0)\nNo items added yet.\n");
    }

    #[test]
    fn test_rows_are_numbered_and_aligned() {
        let mut ledger = Ledger::new();
        ledger.add_item("Bread", Amount::new(100.0)).unwrap();
        ledger.add_item("Cooking oil", Amount::new(1250.0)).unwrap();

        let out = format_item_list(ledger.items(), &ReportFormat::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Items (2)");
        assert_eq!(lines[1], "1.  Bread          KES 100");
        assert_eq!(lines[2], "2.  Cooking oil  KES 1,250");
    }
}
