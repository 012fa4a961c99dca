//! Dashboard formatting for terminal output
//!
//! Amount received, spent and balance, plus a progress bar coloured by spend
//! level. The bar is clamped to 100%; the printed percentage is not.

use crate::models::{Amount, Totals};
use crate::reports::ReportFormat;

/// Width of the spend bar in cells
pub const BAR_WIDTH: usize = 20;

const RESET: &str = "\x1b[0m";

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the dashboard block
pub fn format_dashboard(
    amount_received: Amount,
    totals: &Totals,
    format: &ReportFormat,
    color: bool,
) -> String {
    let level = totals.spend_level();
    let bar = format_bar(totals.percentage.min(100.0), 100.0, BAR_WIDTH);
    let bar = if color {
        format!("{}{}{}", level.ansi_code(), bar, RESET)
    } else {
        bar
    };

    let rows = [
        ("Amount Received", format.format_money(amount_received)),
        ("Total Spent", format.format_money(totals.total_spent)),
        ("Balance", format.format_money(totals.balance)),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<16} {}\n", label, value));
    }
    output.push_str(&format!(
        "{:<16} [{}] {} ({})\n",
        "Spent",
        bar,
        format_percentage(totals.percentage),
        level
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(15.0), "15%");
        assert_eq!(format_percentage(150.0), "150%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(500.0, 100.0, 4), "████");
    }

    #[test]
    fn test_dashboard_plain() {
        let prices = [Amount::new(150.0)];
        let totals = Totals::compute(&prices, Amount::new(1000.0));
        let out = format_dashboard(Amount::new(1000.0), &totals, &ReportFormat::default(), false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Amount Received  KES 1,000");
        assert_eq!(lines[1], "Total Spent      KES 150");
        assert_eq!(lines[2], "Balance          KES 850");
        assert_eq!(
            lines[3],
            format!("Spent            [{}{}] 15% (Low)", "█".repeat(3), "░".repeat(17))
        );
    }

    #[test]
    fn test_dashboard_clamps_bar_and_colors() {
        let prices = [Amount::new(1500.0)];
        let totals = Totals::compute(&prices, Amount::new(1000.0));
        let out = format_dashboard(Amount::new(1000.0), &totals, &ReportFormat::default(), true);

        assert!(out.contains(&format!("\x1b[31m{}\x1b[0m", "█".repeat(BAR_WIDTH))));
        assert!(out.contains("150% (High)"));
        assert!(out.contains("Balance          KES -500"));
    }
}
