//! One-shot report command
//!
//! Builds a ledger from command-line arguments and prints the report text
//! and share link, or both as JSON.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Ledger, SpendLevel};
use crate::reports::ExpenseReport;

/// Arguments for `budget report`
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Amount received
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Expense item as NAME=PRICE (repeatable, kept in order)
    #[arg(short, long = "item", value_name = "NAME=PRICE")]
    pub items: Vec<String>,

    /// Destination for the share link (defaults to the configured one)
    #[arg(long)]
    pub to: Option<String>,

    /// Print the report, its text and the link as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a generated report
#[derive(Debug, Serialize)]
pub struct SharedReport<'a> {
    pub report: &'a ExpenseReport,
    pub spend_level: SpendLevel,
    /// Indicator colour for `spend_level`
    pub indicator_color: &'static str,
    pub text: &'a str,
    pub share_link: &'a str,
}

/// Split `NAME=PRICE` at the last `=`
pub fn parse_item_spec(spec: &str) -> BudgetResult<(&str, &str)> {
    spec.rsplit_once('=').ok_or_else(|| {
        BudgetError::Command(format!("Expected NAME=PRICE, got '{}'", spec))
    })
}

/// Handle `budget report`
pub fn handle_report_command<W: Write>(
    settings: &Settings,
    args: &ReportArgs,
    output: &mut W,
) -> BudgetResult<()> {
    let mut ledger = Ledger::new();
    ledger.set_amount_received(Amount::from_input(&args.amount));

    for spec in &args.items {
        let (name, price) = parse_item_spec(spec)?;
        ledger.add_item_from_input(name, price)?;
    }

    let report = ledger.current_report(settings.local_now()?)?;
    let text = report.render(&settings.format);
    let link = settings.share.link(&text, args.to.as_deref());

    if args.json {
        let level = report.totals.spend_level();
        let shared = SharedReport {
            report: &report,
            spend_level: level,
            indicator_color: level.color(),
            text: &text,
            share_link: &link,
        };
        writeln!(output, "{}", serde_json::to_string_pretty(&shared)?)?;
    } else {
        writeln!(output, "{}", text)?;
        writeln!(output, "Share: {}", link)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(amount: &str, items: &[&str]) -> ReportArgs {
        ReportArgs {
            amount: amount.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            to: None,
            json: false,
        }
    }

    #[test]
    fn test_parse_item_spec() {
        assert_eq!(parse_item_spec("Bread=100").unwrap(), ("Bread", "100"));
        assert_eq!(parse_item_spec("a=b=5").unwrap(), ("a=b", "5"));
        assert!(matches!(
            parse_item_spec("Bread"),
            Err(BudgetError::Command(_))
        ));
    }

    #[test]
    fn test_text_output() {
        let settings = Settings::default();
        let mut out = Vec::new();
        handle_report_command(&settings, &args("1000", &["Bread=100", "Milk=50"]), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("1. Bread - KES 100\n2. Milk - KES 50\n"));
        assert!(out.contains("📊 Balance: KES 850\n"));
        assert!(out.contains("Share: https://wa.me/+254762634893?text="));
    }

    #[test]
    fn test_json_output() {
        let settings = Settings::default();
        let mut a = args("1000", &["Bread=100"]);
        a.json = true;
        a.to = Some("+15550100".into());
        let mut out = Vec::new();
        handle_report_command(&settings, &a, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["report"]["amount_received"], 1000.0);
        assert_eq!(value["report"]["totals"]["balance"], 900.0);
        assert_eq!(value["report"]["items"][0]["name"], "Bread");
        assert_eq!(value["spend_level"], "low");
        assert_eq!(value["indicator_color"], "green");
        assert!(value["share_link"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/+15550100?text="));
    }

    #[test]
    fn test_json_spend_indicator() {
        let settings = Settings::default();
        for (items, level, color) in [
            (["Rent=750"], "medium", "yellow"),
            (["Rent=950"], "high", "red"),
        ] {
            let mut a = args("1000", &items);
            a.json = true;
            let mut out = Vec::new();
            handle_report_command(&settings, &a, &mut out).unwrap();

            let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
            assert_eq!(value["spend_level"], level);
            assert_eq!(value["indicator_color"], color);
        }
    }

    #[test]
    fn test_amount_checked_before_items() {
        let settings = Settings::default();
        let mut out = Vec::new();

        let err = handle_report_command(&settings, &args("0", &[]), &mut out).unwrap_err();
        assert!(matches!(err, BudgetError::MissingAmount));

        let err = handle_report_command(&settings, &args("500", &[]), &mut out).unwrap_err();
        assert!(matches!(err, BudgetError::EmptyLedger));

        let err =
            handle_report_command(&settings, &args("500", &["Tea=0"]), &mut out).unwrap_err();
        assert!(err.is_validation());
        assert!(out.is_empty());
    }
}
