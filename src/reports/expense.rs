//! Expense Report
//!
//! The shareable summary of a session. The rendered text is consumed by the
//! messaging app on the other end of the share link, so its template (line
//! order, labels, emoji, the 30-character rule) is fixed.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::format::ReportFormat;
use crate::models::{Amount, Item, Totals};

/// Width of the rule between the item list and the summary
const RULE_WIDTH: usize = 30;

/// Snapshot of a ledger taken when a report is requested
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReport {
    /// Local wall-clock time the report was generated
    pub generated_at: NaiveDateTime,
    pub items: Vec<Item>,
    pub amount_received: Amount,
    pub totals: Totals,
}

impl ExpenseReport {
    /// Render the report text
    pub fn render(&self, format: &ReportFormat) -> String {
        let mut out = String::from("📄 EXPENSE REPORT\n");
        out.push_str(&format!(
            "Date: {}\n\n",
            format.format_timestamp(self.generated_at)
        ));
        out.push_str("Items:\n");

        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {}\n",
                i + 1,
                item.name,
                format.format_money(item.price)
            ));
        }

        out.push_str(&format!("\n{}\n", "─".repeat(RULE_WIDTH)));
        out.push_str(&format!(
            "💰 Amount Received: {}\n",
            format.format_money(self.amount_received)
        ));
        out.push_str(&format!(
            "💸 Total Spent: {}\n",
            format.format_money(self.totals.total_spent)
        ));
        out.push_str(&format!(
            "📊 Balance: {}\n",
            format.format_money(self.totals.balance)
        ));

        out
    }
}
