//! Session ledger
//!
//! The ledger owns the ordered list of expense items and the amount received
//! for one session. Everything else (totals, spend level, the shareable
//! report) is derived from it on demand and never cached.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use super::amount::Amount;
use super::ids::ItemId;
use super::item::Item;
use super::totals::{SpendLevel, Totals};
use crate::error::{BudgetError, BudgetResult};
use crate::reports::ExpenseReport;

/// Expense items plus the amount received, owned by a single session
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    items: Vec<Item>,
    amount_received: Amount,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn amount_received(&self) -> Amount {
        self.amount_received
    }

    /// Record the latest amount received
    pub fn set_amount_received(&mut self, amount: Amount) {
        debug!(amount = amount.value(), "amount received updated");
        self.amount_received = amount;
    }

    /// Validate and append an item, returning the stored copy
    pub fn add_item(&mut self, name: &str, price: Amount) -> BudgetResult<Item> {
        let item = Item::new(name, price)?;
        Ok(self.push(item))
    }

    /// Validate raw form text and append the resulting item
    pub fn add_item_from_input(&mut self, name: &str, price: &str) -> BudgetResult<Item> {
        let item = Item::from_input(name, price)?;
        Ok(self.push(item))
    }

    fn push(&mut self, item: Item) -> Item {
        debug!(id = %item.id, name = %item.name, price = item.price.value(), "item added");
        self.items.push(item.clone());
        item
    }

    /// Remove the item at a zero-based position. Later items move up by one.
    pub fn delete_item(&mut self, index: usize) -> BudgetResult<Item> {
        if index >= self.items.len() {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        debug!(id = %removed.id, index, "item deleted");
        Ok(removed)
    }

    /// Remove an item by identity
    pub fn delete_item_by_id(&mut self, id: ItemId) -> BudgetResult<Item> {
        let index = self
            .position(id)
            .ok_or_else(|| BudgetError::item_not_found(id.to_string()))?;
        self.delete_item(index)
    }

    /// Current zero-based position of an item
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Sum of all prices, added in insertion order
    pub fn total_spent(&self) -> Amount {
        self.items.iter().map(|item| &item.price).sum()
    }

    /// Totals against the stored amount received
    pub fn compute_totals(&self) -> Totals {
        Totals::compute(self.items.iter().map(|item| &item.price), self.amount_received)
    }

    /// Spend level for a percentage; see [`SpendLevel::classify`]
    pub fn classify_spend_level(percentage: f64) -> SpendLevel {
        SpendLevel::classify(percentage)
    }

    /// Build the shareable report for the given amount received.
    ///
    /// The amount is checked before the item list.
    pub fn generate_report(
        &self,
        amount_received: Amount,
        generated_at: NaiveDateTime,
    ) -> BudgetResult<ExpenseReport> {
        if !amount_received.is_positive() {
            return Err(BudgetError::MissingAmount);
        }
        if self.items.is_empty() {
            return Err(BudgetError::EmptyLedger);
        }

        let totals = Totals::compute(self.items.iter().map(|item| &item.price), amount_received);
        info!(
            items = self.items.len(),
            total_spent = totals.total_spent.value(),
            "expense report generated"
        );

        Ok(ExpenseReport {
            generated_at,
            items: self.items.clone(),
            amount_received,
            totals,
        })
    }

    /// Build the report against the stored amount received
    pub fn current_report(&self, generated_at: NaiveDateTime) -> BudgetResult<ExpenseReport> {
        self.generate_report(self.amount_received, generated_at)
    }
}
