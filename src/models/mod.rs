//! Core data models for budget-tracker
//!
//! This module contains the session ledger and the values it is built from:
//! amounts, expense items, their ids, and the totals derived from them.

pub mod amount;
pub mod ids;
pub mod item;
pub mod ledger;
pub mod totals;

pub use amount::{Amount, AmountParseError};
pub use ids::ItemId;
pub use item::{Item, ItemValidationError};
pub use ledger::Ledger;
pub use totals::{SpendLevel, Totals};
