//! budget-tracker - record expenses against an amount received
//!
//! This library provides the core of the `budget` command: a session ledger
//! of expense items, the totals and spend level derived from it, and a
//! shareable text report with a messaging deep link.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Ledger, items, amounts and derived totals
//! - `reports`: Report rendering, explicit locale, share links
//! - `display`: Terminal formatting for the interactive session
//! - `cli`: Command handlers and the interactive session
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{Amount, Ledger};
//! use budget_tracker::reports::ReportFormat;
//! use chrono::NaiveDate;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_amount_received(Amount::new(1000.0));
//! ledger.add_item("Bread", Amount::new(100.0))?;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 10, 19)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let text = ledger.current_report(at)?.render(&ReportFormat::default());
//! assert!(text.contains("📊 Balance: KES 900"));
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{BudgetError, BudgetResult};
