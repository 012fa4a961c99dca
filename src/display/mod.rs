//! Display formatting for terminal output
//!
//! Renders the item list and the totals dashboard for the interactive
//! session.

pub mod dashboard;
pub mod items;

pub use dashboard::{format_bar, format_dashboard, format_percentage};
pub use items::format_item_list;
