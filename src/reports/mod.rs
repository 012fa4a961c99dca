//! Reports module
//!
//! The shareable expense report, the explicit locale it is rendered with,
//! and the messaging link it is sent through.

pub mod expense;
pub mod format;
pub mod share;

pub use expense::ExpenseReport;
pub use format::{NumberFormat, ReportFormat};
pub use share::ShareTarget;
