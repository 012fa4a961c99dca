//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod report;
pub mod session;

pub use report::{handle_report_command, ReportArgs};
pub use session::{Session, SessionArgs, SessionCommand};
