//! User settings for budget-tracker
//!
//! Formatting locale, the local UTC offset used to stamp reports, and where
//! shared reports go. Ledger contents are never written here.

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::reports::{ReportFormat, ShareTarget};

/// User settings for budget-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label, number and timestamp formatting for reports
    #[serde(default)]
    pub format: ReportFormat,

    /// Messaging link base and fallback destination
    #[serde(default)]
    pub share: ShareTarget,

    /// Offset from UTC, in minutes, used to stamp reports
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Colour the spend indicator in terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_utc_offset_minutes() -> i32 {
    180 // East Africa Time
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            format: ReportFormat::default(),
            share: ShareTarget::default(),
            utc_offset_minutes: default_utc_offset_minutes(),
            color: default_color(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings that would break report rendering
    pub fn validate(&self) -> Result<(), BudgetError> {
        self.offset()?;

        for (field, pattern) in [
            ("date_format", &self.format.date_format),
            ("time_format", &self.format.time_format),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(BudgetError::Config(format!(
                    "Invalid {} pattern: {}",
                    field, pattern
                )));
            }
        }

        if self.share.default_destination.trim().is_empty() {
            return Err(BudgetError::Config(
                "share.default_destination must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// The configured UTC offset
    pub fn offset(&self) -> Result<FixedOffset, BudgetError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                BudgetError::Config(format!(
                    "UTC offset out of range: {} minutes",
                    self.utc_offset_minutes
                ))
            })
    }

    /// Current wall-clock time at the configured offset
    pub fn local_now(&self) -> Result<NaiveDateTime, BudgetError> {
        Ok(Utc::now().with_timezone(&self.offset()?).naive_local())
    }
}
