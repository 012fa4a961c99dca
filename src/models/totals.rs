//! Derived ledger figures and the spend level they map to

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// How much of the amount received has been spent, in three bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendLevel {
    Low,
    Medium,
    High,
}

impl SpendLevel {
    /// Classify a spend percentage. Upper bounds are inclusive: 70 is Low,
    /// 90 is Medium.
    pub fn classify(percentage: f64) -> Self {
        if percentage > 90.0 {
            Self::High
        } else if percentage > 70.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Colour name used by indicators
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "yellow",
            Self::High => "red",
        }
    }

    /// ANSI foreground code matching [`SpendLevel::color`]
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Self::Low => "\x1b[32m",
            Self::Medium => "\x1b[33m",
            Self::High => "\x1b[31m",
        }
    }
}

impl fmt::Display for SpendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Totals derived from a ledger snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_spent: Amount,
    pub balance: Amount,
    /// Share of the amount received that has been spent. Not capped at 100.
    pub percentage: f64,
}

impl Totals {
    /// Compute totals for a list of prices against an amount received
    pub fn compute<'a>(
        prices: impl IntoIterator<Item = &'a Amount>,
        amount_received: Amount,
    ) -> Self {
        let total_spent: Amount = prices.into_iter().sum();
        let balance = amount_received - total_spent;
        let percentage = if amount_received.value() > 0.0 {
            total_spent.value() / amount_received.value() * 100.0
        } else {
            0.0
        };

        Self {
            total_spent,
            balance,
            percentage,
        }
    }

    pub fn spend_level(&self) -> SpendLevel {
        SpendLevel::classify(self.percentage)
    }
}
