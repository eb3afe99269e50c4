//! Purchase and expense frequencies.
//!
//! Every recurring amount in an inventory is recorded per occurrence and
//! annualized with a fixed occurrences-per-year table. One-time amounts are
//! never annualized; the financial report carries them separately.

use serde::{Deserialize, Serialize};

/// How often a purchase or expense recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    #[default]
    Annually,
    #[serde(rename = "One Time", alias = "OneTime")]
    OneTime,
}

impl Frequency {
    /// Occurrences per year (daily=365, weekly=52, monthly=12, annually=1).
    ///
    /// One-time amounts occur zero times per year.
    pub fn annual_occurrence(self) -> f64 {
        match self {
            Frequency::Daily => 365.0,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
            Frequency::Annually => 1.0,
            Frequency::OneTime => 0.0,
        }
    }

    pub fn is_one_time(self) -> bool {
        matches!(self, Frequency::OneTime)
    }

    /// Annualize a per-occurrence amount.
    pub fn annualize(self, amount: f64) -> f64 {
        amount * self.annual_occurrence()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Annually => "Annually",
            Frequency::OneTime => "One Time",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
