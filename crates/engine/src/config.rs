use serde::{Deserialize, Serialize};

use crate::error::SalesError;

// ---------------------------------------------------------------------------
// Run config
// ---------------------------------------------------------------------------

/// Settings for one run. Every key is optional in the TOML form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalesConfig {
    #[serde(default)]
    pub mode: AggregationMode,
}

/// Which dictionaries a run loads, and so how many lines a record file has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// `branch.lst` only; records are `branch, amount`.
    #[default]
    Branch,
    /// `branch.lst` and `commodity.lst`; records are `branch, commodity, amount`.
    BranchAndCommodity,
}

impl AggregationMode {
    pub fn with_commodity(&self) -> bool {
        matches!(self, Self::BranchAndCommodity)
    }

    pub fn record_lines(&self) -> usize {
        match self {
            Self::Branch => 2,
            Self::BranchAndCommodity => 3,
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Branch => write!(f, "branch"),
            Self::BranchAndCommodity => write!(f, "branch_and_commodity"),
        }
    }
}

impl SalesConfig {
    pub fn new(mode: AggregationMode) -> Self {
        Self { mode }
    }

    pub fn from_toml(s: &str) -> Result<Self, SalesError> {
        toml::from_str(s).map_err(|e| SalesError::Unknown(format!("config parse error: {e}")))
    }
}
