use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepairStatus {
    /// Raised, not yet being worked on.
    #[default]
    Open,
    /// Being worked on or waiting for parts/collection.
    Pending,
    /// Done.
    Closed,
}

/// Returned when parsing an unknown status name.
#[derive(Debug, Error)]
#[error("unknown repair status '{0}'")]
pub struct UnknownStatus(pub String);

impl RepairStatus {
    /// All states in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Open, Self::Pending, Self::Closed];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Pending => "PENDING",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns true for the terminal state.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepairStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
