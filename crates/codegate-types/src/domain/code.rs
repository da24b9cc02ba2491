use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::ProvisionedAccount;
use crate::error::Error;

/// Whether an activation code currently admits new activations.
///
/// The backend is authoritative; clients never flip this locally.
/// A displayed status only changes after a confirming reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    Enabled,
    Disabled,
}

impl CodeStatus {
    /// The inverse status, used when requesting a toggle.
    pub fn toggled(self) -> Self {
        match self {
            CodeStatus::Enabled => CodeStatus::Disabled,
            CodeStatus::Disabled => CodeStatus::Enabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, CodeStatus::Enabled)
    }
}

impl fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStatus::Enabled => write!(f, "enabled"),
            CodeStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Validity period offered when generating a code.
///
/// The backend only accepts these three values, so the closed set is
/// encoded here rather than as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum CodeDuration {
    FiveDays,
    FifteenDays,
    ThirtyDays,
}

impl CodeDuration {
    pub fn days(self) -> u32 {
        match self {
            CodeDuration::FiveDays => 5,
            CodeDuration::FifteenDays => 15,
            CodeDuration::ThirtyDays => 30,
        }
    }

    /// Next period in the 5 -> 15 -> 30 -> 5 cycle (form selector order).
    pub fn next(self) -> Self {
        match self {
            CodeDuration::FiveDays => CodeDuration::FifteenDays,
            CodeDuration::FifteenDays => CodeDuration::ThirtyDays,
            CodeDuration::ThirtyDays => CodeDuration::FiveDays,
        }
    }
}

impl Default for CodeDuration {
    fn default() -> Self {
        CodeDuration::FiveDays
    }
}

impl From<CodeDuration> for u32 {
    fn from(duration: CodeDuration) -> u32 {
        duration.days()
    }
}

impl TryFrom<u32> for CodeDuration {
    type Error = Error;

    fn try_from(days: u32) -> Result<Self, Error> {
        match days {
            5 => Ok(CodeDuration::FiveDays),
            15 => Ok(CodeDuration::FifteenDays),
            30 => Ok(CodeDuration::ThirtyDays),
            other => Err(Error::InvalidDuration(other)),
        }
    }
}

impl fmt::Display for CodeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// A redeemable activation code and the accounts provisioned under it.
///
/// Held as a transient read-only copy per fetch. `accounts.len() <=
/// max_accounts` is expected but not enforced here; whatever the backend
/// returns is rendered as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationCode {
    pub id: u64,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub max_accounts: u32,
    pub status: CodeStatus,
    pub created_at: DateTime<Utc>,
    /// List responses may omit this; detail responses carry the full set.
    #[serde(default)]
    pub accounts: Vec<ProvisionedAccount>,
}

impl ActivationCode {
    /// Usage as `occupied/capacity`, for the list column.
    pub fn account_usage(&self) -> (usize, u32) {
        (self.accounts.len(), self.max_accounts)
    }
}
