use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// The four FMCSA duty statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    #[serde(rename = "Off Duty", alias = "off")]
    OffDuty,
    #[serde(rename = "Sleeper Berth", alias = "sb")]
    SleeperBerth,
    #[serde(rename = "Driving", alias = "d")]
    Driving,
    #[serde(rename = "On Duty (Not Driving)", alias = "on")]
    OnDutyNotDriving,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Label used on the log sheet and in the `duty_status_changes.status` column.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off",
            DutyStatus::SleeperBerth => "sb",
            DutyStatus::Driving => "d",
            DutyStatus::OnDutyNotDriving => "on",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.label() == s)
    }

    /// Helper: accepts either the full label or the short code, any case.
    pub fn from_code(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.code() == needle || st.label().to_lowercase() == needle)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DutyStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}
