use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MalformedInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, LeaveStatus::Approved)
    }
}

impl FromStr for LeaveStatus {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            _ => Err(MalformedInputError::UnknownStatus(s.to_owned())),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LeaveStatus::Pending => "pending",
                LeaveStatus::Approved => "approved",
                LeaveStatus::Rejected => "rejected",
            }
        )
    }
}
