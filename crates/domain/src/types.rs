// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role of an account.
///
/// Fixed at creation time. Admin accounts are never created through
/// self-registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Portal administrator. Approves companies and drives.
    Admin,
    /// Student. Browses drives and applies.
    Student,
    /// Recruiting company. Posts drives and manages applicants.
    Company,
}

impl Role {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Company => "company",
        }
    }

    /// Returns true if this role may be chosen at self-registration.
    #[must_use]
    pub const fn is_self_registrable(&self) -> bool {
        matches!(self, Self::Student | Self::Company)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "student" => Ok(Self::Student),
            "company" => Ok(Self::Company),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an application to a drive.
///
/// Every status is reachable from every other through an explicit company
/// action; there is no enforced forward-only ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at.
    #[default]
    Pending,
    /// Looked at by the company.
    Reviewed,
    /// Shortlisted for the next stage.
    Shortlisted,
    /// Rejected by the company.
    Rejected,
    /// Offer accepted. Counts towards placement history.
    Accepted,
}

impl ApplicationStatus {
    /// All statuses, in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Reviewed,
        Self::Shortlisted,
        Self::Rejected,
        Self::Accepted,
    ];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Shortlisted => "shortlisted",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }

    /// Returns true if this status counts as a placement.
    #[must_use]
    pub const fn is_placement(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "shortlisted" => Ok(Self::Shortlisted),
            "rejected" => Ok(Self::Rejected),
            "accepted" => Ok(Self::Accepted),
            _ => Err(DomainError::InvalidApplicationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
