//! Roles partitioning the population into mentees and mentors.
//!
//! The enum offers compile-time safety when selecting subgroups.
//!
//! # Examples
//! ```
//! use mentor_core::Role;
//!
//! assert_eq!(Role::JuniorPm.as_str(), "Junior PM");
//! assert_eq!(Role::SeniorPm.to_string(), "Senior PM");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Job role carried by every person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Role {
    /// Junior product manager, usually the mentee side.
    JuniorPm,
    /// Senior product manager, usually the mentor side.
    SeniorPm,
}

/// Error returned when a role label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{label}'")]
pub struct UnknownRoleError {
    /// Label that failed to parse.
    pub label: String,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 2] = [Self::JuniorPm, Self::SeniorPm];

    /// Return the canonical dataset label.
    ///
    /// # Examples
    /// ```
    /// use mentor_core::Role;
    ///
    /// assert_eq!(Role::SeniorPm.as_str(), "Senior PM");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JuniorPm => "Junior PM",
            Self::SeniorPm => "Senior PM",
        }
    }

    /// Return the command-line slug for the role.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::JuniorPm => "junior-pm",
            Self::SeniorPm => "senior-pm",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| folded == role.as_str().to_lowercase() || folded == role.slug())
            .ok_or_else(|| UnknownRoleError {
                label: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}
