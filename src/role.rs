//! Roles and the identity handed in by the session layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ADMIN_LEVEL, STAFF_LEVEL, VIEWER_LEVEL};
use crate::error::GateError;

/// A user's role. Assigned at account creation/update, never derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Viewer,
}

/// The current principal's role, or `None` when unauthenticated or the
/// role is missing. Every query treats `None` as deny.
pub type Identity = Option<Role>;

impl Role {
    pub const COUNT: usize = 3;

    /// All roles, most privileged first
    pub const ALL: [Role; Role::COUNT] = [Role::Admin, Role::Staff, Role::Viewer];

    /// Position in the privilege order (admin=3, staff=2, viewer=1)
    #[inline]
    pub const fn level(self) -> u8 {
        match self {
            Role::Admin => ADMIN_LEVEL,
            Role::Staff => STAFF_LEVEL,
            Role::Viewer => VIEWER_LEVEL,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Role::Admin => 0,
            Role::Staff => 1,
            Role::Viewer => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Viewer => "viewer",
        }
    }

    /// Parse an optional role string as delivered by the session layer.
    /// Absent or blank input is an anonymous identity, not an error.
    pub fn parse_identity(raw: Option<&str>) -> Result<Identity, GateError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| GateError::UnknownRole(s.to_string()))
    }
}
