//! Protectable areas of the dashboard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// A protectable area. Extending this set means adding grants, not
/// changing the decision algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Dashboard,
    Tickets,
    Users,
    Settings,
}

impl Resource {
    pub const COUNT: usize = 4;

    pub const ALL: [Resource; Resource::COUNT] = [
        Resource::Dashboard,
        Resource::Tickets,
        Resource::Users,
        Resource::Settings,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Resource::Dashboard => 0,
            Resource::Tickets => 1,
            Resource::Users => 2,
            Resource::Settings => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::Dashboard => "dashboard",
            Resource::Tickets => "tickets",
            Resource::Users => "users",
            Resource::Settings => "settings",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| GateError::UnknownResource(s.to_string()))
    }
}
