//! Actions on resources and the bitmask set returned by `allowed_actions`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{actions_to_names, ALL_ACTIONS, CREATE, DELETE, UPDATE, VIEW};
use crate::error::GateError;

/// An operation on a resource. Not every resource grants every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const COUNT: usize = 4;

    pub const ALL: [Action; Action::COUNT] =
        [Action::View, Action::Create, Action::Update, Action::Delete];

    /// The action's bit in a grant mask
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Action::View => VIEW,
            Action::Create => CREATE,
            Action::Update => UPDATE,
            Action::Delete => DELETE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| GateError::UnknownAction(s.to_string()))
    }
}

/// A set of actions backed by a bitmask. Iteration follows `Action::ALL`
/// but callers must not rely on any particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    #[inline]
    pub(crate) const fn from_mask(mask: u8) -> Self {
        ActionSet(mask & ALL_ACTIONS)
    }

    #[inline]
    pub const fn contains(self, action: Action) -> bool {
        (self.0 & action.bit()) == action.bit()
    }

    #[inline]
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    /// Action names, e.g. for rendering or JSON output
    pub fn names(self) -> Vec<&'static str> {
        actions_to_names(self.0)
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl Serialize for ActionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
