//! The static Policy Table
//!
//! Grants are stored as one action mask per (role, resource) pair, so a
//! lookup is a single array index plus a bit test. A table is immutable
//! once built; the only way to change it is to build another one.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::action::{Action, ActionSet};
use crate::resource::Resource;
use crate::role::Role;

/// An immutable (role, resource, action) permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub role: Role,
    pub resource: Resource,
    pub action: Action,
}

impl Grant {
    pub const fn new(role: Role, resource: Resource, action: Action) -> Self {
        Grant { role, resource, action }
    }
}

type Masks = [[u8; Resource::COUNT]; Role::COUNT];

/// The set of all grants. Read-only for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    masks: Masks,
}

impl Policy {
    /// A table with no grants; denies everything
    pub const fn empty() -> Self {
        Policy { masks: [[0; Resource::COUNT]; Role::COUNT] }
    }

    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    pub fn from_grants<I: IntoIterator<Item = Grant>>(grants: I) -> Self {
        let mut b = PolicyBuilder::new();
        for g in grants {
            b = b.grant(g.role, g.resource, g.action);
        }
        b.build()
    }

    /// The dashboard's shipped policy.
    ///
    /// `viewer` may `update` `settings`: a self-service carve-out for
    /// personal preferences (locale, theme), not resource management.
    pub fn reference() -> Self {
        use Action::*;
        use Resource::*;
        Policy::builder()
            .grant_all(Role::Admin, Dashboard, &[View])
            .grant_all(Role::Admin, Tickets, &[View, Create, Update, Delete])
            .grant_all(Role::Admin, Users, &[View, Create, Update, Delete])
            .grant_all(Role::Admin, Settings, &[View, Update])
            .grant_all(Role::Staff, Dashboard, &[View])
            .grant_all(Role::Staff, Tickets, &[View, Create, Update])
            .grant_all(Role::Staff, Users, &[View])
            .grant_all(Role::Staff, Settings, &[View, Update])
            .grant_all(Role::Viewer, Dashboard, &[View])
            .grant_all(Role::Viewer, Tickets, &[View])
            .grant_all(Role::Viewer, Settings, &[View, Update])
            .build()
    }

    /// Raw action mask granted to `role` on `resource`
    #[inline]
    pub(crate) fn mask(&self, role: Role, resource: Resource) -> u8 {
        self.masks[role.index()][resource.index()]
    }

    #[inline]
    pub fn contains(&self, grant: &Grant) -> bool {
        let bit = grant.action.bit();
        (self.mask(grant.role, grant.resource) & bit) == bit
    }

    /// Actions granted to a present role; the identity check lives in `access`
    #[inline]
    pub(crate) fn actions_for(&self, role: Role, resource: Resource) -> ActionSet {
        ActionSet::from_mask(self.mask(role, resource))
    }

    /// All grants in canonical order (role, then resource, then action)
    pub fn grants(&self) -> impl Iterator<Item = Grant> + '_ {
        Role::ALL.into_iter().flat_map(move |role| {
            Resource::ALL.into_iter().flat_map(move |resource| {
                self.actions_for(role, resource)
                    .iter()
                    .map(move |action| Grant::new(role, resource, action))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.masks
            .iter()
            .flatten()
            .map(|m| m.count_ones() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.iter().flatten().all(|m| *m == 0)
    }

    /// SHA-256 over the canonical grant listing, hex encoded.
    /// Equal grant sets give equal fingerprints regardless of build order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for g in self.grants() {
            hasher.update(g.role.as_str().as_bytes());
            hasher.update(b"/");
            hasher.update(g.resource.as_str().as_bytes());
            hasher.update(b"/");
            hasher.update(g.action.as_str().as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

/// The empty table. Use `Policy::reference()` for the dashboard's grants.
impl Default for Policy {
    fn default() -> Self {
        Policy::empty()
    }
}

/// Hex encode
mod hex {
    pub fn encode(data: impl AsRef<[u8]>) -> String {
        data.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Accumulates grants; duplicate grants merge (set semantics)
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    masks: Masks,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        PolicyBuilder { masks: [[0; Resource::COUNT]; Role::COUNT] }
    }

    pub fn grant(mut self, role: Role, resource: Resource, action: Action) -> Self {
        self.masks[role.index()][resource.index()] |= action.bit();
        self
    }

    pub fn grant_all(mut self, role: Role, resource: Resource, actions: &[Action]) -> Self {
        for a in actions {
            self.masks[role.index()][resource.index()] |= a.bit();
        }
        self
    }

    pub fn build(self) -> Policy {
        Policy { masks: self.masks }
    }
}

static REFERENCE: OnceLock<Policy> = OnceLock::new();

/// Process-wide reference policy, built on first use and never mutated
#[inline]
pub fn reference_policy() -> &'static Policy {
    REFERENCE.get_or_init(Policy::reference)
}
