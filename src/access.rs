//! Access decisions (pure reads over an immutable `Policy`)
//!
//! Two independent mechanisms live here:
//! - grant checks (`can_access`, `allowed_actions`) consult only the table
//! - `has_role_level` compares hierarchy positions and never consults it
//!
//! Both deny an absent identity unconditionally.

use crate::action::{Action, ActionSet};
use crate::policy::{Grant, Policy};
use crate::resource::Resource;
use crate::role::{Identity, Role};

impl Policy {
    /// True iff the exact (role, resource, action) grant exists.
    /// An absent role is denied for every resource and action.
    #[inline]
    pub fn can_access(&self, role: Identity, resource: Resource, action: Action) -> bool {
        match role {
            Some(role) => self.contains(&Grant::new(role, resource, action)),
            None => false,
        }
    }

    /// Every action `can_access` would allow; empty for an absent role
    #[inline]
    pub fn allowed_actions(&self, role: Identity, resource: Resource) -> ActionSet {
        match role {
            Some(role) => self.actions_for(role, resource),
            None => ActionSet::EMPTY,
        }
    }
}

/// True iff `role` is present and ranks at or above `required`
#[inline]
pub fn has_role_level(role: Identity, required: Role) -> bool {
    match role {
        Some(role) => role.level() >= required.level(),
        None => false,
    }
}
