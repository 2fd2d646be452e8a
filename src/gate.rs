//! Shared handle every collaborator queries

use std::sync::Arc;

use crate::access;
use crate::action::{Action, ActionSet};
use crate::policy::Policy;
use crate::resource::Resource;
use crate::role::{Identity, Role};

/// Captures a `Policy` once and shares it cheaply across threads
#[derive(Debug, Clone)]
pub struct Gate {
    policy: Arc<Policy>,
}

impl Gate {
    pub fn new(policy: Policy) -> Self {
        Gate { policy: Arc::new(policy) }
    }

    pub fn from_arc(policy: Arc<Policy>) -> Self {
        Gate { policy }
    }

    /// Gate over the shipped reference policy
    pub fn reference() -> Self {
        Gate::new(Policy::reference())
    }

    #[inline]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    #[inline]
    pub fn can_access(&self, role: Identity, resource: Resource, action: Action) -> bool {
        self.policy.can_access(role, resource, action)
    }

    #[inline]
    pub fn allowed_actions(&self, role: Identity, resource: Resource) -> ActionSet {
        self.policy.allowed_actions(role, resource)
    }

    #[inline]
    pub fn has_role_level(&self, role: Identity, required: Role) -> bool {
        access::has_role_level(role, required)
    }
}
