//! Deskgate - role-based access control for the support-desk dashboard
//!
//! A static Policy Table of (role, resource, action) grants and the pure
//! queries evaluated against it:
//!
//! - `can_access(role, resource, action)`: exact grant lookup, default deny
//! - `allowed_actions(role, resource)`: every granted action
//! - `has_role_level(role, required)`: hierarchy comparison, independent of grants
//!
//! Navigation, route guarding and per-action controls are derived from
//! these through `Gate`.

pub mod access;
pub mod action;
pub mod config;
pub mod constants;
pub mod enforce;
pub mod error;
pub mod gate;
pub mod loader;
pub mod policy;
pub mod resource;
pub mod role;
#[cfg(feature = "server")]
pub mod server;

pub use access::has_role_level;
pub use action::{Action, ActionSet};
pub use config::ServerConfig;
pub use enforce::{route_target, Controls, GuardOutcome, NavItem, Route, LOGIN_PATH, NAV_ITEMS};
pub use error::{GateError, Result};
pub use gate::Gate;
pub use loader::{load_policy, parse_policy, to_document};
pub use policy::{reference_policy, Grant, Policy, PolicyBuilder};
pub use resource::Resource;
pub use role::{Identity, Role};

/// `can_access` against the process-wide reference policy
#[inline]
pub fn can_access(role: Identity, resource: Resource, action: Action) -> bool {
    reference_policy().can_access(role, resource, action)
}

/// `allowed_actions` against the process-wide reference policy
#[inline]
pub fn allowed_actions(role: Identity, resource: Resource) -> ActionSet {
    reference_policy().allowed_actions(role, resource)
}
