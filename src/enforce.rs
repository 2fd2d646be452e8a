//! Enforcement points: navigation filtering, route guarding, action gating
//!
//! None of these hold policy. Each one asks the `Gate` and degrades to
//! hiding or an access-denied state on a `false`.

use serde::Serialize;

use crate::action::Action;
use crate::gate::Gate;
use crate::resource::Resource;
use crate::role::Identity;

/// A sidebar entry. `label` is an i18n key resolved by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub resource: Resource,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "nav.dashboard", path: "/", resource: Resource::Dashboard },
    NavItem { label: "nav.tickets", path: "/tickets", resource: Resource::Tickets },
    NavItem { label: "nav.users", path: "/users", resource: Resource::Users },
    NavItem { label: "nav.settings", path: "/settings", resource: Resource::Settings },
];

pub const LOGIN_PATH: &str = "/login";

/// What a path needs before its page may render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// Reachable without an identity (the sign-in page)
    Public,
    Protected { resource: Resource, action: Action },
}

/// Resolve a dashboard path to its protection requirement.
/// Matching ignores ASCII case. Returns `None` for paths the dashboard
/// does not serve.
pub fn route_target(path: &str) -> Option<Route> {
    let path = path.split(['?', '#']).next().unwrap_or("").to_ascii_lowercase();
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
    let protected = |resource, action| Some(Route::Protected { resource, action });

    if !path.starts_with('/') {
        return None;
    }
    match segments.as_slice() {
        [] => protected(Resource::Dashboard, Action::View),
        ["login"] => Some(Route::Public),
        ["tickets"] => protected(Resource::Tickets, Action::View),
        ["tickets", "new"] => protected(Resource::Tickets, Action::Create),
        ["tickets", id] if !id.is_empty() => protected(Resource::Tickets, Action::View),
        ["users"] => protected(Resource::Users, Action::View),
        ["settings"] => protected(Resource::Settings, Action::View),
        _ => None,
    }
}

/// Route guard verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    Render,
    /// No identity: send to the sign-in page
    SignIn,
    /// Identity present but the grant is missing
    AccessDenied,
    NotFound,
}

impl GuardOutcome {
    #[inline]
    pub fn is_render(self) -> bool {
        matches!(self, GuardOutcome::Render)
    }
}

/// Which mutating controls to show on a resource's pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Controls {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Gate {
    /// Sidebar entries the role may view, in declaration order
    pub fn visible_nav(&self, role: Identity) -> Vec<NavItem> {
        NAV_ITEMS
            .iter()
            .filter(|item| self.can_access(role, item.resource, Action::View))
            .copied()
            .collect()
    }

    pub fn guard(&self, role: Identity, resource: Resource, action: Action) -> GuardOutcome {
        if self.can_access(role, resource, action) {
            return GuardOutcome::Render;
        }
        match role {
            None => {
                tracing::debug!(%resource, %action, "anonymous request redirected to sign-in");
                GuardOutcome::SignIn
            }
            Some(role) => {
                tracing::debug!(%role, %resource, %action, "access denied");
                GuardOutcome::AccessDenied
            }
        }
    }

    pub fn guard_path(&self, role: Identity, path: &str) -> GuardOutcome {
        match route_target(path) {
            Some(Route::Public) => GuardOutcome::Render,
            Some(Route::Protected { resource, action }) => self.guard(role, resource, action),
            None => GuardOutcome::NotFound,
        }
    }

    pub fn controls(&self, role: Identity, resource: Resource) -> Controls {
        let allowed = self.allowed_actions(role, resource);
        Controls {
            create: allowed.contains(Action::Create),
            update: allowed.contains(Action::Update),
            delete: allowed.contains(Action::Delete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_target() {
        use Route::Protected;
        assert_eq!(
            route_target("/"),
            Some(Protected { resource: Resource::Dashboard, action: Action::View })
        );
        assert_eq!(route_target("/login"), Some(Route::Public));
        assert_eq!(
            route_target("/tickets/new"),
            Some(Protected { resource: Resource::Tickets, action: Action::Create })
        );
        assert_eq!(
            route_target("/tickets/TKT-001"),
            Some(Protected { resource: Resource::Tickets, action: Action::View })
        );
        assert_eq!(
            route_target("/users/"),
            Some(Protected { resource: Resource::Users, action: Action::View })
        );
        assert_eq!(
            route_target("/settings?tab=profile"),
            Some(Protected { resource: Resource::Settings, action: Action::View })
        );
    }

    #[test]
    fn test_route_target_ignores_case() {
        assert_eq!(
            route_target("/Tickets"),
            Some(Route::Protected { resource: Resource::Tickets, action: Action::View })
        );
        assert_eq!(
            route_target("/TICKETS/NEW"),
            Some(Route::Protected { resource: Resource::Tickets, action: Action::Create })
        );
        assert_eq!(route_target("/Login"), Some(Route::Public));
        assert_eq!(route_target("/Reports"), None);
    }

    #[test]
    fn test_route_target_unknown() {
        assert_eq!(route_target("/reports"), None);
        assert_eq!(route_target("/tickets/1/edit"), None);
        assert_eq!(route_target("tickets"), None);
        assert_eq!(route_target(""), None);
    }
}
