//! One-time policy loading from a JSON document
//!
//! ```json
//! { "grants": [ { "role": "staff", "resource": "tickets", "actions": ["view", "create"] } ] }
//! ```
//!
//! Names are validated here so that everything past this point works with
//! closed enums only.

use std::path::Path;

use serde::Deserialize;

use crate::action::Action;
use crate::error::{GateError, Result};
use crate::policy::{Policy, PolicyBuilder};
use crate::resource::Resource;
use crate::role::Role;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDoc {
    grants: Vec<GrantEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrantEntry {
    role: String,
    resource: String,
    actions: Vec<String>,
}

/// Parse a policy document
pub fn parse_policy(json: &str) -> Result<Policy> {
    let doc: PolicyDoc = serde_json::from_str(json)?;
    let mut b = PolicyBuilder::new();
    for entry in &doc.grants {
        let role: Role = entry.role.parse()?;
        let resource: Resource = entry.resource.parse()?;
        if entry.actions.is_empty() {
            return Err(GateError::EmptyActions {
                role: entry.role.clone(),
                resource: entry.resource.clone(),
            });
        }
        let actions = entry
            .actions
            .iter()
            .map(|a| a.parse::<Action>())
            .collect::<Result<Vec<_>>>()?;
        b = b.grant_all(role, resource, &actions);
    }
    Ok(b.build())
}

/// Read and parse a policy file. Blocking; meant to run once before the
/// first query is served.
pub fn load_policy(path: impl AsRef<Path>) -> Result<Policy> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| GateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let policy = parse_policy(&raw)?;
    tracing::info!(
        path = %path.display(),
        grants = policy.len(),
        fingerprint = %policy.fingerprint(),
        "policy loaded"
    );
    Ok(policy)
}

/// Serialize a policy back to the document format, one entry per
/// (role, resource) pair that has any grant
pub fn to_document(policy: &Policy) -> serde_json::Value {
    let grants: Vec<serde_json::Value> = Role::ALL
        .into_iter()
        .flat_map(|role| Resource::ALL.into_iter().map(move |res| (role, res)))
        .filter_map(|(role, res)| {
            let actions = policy.allowed_actions(Some(role), res);
            (!actions.is_empty()).then(|| {
                serde_json::json!({
                    "role": role,
                    "resource": res,
                    "actions": actions,
                })
            })
        })
        .collect();
    serde_json::json!({ "grants": grants })
}
