//! Read-only HTTP query surface over a `Gate`
//!
//! Endpoints:
//!   GET  /health   - Liveness and version
//!   GET  /policy   - Loaded grants and fingerprint
//!   POST /check    - Decide one (role, resource, action)
//!   GET  /actions  - Allowed actions for role + resource
//!   GET  /level    - Hierarchy comparison
//!   GET  /nav      - Visible navigation entries
//!   GET  /guard    - Route guard verdict for a path
//!
//! A missing `role` is an anonymous caller and is denied everything.
//! Every failure, including an undecodable body or query string, is a 400
//! in the `ApiResponse` envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::action::{Action, ActionSet};
use crate::enforce::{GuardOutcome, NavItem};
use crate::error::GateError;
use crate::gate::Gate;
use crate::loader::to_document;
use crate::resource::Resource;
use crate::role::Role;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckReq {
    pub role: Option<String>,
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct ActionsQuery {
    pub role: Option<String>,
    pub resource: String,
}

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub role: Option<String>,
    pub required: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GuardQuery {
    pub role: Option<String>,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthRes {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PolicyRes {
    pub fingerprint: String,
    pub grant_count: usize,
    pub document: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct DecisionRes {
    pub allowed: bool,
}

#[derive(Debug, Serialize)]
pub struct ActionsRes {
    pub actions: ActionSet,
}

#[derive(Debug, Serialize)]
pub struct GuardRes {
    pub outcome: GuardOutcome,
}

type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

fn reply<T>(r: Result<T, GateError>) -> Reply<T> {
    match r {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::ok(data))),
        Err(e) => (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string()))),
    }
}

fn query<T>(q: Result<Query<T>, QueryRejection>) -> Result<T, GateError> {
    q.map(|Query(q)| q).map_err(|e| GateError::BadRequest(e.body_text()))
}

fn body<T>(b: Result<Json<T>, JsonRejection>) -> Result<T, GateError> {
    b.map(|Json(b)| b).map_err(|e| GateError::BadRequest(e.body_text()))
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<ApiResponse<HealthRes>> {
    Json(ApiResponse::ok(HealthRes { status: "ok", version: env!("CARGO_PKG_VERSION") }))
}

async fn get_policy(State(gate): State<Gate>) -> Json<ApiResponse<PolicyRes>> {
    let p = gate.policy();
    Json(ApiResponse::ok(PolicyRes {
        fingerprint: p.fingerprint(),
        grant_count: p.len(),
        document: to_document(p),
    }))
}

fn check(gate: &Gate, req: &CheckReq) -> Result<DecisionRes, GateError> {
    let role = Role::parse_identity(req.role.as_deref())?;
    let resource: Resource = req.resource.parse()?;
    let action: Action = req.action.parse()?;
    Ok(DecisionRes { allowed: gate.can_access(role, resource, action) })
}

fn actions(gate: &Gate, q: &ActionsQuery) -> Result<ActionsRes, GateError> {
    let role = Role::parse_identity(q.role.as_deref())?;
    let resource: Resource = q.resource.parse()?;
    Ok(ActionsRes { actions: gate.allowed_actions(role, resource) })
}

fn level(gate: &Gate, q: &LevelQuery) -> Result<DecisionRes, GateError> {
    let role = Role::parse_identity(q.role.as_deref())?;
    let required: Role = q.required.parse()?;
    Ok(DecisionRes { allowed: gate.has_role_level(role, required) })
}

async fn post_check(
    State(gate): State<Gate>,
    req: Result<Json<CheckReq>, JsonRejection>,
) -> Reply<DecisionRes> {
    reply(body(req).and_then(|req| check(&gate, &req)))
}

async fn get_actions(
    State(gate): State<Gate>,
    q: Result<Query<ActionsQuery>, QueryRejection>,
) -> Reply<ActionsRes> {
    reply(query(q).and_then(|q| actions(&gate, &q)))
}

async fn get_level(
    State(gate): State<Gate>,
    q: Result<Query<LevelQuery>, QueryRejection>,
) -> Reply<DecisionRes> {
    reply(query(q).and_then(|q| level(&gate, &q)))
}

async fn get_nav(
    State(gate): State<Gate>,
    q: Result<Query<RoleQuery>, QueryRejection>,
) -> Reply<Vec<NavItem>> {
    reply(
        query(q)
            .and_then(|q| Role::parse_identity(q.role.as_deref()))
            .map(|role| gate.visible_nav(role)),
    )
}

async fn get_guard(
    State(gate): State<Gate>,
    q: Result<Query<GuardQuery>, QueryRejection>,
) -> Reply<GuardRes> {
    reply(query(q).and_then(|q| {
        Role::parse_identity(q.role.as_deref())
            .map(|role| GuardRes { outcome: gate.guard_path(role, &q.path) })
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(gate: Gate) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/policy", get(get_policy))
        .route("/check", post(post_check))
        .route("/actions", get(get_actions))
        .route("/level", get(get_level))
        .route("/nav", get(get_nav))
        .route("/guard", get(get_guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(gate)
}
