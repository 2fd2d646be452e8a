//! HTTP query surface tests (in-process, no listener)
#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use deskgate::{parse_policy, server, Gate, Policy};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> axum::Router {
    server::router(Gate::reference())
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).expect("request");
    let res = app().oneshot(req).await.expect("response");
    let status = res.status();
    (status, read_json(res).await)
}

async fn post_check(body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/check")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let res = app().oneshot(req).await.expect("response");
    let status = res.status();
    (status, read_json(res).await)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn policy_reports_fingerprint() {
    let (status, body) = get("/policy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fingerprint"], Policy::reference().fingerprint());
    assert_eq!(body["data"]["grant_count"], 22);

    let document = &body["data"]["document"];
    assert!(!document["grants"].as_array().expect("grants").is_empty());
    let reparsed = parse_policy(&document.to_string()).expect("document parses");
    assert_eq!(reparsed, Policy::reference());
}

#[tokio::test]
async fn check_decisions() {
    let (status, body) = post_check(json!({"role": "admin", "resource": "users", "action": "delete"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["allowed"], true);

    let (_, body) = post_check(json!({"role": "staff", "resource": "users", "action": "delete"})).await;
    assert_eq!(body["data"]["allowed"], false);
}

#[tokio::test]
async fn check_without_role_is_denied() {
    let (status, body) = post_check(json!({"resource": "dashboard", "action": "view"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["allowed"], false);
}

#[tokio::test]
async fn check_rejects_unknown_names() {
    let (status, body) = post_check(json!({"role": "root", "resource": "users", "action": "view"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unknown role 'root'");

    let (status, _) = post_check(json!({"role": "admin", "resource": "billing", "action": "view"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn actions_for_viewer_settings() {
    let (status, body) = get("/actions?role=viewer&resource=settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["actions"], json!(["view", "update"]));

    let (_, body) = get("/actions?resource=settings").await;
    assert_eq!(body["data"]["actions"], json!([]));
}

#[tokio::test]
async fn actions_rejects_unknown_resource() {
    let (status, body) = get("/actions?role=admin&resource=billing").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unknown resource 'billing'");
}

#[tokio::test]
async fn missing_query_field_uses_envelope() {
    let (status, body) = get("/actions?role=admin").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().expect("error");
    assert!(error.starts_with("invalid request"), "{error}");
    assert!(error.contains("resource"), "{error}");

    let (status, body) = get("/guard?role=staff").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_check_body_uses_envelope() {
    let (status, body) = post_check(json!({"role": "admin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().expect("error").starts_with("invalid request"));
}

#[tokio::test]
async fn level_comparisons() {
    let (_, body) = get("/level?role=admin&required=staff").await;
    assert_eq!(body["data"]["allowed"], true);
    let (_, body) = get("/level?role=viewer&required=staff").await;
    assert_eq!(body["data"]["allowed"], false);
    let (_, body) = get("/level?required=viewer").await;
    assert_eq!(body["data"]["allowed"], false);
}

#[tokio::test]
async fn nav_for_viewer() {
    let (_, body) = get("/nav?role=viewer").await;
    let paths: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|i| i["path"].as_str().expect("path"))
        .collect();
    assert_eq!(paths, vec!["/", "/tickets", "/settings"]);
}

#[tokio::test]
async fn guard_outcomes() {
    let (_, body) = get("/guard?role=viewer&path=/users").await;
    assert_eq!(body["data"]["outcome"], "access_denied");
    let (_, body) = get("/guard?path=/tickets").await;
    assert_eq!(body["data"]["outcome"], "sign_in");
    let (_, body) = get("/guard?role=staff&path=/tickets/new").await;
    assert_eq!(body["data"]["outcome"], "render");
    let (_, body) = get("/guard?role=staff&path=/nowhere").await;
    assert_eq!(body["data"]["outcome"], "not_found");
}
