use crate::routes::MinifyResponse;
use crate::state::AppState;
use crate::*;
use axum::body::Body;
use axum::Router;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use minify_core::Profile;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_minify(app: Router, body: Value) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/minify")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["profile"], "base");
    assert_eq!(v["requests"], 0);
}

// ========== Minify ==========

#[tokio::test]
async fn test_minify_default_profile() {
    let (status, body) = post_minify(app(), json!({ "text": "x = 1; // comment\ny = 2;" })).await;
    assert_eq!(status, StatusCode::OK);
    let r: MinifyResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(r.output, "x=1;y=2;");
    assert_eq!(r.profile, "base");
    assert_eq!(r.lines_in, 2);
    assert!(!r.unterminated_comment);
}

#[tokio::test]
async fn test_minify_profile_override() {
    let text = "#region header\nusing X;\n#endregion\nint a;";
    let (status, body) = post_minify(app(), json!({ "text": text, "profile": "regions" })).await;
    assert_eq!(status, StatusCode::OK);
    let r: MinifyResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(r.output, "int a;");
    assert_eq!(r.profile, "regions");
}

#[tokio::test]
async fn test_minify_custom_skip_regions() {
    let text = "#region license\nMIT\n#endregion\nint a;";
    let (_, body) = post_minify(app(), json!({ "text": text, "skip_regions": ["license"] })).await;
    let r: MinifyResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(r.output, "int a;");
}

#[tokio::test]
async fn test_minify_server_profile() {
    let state = AppState::new(Profile::Corrected).unwrap();
    let text = "s = \"a // b\"; // c";
    let (_, body) = post_minify(app_with_state(state), json!({ "text": text })).await;
    let r: MinifyResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(r.output, "s=\"a // b\";");
    assert_eq!(r.profile, "corrected");
}

#[tokio::test]
async fn test_minify_empty_text_is_noop() {
    let (status, body) = post_minify(app(), json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = post_minify(app(), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_minify_unknown_profile() {
    let (status, body) = post_minify(app(), json!({ "text": "a", "profile": "cobol" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_minify_empty_region_name_rejected() {
    let (status, _) = post_minify(app(), json!({ "text": "a", "skip_regions": [""] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_requests_are_counted() {
    let state = AppState::default();
    post_minify(app_with_state(state.clone()), json!({ "text": "a" })).await;
    post_minify(app_with_state(state.clone()), json!({ "text": "" })).await;
    assert_eq!(state.requests(), 2);
}
