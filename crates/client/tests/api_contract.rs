//! HTTP contract tests for [`PortfolioApi`].
//!
//! Runs an in-process stub of the portfolio backend (same endpoint shapes
//! as the real key-value store) and exercises all four operations over
//! real HTTP, asserting wire-level field names and the per-operation
//! error mapping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use folio_client::{DeleteError, LoadError, PortfolioApi};
use folio_core::{MediaItem, MediaKind};

// ---------------------------------------------------------------------------
// Stub backend
// ---------------------------------------------------------------------------

/// In-memory stand-in for the backend's portfolio store, plus a recording
/// of every save body so tests can assert the exact wire shape.
#[derive(Default)]
struct StubState {
    portfolios: Mutex<HashMap<String, Vec<Value>>>,
    save_bodies: Mutex<Vec<Value>>,
}

async fn load_portfolio(
    State(state): State<Arc<StubState>>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let portfolios = state.portfolios.lock().unwrap();
    let items = portfolios.get(&user_id).cloned().unwrap_or_default();
    Json(json!({ "items": items }))
}

async fn save_portfolio(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let user_id = body["user_id"].as_str().unwrap_or_default().to_string();
    let items = body["items"].as_array().cloned().unwrap_or_default();
    state.portfolios.lock().unwrap().insert(user_id, items);
    state.save_bodies.lock().unwrap().push(body);
    Json(json!({ "status": "success" }))
}

async fn remove_media(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let user_id = body["user_id"].as_str().unwrap_or_default();
    let media_id = body["media_id"].as_str().unwrap_or_default();

    if media_id == "explodes" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let mut portfolios = state.portfolios.lock().unwrap();
    if let Some(items) = portfolios.get_mut(user_id) {
        items.retain(|item| item["id"].as_str() != Some(media_id));
    }
    Ok(Json(json!({ "status": "success" })))
}

async fn upload(mut multipart: Multipart) -> Result<Json<Value>, StatusCode> {
    let field = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .ok_or(StatusCode::BAD_REQUEST)?;

    assert_eq!(field.name(), Some("file"), "multipart field must be 'file'");

    let original = field.file_name().unwrap_or("unnamed").to_string();
    let content_type = field.content_type().unwrap_or("").to_string();
    let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
    assert!(!bytes.is_empty(), "upload body must carry the file bytes");

    // Same classification rule as the real backend.
    let media_type = if content_type.contains("video") {
        "video"
    } else {
        "image"
    };

    Ok(Json(json!({
        "filename": format!("stored-{original}"),
        "media_type": media_type,
    })))
}

async fn failing_load() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Bind the stub backend on an ephemeral port and return a client
/// pointed at it.
async fn spawn_stub() -> (PortfolioApi, Arc<StubState>) {
    let state = Arc::new(StubState::default());

    let app = Router::new()
        .route("/load-portfolio/{user_id}", get(load_portfolio))
        .route("/save-portfolio", post(save_portfolio))
        .route("/remove-media", delete(remove_media))
        .route("/upload", post(upload))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    (PortfolioApi::new(format!("http://{addr}")), state)
}

fn item(id: &str) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        filename: format!("{id}.jpg"),
        kind: MediaKind::Image,
        title: format!("Title {id}"),
        description: format!("Description {id}"),
        category: "Photography".to_string(),
        url: format!("http://example.test/uploads/{id}.jpg"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Loading an unknown identifier yields an empty collection, not an error.
#[tokio::test]
async fn load_unknown_user_is_empty() {
    let (api, _state) = spawn_stub().await;
    let items = api.load("nobody").await.expect("load should succeed");
    assert!(items.is_empty());
}

/// Saved items round-trip through the store and come back in order.
#[tokio::test]
async fn save_then_load_round_trips() {
    let (api, _state) = spawn_stub().await;

    let items = vec![item("1"), item("2")];
    api.save("alice", &items).await.expect("save should succeed");

    let loaded = api.load("alice").await.expect("load should succeed");
    assert_eq!(loaded, items);
}

/// The save body carries exactly the documented wire fields, including
/// `media_type` on each item.
#[tokio::test]
async fn save_body_matches_wire_contract() {
    let (api, state) = spawn_stub().await;

    api.save("alice", &[item("1")]).await.expect("save");

    let bodies = state.save_bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["user_id"], "alice");
    assert_eq!(bodies[0]["items"][0]["id"], "1");
    assert_eq!(bodies[0]["items"][0]["media_type"], "image");
    assert_eq!(bodies[0]["items"][0]["category"], "Photography");
}

/// Removal deletes exactly the addressed item from the remote store.
#[tokio::test]
async fn remove_deletes_from_remote_store() {
    let (api, _state) = spawn_stub().await;

    api.save("alice", &[item("1"), item("2")]).await.expect("save");
    api.remove("alice", "1").await.expect("remove should succeed");

    let loaded = api.load("alice").await.expect("load");
    let ids: Vec<&str> = loaded.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

/// A non-2xx removal response surfaces as a typed status error.
#[tokio::test]
async fn remove_failure_maps_to_status_error() {
    let (api, _state) = spawn_stub().await;

    let err = api
        .remove("alice", "explodes")
        .await
        .expect_err("remove should fail");
    match err {
        DeleteError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

/// Upload sends a multipart `file` field and resolves the final URL from
/// the base address and the stored filename.
#[tokio::test]
async fn upload_resolves_url_from_stored_filename() {
    let (api, _state) = spawn_stub().await;

    let uploaded = api
        .upload("sunset.jpg", b"not really a jpeg".to_vec())
        .await
        .expect("upload should succeed");

    assert_eq!(uploaded.filename, "stored-sunset.jpg");
    assert_eq!(uploaded.kind, MediaKind::Image);
    assert_eq!(
        uploaded.url,
        format!("{}/uploads/stored-sunset.jpg", api.base_url())
    );
}

/// Video extensions classify as video via the guessed content type.
#[tokio::test]
async fn upload_video_is_classified_as_video() {
    let (api, _state) = spawn_stub().await;

    let uploaded = api
        .upload("reel.mp4", b"not really an mp4".to_vec())
        .await
        .expect("upload should succeed");
    assert_eq!(uploaded.kind, MediaKind::Video);
}

/// A failing load maps to a typed status error the orchestrator can log.
#[tokio::test]
async fn load_failure_maps_to_status_error() {
    let app = Router::new().route("/load-portfolio/{user_id}", get(failing_load));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    let api = PortfolioApi::new(format!("http://{addr}"));
    let err = api.load("anyone").await.expect_err("load should fail");
    match err {
        LoadError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}
