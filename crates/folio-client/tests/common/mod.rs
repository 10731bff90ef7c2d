//! In-process template API for integration tests.
//!
//! Serves a fixed set of template documents in the shapes real deployments
//! produce: enveloped, bare, failing, and malformed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use folio_client::{ClientConfig, HttpTemplateSource};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A request the server saw.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `GET` or `PUT`
    pub method: &'static str,
    /// Template id from the path, if any
    pub template_id: Option<String>,
    /// `Authorization` header, if sent
    pub authorization: Option<String>,
    /// JSON body of a `PUT`
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    list_fails: bool,
}

/// Running test server.
pub struct TestServer {
    /// `http://127.0.0.1:<port>`
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Start a server whose template list succeeds.
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Start a server whose template list answers HTTP 500.
    pub async fn start_with_failing_list() -> Self {
        Self::start_with(true).await
    }

    async fn start_with(list_fails: bool) -> Self {
        let state = ServerState {
            list_fails,
            ..ServerState::default()
        };
        let requests = state.requests.clone();

        let app = Router::new()
            .route("/api/templates", get(list_templates))
            .route("/api/templates/{id}", get(get_template).put(put_template))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// HTTP source pointed at this server.
    pub fn source(&self) -> HttpTemplateSource {
        self.source_with(ClientConfig::new(&self.base_url))
    }

    /// HTTP source with custom settings; the base URL is replaced.
    pub fn source_with(&self, config: ClientConfig) -> HttpTemplateSource {
        let config = ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
            ..config
        };
        HttpTemplateSource::new(config).unwrap()
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Backend document for a gallery-only template.
pub fn gallery_document(template_id: &str) -> Value {
    json!({
        "_id": {"$oid": format!("oid-{template_id}")},
        "templateId": template_id,
        "name": format!("Remote {template_id}"),
        "description": "Served by the test backend",
        "category": "gallery",
        "thumbnail": format!("/thumbs/{template_id}.jpg"),
        "version": "2.1.0",
        "isActive": true,
        "isPremium": false,
        "schema": {
            "sections": [
                {"id": "hero", "required": true, "order": {"$numberInt": "0"},
                 "fields": [{"id": "title", "type": "string", "placeholder": "Remote title"}]},
                {"id": "gallery", "order": 1,
                 "fields": [{"id": "images", "type": "array"}]}
            ],
            "styling": {
                "colorScheme": {"primary": "#101010"},
                "typography": {"headingFont": "Fraunces", "scale": "large"},
                "spacing": "loose"
            }
        }
    })
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn list_templates(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "GET",
        template_id: None,
        authorization: authorization(&headers),
        body: None,
    });
    if state.list_fails {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({
        "success": true,
        "count": 2,
        "data": [gallery_document("serene"), gallery_document("remote-only")]
    }))
    .into_response()
}

async fn get_template(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "GET",
        template_id: Some(id.clone()),
        authorization: authorization(&headers),
        body: None,
    });
    match id.as_str() {
        "serene" | "echolon" => {
            Json(json!({"success": true, "data": gallery_document(&id)})).into_response()
        }
        "chic" => Json(gallery_document("chic")).into_response(),
        "rejected" => {
            Json(json!({"success": false, "message": "Template disabled"})).into_response()
        }
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Template not found"})),
        )
            .into_response(),
    }
}

async fn put_template(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "PUT",
        template_id: Some(id.clone()),
        authorization: authorization(&headers),
        body: Some(body.clone()),
    });
    if id == "chic" {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({"success": true, "data": body})).into_response()
}
