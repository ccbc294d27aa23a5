//! In-process mock of the governance backend services.
//!
//! Serves the same envelope contract as the real services so the API
//! clients can be exercised end-to-end without any external backend:
//! bearer auth on every resource route, JSON and multipart create and
//! update, delete-multiple with honest counts, and the auth endpoints.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use url::Url;

use govdesk::auth::StoredUser;

const LOGIN_USERNAME: &str = "admin";
const LOGIN_PASSWORD: &str = "secret";
const ALLOWED_ROLES: [&str; 3] = ["admin", "editor", "viewer"];

/// Mint a well-formed bearer token expiring `ttl_secs` from now.
pub fn mint_token(ttl_secs: i64) -> String {
    mint_token_at(chrono::Utc::now().timestamp() + ttl_secs)
}

pub fn mint_token_at(expires_at: i64) -> String {
    let payload = json!({
        "expiresAt": expires_at,
        "issuedAt": chrono::Utc::now().timestamp(),
        "subjectId": "u-admin",
        "subjectName": "Dashboard Admin",
        "role": "admin",
    });
    let encoded = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("mock-header.{encoded}.mock-signature")
}

/// Mint a well-formed bearer token carrying a unique nonce, so the
/// backend's issued credential is always distinguishable from an
/// independently minted one (two `mint_token` calls in the same wall
/// second would otherwise encode byte-identical payloads). The extra
/// field is ignored by the client, which only reads `expiresAt`.
fn mint_unique_token(ttl_secs: i64) -> String {
    let payload = json!({
        "expiresAt": chrono::Utc::now().timestamp() + ttl_secs,
        "issuedAt": chrono::Utc::now().timestamp(),
        "subjectId": "u-admin",
        "subjectName": "Dashboard Admin",
        "role": "admin",
        "jti": uuid::Uuid::new_v4().to_string(),
    });
    let encoded = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("mock-header.{encoded}.mock-signature")
}

pub fn admin_user() -> StoredUser {
    StoredUser {
        id: "u-admin".to_string(),
        name: "Dashboard Admin".to_string(),
        username: LOGIN_USERNAME.to_string(),
        role: "admin".to_string(),
        division: "IT".to_string(),
    }
}

#[derive(Clone)]
struct MockState(Arc<Inner>);

struct Inner {
    valid_token: String,
    resources: Mutex<HashMap<String, Vec<(String, Value)>>>,
}

pub struct MockBackend {
    pub base: Url,
    pub valid_token: String,
    state: MockState,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        init_tracing();
        let state = MockState(Arc::new(Inner {
            valid_token: mint_unique_token(3600),
            resources: Mutex::new(HashMap::new()),
        }));
        let base = spawn_router(router(state.clone())).await;
        Self {
            base,
            valid_token: state.0.valid_token.clone(),
            state,
        }
    }

    /// Insert a record directly, bypassing the HTTP surface. Returns
    /// the generated id.
    pub fn seed(&self, resource: &str, mut record: Value) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let map = record.as_object_mut().expect("seed record must be an object");
        map.insert("id".to_string(), json!(id.clone()));
        map.entry("createdAt".to_string())
            .or_insert_with(|| json!(now_rfc3339()));
        map.entry("updatedAt".to_string())
            .or_insert_with(|| json!(now_rfc3339()));
        self.state
            .0
            .resources
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push((id.clone(), record));
        id
    }

    pub fn record_count(&self, resource: &str) -> usize {
        self.state
            .0
            .resources
            .lock()
            .unwrap()
            .get(resource)
            .map(|records| records.len())
            .unwrap_or(0)
    }
}

/// Serve any router on an ephemeral port, returning its base URL.
pub async fn spawn_router(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/:resource", get(list_records).post(create_record))
        .route("/api/:resource/delete-multiple", post(delete_multiple))
        .route(
            "/api/:resource/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(state)
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn authorized(state: &MockState, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", state.0.valid_token))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "error": "Authentication failed"})),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": "Record not found"})),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"success": false, "error": message})),
    )
        .into_response()
}

/// Field multipart uploads land in, mirroring each service's record
/// shape.
fn files_field(resource: &str) -> &'static str {
    if resource == "portfolio-projects" {
        "files"
    } else {
        "attachments"
    }
}

/// Scalar multipart fields arrive as text; recover numbers, booleans,
/// and JSON-encoded arrays, leaving everything else a string.
fn parse_scalar(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

async fn health() -> Response {
    Json(json!({"success": true, "data": {"status": "ok"}})).into_response()
}

async fn login(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    let username = body.get("username").and_then(Value::as_str).unwrap_or("");
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");
    if username != LOGIN_USERNAME || password != LOGIN_PASSWORD {
        return bad_request("Invalid username or password");
    }
    Json(json!({
        "success": true,
        "data": {
            "token": state.0.valid_token,
            "user": admin_user(),
        }
    }))
    .into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    let role = body.get("role").and_then(Value::as_str).unwrap_or("");
    if !ALLOWED_ROLES.contains(&role) {
        return bad_request("Invalid role or group");
    }
    let mut user = body;
    if let Some(map) = user.as_object_mut() {
        map.insert("id".to_string(), json!(uuid::Uuid::new_v4().to_string()));
        map.remove("password");
    }
    Json(json!({"success": true, "data": user})).into_response()
}

async fn list_records(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let store = state.0.resources.lock().unwrap();
    let records: Vec<Value> = store
        .get(&resource)
        .map(|records| {
            records
                .iter()
                .filter(|(_, record)| matches_filters(record, &params))
                .map(|(_, record)| record.clone())
                .collect()
        })
        .unwrap_or_default();
    let count = records.len();
    Json(json!({"success": true, "data": records, "count": count})).into_response()
}

fn matches_filters(record: &Value, params: &HashMap<String, String>) -> bool {
    params.iter().all(|(key, wanted)| {
        if key == "search" {
            let needle = wanted.to_lowercase();
            ["title", "name", "subject"].iter().any(|field| {
                record
                    .get(field)
                    .and_then(Value::as_str)
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        } else {
            match record.get(key) {
                Some(Value::String(actual)) => actual == wanted,
                Some(other) => other.to_string() == *wanted,
                None => false,
            }
        }
    })
}

async fn get_record(
    State(state): State<MockState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let store = state.0.resources.lock().unwrap();
    match store
        .get(&resource)
        .and_then(|records| records.iter().find(|(record_id, _)| *record_id == id))
    {
        Some((_, record)) => Json(json!({"success": true, "data": record})).into_response(),
        None => not_found(),
    }
}

async fn create_record(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    request: Request,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let (payload, files) = match read_payload(request).await {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };
    let mut record = payload;
    let map = match record.as_object_mut() {
        Some(map) => map,
        None => return bad_request("request body must be an object"),
    };
    let id = uuid::Uuid::new_v4().to_string();
    map.insert("id".to_string(), json!(id.clone()));
    map.insert("createdAt".to_string(), json!(now_rfc3339()));
    map.insert("updatedAt".to_string(), json!(now_rfc3339()));
    if !files.is_empty() {
        let slot = map
            .entry(files_field(&resource).to_string())
            .or_insert_with(|| json!([]));
        if let Some(existing) = slot.as_array_mut() {
            existing.extend(files);
        }
    }
    let stored = record.clone();
    state
        .0
        .resources
        .lock()
        .unwrap()
        .entry(resource)
        .or_default()
        .push((id, stored));
    Json(json!({"success": true, "data": record})).into_response()
}

async fn update_record(
    State(state): State<MockState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
    request: Request,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let (payload, files) = match read_payload(request).await {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };
    let changes = match payload {
        Value::Object(map) => map,
        _ => return bad_request("request body must be an object"),
    };
    let mut store = state.0.resources.lock().unwrap();
    let records = match store.get_mut(&resource) {
        Some(records) => records,
        None => return not_found(),
    };
    let slot = records.iter_mut().find(|(record_id, _)| *record_id == id);
    let (_, record) = match slot {
        Some(found) => found,
        None => return not_found(),
    };
    if let Some(map) = record.as_object_mut() {
        for (key, value) in changes {
            map.insert(key, value);
        }
        map.insert("updatedAt".to_string(), json!(now_rfc3339()));
        if !files.is_empty() {
            let slot = map
                .entry(files_field(&resource).to_string())
                .or_insert_with(|| json!([]));
            if let Some(existing) = slot.as_array_mut() {
                existing.extend(files);
            }
        }
    }
    Json(json!({"success": true, "data": record})).into_response()
}

async fn delete_record(
    State(state): State<MockState>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let mut store = state.0.resources.lock().unwrap();
    let records = match store.get_mut(&resource) {
        Some(records) => records,
        None => return not_found(),
    };
    let before = records.len();
    records.retain(|(record_id, _)| *record_id != id);
    if records.len() == before {
        return not_found();
    }
    Json(json!({"success": true, "count": 1})).into_response()
}

async fn delete_multiple(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let ids: Vec<String> = body
        .get("ids")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let mut store = state.0.resources.lock().unwrap();
    let records = store.entry(resource).or_default();
    let before = records.len();
    records.retain(|(record_id, _)| !ids.contains(record_id));
    let removed = before - records.len();
    Json(json!({"success": true, "count": removed})).into_response()
}

/// JSON bodies parse whole; multipart bodies are reassembled from their
/// scalar fields with uploads collected separately.
async fn read_payload(request: Request) -> Result<(Value, Vec<Value>), Response> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|_| bad_request("malformed multipart body"))?;
        let mut object = serde_json::Map::new();
        let mut files = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| bad_request("malformed multipart field"))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "files" {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| bad_request("unreadable file part"))?;
                files.push(json!({
                    "id": uuid::Uuid::new_v4().to_string(),
                    "fileName": file_name,
                    "url": format!("/uploads/{file_name}"),
                    "size": bytes.len(),
                    "uploadedAt": now_rfc3339(),
                }));
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|_| bad_request("unreadable form field"))?;
                object.insert(name, parse_scalar(&text));
            }
        }
        Ok((Value::Object(object), files))
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .map_err(|_| bad_request("unreadable body"))?;
        let value =
            serde_json::from_slice(&bytes).map_err(|_| bad_request("invalid JSON body"))?;
        Ok((value, Vec::new()))
    }
}
