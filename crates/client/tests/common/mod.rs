//! In-process stand-in for the finance backend.
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use client::{ApiClient, MemoryTokenStore, Navigator, Route, TokenStore};
use serde::Deserialize;
use serde_json::{Value, json};

pub const EMAIL: &str = "ana@example.com";
pub const PASSWORD: &str = "secret1";

pub fn token_for(id: i64, name: &str, email: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"id": id, "name": name, "email": email, "exp": 4_102_444_800i64}).to_string(),
    );
    format!("{header}.{payload}.not-verified")
}

pub fn valid_token() -> String {
    token_for(1, "Ana", EMAIL)
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub costs: Vec<Value>,
    pub receivements: Vec<Value>,
    pub users: Vec<(String, String)>,
    pub requests: Vec<RecordedRequest>,
    /// Overrides the token handed out by a successful login.
    pub login_token: Option<String>,
    next_id: i64,
}

impl MockState {
    fn collection(&mut self, endpoint: &str) -> Option<&mut Vec<Value>> {
        match endpoint {
            "costs" => Some(&mut self.costs),
            "receivements" => Some(&mut self.receivements),
            _ => None,
        }
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState {
            users: vec![(EMAIL.to_string(), PASSWORD.to_string())],
            ..MockState::default()
        }));

        let app = Router::new()
            .route("/users", post(signup))
            .route("/users/login", post(login))
            .route("/{endpoint}", get(list).post(create))
            .route("/{endpoint}/{id}", get(fetch_one).patch(update).delete(remove))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client with a session token already stored.
    pub fn client(&self) -> (ApiClient, Arc<MemoryTokenStore>, Navigator) {
        self.client_with(Arc::new(MemoryTokenStore::with_token(valid_token())))
    }

    pub fn client_with(
        &self,
        tokens: Arc<MemoryTokenStore>,
    ) -> (ApiClient, Arc<MemoryTokenStore>, Navigator) {
        let navigator = Navigator::new(Route::Dashboard);
        let store: Arc<dyn TokenStore> = tokens.clone();
        let api = ApiClient::new(&self.base_url(), store, navigator.clone()).unwrap();
        (api, tokens, navigator)
    }

    /// Seeds `count` transactions into `endpoint`, dated one day apart.
    pub fn seed(&self, endpoint: &str, count: usize) {
        let mut state = self.state.lock().unwrap();
        for i in 0..count {
            let id = state.next_id();
            let item = json!({
                "id": id,
                "title": format!("{endpoint} #{id}"),
                "description": null,
                "value": format!("{}.00", (i + 1) * 10),
                "transaction_date": http_date(i),
            });
            state.collection(endpoint).unwrap().push(item);
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn ids(&self, endpoint: &str) -> Vec<i64> {
        let mut state = self.state.lock().unwrap();
        state
            .collection(endpoint)
            .unwrap()
            .iter()
            .filter_map(|item| item["id"].as_i64())
            .collect()
    }
}

/// RFC 2822 date for day `i` of January 2024, as the backend renders dates.
fn http_date(i: usize) -> String {
    let day = u32::try_from(i % 31).unwrap() + 1;
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .format("%a, %d %b %Y 00:00:00 GMT")
        .to_string()
}

fn record(state: &Shared, method: Method, uri: &OriginalUri, headers: &HeaderMap) {
    state.lock().unwrap().requests.push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", valid_token());
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        Some(_) => Err(error(StatusCode::UNAUTHORIZED, "Token inválido ou expirado")),
        None => Err(error(StatusCode::UNAUTHORIZED, "Token de acesso não fornecido")),
    }
}

async fn signup(
    State(state): State<Shared>,
    uri: OriginalUri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, Method::POST, &uri, &headers);
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    let mut state = state.lock().unwrap();
    if state.users.iter().any(|(known, _)| *known == email) {
        return error(StatusCode::BAD_REQUEST, "Email já cadastrado");
    }
    let id = state.next_id();
    state.users.push((email.clone(), password));
    (
        StatusCode::CREATED,
        Json(json!({"id": id, "name": body["name"], "email": email})),
    )
        .into_response()
}

async fn login(
    State(state): State<Shared>,
    uri: OriginalUri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, Method::POST, &uri, &headers);
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let state = state.lock().unwrap();
    let known = state.users.iter().any(|(e, p)| e == email && p == password);
    if !known {
        return error(StatusCode::BAD_REQUEST, "Credenciais inválidas");
    }
    let token = state.login_token.clone().unwrap_or_else(valid_token);
    Json(json!({ "access_token": token })).into_response()
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

async fn list(
    State(state): State<Shared>,
    Path(endpoint): Path<String>,
    Query(query): Query<ListQuery>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    record(&state, Method::GET, &uri, &headers);
    if let Err(res) = authorize(&headers) {
        return res;
    }

    let mut state = state.lock().unwrap();
    let Some(items) = state.collection(&endpoint) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(10).max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let page_items: Vec<Value> = items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Json(json!({
        "items": page_items,
        "pagination": {
            "page": page,
            "page_size": page_size,
            "total_items": total_items,
            "total_pages": total_pages,
        },
        "links": {
            "first": format!("/{endpoint}?page=1&page_size={page_size}"),
            "last": format!("/{endpoint}?page={}&page_size={page_size}", total_pages.max(1)),
        },
    }))
    .into_response()
}

async fn create(
    State(state): State<Shared>,
    Path(endpoint): Path<String>,
    uri: OriginalUri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, Method::POST, &uri, &headers);
    if let Err(res) = authorize(&headers) {
        return res;
    }

    let mut state = state.lock().unwrap();
    let id = state.next_id();
    let mut item = body;
    item["id"] = json!(id);
    if item.get("description").is_none() {
        item["description"] = Value::Null;
    }
    let Some(items) = state.collection(&endpoint) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    items.push(item.clone());
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn fetch_one(
    State(state): State<Shared>,
    Path((endpoint, id)): Path<(String, i64)>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    record(&state, Method::GET, &uri, &headers);
    if let Err(res) = authorize(&headers) {
        return res;
    }

    let mut state = state.lock().unwrap();
    let found = state
        .collection(&endpoint)
        .and_then(|items| items.iter().find(|item| item["id"] == json!(id)).cloned());
    match found {
        Some(item) => Json(item).into_response(),
        None => error(StatusCode::NOT_FOUND, "Gasto não encontrado"),
    }
}

async fn update(
    State(state): State<Shared>,
    Path((endpoint, id)): Path<(String, i64)>,
    uri: OriginalUri,
    headers: HeaderMap,
    Json(patch): Json<Value>,
) -> Response {
    record(&state, Method::PATCH, &uri, &headers);
    if let Err(res) = authorize(&headers) {
        return res;
    }

    let mut state = state.lock().unwrap();
    let Some(item) = state
        .collection(&endpoint)
        .and_then(|items| items.iter_mut().find(|item| item["id"] == json!(id)))
    else {
        return error(StatusCode::NOT_FOUND, "Gasto não encontrado");
    };
    if let Some(fields) = patch.as_object() {
        for (key, value) in fields {
            item[key.as_str()] = value.clone();
        }
    }
    Json(item.clone()).into_response()
}

async fn remove(
    State(state): State<Shared>,
    Path((endpoint, id)): Path<(String, i64)>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    record(&state, Method::DELETE, &uri, &headers);
    if let Err(res) = authorize(&headers) {
        return res;
    }

    let mut state = state.lock().unwrap();
    let Some(items) = state.collection(&endpoint) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };
    let before = items.len();
    items.retain(|item| item["id"] != json!(id));
    if items.len() == before {
        return error(StatusCode::NOT_FOUND, "Gasto não encontrado");
    }
    StatusCode::NO_CONTENT.into_response()
}
