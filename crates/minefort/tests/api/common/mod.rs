//! Fake API server and reply fixtures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use minefort::{Client, ClientConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const SESSION: &str = "s%3Atest-session.signature";

/// A request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone)]
struct Canned {
    body: Value,
    set_cookie: Option<String>,
}

/// Canned replies keyed by method and path, plus a log of every request.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    routes: Arc<Mutex<HashMap<(String, String), Canned>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `body`.
    pub fn reply(self, method: &str, path: &str, body: Value) -> Self {
        self.insert(method, path, body, None)
    }

    /// Like [`FakeApi::reply`], also sending a `Set-Cookie` header.
    pub fn reply_with_cookie(self, method: &str, path: &str, body: Value, cookie: &str) -> Self {
        self.insert(method, path, body, Some(cookie.to_string()))
    }

    fn insert(self, method: &str, path: &str, body: Value, set_cookie: Option<String>) -> Self {
        self.routes.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            Canned { body, set_cookie },
        );
        self
    }

    /// Bind to an ephemeral port and return a client pointed at it.
    pub async fn start(self) -> (Client, FakeApi) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client =
            Client::with_config(ClientConfig::with_base_url(format!("http://{addr}/v1"))).unwrap();
        (client, self)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Last request sent to `path`.
    pub fn last(&self, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|request| request.path == path)
            .unwrap_or_else(|| panic!("no request to {path}"))
    }
}

async fn handle(
    State(api): State<FakeApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().strip_prefix("/v1").unwrap_or(uri.path()).to_string();

    api.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        cookie: headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let canned = api
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();

    match canned {
        Some(canned) => {
            let mut response = Json(canned.body).into_response();
            if let Some(cookie) = canned.set_cookie {
                response
                    .headers_mut()
                    .append(SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
            }
            response
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "ENDPOINT_NOT_FOUND"})),
        )
            .into_response(),
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn ok(result: Value) -> Value {
    json!({"status": "OK", "result": result})
}

pub fn failed(status: &str) -> Value {
    json!({"status": status})
}

pub fn icon_json(id: &str, name: &str) -> Value {
    json!({
        "iconId": id,
        "item": "GRASS_BLOCK",
        "name": name,
        "image": format!("{id}.png"),
        "credits": 250
    })
}

pub fn server_json(id: &str, name: &str, online: u32) -> Value {
    json!({
        "serverId": id,
        "serverName": name,
        "serverIcon": icon_json("icon-grass", "Grass Block"),
        "userId": "user-9",
        "version": "1.20.4",
        "state": 4,
        "messageOfTheDay": "Welcome!",
        "players": {"online": online, "max": 20}
    })
}

pub fn my_server_json(id: &str, name: &str) -> Value {
    json!({
        "serverId": id,
        "serverName": name,
        "serverIcon": icon_json("icon-grass", "Grass Block"),
        "userId": "user-1",
        "version": "1.19.2",
        "category": "SURVIVAL",
        "subUsers": [],
        "state": 5,
        "support": {"offline": false, "bedrock": true},
        "usage": {"ram": 512, "disk": 1024},
        "backups": null,
        "subscription": {"currentPackageId": 2, "nextPackageId": null},
        "unlockedIcons": [],
        "settings": {"lobbyVisible": true, "startupCommand": 0, "cosmetics": false},
        "messageOfTheDay": "A Minecraft Server",
        "players": {"online": 0, "list": [], "max": 10}
    })
}

/// Fake API with one owned server, `srv-1` named `survival`.
pub fn with_my_server() -> FakeApi {
    FakeApi::new().reply(
        "GET",
        "/user/servers",
        ok(json!([my_server_json("srv-1", "survival")])),
    )
}
