#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arena_client::infrastructure::http::ReqwestTransport;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, HeaderName, USER_AGENT};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use url::Url;

/// A canned answer of the fixture server.
#[derive(Clone)]
pub struct Fixture {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Fixture {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as the fixture server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Fixtures {
    routes: HashMap<(Method, String), Fixture>,
    requests: Mutex<Vec<Recorded>>,
}

/// Local HAL API serving fixtures under `/api`.
pub struct TestApi {
    pub addr: SocketAddr,
    fixtures: Arc<Fixtures>,
}

impl TestApi {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).unwrap()
    }

    pub fn transport(&self) -> ReqwestTransport {
        self.transport_with_timeout(Duration::from_secs(5))
    }

    pub fn transport_with_timeout(&self, timeout: Duration) -> ReqwestTransport {
        ReqwestTransport::new(self.base_url(), timeout, "arena-client/test").unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.fixtures.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

pub struct TestApiBuilder {
    fixtures: Fixtures,
}

impl TestApiBuilder {
    pub fn new() -> Self {
        Self {
            fixtures: Fixtures::default(),
        }
    }

    /// Serves `GET /api{path}`; `path` may include a query string.
    pub fn get(mut self, path: &str, fixture: Fixture) -> Self {
        self.fixtures
            .routes
            .insert((Method::GET, format!("/api{path}")), fixture);
        self
    }

    pub fn post(mut self, path: &str, fixture: Fixture) -> Self {
        self.fixtures
            .routes
            .insert((Method::POST, format!("/api{path}")), fixture);
        self
    }

    pub async fn spawn(self) -> TestApi {
        let fixtures = Arc::new(self.fixtures);
        let app = Router::new().fallback(serve).with_state(fixtures.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestApi { addr, fixtures }
    }
}

async fn serve(
    State(fixtures): State<Arc<Fixtures>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    fixtures.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        accept: header(ACCEPT),
        user_agent: header(USER_AGENT),
        body: serde_json::from_slice(&body).ok(),
    });

    let Some(fixture) = fixtures.routes.get(&(method, path)).cloned() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if !fixture.delay.is_zero() {
        tokio::time::sleep(fixture.delay).await;
    }

    (
        fixture.status,
        [(CONTENT_TYPE, "application/hal+json")],
        fixture.body,
    )
        .into_response()
}

/// A port nothing listens on.
pub async fn closed_port_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api")).unwrap()
}
