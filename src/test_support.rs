//! Test utilities for unit tests in `src/`.
//!
//! Only compiled when running tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::raw::RawResource;
use crate::domain::repositories::Transport;
use crate::error::AppError;

struct Route {
    delay: Duration,
    response: Result<Value, AppError>,
}

/// In-memory [`Transport`] answering from a fixed route table.
///
/// Each route may carry a latency, which lets tests observe whether sibling
/// fetches overlap when run under tokio's paused clock. Unknown paths answer
/// [`AppError::NotFound`]. Every request is recorded in arrival order.
#[derive(Default)]
pub struct StubTransport {
    routes: HashMap<String, Route>,
    posts: HashMap<String, Route>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, body: Value) -> Self {
        self.with_delay(path, Duration::ZERO, body)
    }

    pub fn with_delay(mut self, path: &str, delay: Duration, body: Value) -> Self {
        self.routes.insert(
            path.to_owned(),
            Route {
                delay,
                response: Ok(body),
            },
        );
        self
    }

    pub fn with_error(self, path: &str, error: AppError) -> Self {
        self.with_error_delay(path, Duration::ZERO, error)
    }

    pub fn with_error_delay(mut self, path: &str, delay: Duration, error: AppError) -> Self {
        self.routes.insert(
            path.to_owned(),
            Route {
                delay,
                response: Err(error),
            },
        );
        self
    }

    /// Answers `POST path` with `body`.
    pub fn with_post(mut self, path: &str, body: Value) -> Self {
        self.posts.insert(
            path.to_owned(),
            Route {
                delay: Duration::ZERO,
                response: Ok(body),
            },
        );
        self
    }

    /// Requests seen so far, as `GET path` / `POST path`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Bodies of every `POST`, in order.
    pub fn posted(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    /// Number of `GET` requests issued for `path`.
    pub fn gets(&self, path: &str) -> usize {
        let needle = format!("GET {path}");
        self.calls().iter().filter(|call| **call == needle).count()
    }

    async fn answer(&self, route: Option<&Route>, path: &str) -> Result<RawResource, AppError> {
        let Some(route) = route else {
            return Err(AppError::not_found(path));
        };
        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }
        route.response.clone().and_then(RawResource::from_value)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, path: &str) -> Result<RawResource, AppError> {
        self.calls.lock().unwrap().push(format!("GET {path}"));
        self.answer(self.routes.get(path), path).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<RawResource, AppError> {
        self.calls.lock().unwrap().push(format!("POST {path}"));
        self.bodies.lock().unwrap().push(body);
        self.answer(self.posts.get(path), path).await
    }
}
