//! Backend API Wrappers
//!
//! Frontend bindings to the recommendation backend, organized by domain.

mod swipe;
mod friends;
mod books;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JSON client for the backend HTTP API
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

/// `{ "error": "..." }` body returned alongside non-2xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, AppError> {
        tracing::debug!("[API] GET {}", path);
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, AppError> {
        tracing::debug!("[API] POST {}", path);
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        read_json(resp).await
    }

    /// POST where only the status matters
    async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        tracing::debug!("[API] POST {}", path);
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        check_status(resp).await.map(|_| ())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.error);
    tracing::warn!("[API] status {} error={:?}", status.as_u16(), message);
    Err(AppError::Http { status: status.as_u16(), message })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(|e| AppError::Decode(e.to_string()))
}
