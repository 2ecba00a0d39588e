//! HTTP client for the game server.
//!
//! Requests are sent as-is: no retries, no timeouts, and the status code is
//! not inspected. Anything that fails to arrive or to decode comes back as an
//! error for the caller to deal with.

use crate::game_state::{Evaluation, GameState, ProbabilitySnapshot};
use anyhow::{Context, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;

pub const BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /start`: deals a new hand.
    pub async fn start_game(&self) -> Result<GameState> {
        self.request(Method::POST, "/start").await
    }

    /// `GET /probabilities`: win chances for the current hand.
    pub async fn get_probabilities(&self) -> Result<ProbabilitySnapshot> {
        self.request(Method::GET, "/probabilities").await
    }

    /// `POST /evaluate`: showdown result for the current hand.
    pub async fn evaluate(&self) -> Result<Evaluation> {
        self.request(Method::POST, "/evaluate").await
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .http
            .request(method.clone(), &url)
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("{method} {url} returned an unreadable body"))
    }
}
