//! A local stand-in for the game server, for tests.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::{ready, Ready};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

type Hits = Arc<Mutex<HashMap<&'static str, usize>>>;

pub(crate) struct MockServer {
    addr: SocketAddr,
    hits: Hits,
}

impl MockServer {
    pub(crate) async fn start() -> Self {
        Self::start_with(json!({
            "player_cards": ["A♠", "K♥"],
            "dealer_cards": ["2♣", "9♦"],
            "table_cards": ["3♠", "4♠", "5♠"],
        }))
        .await
    }

    /// Serves `start_body` from `POST /start`.
    pub(crate) async fn start_with(start_body: Value) -> Self {
        let hits = Hits::default();
        let router = Router::new()
            .route("/start", post(reply(&hits, "/start", start_body)))
            .route(
                "/probabilities",
                get(reply(
                    &hits,
                    "/probabilities",
                    json!({ "player_win": 0.7, "dealer_win": 0.3 }),
                )),
            )
            .route(
                "/evaluate",
                post(reply(&hits, "/evaluate", json!({ "winner": "tie" }))),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        Self { addr, hits }
    }

    pub(crate) fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub(crate) fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

fn reply(
    hits: &Hits,
    path: &'static str,
    body: Value,
) -> impl Fn() -> Ready<Json<Value>> + Clone + Send + Sync + 'static {
    let hits = hits.clone();
    move || {
        *hits.lock().unwrap().entry(path).or_default() += 1;
        ready(Json(body.clone()))
    }
}

/// An address nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
