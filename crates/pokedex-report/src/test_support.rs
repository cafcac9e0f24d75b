//! In-process catalog server for tests: a listing endpoint at `/pokemon` and
//! one detail endpoint per entry at `/pokemon/{name}`.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn pokemon(id: i64, name: &str, types: &[&str], abilities: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "types": types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
            .collect::<Vec<_>>(),
        "abilities": abilities
            .iter()
            .map(|a| json!({ "ability": { "name": a, "url": "" }, "is_hidden": false }))
            .collect::<Vec<_>>(),
    })
}

/// How the detail endpoint answers for one entry.
enum Reply {
    Json(Value),
    NotFound,
    /// 200 with a body that is not JSON.
    Garbled,
    /// The payload, after sleeping this long.
    Slow(Value, Duration),
}

#[derive(Default)]
pub struct FakeCatalog {
    entries: Vec<(String, Reply)>,
    fail_listing_at_offset: Option<u64>,
    report_count: bool,
    detail_delay: Duration,
}

impl FakeCatalog {
    pub fn entry(mut self, payload: Value) -> Self {
        let name = payload["name"].as_str().unwrap_or_default().to_string();
        self.entries.push((name, Reply::Json(payload)));
        self
    }

    /// An entry that is listed but whose detail request answers 404.
    pub fn missing(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Reply::NotFound));
        self
    }

    /// An entry whose detail request answers 200 with a non-JSON body.
    pub fn garbled(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Reply::Garbled));
        self
    }

    /// An entry whose detail request answers only after `delay`.
    pub fn slow(mut self, payload: Value, delay: Duration) -> Self {
        let name = payload["name"].as_str().unwrap_or_default().to_string();
        self.entries.push((name, Reply::Slow(payload, delay)));
        self
    }

    pub fn fail_listing_at(mut self, offset: u64) -> Self {
        self.fail_listing_at_offset = Some(offset);
        self
    }

    pub fn report_count(mut self) -> Self {
        self.report_count = true;
        self
    }

    pub fn detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }

    pub async fn start(self) -> RunningCatalog {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}/pokemon");

        let state = Arc::new(CatalogState {
            base_url: base_url.clone(),
            catalog: self,
            listing_hits: AtomicUsize::new(0),
            detail_hits: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        });

        let router = Router::new()
            .route("/pokemon", get(listing))
            .route("/pokemon/{name}", get(detail))
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        RunningCatalog { base_url, state }
    }
}

pub struct RunningCatalog {
    pub base_url: String,
    state: Arc<CatalogState>,
}

impl RunningCatalog {
    pub fn listing_hits(&self) -> usize {
        self.state.listing_hits.load(Ordering::SeqCst)
    }

    pub fn detail_hits(&self) -> usize {
        self.state.detail_hits.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

struct CatalogState {
    base_url: String,
    catalog: FakeCatalog,
    listing_hits: AtomicUsize,
    detail_hits: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[derive(Deserialize)]
struct PageQuery {
    offset: u64,
    limit: u64,
}

async fn listing(
    State(state): State<Arc<CatalogState>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, StatusCode> {
    state.listing_hits.fetch_add(1, Ordering::SeqCst);
    if state.catalog.fail_listing_at_offset == Some(page.offset) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let entries = &state.catalog.entries;
    let start = (page.offset as usize).min(entries.len());
    let end = (start + page.limit as usize).min(entries.len());
    let results: Vec<Value> = entries[start..end]
        .iter()
        .map(|(name, _)| json!({ "name": name, "url": format!("{}/{name}", state.base_url) }))
        .collect();

    let mut body = json!({ "results": results });
    if state.catalog.report_count {
        body["count"] = json!(entries.len());
    }
    Ok(Json(body))
}

async fn detail(State(state): State<Arc<CatalogState>>, Path(name): Path<String>) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);
    if !state.catalog.detail_delay.is_zero() {
        tokio::time::sleep(state.catalog.detail_delay).await;
    }
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    let reply = state.catalog.entries.iter().find(|(n, _)| *n == name).map(|(_, r)| r);
    match reply {
        Some(Reply::Json(payload)) => Json(payload.clone()).into_response(),
        Some(Reply::Slow(payload, delay)) => {
            tokio::time::sleep(*delay).await;
            Json(payload.clone()).into_response()
        }
        Some(Reply::Garbled) => "not json".into_response(),
        Some(Reply::NotFound) | None => StatusCode::NOT_FOUND.into_response(),
    }
}
