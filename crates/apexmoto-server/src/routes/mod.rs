mod pages;

use std::sync::Arc;

use apexmoto_storefront::Storefront;
use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<Storefront>,
    pub default_channel: Arc<str>,
    /// `max-age` for successfully rendered pages.
    pub page_max_age_secs: u64,
}

impl AppState {
    pub fn new(storefront: Storefront, default_channel: String, page_max_age_secs: u64) -> Self {
        Self {
            storefront: Arc::new(storefront),
            default_channel: default_channel.into(),
            page_max_age_secs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn cache_control(max_age_secs: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_secs}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

pub fn build_app(state: AppState) -> Router {
    let page_cache = cache_control(state.page_max_age_secs);

    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::root_redirect))
        .route("/{channel}", get(pages::channel_home))
        .route("/{channel}/{*rest}", get(pages::channel_page))
        .fallback(pages::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id))
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    page_cache,
                )),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
