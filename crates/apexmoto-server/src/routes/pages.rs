//! HTML page handlers and their error responses.

use apexmoto_core::channel_href;
use apexmoto_storefront::{PageError, PageRoute};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};

use super::AppState;
use crate::middleware::RequestId;

/// An HTML status page. Never cached.
#[derive(Debug)]
pub struct ErrorPage {
    status: StatusCode,
    html: String,
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
            Html(self.html),
        )
            .into_response()
    }
}

impl ErrorPage {
    fn not_found(state: &AppState, channel: &str) -> Self {
        let html = state
            .storefront
            .render_not_found(channel)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to render not-found page");
                "<h1>Page not found</h1>".to_owned()
            });
        Self {
            status: StatusCode::NOT_FOUND,
            html,
        }
    }

    fn failure(state: &AppState, channel: &str, status: StatusCode, request_id: &str) -> Self {
        let html = state
            .storefront
            .render_error(channel, Some(request_id))
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to render error page");
                "<h1>Something went wrong</h1>".to_owned()
            });
        Self { status, html }
    }
}

/// Saleor channel slugs are lowercase-ish identifiers. Anything else
/// (`favicon.ico`, `robots.txt`) is not a channel.
fn is_channel_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Temporary, so never cached.
pub async fn root_redirect(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Redirect::temporary(&channel_href(&state.default_channel, "/")),
    )
}

pub async fn channel_home(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(channel): Path<String>,
) -> Response {
    serve(&state, &req_id, &channel, "/").await
}

pub async fn channel_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((channel, rest)): Path<(String, String)>,
) -> Response {
    serve(&state, &req_id, &channel, &rest).await
}

pub async fn fallback(State(state): State<AppState>) -> Response {
    ErrorPage::not_found(&state, &state.default_channel).into_response()
}

async fn serve(state: &AppState, req_id: &RequestId, channel: &str, path: &str) -> Response {
    if !is_channel_slug(channel) {
        return ErrorPage::not_found(state, &state.default_channel).into_response();
    }
    let Some(route) = PageRoute::parse(path) else {
        return ErrorPage::not_found(state, channel).into_response();
    };

    match state.storefront.render(channel, &route).await {
        Ok(html) => Html(html).into_response(),
        Err(PageError::NotFound) => ErrorPage::not_found(state, channel).into_response(),
        Err(PageError::Upstream(e)) => {
            tracing::error!(
                error = %e,
                request_id = %req_id.0,
                channel,
                path,
                "upstream request failed"
            );
            ErrorPage::failure(state, channel, StatusCode::BAD_GATEWAY, &req_id.0).into_response()
        }
        Err(PageError::Render(e)) => {
            tracing::error!(
                error = %e,
                request_id = %req_id.0,
                channel,
                path,
                "page render failed"
            );
            ErrorPage::failure(state, channel, StatusCode::INTERNAL_SERVER_ERROR, &req_id.0)
                .into_response()
        }
    }
}
