//! Maps store and render failures to HTTP responses.

use crate::error::{RenderError, StoreError};
use crate::web::views::{HtmlViews, ViewRenderer, ERROR_LAYOUT};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// The addressed contact does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store failed; the request cannot complete.
    #[error("store error: {0}")]
    Store(StoreError),

    /// A page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(what),
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
            return (status, Html("<h1>500</h1>\n<p>Internal Server Error</p>\n")).into_response();
        }

        let page = HtmlViews
            .render("404", &json!({"title": "404", "layout": ERROR_LAYOUT}))
            .unwrap_or_else(|_| "<h1>404</h1>".to_string());
        (status, Html(page)).into_response()
    }
}
