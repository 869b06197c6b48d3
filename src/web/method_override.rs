//! `_method` query-parameter override for HTML forms.
//!
//! Browsers only submit forms as GET or POST. A POST to
//! `/contact?_method=DELETE` is rewritten to a DELETE before routing, so
//! forms can reach the PUT and DELETE routes.

use axum::extract::Request;
use axum::http::Method;
use tracing::trace;

/// Query parameter that names the intended method.
pub const OVERRIDE_PARAM: &str = "_method";

/// Rewrite an overridable POST to the method named in its query string.
///
/// Only POST requests are considered, and only PUT, PATCH and DELETE are
/// accepted as targets (case-insensitive). Anything else passes through
/// unchanged.
pub fn method_override(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let Some(method) = request.uri().query().and_then(override_from_query) else {
        return request;
    };

    trace!(uri = %request.uri(), method = %method, "Method override");
    *request.method_mut() = method;
    request
}

fn override_from_query(query: &str) -> Option<Method> {
    let (_, raw) = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == OVERRIDE_PARAM)?;

    let value = urlencoding::decode(raw).ok()?;
    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
