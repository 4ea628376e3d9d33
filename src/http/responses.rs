//! JSON response builders.

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error};

use crate::error::ApiError;

pub type HttpResponse = Response<Full<Bytes>>;

/// Serializes `body` with the JSON and CORS headers every response carries.
pub fn json<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => raw(status, Bytes::from(bytes)),
        Err(e) => {
            error!(error = %e, "Response serialization failed");
            raw(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
            )
        }
    }
}

/// `{error, message}` body for a failed operation.
pub fn api_error(e: &ApiError) -> HttpResponse {
    let status = e.status();
    if status.is_server_error() {
        error!(error = %e, "Request failed");
    } else {
        debug!(error = %e, "Request rejected");
    }
    json(status, &json!({ "error": e.title(), "message": e.message() }))
}

pub fn not_found() -> HttpResponse {
    json(StatusCode::NOT_FOUND, &json!({ "error": "Endpoint not found" }))
}

pub fn method_not_allowed(allow: &'static str) -> HttpResponse {
    let mut response = json(
        StatusCode::METHOD_NOT_ALLOWED,
        &json!({ "error": "Method not allowed" }),
    );
    response
        .headers_mut()
        .insert(hyper::header::ALLOW, HeaderValue::from_static(allow));
    response
}

/// CORS preflight answer for a known route.
pub fn preflight(allow: &'static str) -> HttpResponse {
    let mut response = raw(StatusCode::NO_CONTENT, Bytes::new());
    let headers = response.headers_mut();
    headers.remove(CONTENT_TYPE);
    headers.insert(
        hyper::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(allow),
    );
    headers.insert(
        hyper::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    response
}

fn raw(status: StatusCode, body: Bytes) -> HttpResponse {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    #[test]
    fn test_json_sets_headers() {
        let response = json(StatusCode::CREATED, &json!({"id": 1}));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[test]
    fn test_api_error_status() {
        let e: ApiError = QueryError::NotFound { kind: "Character", id: 9 }.into();
        assert_eq!(api_error(&e).status(), StatusCode::NOT_FOUND);

        let e = ApiError::Internal("actor gone".into());
        assert_eq!(api_error(&e).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_preflight_has_no_content_type() {
        let response = preflight("GET, POST");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
