//! Request routing.
//!
//! Routes are matched on path segments after an optional leading `api` segment, so
//! `/api/characters` and `/characters` are the same resource.

use bytes::Bytes;
use hyper::{Method, StatusCode, Uri};
use serde_json::{json, Value};

use super::responses::{self, HttpResponse};
use super::AppState;
use crate::clients::RecordClient;
use crate::error::ApiError;
use crate::model::{Character, Fields};
use crate::query::{Page, PageLink, QueryError, QueryParams};

const COLLECTION_METHODS: &str = "GET, POST, OPTIONS";
const CHARACTER_METHODS: &str = "GET, PUT, DELETE, OPTIONS";
const READ_METHODS: &str = "GET, OPTIONS";

/// Routes one request. Never fails: every error becomes a JSON response.
pub async fn dispatch(state: &AppState, method: &Method, uri: &Uri, body: Bytes) -> HttpResponse {
    let segments: Vec<&str> = uri.path().split('/').filter(|s| !s.is_empty()).collect();
    let route = match segments.split_first() {
        Some((&"api", rest)) => rest,
        _ => &segments[..],
    };
    let params = || QueryParams::from_query(uri.query().unwrap_or_default());

    let allow = match route {
        [] | ["health"] | ["ping"] | ["episodes"] | ["episodes", _] => READ_METHODS,
        ["characters"] => COLLECTION_METHODS,
        ["characters", _] => CHARACTER_METHODS,
        _ => return responses::not_found(),
    };
    if *method == Method::OPTIONS {
        return responses::preflight(allow);
    }

    let result = match (method, route) {
        (&Method::GET, []) => Ok(responses::json(StatusCode::OK, &welcome())),
        (&Method::GET, ["health"]) => {
            let timestamp =
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
            Ok(responses::json(
                StatusCode::OK,
                &json!({
                    "status": "ok",
                    "timestamp": timestamp,
                    "uptime": state.started.elapsed().as_secs_f64(),
                }),
            ))
        }
        (&Method::GET, ["ping"]) => Ok(responses::json(
            StatusCode::OK,
            &json!({
                "message": "API is awake!",
                "uptime": state.started.elapsed().as_secs(),
            }),
        )),
        (&Method::GET, ["characters"]) => {
            let params = params();
            state.characters.list(&params).await.map(|page| {
                responses::json(StatusCode::OK, &character_page(uri.path(), &params, page))
            })
        }
        (&Method::POST, ["characters"]) => match parse_body(&body) {
            Ok(fields) => state
                .characters
                .create(fields)
                .await
                .map(|created| responses::json(StatusCode::CREATED, &created)),
            Err(e) => Err(e),
        },
        (&Method::GET, ["characters", id]) => state
            .characters
            .get(id)
            .await
            .map(|found| responses::json(StatusCode::OK, &found)),
        (&Method::PUT, ["characters", id]) => match parse_body(&body) {
            Ok(fields) => state
                .characters
                .update(id, fields)
                .await
                .map(|updated| responses::json(StatusCode::OK, &updated)),
            Err(e) => Err(e),
        },
        (&Method::DELETE, ["characters", id]) => state
            .characters
            .delete(id)
            .await
            .map(|removed| responses::json(StatusCode::OK, &removed)),
        (&Method::GET, ["episodes"]) => state
            .episodes
            .list(&params())
            .await
            .map(|episodes| responses::json(StatusCode::OK, &episodes)),
        (&Method::GET, ["episodes", id]) => state
            .episodes
            .get(id)
            .await
            .map(|found| responses::json(StatusCode::OK, &found)),
        _ => return responses::method_not_allowed(allow),
    };

    result.unwrap_or_else(|e| responses::api_error(&e))
}

/// An empty body is an empty patch; anything else must be a JSON object.
fn parse_body(body: &Bytes) -> Result<Fields, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(QueryError::invalid("body", "Request body must be a JSON object").into()),
        Err(e) => Err(QueryError::invalid("body", format!("Malformed JSON: {e}")).into()),
    }
}

fn character_page(path: &str, params: &QueryParams, page: Page<Character>) -> Value {
    let link = |target: Option<PageLink>| match target {
        Some(target) => Value::String(page_url(path, params, target)),
        None => Value::Null,
    };
    json!({
        "page": page.page,
        "totalPages": page.total_pages,
        "totalItems": page.total_items,
        "limit": page.limit,
        "characters": page.items,
        "next": link(page.next),
        "prev": link(page.prev),
    })
}

/// Same listing, other page: the filters are carried over verbatim.
fn page_url(path: &str, params: &QueryParams, target: PageLink) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(name) = &params.name {
        query.append_pair("name", name);
    }
    if let Some(status) = &params.status {
        query.append_pair("status", status);
    }
    query.append_pair("page", &target.page.to_string());
    query.append_pair("limit", &target.limit.to_string());
    format!("{path}?{}", query.finish())
}

fn welcome() -> Value {
    json!({
        "message": "Welcome to The Walking Dead API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "characters": "/api/characters",
            "character_by_id": "/api/characters/:id",
            "episodes": "/api/episodes",
            "episode_by_id": "/api/episodes/:id",
            "health": "/api/health",
            "ping": "/api/ping",
        },
        "examples": {
            "all_characters": "/api/characters?page=1&limit=12",
            "search_by_name": "/api/characters?name=Rick",
            "filter_by_status": "/api/characters?status=alive",
            "episodes_by_season": "/api/episodes?season=1",
        },
    })
}
