//! Error type surfaced at the request boundary.

use hyper::StatusCode;
use thiserror::Error;

use crate::framework::FrameworkError;
use crate::query::QueryError;
use crate::store::StoreError;

/// Every failure a read or write operation can report to its caller.
///
/// Storage failures are server-side; query failures are the caller's fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// The writer actor or the blocking pool went away.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FrameworkError> for ApiError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { kind, id } => QueryError::NotFound { kind, id }.into(),
            FrameworkError::Store(e) => ApiError::Store(e),
            FrameworkError::Entity(message) => QueryError::invalid("body", message).into(),
            e @ (FrameworkError::ActorClosed
            | FrameworkError::ActorDropped
            | FrameworkError::Join(_)) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(QueryError::InvalidParameter { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short title for the `error` field of a response body.
    pub fn title(&self) -> String {
        match self {
            ApiError::Query(QueryError::InvalidParameter { field: "id", .. }) => {
                "Invalid ID".to_string()
            }
            ApiError::Query(QueryError::InvalidParameter { field, .. }) => {
                format!("Invalid {field}")
            }
            ApiError::Query(QueryError::NotFound { kind, .. }) => format!("{kind} not found"),
            ApiError::Store(_) | ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Human-readable detail for the `message` field. Server-side failures stay generic.
    pub fn message(&self) -> String {
        match self {
            ApiError::Query(QueryError::InvalidParameter { message, .. }) => message.clone(),
            ApiError::Query(QueryError::NotFound { kind, id }) => {
                format!("No {} found with ID {id}", kind.to_lowercase())
            }
            ApiError::Store(_) => "Failed to access the dataset".to_string(),
            ApiError::Internal(_) => "Failed to process the request".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_api_errors() {
        let not_found: ApiError = FrameworkError::NotFound { kind: "Character", id: 3 }.into();
        assert!(matches!(
            not_found,
            ApiError::Query(QueryError::NotFound { kind: "Character", id: 3 })
        ));

        let bad_body: ApiError = FrameworkError::Entity("invalid type".into()).into();
        assert!(matches!(
            bad_body,
            ApiError::Query(QueryError::InvalidParameter { field: "body", .. })
        ));
        assert_eq!(bad_body.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_body.title(), "Invalid body");

        let closed: ApiError = FrameworkError::ActorClosed.into();
        assert!(matches!(closed, ApiError::Internal(_)));
        assert_eq!(closed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_titles_and_messages() {
        let invalid_id: ApiError =
            QueryError::invalid("id", "Episode ID must be a positive number").into();
        assert_eq!(invalid_id.title(), "Invalid ID");
        assert_eq!(invalid_id.message(), "Episode ID must be a positive number");

        let season: ApiError =
            QueryError::invalid("season", "Season must be a number between 1 and 11").into();
        assert_eq!(season.title(), "Invalid season");

        let missing: ApiError = QueryError::NotFound { kind: "Episode", id: 500 }.into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.title(), "Episode not found");
        assert_eq!(missing.message(), "No episode found with ID 500");

        // Reads and writes share the store error, so the wording names neither.
        let store: ApiError =
            StoreError::unavailable("data.json", std::io::ErrorKind::PermissionDenied.into())
                .into();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.message(), "Failed to access the dataset");
    }
}
