//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use servery_domain::error::{ServeryError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ServeryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ServeryError);

impl From<ServeryError> for ApiError {
    fn from(err: ServeryError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ServeryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ServeryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ServeryError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            ServeryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servery_domain::error::{ConflictError, NotFoundError};
    use servery_domain::id::{OrderId, TableGroupId};

    fn status_of(err: impl Into<ServeryError>) -> StatusCode {
        ApiError(err.into()).into_response().status()
    }

    #[test]
    fn should_map_each_error_kind_to_its_status() {
        assert_eq!(
            status_of(ValidationError::OrderLineEmpty),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(NotFoundError::TableGroup(TableGroupId::new())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ConflictError::OrderIsCompleted(OrderId::new())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ServeryError::Storage("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
