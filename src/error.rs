//! API error taxonomy and HTTP mapping.
//!
//! `NotFound` and `Validation` are the only client-visible failures; store
//! failures are logged and surfaced as opaque 500s. Validation errors carry
//! field-level detail so clients can correct their input.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Product not found"})),
            )
                .into_response(),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": errors})),
            )
                .into_response(),
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({"detail": message}))).into_response()
            }
            Self::Store(error) => {
                tracing::error!(error = %error, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(range(min = 1))]
        quantity: u32,
    }

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);

        let errors = Probe { quantity: 0 }.validate().unwrap_err();
        assert_eq!(
            ApiError::Validation(errors).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            ApiError::BadRequest("nope".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
