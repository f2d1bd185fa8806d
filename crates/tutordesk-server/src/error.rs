//! HTTP error responses and extractors that report failures in the same shape

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tutordesk_core::errors::{ExError, ExErrorKind, TutorError};

/// Message sent in place of internal error details
const INTERNAL_MESSAGE: &str = "internal server error";

/// An `ExError` on its way out as an HTTP response
///
/// Body: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl ApiError {
    /// Status code chosen from the error kind alone
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ExErrorKind::NotFound => StatusCode::NOT_FOUND,
            ExErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ExErrorKind::Unauthorised => StatusCode::UNAUTHORIZED,
            ExErrorKind::ConstraintViolation
            | ExErrorKind::Io
            | ExErrorKind::Serialization
            | ExErrorKind::Persistence
            | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn invalid_input(message: String) -> Self {
        Self(ExError::new(ExErrorKind::InvalidInput).with_message(message))
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl From<TutorError> for ApiError {
    fn from(err: TutorError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let err = self.0;

        let message = if err.kind().is_client_error() {
            err.message().to_string()
        } else {
            tracing::error!(
                err_kind = ?err.kind(),
                err_code = err.code(),
                err_op = err.op(),
                err_message = err.message(),
                "request failed"
            );
            INTERNAL_MESSAGE.to_string()
        };

        let body = json!({
            "error": {
                "code": err.code(),
                "message": message,
            }
        });
        (status, Json(body)).into_response()
    }
}

/// `axum::Json` with rejections mapped to `ApiError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with rejections mapped to `ApiError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` with rejections mapped to `ApiError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
