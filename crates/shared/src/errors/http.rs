use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
    validation::FieldErrors,
};
use axum::{
    Json,
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug)]
pub enum HttpError {
    Validation(FieldErrors),
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => HttpError::Validation(errors),

            ServiceError::Repo(repo_err) => {
                if repo_err.is_unavailable() {
                    error!("❌ Store unavailable: {repo_err}");
                    return HttpError::ServiceUnavailable("Database unavailable".into());
                }

                match repo_err {
                    RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                    RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                    RepositoryError::Sqlx(err) => {
                        error!("❌ Database error: {err}");
                        HttpError::Internal("Repository error".into())
                    }
                }
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

/// Unparseable path parameters answer 404.
impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        warn!("⚠️ Unmatched path parameter: {}", rejection.body_text());
        HttpError::NotFound("Not found".into())
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        warn!("⚠️ Rejected form body: {}", rejection.body_text());
        HttpError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })))
                    .into_response();
            }
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn maps_not_found_to_404() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn maps_pool_timeout_to_503() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::Sqlx(
                sqlx::Error::PoolTimedOut
            ))),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn maps_other_database_errors_to_500() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::Sqlx(
                sqlx::Error::RowNotFound
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn maps_validation_to_400() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required.");
        assert_eq!(
            status_of(ServiceError::Validation(errors)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn maps_conflict_and_auth_errors() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::AlreadyExists(
                "email".into()
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(ServiceError::TokenExpired), StatusCode::UNAUTHORIZED);
    }
}
