use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::{auth::password::PasswordError, signup::ValidationError, users::StoreError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("User already exists")]
    UserExists,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(String),
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::UserExists => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::Unauthorized(_) | AuthError::UserNotFound => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Password(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmailTaken => AuthError::UserExists,
            StoreError::Database(e) => AuthError::Internal(e.into()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AuthError::Password(e) => {
                error!(error = %e, "credential error");
                "Internal server error".to_string()
            }
            AuthError::Internal(e) => {
                error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_statuses() {
        assert_eq!(AuthError::from(StoreError::EmailTaken).status(), StatusCode::CONFLICT);
        let db = AuthError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_message_passes_through() {
        let e = AuthError::from(ValidationError::NameRequired);
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.to_string(), "Name is required");
    }
}
