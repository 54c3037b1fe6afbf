//! Application error type and its HTTP mapping.
//!
//! Every layer below the HTTP boundary returns [`AppError`]; handlers convert it to a
//! response through [`IntoResponse`]. The response body is always `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad URL, bad alias, empty body, alias too long.
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// The alias is already taken by another mapping.
    #[error("alias already exists")]
    AliasExists { alias: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn alias_exists(alias: impl Into<String>) -> Self {
        Self::AliasExists {
            alias: alias.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    ///
    /// Alias collisions are reported as `400 Bad Request`, the same status as any
    /// other rejected creation request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::AliasExists { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand to a client. Storage errors are replaced by a generic text.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}
