//! Server error type.
//!
//! The shell's own update logic cannot fail; these cover the HTTP plumbing
//! around it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::model::UnknownTab;

#[derive(Debug, Error)]
pub enum AppError {
    /// A `/tabs/{tab}` segment that names no tab.
    #[error(transparent)]
    UnknownTab(#[from] UnknownTab),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownTab(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "http.error", error = %self, "Request failed");
        } else {
            tracing::debug!(name: "http.rejected", error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
