//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use repo_relay_ghapi_interface::ApiError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Error while creating upstream request,\n  caused by: {}", source)]
    RequestCreation { source: ApiError },

    #[error("Error while sending upstream request,\n  caused by: {}", source)]
    Transport { source: ApiError },

    #[error("Upstream error response: {} {}", status_code, status_text)]
    UpstreamStatus {
        status_code: u16,
        status_text: String,
    },

    #[error("Error while decoding upstream response,\n  caused by: {}", source)]
    ResponseDecode { source: ApiError },

    #[error("Error while encoding response body,\n  caused by: {}", source)]
    ResponseEncode { source: serde_json::Error },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },

    #[error("Internal error.")]
    InternalError,
}

impl From<ApiError> for ServerError {
    fn from(e: ApiError) -> Self {
        match e {
            e @ ApiError::RequestCreation { .. } => ServerError::RequestCreation { source: e },
            e @ ApiError::Transport { .. } => ServerError::Transport { source: e },
            ApiError::UpstreamStatus {
                status_code,
                status_text,
            } => ServerError::UpstreamStatus {
                status_code,
                status_text,
            },
            e @ ApiError::ResponseDecode { .. } => ServerError::ResponseDecode { source: e },
            ApiError::ImplementationError { .. } => ServerError::InternalError,
        }
    }
}

impl ServerError {
    /// Fixed plain-text body exposed to the caller.
    fn public_body(&self) -> &'static str {
        match self {
            ServerError::RequestCreation { .. } => "Error creating request",
            ServerError::Transport { .. } => "Error sending request",
            ServerError::UpstreamStatus { .. } => "Error response status code",
            ServerError::ResponseDecode { .. } => "Error decoding response body",
            ServerError::ResponseEncode { .. } => "Error encoding response body",
            _ => "Internal error.",
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::UpstreamStatus { status_code, .. } => {
                StatusCode::from_u16(*status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.public_body())
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
