//! API errors.

use thiserror::Error;

/// API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The outbound request could not be built.
    #[error("Could not create request for url {}", url)]
    RequestCreation {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The outbound request could not be sent (DNS, connect, timeout).
    #[error("Could not send request to url {}", url)]
    Transport {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The upstream service answered with a non-OK status code.
    #[error("Upstream responded with status {} {}", status_code, status_text)]
    UpstreamStatus {
        /// Upstream status code.
        status_code: u16,
        /// Upstream status text.
        status_text: String,
    },

    /// The upstream response body could not be decoded.
    #[error("Could not decode response body from url {}", url)]
    ResponseDecode {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Adapter-internal error.
    #[error(transparent)]
    ImplementationError {
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
