use repo_relay_ghapi_interface::ApiError;

/// GitHub adapter error.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The request could not be built.
    #[error("Could not create request for url {}", url)]
    RequestError {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: reqwest::Error,
    },

    /// The request could not be sent.
    #[error("Could not send request to url {}", url)]
    TransportError {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: reqwest::Error,
    },

    /// The upstream service answered with a non-OK status code.
    #[error("Upstream responded with status {} {}", status_code, status_text)]
    StatusError {
        /// Upstream status code.
        status_code: u16,
        /// Upstream status text.
        status_text: String,
    },

    /// The response body could not be decoded.
    #[error("Could not decode response body from url {}", url)]
    DecodeError {
        /// Target URL.
        url: String,
        /// Underlying error.
        source: reqwest::Error,
    },

    /// Adapter-internal error.
    #[error(transparent)]
    ImplementationError {
        /// Underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::RequestError { url, source } => ApiError::RequestCreation {
                url,
                source: source.into(),
            },
            GitHubError::TransportError { url, source } => ApiError::Transport {
                url,
                source: source.into(),
            },
            GitHubError::StatusError {
                status_code,
                status_text,
            } => ApiError::UpstreamStatus {
                status_code,
                status_text,
            },
            GitHubError::DecodeError { url, source } => ApiError::ResponseDecode {
                url,
                source: source.into(),
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
