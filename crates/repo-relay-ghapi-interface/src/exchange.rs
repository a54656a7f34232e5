use std::collections::HashMap;

use serde::Serialize;

use crate::types::GhRepository;

/// Metadata captured around one upstream HTTP exchange.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ApiExchange {
    /// Outbound method.
    pub method: String,
    /// Outbound URL.
    pub url: String,
    /// Outbound request headers.
    pub request_headers: HashMap<String, String>,
    /// Elapsed wall-clock time of the call, in seconds.
    pub elapsed_seconds: f64,
    /// Upstream status line.
    pub status: String,
    /// Upstream response headers.
    pub response_headers: HashMap<String, String>,
}

/// Result of one repository lookup against the upstream service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryLookup {
    /// Decoded repository.
    pub repository: GhRepository,
    /// Exchange metadata.
    pub exchange: ApiExchange,
}
