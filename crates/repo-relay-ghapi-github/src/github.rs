//! GitHub API adapter.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use repo_relay_config::Config;
use repo_relay_ghapi_interface::{
    types::GhRepository, ApiExchange, ApiService, RepositoryLookup, Result,
};
use reqwest::{header, Client, ClientBuilder, StatusCode};
use tracing::debug;

use crate::errors::GitHubError;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Create a new service from configuration.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_millis(config.api.github.request_timeout))
            .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
            .build()
            .map_err(|e| GitHubError::ImplementationError { source: e.into() })?;

        Ok(Self { config, client })
    }

    fn build_url<T: Into<String>>(&self, path: T) -> String {
        format!("{}{}", self.config.api.github.root_url, path.into())
    }

    async fn repository_lookup(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryLookup, GitHubError> {
        let url = self.build_url(format!("/repos/{owner}/{name}"));

        let request = self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.config.api.github.user_agent)
            .build()
            .map_err(|e| GitHubError::RequestError {
                url: url.clone(),
                source: e,
            })?;

        let method = request.method().to_string();
        let request_headers = headers_to_map(request.headers());

        let start = Instant::now();
        let response =
            self.client
                .execute(request)
                .await
                .map_err(|e| GitHubError::TransportError {
                    url: url.clone(),
                    source: e,
                })?;
        let elapsed_seconds = start.elapsed().as_secs_f64();

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GitHubError::StatusError {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }

        let status_line = format_status_line(status);
        let response_headers = headers_to_map(response.headers());

        let repository: GhRepository =
            response
                .json()
                .await
                .map_err(|e| GitHubError::DecodeError {
                    url: url.clone(),
                    source: e,
                })?;

        debug!(
            url = %url,
            elapsed_seconds,
            message = "Repository fetched from upstream"
        );

        Ok(RepositoryLookup {
            repository,
            exchange: ApiExchange {
                method,
                url,
                request_headers,
                elapsed_seconds,
                status: status_line,
                response_headers,
            },
        })
    }
}

fn headers_to_map(headers: &header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                v.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}

fn format_status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[async_trait(?Send)]
impl ApiService for GithubApiService {
    async fn repositories_get(&self, owner: &str, name: &str) -> Result<RepositoryLookup> {
        Ok(self.repository_lookup(owner, name).await?)
    }
}
