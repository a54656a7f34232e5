//! Repository lookup handlers.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use repo_relay_ghapi_interface::{types::GhRepository, RepositoryLookup};
use serde::Serialize;
use tracing::error;

use crate::{server::AppContext, Result, ServerError};

/// Diagnostic record of one full upstream exchange.
#[derive(Debug, Serialize)]
struct ExchangeRecord<'a> {
    method: &'a str,
    url: &'a str,
    request_headers: &'a HashMap<String, String>,
    elapsed_seconds: f64,
    status: &'a str,
    response_headers: &'a HashMap<String, String>,
    repository: &'a GhRepository,
}

impl<'a> From<&'a RepositoryLookup> for ExchangeRecord<'a> {
    fn from(lookup: &'a RepositoryLookup) -> Self {
        Self {
            method: &lookup.exchange.method,
            url: &lookup.exchange.url,
            request_headers: &lookup.exchange.request_headers,
            elapsed_seconds: lookup.exchange.elapsed_seconds,
            status: &lookup.exchange.status,
            response_headers: &lookup.exchange.response_headers,
            repository: &lookup.repository,
        }
    }
}

// One pretty-printed JSON block per exchange on stdout. A failure here must
// not mask an otherwise-successful lookup.
fn log_exchange(lookup: &RepositoryLookup) {
    let record = ExchangeRecord::from(lookup);
    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Could not encode exchange record"),
    }
}

#[tracing::instrument(skip_all)]
pub(crate) async fn repositories_get(
    ctx: web::Data<AppContext>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (owner, name) = path.into_inner();

    let lookup = match ctx.api_service.repositories_get(&owner, &name).await {
        Ok(lookup) => lookup,
        Err(e) => {
            error!(
                owner = %owner,
                name = %name,
                error = %e,
                message = "Repository lookup failed"
            );
            return Err(e.into());
        }
    };

    log_exchange(&lookup);

    // Body is fully buffered before any status or header is flushed, so an
    // encode failure still produces a clean error response.
    let body = serde_json::to_string(&lookup.repository).map_err(|e| {
        error!(owner = %owner, name = %name, error = %e, message = "Could not encode response body");
        ServerError::ResponseEncode { source: e }
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test,
        web::{Bytes, Data},
    };
    use pretty_assertions::assert_eq;
    use repo_relay_config::Config;
    use repo_relay_ghapi_interface::{
        types::{GhRepository, GhUser},
        ApiError, ApiExchange, MockApiService, RepositoryLookup,
    };

    use crate::server::{build_actix_app, AppContext};

    fn sample_lookup() -> RepositoryLookup {
        RepositoryLookup {
            repository: GhRepository {
                id: 1296269,
                name: "Hello-World".into(),
                owner: GhUser {
                    login: "octocat".into(),
                },
            },
            exchange: ApiExchange {
                method: "GET".into(),
                url: "https://api.github.com/repos/octocat/Hello-World".into(),
                status: "200 OK".into(),
                ..Default::default()
            },
        }
    }

    async fn run_request(api_service: MockApiService, uri: &str) -> (StatusCode, Bytes) {
        let context = Data::new(AppContext::new_with_adapters(
            Config::from_env_no_version(),
            Box::new(api_service),
        ));
        let app = test::init_service(build_actix_app(context)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, body)
    }

    #[actix_rt::test]
    async fn test_repositories_get() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .withf(|owner, name| owner == "octocat" && name == "Hello-World")
            .return_once(|_, _| Ok(sample_lookup()));

        let (status, body) = run_request(api_service, "/repos/octocat/Hello-World").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
            serde_json::json!({
                "id": 1296269,
                "name": "Hello-World",
                "owner": {
                    "login": "octocat"
                }
            })
        );
    }

    #[actix_rt::test]
    async fn test_repositories_get_upstream_status_passthrough() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .withf(|owner, name| owner == "nouser" && name == "norepo")
            .return_once(|_, _| {
                Err(ApiError::UpstreamStatus {
                    status_code: 404,
                    status_text: "Not Found".into(),
                })
            });

        let (status, body) = run_request(api_service, "/repos/nouser/norepo").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.to_vec(), b"Error response status code");
    }

    #[actix_rt::test]
    async fn test_repositories_get_transport_error() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .return_once(|_, _| {
                Err(ApiError::Transport {
                    url: "https://api.github.com/repos/octocat/Hello-World".into(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    )
                    .into(),
                })
            });

        let (status, body) = run_request(api_service, "/repos/octocat/Hello-World").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.to_vec(), b"Error sending request");
    }

    #[actix_rt::test]
    async fn test_repositories_get_decode_error() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .return_once(|_, _| {
                Err(ApiError::ResponseDecode {
                    url: "https://api.github.com/repos/octocat/Hello-World".into(),
                    source: "expected value at line 1 column 1".into(),
                })
            });

        let (status, body) = run_request(api_service, "/repos/octocat/Hello-World").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.to_vec(), b"Error decoding response body");
    }

    #[actix_rt::test]
    async fn test_repositories_get_request_creation_error() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .return_once(|_, _| {
                Err(ApiError::RequestCreation {
                    url: "https://api.github.com/repos/octocat/Hello-World".into(),
                    source: "builder error".into(),
                })
            });

        let (status, body) = run_request(api_service, "/repos/octocat/Hello-World").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.to_vec(), b"Error creating request");
    }

    #[actix_rt::test]
    async fn test_repositories_get_path_segments_passed_through() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_repositories_get()
            .once()
            .withf(|owner, name| owner == "Some-Owner" && name == "some.repo")
            .return_once(|_, _| Ok(sample_lookup()));

        let (status, _) = run_request(api_service, "/repos/Some-Owner/some.repo").await;

        assert_eq!(status, StatusCode::OK);
    }
}
