#![cfg(test)]

use pretty_assertions::assert_eq;
use repo_relay_config::Config;
use repo_relay_ghapi_interface::{
    types::{GhRepository, GhUser},
    ApiExchange, ApiService, MockApiService, RepositoryLookup,
};
use repo_relay_server::server::{run_relay_server, AppContext};
use reqwest::StatusCode;

fn build_context(port: u16, api_service: Box<dyn ApiService>) -> AppContext {
    let mut config = Config::from_env_no_version();
    config.server.workers_count = Some(2);
    config.server.bind_ip = "127.0.0.1".into();
    config.server.bind_port = port;

    AppContext::new_with_adapters(config, api_service)
}

fn spawn_server(port: u16, api_service: Box<dyn ApiService>) {
    tokio::task::spawn_local(async move {
        let context = build_context(port, api_service);
        run_relay_server(context).await
    });
}

#[tokio::test]
#[ignore]
async fn index() {
    const PORT: u16 = 50601;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            let api_service = Box::new(MockApiService::new());
            spawn_server(PORT, api_service);

            let response = reqwest::get(format!("http://127.0.0.1:{PORT}"))
                .await
                .unwrap();
            let body: serde_json::Value = response.json().await.unwrap();

            assert_eq!(
                body,
                serde_json::json!({"message": "Welcome on repo-relay!"})
            );
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn health() {
    const PORT: u16 = 50602;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            let api_service = Box::new(MockApiService::new());
            spawn_server(PORT, api_service);

            let response = reqwest::get(format!("http://127.0.0.1:{PORT}/health"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn repository_lookup() {
    const PORT: u16 = 50603;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            let mut api_service = MockApiService::new();
            api_service
                .expect_repositories_get()
                .withf(|owner, name| owner == "octocat" && name == "Hello-World")
                .returning(|_, _| {
                    Ok(RepositoryLookup {
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
                    })
                });
            spawn_server(PORT, Box::new(api_service));

            let response = reqwest::get(format!(
                "http://127.0.0.1:{PORT}/repos/octocat/Hello-World"
            ))
            .await
            .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body: serde_json::Value = response.json().await.unwrap();
            assert_eq!(
                body,
                serde_json::json!({
                    "id": 1296269,
                    "name": "Hello-World",
                    "owner": {
                        "login": "octocat"
                    }
                })
            );
        })
        .await;
}

#[tokio::test]
#[ignore]
async fn repository_lookup_upstream_error() {
    const PORT: u16 = 50604;

    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async move {
            let mut api_service = MockApiService::new();
            api_service.expect_repositories_get().returning(|_, _| {
                Err(repo_relay_ghapi_interface::ApiError::UpstreamStatus {
                    status_code: 404,
                    status_text: "Not Found".into(),
                })
            });
            spawn_server(PORT, Box::new(api_service));

            let response = reqwest::get(format!("http://127.0.0.1:{PORT}/repos/nouser/norepo"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(response.text().await.unwrap(), "Error response status code");
        })
        .await;
}
