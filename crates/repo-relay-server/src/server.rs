//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use repo_relay_config::Config;
use repo_relay_ghapi_interface::ApiService;
use tracing::info;

use crate::{health::health_check_route, repos::repositories_get, Result, ServerError};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(config: Config, api_service: Box<dyn ApiService>) -> Self {
        Self {
            config,
            api_service,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Logger::default())
        .route("/repos/{owner}/{repo}", web::get().to(repositories_get))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on repo-relay!" }))
            }),
        )
}

/// Run relay server.
pub async fn run_relay_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting relay server",
    );

    run_relay_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_relay_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
