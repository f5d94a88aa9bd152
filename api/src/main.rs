use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use log::info;

use pt_api::app::create_app;
use pt_api::middleware::cors::create_cors;
use pt_api::routes::AppState;
use pt_core::services::auth_service::AuthService;
use pt_core::services::token_service::{TokenConfig, TokenService};
use pt_infra::database::connection::DatabasePool;
use pt_infra::database::mysql::{
    MySqlOrderRepository, MySqlUserRepository, MySqlVideoRepository,
};
use pt_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger; tracing events from the core and infra layers
    // arrive here as `log` records via the tracing log bridge
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting PackTrack API Server");

    // A missing JWT secret is fatal: the server must not come up issuing
    // tokens nothing can verify.
    let config = AppConfig::from_env().map_err(|e| {
        log::error!("configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let order_repository = Arc::new(MySqlOrderRepository::new(pool.get_pool().clone()));
    let video_repository = Arc::new(MySqlVideoRepository::new(pool.get_pool().clone()));

    // Services, with the signing secret injected exactly once
    let token_service = Arc::new(TokenService::new(TokenConfig::new(
        config.jwt.secret.clone(),
        config.jwt.token_ttl_seconds,
    )));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        order_repository,
        video_repository,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        create_app(app_state.clone(), Arc::clone(&token_service))
            .wrap(Logger::default())
            .wrap(create_cors())
    })
    .bind(&bind_address)?
    .run()
    .await
}
