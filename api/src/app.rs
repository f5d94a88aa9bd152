//! Application factory
//!
//! Builds the actix-web application from injected dependencies. App-level
//! middleware (request logging, CORS) is layered on in `main`; tests wire
//! the same factory around in-memory repositories.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};

use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};
use pt_core::services::token_service::TokenService;

use crate::dto::ErrorResponse;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{login::login, register::register};
use crate::routes::orders::{create_order, list_orders, update_order_status};
use crate::routes::videos::{get_video, list_videos, upload_video};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
///
/// The token service guards the resource scopes; the auth scope is the
/// only part of the API reachable without a bearer token.
pub fn create_app<U, O, V>(
    app_state: web::Data<AppState<U, O, V>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    App::new()
        .app_data(app_state)
        // Service banner and health check
        .route("/", web::get().to(api_info))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, O, V>))
                        .route("/login", web::post().to(login::<U, O, V>)),
                )
                .service(
                    web::scope("/orders")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::get().to(list_orders::<U, O, V>))
                        .route("", web::post().to(create_order::<U, O, V>))
                        .route("/{id}/status", web::put().to(update_order_status::<U, O, V>)),
                )
                .service(
                    web::scope("/videos")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::get().to(list_videos::<U, O, V>))
                        .route("/upload", web::post().to(upload_video::<U, O, V>))
                        .route("/{id}", web::get().to(get_video::<U, O, V>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Service banner endpoint handler
async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "PackTrack API Server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
