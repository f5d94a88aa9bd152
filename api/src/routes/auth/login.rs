//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};

use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Authenticates an existing user and returns a fresh bearer token.
///
/// An unknown username and a wrong password produce the same 401 body,
/// `{"error": "Invalid credentials"}`, with no username enumeration.
pub async fn login<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
