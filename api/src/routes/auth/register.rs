//! Handler for POST /api/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use pt_core::domain::entities::user::UserRole;
use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};

use crate::dto::auth_dto::{AuthResponse, RegisterRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_error};
use crate::routes::AppState;

/// Registers a new user and returns a bearer token plus the public user
/// fields.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "packer1",
///     "password": "pw123456",
///     "role": "packer"
/// }
/// ```
///
/// # Responses
/// - 200: `{token, user: {id, username, role}}`
/// - 400: duplicate username or invalid request data
/// - 500: store or hashing failure (generic body)
pub async fn register<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    let role = request.role.unwrap_or(UserRole::Packer);

    match state
        .auth_service
        .register(&request.username, &request.password, role)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
