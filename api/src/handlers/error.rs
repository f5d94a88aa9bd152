//! Mapping of domain errors onto HTTP responses.
//!
//! This is the only place where internal failures turn into external
//! wording. Token failures of every kind collapse to one message, and
//! store or crypto faults surface as a generic 500 with the cause kept in
//! the server log.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use pt_core::errors::{AuthError, DomainError};

use crate::dto::ErrorResponse;

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Auth(AuthError::UsernameTaken) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid token"))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Database(_) | DomainError::Internal(_) => {
            log::error!("internal error: {}", error);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred"))
        }
    }
}

/// Convert request validation failures into a 400 naming the offending
/// fields (and nothing else about them)
pub fn handle_validation_error(errors: ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid request data: {}",
        fields.join(", ")
    )))
}
