//! JWT authentication middleware protecting the resource endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the injected token service, and injects the resulting identity
//! into the request context. Rejections carry exactly two external
//! messages: "No token provided" when the header is missing or malformed,
//! and "Invalid token" for every verification failure, so a caller cannot
//! tell an expired token from a forged one.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use pt_core::domain::entities::token::Claims;
use pt_core::domain::entities::user::UserRole;
use pt_core::services::token_service::TokenService;

use crate::dto::ErrorResponse;

/// Authenticated identity injected into requests behind the gate
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the token claims
    pub user_id: Uuid,
    /// Login name of the acting user
    pub username: String,
    /// Role carried in the claims; available to handlers but not enforced
    /// by the gate itself
    pub role: UserRole,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, uuid::Error> {
        Ok(Self {
            user_id: claims.user_id()?,
            username: claims.username.clone(),
            role: claims.role,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the middleware around an injected token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Ok(unauthorized(req, "No token provided")),
            };

            let context = match token_service
                .verify(&token)
                .ok()
                .and_then(|claims| AuthContext::from_claims(&claims).ok())
            {
                Some(context) => context,
                None => return Ok(unauthorized(req, "Invalid token")),
            };

            req.extensions_mut().insert(context);

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Builds the short-circuit 401 response; the wrapped handler never runs
fn unauthorized<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(message))
        .map_into_right_body();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response)
}

/// Extractor for the authenticated identity set by [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| actix_web::error::ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
