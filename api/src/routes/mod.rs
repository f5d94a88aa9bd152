//! Route handlers for the PackTrack API

pub mod auth;
pub mod orders;
pub mod videos;

use std::sync::Arc;

use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};
use pt_core::services::auth_service::AuthService;

/// Shared application state injected into every handler
pub struct AppState<U, O, V>
where
    U: UserRepository,
    O: OrderRepository,
    V: VideoRepository,
{
    /// Authentication flows (register / login)
    pub auth_service: Arc<AuthService<U>>,
    /// Order queue persistence
    pub order_repository: Arc<O>,
    /// Video upload-log persistence
    pub video_repository: Arc<V>,
}
