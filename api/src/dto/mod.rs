//! Request and response types for the HTTP surface

pub mod auth_dto;
pub mod error_dto;
pub mod order_dto;
pub mod video_dto;

pub use auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use error_dto::ErrorResponse;
pub use order_dto::{CreateOrderRequest, ListOrdersQuery, OrderListResponse, UpdateOrderStatusRequest};
pub use video_dto::{ListVideosQuery, UploadVideoRequest, VideoListResponse};
