pub mod order;
pub mod token;
pub mod user;
pub mod video;

pub use order::{Order, OrderPriority, OrderStatus};
pub use token::Claims;
pub use user::{User, UserRole};
pub use video::{UploadStatus, Video, VideoWithPacker};
