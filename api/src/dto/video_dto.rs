//! Video request and response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pt_core::domain::entities::video::VideoWithPacker;

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListVideosQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Upload of recording metadata; the media itself already lives in the
/// external storage service by the time this arrives.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UploadVideoRequest {
    #[validate(length(min = 1, max = 64))]
    pub job_id: String,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    pub drive_file_id: Option<String>,
    pub shareable_link: Option<String>,
    #[validate(range(min = 0))]
    pub duration_seconds: i32,
    #[validate(range(min = 0))]
    pub file_size_bytes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoWithPacker>,
    pub total: u64,
}
