//! Video entity recording the metadata of a packing-station recording.
//!
//! The media itself lives in an external drive-style service; this system
//! only tracks the upload log (file id, link, duration, size).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Upload state of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Completed => "completed",
            UploadStatus::Failed => "failed",
        }
    }
}

impl FromStr for UploadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploading" => Ok(UploadStatus::Uploading),
            "completed" => Ok(UploadStatus::Completed),
            "failed" => Ok(UploadStatus::Failed),
            other => Err(format!("unknown upload status: {}", other)),
        }
    }
}

/// Packing-video metadata record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for the video record
    pub id: Uuid,

    /// Warehouse job the recording belongs to
    pub job_id: String,

    /// Original file name of the recording
    pub file_name: String,

    /// Identifier assigned by the external storage service
    pub drive_file_id: Option<String>,

    /// Shareable link into the external storage service
    pub shareable_link: Option<String>,

    /// Recording length in seconds
    pub duration_seconds: i32,

    /// Recording size in bytes
    pub file_size_bytes: i64,

    /// Upload state
    pub upload_status: UploadStatus,

    /// User who recorded the packing session
    pub packer_id: Uuid,

    /// Timestamp when the recording was made
    pub recorded_at: DateTime<Utc>,
}

impl Video {
    /// Creates a new video record marked as uploaded
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_id: String,
        file_name: String,
        drive_file_id: Option<String>,
        shareable_link: Option<String>,
        duration_seconds: i32,
        file_size_bytes: i64,
        packer_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            file_name,
            drive_file_id,
            shareable_link,
            duration_seconds,
            file_size_bytes,
            upload_status: UploadStatus::Completed,
            packer_id,
            recorded_at: Utc::now(),
        }
    }
}

/// Video joined with the recording packer's username, the shape the
/// listing endpoints return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoWithPacker {
    #[serde(flatten)]
    pub video: Video,
    pub packer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_video_marked_completed() {
        let packer = Uuid::new_v4();
        let video = Video::new(
            "JOB001".to_string(),
            "job-001-video.webm".to_string(),
            Some("drive-id-1".to_string()),
            Some("https://drive.example.com/drive-id-1".to_string()),
            120,
            5_242_880,
            packer,
        );

        assert_eq!(video.upload_status, UploadStatus::Completed);
        assert_eq!(video.packer_id, packer);
        assert_eq!(video.duration_seconds, 120);
    }

    #[test]
    fn test_upload_status_round_trip() {
        for status in [
            UploadStatus::Uploading,
            UploadStatus::Completed,
            UploadStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<UploadStatus>().unwrap(), status);
        }
        assert!("done".parse::<UploadStatus>().is_err());
    }

    #[test]
    fn test_video_with_packer_flattens() {
        let video = Video::new(
            "JOB002".to_string(),
            "job-002-video.webm".to_string(),
            None,
            None,
            95,
            4_194_304,
            Uuid::new_v4(),
        );
        let listed = VideoWithPacker {
            video,
            packer_name: "packer2".to_string(),
        };

        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json["packer_name"], "packer2");
        assert_eq!(json["job_id"], "JOB002");
    }
}
