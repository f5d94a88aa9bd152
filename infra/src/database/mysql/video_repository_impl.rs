//! MySQL implementation of the VideoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use pt_core::domain::entities::video::{UploadStatus, Video, VideoWithPacker};
use pt_core::errors::DomainError;
use pt_core::repositories::VideoRepository;

/// MySQL implementation of VideoRepository
pub struct MySqlVideoRepository {
    pool: MySqlPool,
}

impl MySqlVideoRepository {
    /// Create a new MySQL video repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined database row to a VideoWithPacker read model
    fn row_to_video(row: &sqlx::mysql::MySqlRow) -> Result<VideoWithPacker, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("failed to get id: {}", e)))?;
        let packer_id: String = row
            .try_get("packer_id")
            .map_err(|e| DomainError::Database(format!("failed to get packer_id: {}", e)))?;
        let upload_status: String = row.try_get("upload_status").map_err(|e| {
            DomainError::Database(format!("failed to get upload_status: {}", e))
        })?;

        let video = Video {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("invalid video id: {}", e)))?,
            job_id: row
                .try_get("job_id")
                .map_err(|e| DomainError::Database(format!("failed to get job_id: {}", e)))?,
            file_name: row
                .try_get("file_name")
                .map_err(|e| DomainError::Database(format!("failed to get file_name: {}", e)))?,
            drive_file_id: row.try_get("drive_file_id").map_err(|e| {
                DomainError::Database(format!("failed to get drive_file_id: {}", e))
            })?,
            shareable_link: row.try_get("shareable_link").map_err(|e| {
                DomainError::Database(format!("failed to get shareable_link: {}", e))
            })?,
            duration_seconds: row.try_get("duration_seconds").map_err(|e| {
                DomainError::Database(format!("failed to get duration_seconds: {}", e))
            })?,
            file_size_bytes: row.try_get("file_size_bytes").map_err(|e| {
                DomainError::Database(format!("failed to get file_size_bytes: {}", e))
            })?,
            upload_status: UploadStatus::from_str(&upload_status)
                .map_err(|e| DomainError::Database(format!("invalid videos row: {}", e)))?,
            packer_id: Uuid::parse_str(&packer_id)
                .map_err(|e| DomainError::Database(format!("invalid packer id: {}", e)))?,
            recorded_at: row
                .try_get::<DateTime<Utc>, _>("recorded_at")
                .map_err(|e| DomainError::Database(format!("failed to get recorded_at: {}", e)))?,
        };

        let packer_name: String = row
            .try_get("packer_name")
            .map_err(|e| DomainError::Database(format!("failed to get packer_name: {}", e)))?;

        Ok(VideoWithPacker { video, packer_name })
    }
}

#[async_trait]
impl VideoRepository for MySqlVideoRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<VideoWithPacker>, DomainError> {
        let query = r#"
            SELECT v.id, v.job_id, v.file_name, v.drive_file_id, v.shareable_link,
                   v.duration_seconds, v.file_size_bytes, v.upload_status,
                   v.packer_id, v.recorded_at, u.username AS packer_name
            FROM videos v
            INNER JOIN users u ON u.id = v.packer_id
            ORDER BY v.recorded_at DESC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("video query failed: {}", e)))?;

        rows.iter().map(Self::row_to_video).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("video count failed: {}", e)))?;

        Ok(count as u64)
    }

    async fn create(&self, video: Video) -> Result<Video, DomainError> {
        let query = r#"
            INSERT INTO videos (id, job_id, file_name, drive_file_id, shareable_link,
                                duration_seconds, file_size_bytes, upload_status,
                                packer_id, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(video.id.to_string())
            .bind(&video.job_id)
            .bind(&video.file_name)
            .bind(&video.drive_file_id)
            .bind(&video.shareable_link)
            .bind(video.duration_seconds)
            .bind(video.file_size_bytes)
            .bind(video.upload_status.as_str())
            .bind(video.packer_id.to_string())
            .bind(video.recorded_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("failed to insert video: {}", e)))?;

        Ok(video)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VideoWithPacker>, DomainError> {
        let query = r#"
            SELECT v.id, v.job_id, v.file_name, v.drive_file_id, v.shareable_link,
                   v.duration_seconds, v.file_size_bytes, v.upload_status,
                   v.packer_id, v.recorded_at, u.username AS packer_name
            FROM videos v
            INNER JOIN users u ON u.id = v.packer_id
            WHERE v.id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("video query failed: {}", e)))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_video(&row)?)),
            None => Ok(None),
        }
    }
}
