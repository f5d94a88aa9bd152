//! Video repository trait for the upload log.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::video::{Video, VideoWithPacker};
use crate::errors::DomainError;

/// Repository trait for Video metadata persistence
///
/// Read operations return the video joined with the recording packer's
/// username; listings are newest-recorded first.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// List videos with their packer usernames
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<VideoWithPacker>, DomainError>;

    /// Count all videos
    async fn count(&self) -> Result<u64, DomainError>;

    /// Persist a new video metadata record
    async fn create(&self, video: Video) -> Result<Video, DomainError>;

    /// Find a video by id, joined with its packer username
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VideoWithPacker>, DomainError>;
}

/// In-memory implementation of VideoRepository for testing
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock video repository backed by a HashMap
    ///
    /// The username join is simulated from a packer table registered with
    /// [`MockVideoRepository::insert_packer`].
    #[derive(Default)]
    pub struct MockVideoRepository {
        videos: Arc<RwLock<HashMap<Uuid, Video>>>,
        packers: Arc<RwLock<HashMap<Uuid, String>>>,
    }

    impl MockVideoRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a packer id -> username mapping for the simulated join
        pub async fn insert_packer(&self, id: Uuid, username: impl Into<String>) {
            self.packers.write().await.insert(id, username.into());
        }

        async fn with_packer(&self, video: Video) -> VideoWithPacker {
            let packers = self.packers.read().await;
            let packer_name = packers
                .get(&video.packer_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            VideoWithPacker { video, packer_name }
        }
    }

    #[async_trait]
    impl VideoRepository for MockVideoRepository {
        async fn list(
            &self,
            limit: i64,
            offset: i64,
        ) -> Result<Vec<VideoWithPacker>, DomainError> {
            let mut videos: Vec<Video> = self.videos.read().await.values().cloned().collect();
            videos.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

            let mut result = Vec::new();
            for video in videos
                .into_iter()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
            {
                result.push(self.with_packer(video).await);
            }
            Ok(result)
        }

        async fn count(&self) -> Result<u64, DomainError> {
            Ok(self.videos.read().await.len() as u64)
        }

        async fn create(&self, video: Video) -> Result<Video, DomainError> {
            let mut videos = self.videos.write().await;
            videos.insert(video.id, video.clone());
            Ok(video)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<VideoWithPacker>, DomainError> {
            let video = self.videos.read().await.get(&id).cloned();
            match video {
                Some(video) => Ok(Some(self.with_packer(video).await)),
                None => Ok(None),
            }
        }
    }
}
