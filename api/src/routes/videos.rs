//! Video upload-log endpoints.
//!
//! The media file itself is uploaded to an external drive-style service by
//! the client; these endpoints track the resulting metadata. All of them
//! sit behind the JWT gate, and the upload endpoint attributes the record
//! to the authenticated packer.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pt_core::domain::entities::video::Video;
use pt_core::errors::DomainError;
use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};

use crate::dto::video_dto::{ListVideosQuery, UploadVideoRequest, VideoListResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// GET /api/videos: list recordings, newest first, with the packer's
/// username joined in
pub async fn list_videos<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    query: web::Query<ListVideosQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    let videos = match state
        .video_repository
        .list(query.limit, query.offset)
        .await
    {
        Ok(videos) => videos,
        Err(error) => return handle_domain_error(error),
    };

    let total = match state.video_repository.count().await {
        Ok(total) => total,
        Err(error) => return handle_domain_error(error),
    };

    HttpResponse::Ok().json(VideoListResponse { videos, total })
}

/// POST /api/videos/upload: record the metadata of a finished upload,
/// attributed to the acting user
pub async fn upload_video<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    auth: AuthContext,
    request: web::Json<UploadVideoRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    let video = Video::new(
        request.job_id.clone(),
        request.file_name.clone(),
        request.drive_file_id.clone(),
        request.shareable_link.clone(),
        request.duration_seconds,
        request.file_size_bytes,
        auth.user_id,
    );

    match state.video_repository.create(video).await {
        Ok(video) => HttpResponse::Created().json(video),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/videos/{id}: fetch one recording with its packer username
pub async fn get_video<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    match state.video_repository.find_by_id(path.into_inner()).await {
        Ok(Some(video)) => HttpResponse::Ok().json(video),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: "Video".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
