//! Profile view: a user's header, follow toggle and their posts.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use gag_core::view::ProfileState;
use gag_shared::ApiResponse;
use gag_shared::dto::{MountProfileRequest, ProfileViewResponse, VoteRequest, VoteResponse};

use super::{mounted, unmount_view};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const KIND: &str = "profile";

#[derive(Serialize)]
pub struct FollowResponse {
    pub following: bool,
}

/// POST /api/views/profile
pub async fn mount(
    state: web::Data<AppState>,
    body: web::Json<MountProfileRequest>,
) -> AppResult<HttpResponse> {
    let username = body.into_inner().username;
    let profile = ProfileState::load(state.repo.as_ref(), &username, state.lookup_policy).await?;
    if profile.fallback() {
        tracing::debug!(requested = %username, "Unknown user, showing first user");
    }

    let (view_id, view) = state.profiles.insert(profile).await;
    let snapshot = ProfileViewResponse::new(view_id, &*view.lock().await);
    Ok(HttpResponse::Created().json(ApiResponse::ok(snapshot)))
}

/// GET /api/views/profile/{view}
pub async fn snapshot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.profiles, KIND, view_id).await?;
    let snapshot = ProfileViewResponse::new(view_id, &*view.lock().await);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(snapshot)))
}

/// POST /api/views/profile/{view}/follow
pub async fn toggle_follow(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = mounted(&state.profiles, KIND, path.into_inner()).await?;
    let following = view.lock().await.toggle_follow();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(FollowResponse { following })))
}

/// POST /api/views/profile/{view}/posts/{post}/vote
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<VoteRequest>,
) -> AppResult<HttpResponse> {
    let (view_id, post_id) = path.into_inner();
    let view = mounted(&state.profiles, KIND, view_id).await?;

    let outcome = view
        .lock()
        .await
        .vote(&post_id, body.direction)
        .ok_or_else(|| AppError::NotFound(format!("post {post_id} is not on this profile")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(VoteResponse::new(post_id, outcome))))
}

/// DELETE /api/views/profile/{view}
pub async fn unmount(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    unmount_view(&state.profiles, KIND, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
