//! Post detail view: vote and comment on a single post.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use gag_core::view::PostDetailState;
use gag_shared::ApiResponse;
use gag_shared::dto::{CommentRequest, MountPostRequest, PostViewResponse, VoteRequest, VoteResponse};

use super::{mounted, unmount_view};
use crate::middleware::error::AppResult;
use crate::state::AppState;

const KIND: &str = "post";

/// POST /api/views/post
pub async fn mount(
    state: web::Data<AppState>,
    body: web::Json<MountPostRequest>,
) -> AppResult<HttpResponse> {
    let post_id = body.into_inner().post_id;
    let detail = PostDetailState::load(state.repo.as_ref(), &post_id, state.lookup_policy).await?;
    if detail.fallback() {
        tracing::debug!(requested = %post_id, "Unknown post, showing first post");
    }

    let (view_id, view) = state.posts.insert(detail).await;
    let snapshot = PostViewResponse::new(view_id, &*view.lock().await);
    Ok(HttpResponse::Created().json(ApiResponse::ok(snapshot)))
}

/// GET /api/views/post/{view}
pub async fn snapshot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.posts, KIND, view_id).await?;
    let snapshot = PostViewResponse::new(view_id, &*view.lock().await);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(snapshot)))
}

/// POST /api/views/post/{view}/vote
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<VoteRequest>,
) -> AppResult<HttpResponse> {
    let view = mounted(&state.posts, KIND, path.into_inner()).await?;
    let mut detail = view.lock().await;
    let outcome = detail.vote(body.direction);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(VoteResponse::new(
        detail.card().post.id.clone(),
        outcome,
    ))))
}

/// POST /api/views/post/{view}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.posts, KIND, view_id).await?;
    let mut detail = view.lock().await;
    detail.add_comment(&body.text, Utc::now())?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostViewResponse::new(view_id, &detail))))
}

/// DELETE /api/views/post/{view}
pub async fn unmount(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    unmount_view(&state.posts, KIND, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use gag_core::view::LookupPolicy;
    use serde_json::{Value, json};

    use crate::handlers::test_app::{config, init_app};

    fn mount_request(post_id: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/views/post")
            .set_json(json!({ "postId": post_id }))
    }

    #[actix_web::test]
    async fn test_mount_shows_comments_and_related() {
        let app = init_app!(config());

        let body: Value = test::call_and_read_body_json(&app, mount_request("1").to_request()).await;
        let data = &body["data"];
        assert_eq!(data["post"]["id"], "1");
        assert_eq!(data["fallback"], false);
        assert_eq!(data["comments"].as_array().map(Vec::len), Some(2));
        assert_eq!(data["related"].as_array().map(Vec::len), Some(3));
        assert!(data["related"].as_array().unwrap().iter().all(|p| p["id"] != "1"));
    }

    #[actix_web::test]
    async fn test_unknown_post_falls_back_or_fails_strictly() {
        let app = init_app!(config());
        let body: Value =
            test::call_and_read_body_json(&app, mount_request("999").to_request()).await;
        assert_eq!(body["data"]["post"]["id"], "1");
        assert_eq!(body["data"]["fallback"], true);

        let mut strict = config();
        strict.lookup_policy = LookupPolicy::Strict;
        let app = init_app!(strict);
        let resp = test::call_service(&app, mount_request("999").to_request()).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_comment_is_prepended_and_blank_refused() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("1").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/post/{view_id}/comments"))
            .set_json(json!({ "text": "   " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 422);

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/post/{view_id}/comments"))
            .set_json(json!({ "text": "first!" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["commentCount"], 3);
        assert_eq!(body["data"]["comments"][0]["text"], "first!");
    }

    #[actix_web::test]
    async fn test_vote_reports_post_id() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("2").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();
        let base = body["data"]["post"]["baseScore"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/post/{view_id}/vote"))
            .set_json(json!({ "direction": "down" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["postId"], "2");
        assert_eq!(body["data"]["score"], base - 1);
        assert_eq!(body["data"]["userVote"], "down");
    }

    #[actix_web::test]
    async fn test_mount_body_uses_post_id_field() {
        let app = init_app!(config());

        let req = test::TestRequest::post()
            .uri("/api/views/post")
            .set_json(json!({ "postId": "2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["post"]["id"], "2");

        let req = test::TestRequest::post()
            .uri("/api/views/post")
            .set_json(json!({ "post_id": "2" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
