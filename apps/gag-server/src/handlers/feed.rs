//! Feed view: mount, paging, infinite scroll and card votes.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use gag_core::domain::Post;
use gag_core::view::{FeedState, LoadMore, LoadTicket};
use gag_infra::ViewHandle;
use gag_shared::ApiResponse;
use gag_shared::dto::{
    FeedActionResponse, FeedViewResponse, LoadStatus, MountFeedRequest, ScrollRequest,
    VoteRequest, VoteResponse,
};

use super::{mounted, unmount_view};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const KIND: &str = "feed";

/// POST /api/views/feed
pub async fn mount(
    state: web::Data<AppState>,
    body: web::Json<MountFeedRequest>,
) -> AppResult<HttpResponse> {
    let section = body.into_inner().section;
    let posts = state.repo.list_posts().await?;

    let (feed, ticket) = FeedState::mount(section);
    let (view_id, view) = state.feeds.insert(feed).await;
    let snapshot = FeedViewResponse::new(view_id, &*view.lock().await);

    view.after(state.latency.feed_initial, "feed.initial", move |feed| {
        feed.complete_initial(ticket, posts);
    });

    tracing::info!(view_id = %view_id, section = %section, "Feed mounted");
    Ok(HttpResponse::Created().json(ApiResponse::ok(snapshot)))
}

/// GET /api/views/feed/{view}
pub async fn snapshot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.feeds, KIND, view_id).await?;
    let snapshot = FeedViewResponse::new(view_id, &*view.lock().await);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(snapshot)))
}

/// POST /api/views/feed/{view}/load-more
pub async fn load_more(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.feeds, KIND, view_id).await?;
    let fixtures = state.repo.list_posts().await?;

    let mut feed = view.lock().await;
    let load = feed.request_more();
    let response = FeedActionResponse {
        status: load.into(),
        view: FeedViewResponse::new(view_id, &feed),
    };
    drop(feed);

    if let LoadMore::Started(ticket) = load {
        schedule_page(&state, &view, ticket, fixtures);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// POST /api/views/feed/{view}/scroll
pub async fn scroll(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ScrollRequest>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.feeds, KIND, view_id).await?;
    let fixtures = state.repo.list_posts().await?;

    let mut feed = view.lock().await;
    let load = feed.on_scroll(body.into_inner().into());
    let response = FeedActionResponse {
        status: load.map_or(LoadStatus::NotAtBottom, LoadStatus::from),
        view: FeedViewResponse::new(view_id, &feed),
    };
    drop(feed);

    if let Some(LoadMore::Started(ticket)) = load {
        schedule_page(&state, &view, ticket, fixtures);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

fn schedule_page(
    state: &AppState,
    view: &ViewHandle<FeedState>,
    ticket: LoadTicket,
    fixtures: Vec<Post>,
) {
    view.after(state.latency.feed_more, "feed.more", move |feed| {
        feed.complete_more(ticket, &fixtures, Utc::now(), &mut rand::thread_rng());
    });
}

/// POST /api/views/feed/{view}/posts/{post}/vote
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<VoteRequest>,
) -> AppResult<HttpResponse> {
    let (view_id, post_id) = path.into_inner();
    let view = mounted(&state.feeds, KIND, view_id).await?;

    let outcome = view
        .lock()
        .await
        .vote(&post_id, body.direction)
        .ok_or_else(|| AppError::NotFound(format!("post {post_id} is not in this feed")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(VoteResponse::new(post_id, outcome))))
}

/// DELETE /api/views/feed/{view}
pub async fn unmount(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    unmount_view(&state.feeds, KIND, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use actix_web::test;
    use serde_json::{Value, json};

    use crate::handlers::test_app::{config, init_app, settle};

    fn mount_request(section: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/views/feed")
            .set_json(json!({ "section": section }))
    }

    fn ids(view: &Value) -> HashSet<String> {
        view["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_mount_then_initial_page() {
        let app = init_app!(config());

        let body: Value = test::call_and_read_body_json(&app, mount_request("fresh").to_request()).await;
        assert_eq!(body["data"]["loading"], true);
        assert_eq!(body["data"]["title"], "Fresh");
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();

        settle().await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/views/feed/{view_id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["loading"], false);
        assert_eq!(body["data"]["posts"].as_array().map(Vec::len), Some(5));
    }

    #[actix_web::test]
    async fn test_load_more_until_exhausted() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("hot").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();
        settle().await;

        for expected in [10, 15, 20, 25] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/views/feed/{view_id}/load-more"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["data"]["status"], "started");
            settle().await;

            let req = test::TestRequest::get()
                .uri(&format!("/api/views/feed/{view_id}"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ids(&body["data"]).len(), expected);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/feed/{view_id}/load-more"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "exhausted");
        assert_eq!(body["data"]["view"]["hasMore"], false);
    }

    #[actix_web::test]
    async fn test_scroll_reports_position() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("hot").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();
        settle().await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/feed/{view_id}/scroll"))
            .set_json(json!({ "viewportHeight": 800.0, "scrollTop": 0.0, "documentHeight": 3000.0 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "not_at_bottom");

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/feed/{view_id}/scroll"))
            .set_json(json!({ "viewportHeight": 800.0, "scrollTop": 2200.0, "documentHeight": 3000.0 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "started");
    }

    #[actix_web::test]
    async fn test_vote_toggles_on_card() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("hot").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();
        settle().await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/views/feed/{view_id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let base = body["data"]["posts"][0]["baseScore"].as_i64().unwrap();

        let vote = |direction: &str| {
            test::TestRequest::post()
                .uri(&format!("/api/views/feed/{view_id}/posts/1/vote"))
                .set_json(json!({ "direction": direction }))
                .to_request()
        };

        let body: Value = test::call_and_read_body_json(&app, vote("up")).await;
        assert_eq!(body["data"]["score"], base + 1);
        let body: Value = test::call_and_read_body_json(&app, vote("down")).await;
        assert_eq!(body["data"]["score"], base - 1);
        let body: Value = test::call_and_read_body_json(&app, vote("down")).await;
        assert_eq!(body["data"]["score"], base);
        assert_eq!(body["data"]["userVote"], "none");
    }

    #[actix_web::test]
    async fn test_unmounted_feed_is_gone() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("hot").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/views/feed/{view_id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/api/views/feed/{view_id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn test_scroll_body_uses_camel_case_fields() {
        let app = init_app!(config());
        let body: Value = test::call_and_read_body_json(&app, mount_request("hot").to_request()).await;
        let view_id = body["data"]["viewId"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/views/feed/{view_id}/scroll"))
            .set_json(json!({ "viewport_height": 800.0, "scroll_top": 2200.0, "document_height": 3000.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn test_malformed_view_id_is_bad_request() {
        let app = init_app!(config());
        let req = test::TestRequest::get()
            .uri("/api/views/feed/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "about:blank");
    }
}
