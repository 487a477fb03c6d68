//! Route table and sidebar/catalog lookups.

use actix_web::{HttpResponse, web};

use gag_core::route::Route;
use gag_shared::ApiResponse;
use gag_shared::dto::{CategoryResponse, InterestResponse, ResolveRouteQuery, RouteResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/routes/resolve?path=
pub async fn resolve_route(query: web::Query<ResolveRouteQuery>) -> AppResult<HttpResponse> {
    let path = query.into_inner().path;
    let route = Route::resolve(&path)
        .ok_or_else(|| AppError::NotFound(format!("no page at {path}")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(RouteResponse::from(route))))
}

/// GET /api/categories
pub async fn categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories: Vec<CategoryResponse> = state
        .repo
        .categories()
        .await?
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// GET /api/interests
pub async fn interests(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let interests: Vec<InterestResponse> = state
        .repo
        .interests()
        .await?
        .into_iter()
        .map(InterestResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(interests)))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    use crate::handlers::test_app::{config, init_app};

    #[actix_web::test]
    async fn test_resolve_known_and_unknown_paths() {
        let app = init_app!(config());

        let req = test::TestRequest::get()
            .uri("/api/routes/resolve?path=/gag/3")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["page"], "post_detail");
        assert_eq!(body["data"]["postId"], "3");

        let req = test::TestRequest::get()
            .uri("/api/routes/resolve?path=/nowhere")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_catalog_lists() {
        let app = init_app!(config());

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(5));

        let req = test::TestRequest::get().uri("/api/interests").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(11));
    }

    #[actix_web::test]
    async fn test_resolve_without_path_is_bad_request() {
        let app = init_app!(config());
        let req = test::TestRequest::get().uri("/api/routes/resolve").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
    }
}
