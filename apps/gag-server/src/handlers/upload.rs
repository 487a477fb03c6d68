//! Upload view: form fields, the file slot and a simulated submit.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use gag_core::view::UploadForm;
use gag_shared::ApiResponse;
use gag_shared::dto::{DragRequest, FileRequest, UploadFieldsRequest, UploadViewResponse};

use super::{mounted, unmount_view};
use crate::middleware::error::AppResult;
use crate::state::AppState;

const KIND: &str = "upload";

/// POST /api/views/upload
pub async fn mount(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let (view_id, view) = state.uploads.insert(UploadForm::new()).await;
    let snapshot = UploadViewResponse::new(view_id, &*view.lock().await);

    Ok(HttpResponse::Created().json(ApiResponse::ok(snapshot)))
}

/// GET /api/views/upload/{view}
pub async fn snapshot(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.uploads, KIND, view_id).await?;
    let snapshot = UploadViewResponse::new(view_id, &*view.lock().await);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(snapshot)))
}

/// PATCH /api/views/upload/{view}
pub async fn edit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UploadFieldsRequest>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.uploads, KIND, view_id).await?;
    let fields = body.into_inner();

    let interests = match fields.category {
        Some(_) => state.repo.interests().await?,
        None => Vec::new(),
    };

    let mut form = view.lock().await;
    if let Some(title) = fields.title {
        form.set_title(title);
    }
    if let Some(tags) = fields.tags {
        form.set_tags(tags);
    }
    if fields.category.is_some() {
        form.set_category(fields.category, &interests)?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UploadViewResponse::new(view_id, &form))))
}

/// POST /api/views/upload/{view}/file
pub async fn choose_file(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<FileRequest>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.uploads, KIND, view_id).await?;
    let (file, source) = body.into_inner().into_parts();

    let mut form = view.lock().await;
    let kind = form.choose_file(file, source)?;
    tracing::debug!(view_id = %view_id, media_type = ?kind, via = ?source, "File chosen");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UploadViewResponse::new(view_id, &form))))
}

/// POST /api/views/upload/{view}/drag
pub async fn drag(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DragRequest>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.uploads, KIND, view_id).await?;

    let mut form = view.lock().await;
    form.drag(body.event);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UploadViewResponse::new(view_id, &form))))
}

/// POST /api/views/upload/{view}/submit
///
/// Answers 202 while the upload is in flight; poll the snapshot for the
/// success notice.
pub async fn submit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    let view = mounted(&state.uploads, KIND, view_id).await?;

    let mut form = view.lock().await;
    let ticket = form.submit()?;
    let snapshot = UploadViewResponse::new(view_id, &form);
    drop(form);

    view.after(state.latency.upload, "upload.submit", move |form| {
        form.complete(ticket);
    });
    tracing::info!(view_id = %view_id, "Upload submitted");

    Ok(HttpResponse::Accepted().json(ApiResponse::ok(snapshot)))
}

/// DELETE /api/views/upload/{view}
pub async fn unmount(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    unmount_view(&state.uploads, KIND, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
