use serde::{Deserialize, Serialize};

use gag_core::domain::{MediaFile, VoteDirection};
use gag_core::route::Section;
use gag_core::view::{DragEvent, FileSource, ScrollPosition};

/// Request to mount a feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MountFeedRequest {
    #[serde(default)]
    pub section: Section,
}

/// Request to mount a post page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPostRequest {
    pub post_id: String,
}

/// Request to mount a profile page.
#[derive(Debug, Clone, Deserialize)]
pub struct MountProfileRequest {
    pub username: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// Scroll geometry, sent on every scroll event.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub document_height: f64,
}

impl From<ScrollRequest> for ScrollPosition {
    fn from(req: ScrollRequest) -> Self {
        ScrollPosition {
            viewport_height: req.viewport_height,
            scroll_top: req.scroll_top,
            document_height: req.document_height,
        }
    }
}

/// Partial update of the upload form. Absent fields are left alone; an empty
/// category clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadFieldsRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

/// A file picked or dropped into the upload slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRequest {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    #[serde(default)]
    pub via: FileSource,
}

impl FileRequest {
    pub fn into_parts(self) -> (MediaFile, FileSource) {
        (
            MediaFile::new(self.name, self.content_type, self.size),
            self.via,
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DragRequest {
    pub event: DragEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRouteQuery {
    pub path: String,
}
