//! Snapshots of mounted views.

use serde::Serialize;
use uuid::Uuid;

use gag_core::domain::{MediaFile, MediaKind};
use gag_core::route::{Layout, Route, Section};
use gag_core::view::{FeedState, LoadMore, Notice, PostDetailState, ProfileState, UploadForm};

use super::{CommentResponse, PostResponse, RelatedPostResponse, UserResponse};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedViewResponse {
    pub view_id: Uuid,
    pub section: Section,
    pub title: String,
    pub description: String,
    pub posts: Vec<PostResponse>,
    pub loading: bool,
    pub has_more: bool,
}

impl FeedViewResponse {
    pub fn new(view_id: Uuid, feed: &FeedState) -> Self {
        let section = feed.section();
        Self {
            view_id,
            section,
            title: section.title().to_string(),
            description: section.description(),
            posts: feed.cards().iter().map(PostResponse::from).collect(),
            loading: feed.is_loading(),
            has_more: feed.has_more(),
        }
    }
}

/// What became of a load-more or scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Started,
    AlreadyLoading,
    Exhausted,
    NotAtBottom,
}

impl From<LoadMore> for LoadStatus {
    fn from(load: LoadMore) -> Self {
        match load {
            LoadMore::Started(_) => LoadStatus::Started,
            LoadMore::AlreadyLoading => LoadStatus::AlreadyLoading,
            LoadMore::Exhausted => LoadStatus::Exhausted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedActionResponse {
    pub status: LoadStatus,
    pub view: FeedViewResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostViewResponse {
    pub view_id: Uuid,
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub comment_count: usize,
    pub related: Vec<RelatedPostResponse>,
    /// The requested post did not exist and the first post is shown.
    pub fallback: bool,
}

impl PostViewResponse {
    pub fn new(view_id: Uuid, detail: &PostDetailState) -> Self {
        Self {
            view_id,
            post: PostResponse::from(detail.card()),
            comments: detail.comments().iter().map(CommentResponse::from).collect(),
            comment_count: detail.comment_count(),
            related: detail.related().iter().map(RelatedPostResponse::from).collect(),
            fallback: detail.fallback(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewResponse {
    pub view_id: Uuid,
    pub user: UserResponse,
    pub posts: Vec<PostResponse>,
    pub following: bool,
    /// The requested user did not exist and the first user is shown.
    pub fallback: bool,
}

impl ProfileViewResponse {
    pub fn new(view_id: Uuid, profile: &ProfileState) -> Self {
        Self {
            view_id,
            user: UserResponse::from(profile.user()),
            posts: profile.cards().iter().map(PostResponse::from).collect(),
            following: profile.is_following(),
            fallback: profile.fallback(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    /// Size in megabytes with one decimal, e.g. `1.4 MB`.
    pub size_label: String,
    pub media_type: MediaKind,
}

impl From<&MediaFile> for FileResponse {
    fn from(file: &MediaFile) -> Self {
        Self {
            name: file.name.clone(),
            content_type: file.content_type.clone(),
            size: file.size,
            size_label: format!("{:.1} MB", file.size as f64 / 1024.0 / 1024.0),
            media_type: file.kind(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadViewResponse {
    pub view_id: Uuid,
    pub title: String,
    pub tags: String,
    pub tag_list: Vec<String>,
    pub category: Option<String>,
    pub file: Option<FileResponse>,
    pub drag_active: bool,
    pub uploading: bool,
    pub can_submit: bool,
    pub notice: Option<Notice>,
}

impl UploadViewResponse {
    pub fn new(view_id: Uuid, form: &UploadForm) -> Self {
        Self {
            view_id,
            title: form.title().to_string(),
            tags: form.tags().to_string(),
            tag_list: form.tag_list(),
            category: form.category().map(String::from),
            file: form.file().map(FileResponse::from),
            drag_active: form.is_drag_active(),
            uploading: form.is_uploading(),
            can_submit: form.can_submit(),
            notice: form.notice().cloned(),
        }
    }
}

/// A resolved client route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub path: String,
    pub layout: Layout,
    #[serde(flatten)]
    pub route: Route,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            path: route.path(),
            layout: route.layout(),
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use gag_core::domain::VoteDirection;
    use gag_core::view::FeedState;

    use super::*;

    #[test]
    fn test_route_response_shape() {
        let route = Route::resolve("/u/catLover99").unwrap();
        let json = serde_json::to_value(RouteResponse::from(route)).unwrap();
        assert_eq!(json["page"], "profile");
        assert_eq!(json["username"], "catLover99");
        assert_eq!(json["layout"], "main");
        assert_eq!(json["path"], "/u/catLover99");
    }

    #[test]
    fn test_route_fields_are_camel_case() {
        let route = Route::resolve("/gag/4").unwrap();
        let json = serde_json::to_value(RouteResponse::from(route)).unwrap();
        assert_eq!(json["page"], "post_detail");
        assert_eq!(json["postId"], "4");
        assert!(json.get("post_id").is_none());
    }

    #[test]
    fn test_feed_snapshot_while_loading() {
        let (feed, _) = FeedState::mount(Section::Trending);
        let json = serde_json::to_value(FeedViewResponse::new(Uuid::nil(), &feed)).unwrap();
        assert_eq!(json["section"], "trending");
        assert_eq!(json["description"], "Recently popular content");
        assert_eq!(json["loading"], true);
        assert_eq!(json["hasMore"], true);
        assert_eq!(json["posts"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_vote_serializes_lowercase() {
        let outcome = gag_core::domain::apply_vote(
            999,
            gag_core::domain::VoteState::None,
            VoteDirection::Up,
        );
        let json = serde_json::to_value(crate::dto::VoteResponse::new("1", outcome)).unwrap();
        assert_eq!(json["userVote"], "up");
        assert_eq!(json["scoreLabel"], "1.0K");
    }
}
