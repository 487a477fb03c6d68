//! Data Transfer Objects - request/response types for the API.

mod content;
mod requests;
mod views;

pub use content::{
    CategoryResponse, CommentResponse, InterestResponse, PostResponse, RelatedPostResponse,
    ReplyResponse, UserResponse, VoteResponse,
};
pub use requests::{
    CommentRequest, DragRequest, FileRequest, MountFeedRequest, MountPostRequest,
    MountProfileRequest, ResolveRouteQuery, ScrollRequest, UploadFieldsRequest, VoteRequest,
};
pub use views::{
    FeedActionResponse, FeedViewResponse, FileResponse, LoadStatus, PostViewResponse,
    ProfileViewResponse, RouteResponse, UploadViewResponse,
};
