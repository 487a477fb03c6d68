//! View state - one struct per mounted page.
//!
//! Views hold only ephemeral, viewer-local state. Operations that the page
//! would perform after a delay are split in two: a `request`/`submit` step
//! that hands out a ticket, and a `complete` step that applies the result only
//! if the ticket is still the pending one.

mod card;
mod detail;
mod feed;
mod lookup;
mod notice;
mod profile;
mod upload;

pub use card::PostCard;
pub use detail::{CommentError, MAX_COMMENT_CHARS, PostDetailState, RELATED_POSTS};
pub use feed::{FEED_EXHAUSTED_AFTER, FeedState, LoadMore, LoadTicket, ScrollPosition, fabricate_page};
pub use lookup::{Lookup, LookupPolicy};
pub use notice::{Notice, NoticeVariant};
pub use profile::ProfileState;
pub use upload::{DragEvent, FileSource, MAX_TITLE_CHARS, UploadError, UploadForm, UploadTicket};
