//! Media attached to posts and the single-file upload slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Largest accepted image or GIF.
pub const MAX_IMAGE_BYTES: u64 = 5 * MIB;
/// Largest accepted video.
pub const MAX_VIDEO_BYTES: u64 = 10 * MIB;

const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/mpeg",
    "video/quicktime",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Gif,
    Video,
}

impl MediaKind {
    /// Classify a MIME type. Anything that is neither a video nor a GIF is
    /// treated as a still image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video/") {
            MediaKind::Video
        } else if content_type == "image/gif" {
            MediaKind::Gif
        } else {
            MediaKind::Image
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            MediaKind::Video => MAX_VIDEO_BYTES,
            MediaKind::Image | MediaKind::Gif => MAX_IMAGE_BYTES,
        }
    }
}

/// Handle to a file chosen for upload. Only metadata is kept; the bytes never
/// leave the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("File type not supported. Please upload images, GIFs, or videos.")]
    UnsupportedType(String),

    #[error("File too large. Maximum size is {}MB", .max_bytes / MIB)]
    TooLarge { size: u64, max_bytes: u64 },
}

impl MediaFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_content_type(&self.content_type)
    }

    /// Check the content type against the allow-list and the size against
    /// the per-kind limit.
    pub fn validate(&self) -> Result<MediaKind, MediaError> {
        if !ALLOWED_CONTENT_TYPES.contains(&self.content_type.as_str()) {
            return Err(MediaError::UnsupportedType(self.content_type.clone()));
        }

        let kind = self.kind();
        let max_bytes = kind.max_bytes();
        if self.size > max_bytes {
            return Err(MediaError::TooLarge {
                size: self.size,
                max_bytes,
            });
        }

        Ok(kind)
    }
}
