//! Upload form with a single file slot and a simulated submit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Notice;
use crate::domain::{Interest, MediaError, MediaFile, MediaKind};

/// Longest accepted title, counted in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Where a file came from. Both fill the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileSource {
    #[default]
    Picker,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

/// Identifies one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("title and file are required")]
    MissingFields,

    #[error("title is longer than {max} characters")]
    TitleTooLong { max: usize },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    InvalidFile(#[from] MediaError),

    #[error("an upload is already in progress")]
    AlreadyUploading,
}

impl UploadError {
    /// The toast shown for this refusal.
    pub fn notice(&self) -> Notice {
        match self {
            UploadError::MissingFields => Notice::error(
                "Missing required fields",
                "Please add a title and select a file to upload.",
            ),
            UploadError::TitleTooLong { max } => Notice::error(
                "Title too long",
                format!("Titles can be at most {max} characters."),
            ),
            UploadError::UnknownCategory(id) => {
                Notice::error("Unknown category", format!("\"{id}\" is not a category."))
            }
            UploadError::InvalidFile(err) => Notice::error("Invalid file", err.to_string()),
            UploadError::AlreadyUploading => {
                Notice::error("Upload in progress", "Please wait for the current upload to finish.")
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    title: String,
    tags: String,
    category: Option<String>,
    file: Option<MediaFile>,
    drag_active: bool,
    pending: Option<UploadTicket>,
    next_ticket: u64,
    notice: Option<Notice>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw tag text as typed.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Comma-separated tags, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn file(&self) -> Option<&MediaFile> {
        self.file.as_ref()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn is_uploading(&self) -> bool {
        self.pending.is_some()
    }

    /// Latest notice for the toast surface.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_uploading() && self.file.is_some() && !self.title.trim().is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Set or clear the category. A set category must name one of `known`.
    pub fn set_category(
        &mut self,
        category: Option<String>,
        known: &[Interest],
    ) -> Result<(), UploadError> {
        match category.filter(|c| !c.is_empty()) {
            None => {
                self.category = None;
                Ok(())
            }
            Some(id) if known.iter().any(|i| i.id == id) => {
                self.category = Some(id);
                Ok(())
            }
            Some(id) => Err(self.refuse(UploadError::UnknownCategory(id))),
        }
    }

    pub fn drag(&mut self, event: DragEvent) {
        self.drag_active = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    /// Put a file in the slot, replacing any previous one. A rejected file
    /// leaves the slot unchanged.
    pub fn choose_file(
        &mut self,
        file: MediaFile,
        source: FileSource,
    ) -> Result<MediaKind, UploadError> {
        if source == FileSource::Drop {
            self.drag_active = false;
        }

        let kind = file.validate().map_err(|e| self.refuse(e.into()))?;
        self.file = Some(file);
        Ok(kind)
    }

    /// Validate and start a submission. Complete the returned ticket with
    /// [`UploadForm::complete`].
    pub fn submit(&mut self) -> Result<UploadTicket, UploadError> {
        if self.is_uploading() {
            return Err(UploadError::AlreadyUploading);
        }
        if self.file.is_none() || self.title.trim().is_empty() {
            return Err(self.refuse(UploadError::MissingFields));
        }
        if self.title.chars().count() > MAX_TITLE_CHARS {
            return Err(self.refuse(UploadError::TitleTooLong {
                max: MAX_TITLE_CHARS,
            }));
        }

        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Finish the pending submission: report success and reset every field.
    ///
    /// Returns `false` and leaves the form untouched for a stale ticket.
    pub fn complete(&mut self, ticket: UploadTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }

        self.pending = None;
        self.title.clear();
        self.tags.clear();
        self.category = None;
        self.file = None;
        self.notice = Some(Notice::info(
            "Post uploaded successfully!",
            "Your post will be reviewed and published soon.",
        ));
        true
    }

    fn refuse(&mut self, err: UploadError) -> UploadError {
        self.notice = Some(err.notice());
        err
    }
}
