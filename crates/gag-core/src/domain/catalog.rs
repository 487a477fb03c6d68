use serde::{Deserialize, Serialize};

/// Sidebar navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Name of the icon the client should draw next to the entry.
    pub icon: String,
}

/// Topic a post can be filed under from the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    pub name: String,
    /// Colour token for the client's badge.
    pub color: String,
}
