//! Route table: maps client paths to page compositions.
//!
//! Resolution is a static lookup against the path; nothing here reads data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic feeds reachable directly from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedCategory {
    Funny,
    Gaming,
    Animals,
    Awesome,
    Food,
    Wtf,
}

impl FeedCategory {
    pub const ALL: [FeedCategory; 6] = [
        FeedCategory::Funny,
        FeedCategory::Gaming,
        FeedCategory::Animals,
        FeedCategory::Awesome,
        FeedCategory::Food,
        FeedCategory::Wtf,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            FeedCategory::Funny => "funny",
            FeedCategory::Gaming => "gaming",
            FeedCategory::Animals => "animals",
            FeedCategory::Awesome => "awesome",
            FeedCategory::Food => "food",
            FeedCategory::Wtf => "wtf",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeedCategory::Funny => "Funny",
            FeedCategory::Gaming => "Gaming",
            FeedCategory::Animals => "Animals",
            FeedCategory::Awesome => "Awesome",
            FeedCategory::Food => "Food",
            FeedCategory::Wtf => "WTF",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Feed section label. Drives the header only; every section lists the same
/// posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Section {
    #[default]
    Hot,
    Top,
    Trending,
    Fresh,
    Category(FeedCategory),
}

impl Section {
    pub fn slug(self) -> &'static str {
        match self {
            Section::Hot => "hot",
            Section::Top => "top",
            Section::Trending => "trending",
            Section::Fresh => "fresh",
            Section::Category(c) => c.slug(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hot => "Hot",
            Section::Top => "Top",
            Section::Trending => "Trending",
            Section::Fresh => "Fresh",
            Section::Category(c) => c.name(),
        }
    }

    pub fn description(self) -> String {
        match self {
            Section::Hot => "Most upvoted posts".to_string(),
            Section::Top => "Top posts of all time".to_string(),
            Section::Trending => "Recently popular content".to_string(),
            Section::Fresh => "Newest uploads".to_string(),
            Section::Category(c) => format!("Posts in {}", c.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feed section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        match slug.as_str() {
            "hot" => Ok(Section::Hot),
            "top" => Ok(Section::Top),
            "trending" => Ok(Section::Trending),
            "fresh" => Ok(Section::Fresh),
            other => FeedCategory::from_slug(other)
                .map(Section::Category)
                .ok_or_else(|| UnknownSection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Section {
    type Error = UnknownSection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.slug().to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Page chrome a route is rendered inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Header plus sidebar navigation.
    Main,
    /// Bare centred card, used by the auth pages.
    Focused,
}

/// A resolved client route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Route {
    Feed { section: Section },
    PostDetail { post_id: String },
    Profile { username: String },
    Upload,
    Login,
    Signup,
}

impl Route {
    /// Resolve a path such as `/gag/42` or `/u/memeLord42`.
    ///
    /// Query strings and fragments are ignored, as is a trailing slash.
    /// Returns `None` for paths outside the table.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Feed { section: Section::Hot }),
            ["top"] => Some(Route::Feed { section: Section::Top }),
            ["trending"] => Some(Route::Feed { section: Section::Trending }),
            ["fresh"] => Some(Route::Feed { section: Section::Fresh }),
            ["gag", post_id] => Some(Route::PostDetail {
                post_id: (*post_id).to_string(),
            }),
            ["u", username] => Some(Route::Profile {
                username: (*username).to_string(),
            }),
            ["upload"] => Some(Route::Upload),
            ["login"] => Some(Route::Login),
            ["signup"] => Some(Route::Signup),
            [slug] => FeedCategory::from_slug(slug).map(|c| Route::Feed {
                section: Section::Category(c),
            }),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Feed { section: Section::Hot } => "/".to_string(),
            Route::Feed { section } => format!("/{}", section.slug()),
            Route::PostDetail { post_id } => format!("/gag/{post_id}"),
            Route::Profile { username } => format!("/u/{username}"),
            Route::Upload => "/upload".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Route::Login | Route::Signup => Layout::Focused,
            _ => Layout::Main,
        }
    }
}
