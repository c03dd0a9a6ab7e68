use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content-origin kind of a subscription. Closed set; match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Video,
    Microblog,
    Forum,
    Blog,
}

pub const ALL_PLATFORMS: [Platform; 4] = [
    Platform::Video,
    Platform::Microblog,
    Platform::Forum,
    Platform::Blog,
];

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Video => "Video",
            Platform::Microblog => "Microblog",
            Platform::Forum => "Forum",
            Platform::Blog => "Blog",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Platform::Video => "🎬",
            Platform::Microblog => "🐦",
            Platform::Forum => "💬",
            Platform::Blog => "📰",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A subscription the user follows. `id` is unique within the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FeedSource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub platform: Platform,
}

/// One synthesized feed item, attributed to a source via `source_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub source_id: String,
    pub platform: Platform,
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub thumbnail: Option<String>,
    pub is_read: bool,
    pub summary: Option<String>,
    pub is_summarizing: bool,
    pub tags: Vec<String>,
}

/// Subscriptions seeded on first launch, one per platform.
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource {
            id: "1".into(),
            name: "Tech Reviews".into(),
            url: "https://youtube.com/mkbhd".into(),
            platform: Platform::Video,
        },
        FeedSource {
            id: "2".into(),
            name: "Dev Microblog".into(),
            url: "https://x.com/reactjs".into(),
            platform: Platform::Microblog,
        },
        FeedSource {
            id: "3".into(),
            name: "Hacker News".into(),
            url: "https://news.ycombinator.com".into(),
            platform: Platform::Blog,
        },
        FeedSource {
            id: "4".into(),
            name: "r/programming".into(),
            url: "https://reddit.com/r/programming".into(),
            platform: Platform::Forum,
        },
    ]
}
