//! Dashboard record types
//!
//! Shapes of the mock records rendered by the dashboard:
//! - `Campaign`: a marketing effort across platforms
//! - `ContentItem`: a post in the content studio
//! - `Notification`: an inbox entry with read/unread state
//! - `ScheduledPost`, `MetricCard`, `PlatformStats`, `TopPost`: schedule and analytics data

use serde::{Deserialize, Serialize};

/// Social network a record targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
    Threads,
    Pinterest,
}

impl Platform {
    /// Get all platforms for iteration
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Instagram,
            Platform::Facebook,
            Platform::Twitter,
            Platform::Linkedin,
            Platform::Tiktok,
            Platform::Youtube,
            Platform::Threads,
            Platform::Pinterest,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Threads => "threads",
            Platform::Pinterest => "pinterest",
        }
    }

    /// Brand spelling for display
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Threads => "Threads",
            Platform::Pinterest => "Pinterest",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| {
                format!(
                    "Invalid platform: {}. Use instagram, facebook, twitter, linkedin, tiktok, youtube, threads, or pinterest",
                    s
                )
            })
    }
}

/// Lifecycle state of a campaign
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Scheduled,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CampaignStatus::Active),
            "scheduled" => Ok(CampaignStatus::Scheduled),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            _ => Err(format!(
                "Invalid status: {}. Use active, scheduled, paused, or completed",
                s
            )),
        }
    }
}

/// A marketing campaign
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub status: CampaignStatus,
    pub platforms: Vec<Platform>,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub spent: f64,
    pub reach: u64,
    /// Total interactions
    pub engagement: u64,
    pub conversions: u32,
    pub posts: u32,
}

/// Format of a content item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Video,
    Carousel,
    Text,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Carousel => "carousel",
            ContentKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(ContentKind::Image),
            "video" => Ok(ContentKind::Video),
            "carousel" => Ok(ContentKind::Carousel),
            "text" => Ok(ContentKind::Text),
            _ => Err(format!(
                "Invalid content type: {}. Use image, video, carousel, or text",
                s
            )),
        }
    }
}

/// Publication state of a content item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Scheduled,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Scheduled => "scheduled",
            ContentStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ContentStatus::Draft),
            "scheduled" => Ok(ContentStatus::Scheduled),
            "published" => Ok(ContentStatus::Published),
            _ => Err(format!(
                "Invalid content status: {}. Use draft, scheduled, or published",
                s
            )),
        }
    }
}

/// Interaction counts on a published item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub views: u32,
}

/// A post in the content studio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub platforms: Vec<Platform>,
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    pub content: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
}

/// Category of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Engagement,
    Follower,
    Performance,
    Alert,
    System,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationKind::Engagement => "engagement",
            NotificationKind::Follower => "follower",
            NotificationKind::Performance => "performance",
            NotificationKind::Alert => "alert",
            NotificationKind::System => "system",
        };
        f.pad(s)
    }
}

/// Figures attached to a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationData {
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

/// An inbox entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub action_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
}

/// Publishing state of a scheduled post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A post waiting in the publishing calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledPost {
    pub id: u32,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub scheduled_time: String,
    pub status: PostStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure on the analytics page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    pub label: String,
    /// Pre-formatted display value, e.g. "2.4M"
    pub value: String,
    /// Percent change over the previous period
    pub change: f64,
    pub trend: Trend,
}

/// Per-platform row on the analytics page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub platform: Platform,
    pub followers: String,
    pub engagement: String,
    pub posts: u32,
}

/// Best performing post of the period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopPost {
    pub id: u32,
    pub content: String,
    pub platform: Platform,
    pub engagement: u64,
    pub reach: u64,
    pub date: String,
}

/// Everything the analytics page renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSnapshot {
    pub metrics: Vec<MetricCard>,
    pub platforms: Vec<PlatformStats>,
    pub top_posts: Vec<TopPost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("LinkedIn".parse::<Platform>(), Ok(Platform::Linkedin));
        assert_eq!("threads".parse::<Platform>(), Ok(Platform::Threads));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display_uses_brand_spelling() {
        assert_eq!(Platform::Tiktok.to_string(), "TikTok");
        assert_eq!(format!("{:<10}|", Platform::Youtube), "YouTube   |");
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&CampaignStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        assert_eq!("Paused".parse::<CampaignStatus>(), Ok(CampaignStatus::Paused));
    }

    #[test]
    fn test_post_status_display_matches_serde() {
        for status in [PostStatus::Scheduled, PostStatus::Published, PostStatus::Failed] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
        assert_eq!(format!("{:<10}|", PostStatus::Failed), "failed    |");
    }

    #[test]
    fn test_content_kind_serializes_as_type() {
        let item = ContentItem {
            id: 9,
            title: "t".into(),
            kind: ContentKind::Text,
            platforms: vec![Platform::Twitter],
            status: ContentStatus::Draft,
            scheduled_date: None,
            content: "c".into(),
            created_at: "2024-01-01".into(),
            engagement: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "text");
        assert!(value.get("scheduled_date").is_none());
        assert!(value.get("engagement").is_none());
    }
}
