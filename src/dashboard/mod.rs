//! Dashboard
//!
//! Mock data and page-local view-state for the product dashboard.
//!
//! ## Components
//!
//! - **types**: Record shapes (campaigns, content, notifications, schedule, analytics)
//! - **mock**: Fixed datasets, one per page
//! - **views**: Search/filter state and the in-memory notification inbox
//! - **carousel**: Slide navigation with a timer-driven auto-advance

pub mod carousel;
pub mod mock;
pub mod types;
pub mod views;

pub use carousel::{spawn_auto_advance, AutoAdvance, Carousel};
pub use types::{
    AnalyticsSnapshot, Campaign, CampaignStatus, ContentItem, ContentKind, ContentStatus,
    Engagement, MetricCard, Notification, NotificationData, NotificationKind, Platform,
    PlatformStats, PostStatus, ScheduledPost, TopPost, Trend,
};
pub use views::{CampaignBoard, ContentLibrary, NotificationCenter, NotificationFilter};
