//! Mock datasets
//!
//! Fixed literal data for each dashboard page. Every call returns a fresh
//! copy; nothing here is persisted or shared between pages.

use super::types::*;

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Summer Product Launch".into(),
            status: CampaignStatus::Active,
            platforms: vec![Platform::Instagram, Platform::Linkedin, Platform::Facebook],
            start_date: "2024-01-15".into(),
            end_date: "2024-02-15".into(),
            budget: 2500.0,
            spent: 1850.0,
            reach: 45_000,
            engagement: 3_200,
            conversions: 89,
            posts: 24,
        },
        Campaign {
            id: 2,
            name: "Brand Awareness Q1".into(),
            status: CampaignStatus::Scheduled,
            platforms: vec![Platform::Instagram, Platform::Tiktok, Platform::Threads],
            start_date: "2024-02-01".into(),
            end_date: "2024-03-31".into(),
            budget: 3000.0,
            spent: 0.0,
            reach: 0,
            engagement: 0,
            conversions: 0,
            posts: 18,
        },
        Campaign {
            id: 3,
            name: "Product Demo Series".into(),
            status: CampaignStatus::Paused,
            platforms: vec![Platform::Linkedin, Platform::Youtube],
            start_date: "2024-01-10".into(),
            end_date: "2024-01-25".into(),
            budget: 1500.0,
            spent: 890.0,
            reach: 12_000,
            engagement: 850,
            conversions: 23,
            posts: 8,
        },
        Campaign {
            id: 4,
            name: "Holiday Promotions".into(),
            status: CampaignStatus::Completed,
            platforms: vec![Platform::Instagram, Platform::Facebook, Platform::Pinterest],
            start_date: "2023-12-01".into(),
            end_date: "2023-12-31".into(),
            budget: 5000.0,
            spent: 4850.0,
            reach: 125_000,
            engagement: 8_900,
            conversions: 234,
            posts: 45,
        },
    ]
}

pub fn content_items() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: 1,
            title: "Product Launch Announcement".into(),
            kind: ContentKind::Image,
            platforms: vec![Platform::Instagram, Platform::Facebook, Platform::Twitter],
            status: ContentStatus::Scheduled,
            scheduled_date: Some("2024-01-20 14:00".into()),
            content: "Exciting news! Our new AI-powered features are launching soon. \
                      Get ready to revolutionize your social media strategy! 🚀 \
                      #ProductLaunch #AI #SocialMedia"
                .into(),
            created_at: "2024-01-15".into(),
            engagement: None,
        },
        ContentItem {
            id: 2,
            title: "Behind the Scenes Video".into(),
            kind: ContentKind::Video,
            platforms: vec![Platform::Tiktok, Platform::Instagram, Platform::Youtube],
            status: ContentStatus::Draft,
            scheduled_date: None,
            content: "Take a peek behind the scenes at our development process. \
                      See how we build features that make your life easier!"
                .into(),
            created_at: "2024-01-14".into(),
            engagement: None,
        },
        ContentItem {
            id: 3,
            title: "Customer Success Story".into(),
            kind: ContentKind::Carousel,
            platforms: vec![Platform::Linkedin, Platform::Instagram],
            status: ContentStatus::Published,
            scheduled_date: None,
            content: "Meet Sarah, who increased her engagement by 300% using Aquareef! \
                      Read her full story and tips."
                .into(),
            created_at: "2024-01-10".into(),
            engagement: Some(Engagement {
                likes: 234,
                comments: 18,
                shares: 45,
                views: 1200,
            }),
        },
        ContentItem {
            id: 4,
            title: "Weekly Tips Thread".into(),
            kind: ContentKind::Text,
            platforms: vec![Platform::Twitter, Platform::Threads],
            status: ContentStatus::Scheduled,
            scheduled_date: Some("2024-01-18 10:00".into()),
            content: "🧵 5 proven strategies to boost your social media engagement:\n\n\
                      1. Post consistently\n\
                      2. Engage with your audience\n\
                      3. Use relevant hashtags\n\
                      4. Share valuable content\n\
                      5. Analyze your performance"
                .into(),
            created_at: "2024-01-16".into(),
            engagement: None,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Engagement,
            title: "High Engagement Alert".into(),
            description: "Your latest Instagram post is performing 300% above average \
                          with 1.2K likes in the first hour!"
                .into(),
            timestamp: "2024-01-20T09:30:00Z".into(),
            read: false,
            platform: Some(Platform::Instagram),
            action_required: false,
            data: Some(NotificationData {
                count: 1200,
                percentage: Some(300),
            }),
        },
        Notification {
            id: 2,
            kind: NotificationKind::Follower,
            title: "New Followers".into(),
            description: "You gained 47 new followers across all platforms today.".into(),
            timestamp: "2024-01-20T08:15:00Z".into(),
            read: false,
            platform: None,
            action_required: false,
            data: Some(NotificationData {
                count: 47,
                percentage: None,
            }),
        },
        Notification {
            id: 3,
            kind: NotificationKind::Alert,
            title: "Scheduled Post Failed".into(),
            description: "Your LinkedIn post scheduled for 2:00 PM failed to publish. \
                          Please check your connection."
                .into(),
            timestamp: "2024-01-20T14:05:00Z".into(),
            read: false,
            platform: Some(Platform::Linkedin),
            action_required: true,
            data: None,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Performance,
            title: "Weekly Performance Summary".into(),
            description: "Your content reached 15.3K people this week, up 23% from last week."
                .into(),
            timestamp: "2024-01-19T18:00:00Z".into(),
            read: true,
            platform: None,
            action_required: false,
            data: Some(NotificationData {
                count: 15_300,
                percentage: Some(23),
            }),
        },
        Notification {
            id: 5,
            kind: NotificationKind::System,
            title: "Account Connected".into(),
            description: "Successfully connected your TikTok account. \
                          You can now schedule posts to TikTok."
                .into(),
            timestamp: "2024-01-19T16:45:00Z".into(),
            read: true,
            platform: Some(Platform::Tiktok),
            action_required: false,
            data: None,
        },
    ]
}

pub fn scheduled_posts() -> Vec<ScheduledPost> {
    vec![
        ScheduledPost {
            id: 1,
            content: "Exciting new product launch coming soon! 🚀".into(),
            platforms: vec![Platform::Instagram, Platform::Twitter, Platform::Linkedin],
            scheduled_time: "2024-01-20T10:00:00Z".into(),
            status: PostStatus::Scheduled,
        },
        ScheduledPost {
            id: 2,
            content: "Behind the scenes of our development process.".into(),
            platforms: vec![Platform::Linkedin, Platform::Twitter],
            scheduled_time: "2024-01-20T14:30:00Z".into(),
            status: PostStatus::Scheduled,
        },
    ]
}

fn metric(label: &str, value: &str, change: f64) -> MetricCard {
    MetricCard {
        label: label.into(),
        value: value.into(),
        change,
        trend: if change < 0.0 { Trend::Down } else { Trend::Up },
    }
}

fn platform_row(platform: Platform, followers: &str, engagement: &str, posts: u32) -> PlatformStats {
    PlatformStats {
        platform,
        followers: followers.into(),
        engagement: engagement.into(),
        posts,
    }
}

pub fn analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        metrics: vec![
            metric("Total Reach", "2.4M", 12.5),
            metric("Engagement Rate", "4.8%", 8.2),
            metric("New Followers", "18.2K", -2.1),
            metric("Posts Published", "156", 15.3),
        ],
        platforms: vec![
            platform_row(Platform::Instagram, "125K", "5.2%", 45),
            platform_row(Platform::Linkedin, "89K", "3.8%", 32),
            platform_row(Platform::Twitter, "67K", "4.1%", 78),
            platform_row(Platform::Facebook, "43K", "2.9%", 28),
        ],
        top_posts: vec![
            TopPost {
                id: 1,
                content: "Our latest product update is here! 🚀 Check out the new features \
                          that will transform your workflow."
                    .into(),
                platform: Platform::Instagram,
                engagement: 1250,
                reach: 15_400,
                date: "2024-01-18".into(),
            },
            TopPost {
                id: 2,
                content: "Behind the scenes: How we built our AI-powered social media \
                          automation platform."
                    .into(),
                platform: Platform::Linkedin,
                engagement: 890,
                reach: 12_300,
                date: "2024-01-17".into(),
            },
            TopPost {
                id: 3,
                content: "Customer success story: @company increased engagement by 300% \
                          using our platform."
                    .into(),
                platform: Platform::Twitter,
                engagement: 675,
                reach: 8_900,
                date: "2024-01-16".into(),
            },
        ],
    }
}
