//! Dashboard view-state
//!
//! Page-local filter and selection state. Filtering is a single pass over the
//! page's own list; mutations touch only the addressed record.

use serde::{Deserialize, Serialize};

use super::mock;
use super::types::*;

/// Lowercase a search term; only the empty term means "no filter".
/// Whitespace is part of the term.
fn normalize_term(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ============================================
// CAMPAIGNS
// ============================================

/// Campaigns page: search by name, filter by status
#[derive(Debug, Clone)]
pub struct CampaignBoard {
    campaigns: Vec<Campaign>,
    search: String,
    status: Option<CampaignStatus>,
}

impl CampaignBoard {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns,
            search: String::new(),
            status: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn set_status(&mut self, status: Option<CampaignStatus>) {
        self.status = status;
    }

    pub fn all(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Campaigns matching the current search term and status
    pub fn visible(&self) -> Vec<&Campaign> {
        let term = normalize_term(&self.search);
        self.campaigns
            .iter()
            .filter(|c| {
                let term_ok = term.as_deref().map_or(true, |t| contains_ci(&c.name, t));
                let status_ok = self.status.map_or(true, |s| c.status == s);
                term_ok && status_ok
            })
            .collect()
    }

    pub fn total_budget(&self) -> f64 {
        self.visible().iter().map(|c| c.budget).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.visible().iter().map(|c| c.spent).sum()
    }
}

impl Default for CampaignBoard {
    fn default() -> Self {
        Self::new(mock::campaigns())
    }
}

// ============================================
// CONTENT LIBRARY
// ============================================

/// Content studio: search title or body, filter by type and status
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    items: Vec<ContentItem>,
    search: String,
    kind: Option<ContentKind>,
    status: Option<ContentStatus>,
}

impl ContentLibrary {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            search: String::new(),
            kind: None,
            status: None,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn set_kind(&mut self, kind: Option<ContentKind>) {
        self.kind = kind;
    }

    pub fn set_status(&mut self, status: Option<ContentStatus>) {
        self.status = status;
    }

    pub fn all(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn visible(&self) -> Vec<&ContentItem> {
        let term = normalize_term(&self.search);
        self.items
            .iter()
            .filter(|item| {
                let term_ok = term
                    .as_deref()
                    .map_or(true, |t| contains_ci(&item.title, t) || contains_ci(&item.content, t));
                let kind_ok = self.kind.map_or(true, |k| item.kind == k);
                let status_ok = self.status.map_or(true, |s| item.status == s);
                term_ok && kind_ok && status_ok
            })
            .collect()
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::new(mock::content_items())
    }
}

// ============================================
// NOTIFICATIONS
// ============================================

/// Inbox tabs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Engagement,
    /// Entries that need the user to act
    Alerts,
}

impl NotificationFilter {
    fn matches(&self, n: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !n.read,
            NotificationFilter::Engagement => n.kind == NotificationKind::Engagement,
            NotificationFilter::Alerts => n.action_required,
        }
    }
}

impl std::str::FromStr for NotificationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(NotificationFilter::All),
            "unread" => Ok(NotificationFilter::Unread),
            "engagement" => Ok(NotificationFilter::Engagement),
            "alerts" => Ok(NotificationFilter::Alerts),
            _ => Err(format!(
                "Invalid filter: {}. Use all, unread, engagement, or alerts",
                s
            )),
        }
    }
}

/// Notifications page: in-memory inbox with read/unread toggling
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }

    fn set_read(&mut self, id: u32, read: bool) -> bool {
        match self.find_mut(id) {
            Some(n) => {
                n.read = read;
                true
            }
            None => false,
        }
    }

    /// Returns false if no notification has this id
    pub fn mark_read(&mut self, id: u32) -> bool {
        self.set_read(id, true)
    }

    pub fn mark_unread(&mut self, id: u32) -> bool {
        self.set_read(id, false)
    }

    pub fn toggle_read(&mut self, id: u32) -> bool {
        match self.find_mut(id) {
            Some(n) => {
                n.read = !n.read;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.count(NotificationFilter::Unread)
    }

    pub fn alert_count(&self) -> usize {
        self.count(NotificationFilter::Alerts)
    }

    /// Size of a tab, shown next to its label
    pub fn count(&self, filter: NotificationFilter) -> usize {
        self.notifications.iter().filter(|n| filter.matches(n)).count()
    }

    pub fn visible(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| filter.matches(n))
            .collect()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(mock::notifications())
    }
}
