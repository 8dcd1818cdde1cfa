//! Activity feed entries.

use serde::{Deserialize, Serialize};

use super::{Pagination, Timestamp};

/// One entry of the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Backend identifier.
    pub id: String,
    /// Short headline.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
    /// Backend category, e.g. `document` or `sale`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Whether the user has seen it.
    #[serde(default)]
    pub is_read: bool,
    /// When it was raised.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `GET /notifications?page&limit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPage {
    /// Entries on this page, newest first.
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Position of this page in the feed.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl NotificationPage {
    /// Entries on this page not yet read.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_and_counts_unread() {
        let json = r#"{
            "notifications": [
                {"id":"n1","title":"New customer","message":"Ada signed up","type":"customer","isRead":false},
                {"id":"n2","title":"Upload","message":"Invoice added","isRead":true}
            ],
            "pagination": {"page":1,"limit":10,"total":2,"totalPages":1}
        }"#;
        let page: NotificationPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.unread_count(), 1);
        assert_eq!(page.notifications[0].kind.as_deref(), Some("customer"));
        assert!(!page.pagination.unwrap().has_next());
    }
}
