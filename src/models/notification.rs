//! Notification models

use chrono::NaiveDateTime;
use serde::Serialize;

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
    /// A type this client does not know about yet
    Unknown,
}

impl NotificationType {
    /// Parse the backend's type name, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "LIKE" => NotificationType::Like,
            "COMMENT" => NotificationType::Comment,
            "FOLLOW" => NotificationType::Follow,
            _ => NotificationType::Unknown,
        }
    }
}

/// The user whose action produced the notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationActor {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationType,
    pub actor: NotificationActor,
    /// Related post, if any (absent for follows)
    pub post_id: Option<i64>,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}
