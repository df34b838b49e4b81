//! Notification DTO

use serde::Deserialize;

use super::timestamp_or_epoch;
use crate::models::{Notification, NotificationActor, NotificationType};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i64,
    pub user_id: i64,

    /// LIKE, COMMENT or FOLLOW
    #[serde(rename = "type")]
    pub kind: String,

    pub actor_id: i64,
    pub actor_username: String,

    #[serde(default)]
    pub actor_avatar_url: Option<String>,

    #[serde(default)]
    pub post_id: Option<i64>,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub is_read: bool,

    pub created_at: String,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification {
            id: dto.id,
            kind: NotificationType::parse(&dto.kind),
            actor: NotificationActor {
                id: dto.actor_id,
                username: dto.actor_username,
                avatar_url: dto.actor_avatar_url,
            },
            post_id: dto.post_id,
            message: dto.message,
            is_read: dto.is_read,
            created_at: timestamp_or_epoch(&dto.created_at),
        }
    }
}
