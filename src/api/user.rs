//! User profile DTOs

use serde::{Deserialize, Serialize};

use super::{optional_timestamp, timestamp_or_epoch};
use crate::models::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i64,
    pub email: String,
    pub username: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<UserProfileDto> for User {
    fn from(dto: UserProfileDto) -> Self {
        User {
            id: dto.id,
            email: dto.email,
            username: dto.username,
            name: dto.name.unwrap_or_default(),
            bio: dto.bio.unwrap_or_default(),
            avatar_url: dto.avatar_url,
            location: dto.location.unwrap_or_default(),
            website: dto.website,
            created_at: timestamp_or_epoch(&dto.created_at),
            updated_at: optional_timestamp(dto.updated_at.as_deref()),
        }
    }
}
