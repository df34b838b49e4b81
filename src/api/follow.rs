//! Follow status and stats DTOs

use serde::Deserialize;

use crate::models::FollowStats;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatusDto {
    pub is_following: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatsDto {
    #[serde(default)]
    pub followers_count: u32,

    #[serde(default)]
    pub following_count: u32,
}

impl From<FollowStatsDto> for FollowStats {
    fn from(dto: FollowStatsDto) -> Self {
        FollowStats {
            followers_count: dto.followers_count,
            following_count: dto.following_count,
        }
    }
}
