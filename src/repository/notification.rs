//! User notifications

use std::sync::Arc;

use crate::api::{NotificationDto, PageDto};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{Notification, PagedData};
use crate::transport::{ApiRequest, Transport};

use super::support::Endpoint;

pub struct NotificationRepository {
    endpoint: Endpoint,
}

impl NotificationRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("You don't have permission to perform this action")
            .not_found("Notification not found");
        Self {
            endpoint: Endpoint::new(transport, messages, "notification"),
        }
    }

    pub async fn notifications(&self, page: u32, size: u32) -> Result<PagedData<Notification>> {
        self.page("notifications", page, size).await
    }

    pub async fn unread_notifications(&self, page: u32, size: u32) -> Result<PagedData<Notification>> {
        self.page("notifications/unread", page, size).await
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<()> {
        self.endpoint
            .send(ApiRequest::put(format!("notifications/{id}/read")))
            .await
    }

    pub async fn mark_all_as_read(&self) -> Result<()> {
        self.endpoint.send(ApiRequest::put("notifications/read-all")).await
    }

    async fn page(&self, path: &str, page: u32, size: u32) -> Result<PagedData<Notification>> {
        let dto: PageDto<NotificationDto> = self
            .endpoint
            .fetch(ApiRequest::get(path).page(page, size))
            .await?;
        Ok(dto.into_domain(Notification::from))
    }
}
