use reqwest::Method;

use crate::{
    api::{decode, ensure_success, ApiClient},
    error::Error,
    model::notification::{AddNotificationCommand, NotificationDto, SentNotificationDto},
};

impl ApiClient {
    /// Retrieves one page of notifications already delivered to the user.
    pub async fn fetch_sent_notifications(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SentNotificationDto>, Error> {
        let mut url = self.endpoint(&["api", "users", user_id, "notifications", "sent"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        let response = self.request(self.authorized(Method::GET, url)).await?;
        let response = ensure_success(response, "Failed to fetch notifications").await?;

        decode(response).await
    }

    /// Retrieves every notification rule of the user.
    pub async fn get_user_notifications(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationDto>, Error> {
        let url = self.endpoint(&["api", "users", user_id, "notifications"])?;

        let response = self.request(self.authorized(Method::GET, url)).await?;
        let response = ensure_success(response, "Failed to fetch notifications").await?;

        decode(response).await
    }

    /// Creates a notification rule. The response body is not needed since callers
    /// refetch the full list afterwards.
    pub async fn add_notification(
        &self,
        user_id: &str,
        command: &AddNotificationCommand,
    ) -> Result<(), Error> {
        let url = self.endpoint(&["api", "users", user_id, "notifications"])?;

        let response = self
            .request(self.authorized(Method::POST, url).json(command))
            .await?;
        ensure_success(response, "Failed to add notification").await?;

        Ok(())
    }

    pub async fn enable_notification(&self, user_id: &str, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["api", "users", user_id, "notifications", id, "enable"])?;

        let response = self.request(self.authorized(Method::POST, url)).await?;
        ensure_success(response, "Failed to enable notification").await?;

        Ok(())
    }

    pub async fn disable_notification(&self, user_id: &str, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["api", "users", user_id, "notifications", id, "disable"])?;

        let response = self.request(self.authorized(Method::POST, url)).await?;
        ensure_success(response, "Failed to disable notification").await?;

        Ok(())
    }

    pub async fn delete_notification(&self, user_id: &str, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["api", "users", user_id, "notifications", id])?;

        let response = self.request(self.authorized(Method::DELETE, url)).await?;
        ensure_success(response, "Failed to delete notification").await?;

        Ok(())
    }
}
