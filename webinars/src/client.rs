use tokio_util::sync::CancellationToken;

use crate::config::ZoomConfig;
use crate::error::Result;
use crate::rest::ZoomHttpClient;
use crate::types::*;

/// Main Zoom client.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct Zoom {
    /// HTTP client.
    pub http_client: ZoomHttpClient,
}

impl Zoom {
    pub fn new(config: ZoomConfig) -> Result<Self> {
        Ok(Self {
            http_client: ZoomHttpClient::from_config(&config)?,
        })
    }

    // --- Webinars ---

    /// List one page of the webinars hosted by `user_id` (`"me"` for the
    /// token's owner).
    pub async fn get_all_webinars(
        &self,
        user_id: &str,
        page: PaginationRequest,
        cancel: &CancellationToken,
    ) -> Result<Page<Webinar>> {
        self.http_client
            .get_all_webinars(user_id, page, cancel)
            .await
    }

    /// Create a single webinar at a fixed time.
    pub async fn create_scheduled_webinar(
        &self,
        user_id: &str,
        req: &ScheduledWebinarRequest,
        cancel: &CancellationToken,
    ) -> Result<Webinar> {
        self.http_client
            .create_scheduled_webinar(user_id, req, cancel)
            .await
    }

    /// Create a recurring series, with fixed-time occurrences when
    /// `req.start_time` is set.
    pub async fn create_recurring_webinar(
        &self,
        user_id: &str,
        req: &RecurringWebinarRequest,
        cancel: &CancellationToken,
    ) -> Result<RecurringWebinar> {
        self.http_client
            .create_recurring_webinar(user_id, req, cancel)
            .await
    }

    /// Get a webinar by its numeric `id` (not the `uuid`).
    pub async fn get_webinar(&self, webinar_id: i64, cancel: &CancellationToken) -> Result<Webinar> {
        self.http_client.get_webinar(webinar_id, cancel).await
    }

    /// Delete a webinar, by numeric `id`, or a single occurrence of a series.
    pub async fn delete_webinar(
        &self,
        webinar_id: i64,
        occurrence_id: Option<&str>,
        send_notification: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.http_client
            .delete_webinar(webinar_id, occurrence_id, send_notification, cancel)
            .await
    }
}
