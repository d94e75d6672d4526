use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::Result;
use crate::payload;
use crate::rest::ZoomHttpClient;
use crate::types::*;
use crate::utils::{require_id, validate_password};

impl ZoomHttpClient {
    // --- Webinars ---

    /// GET /users/{user_id}/webinars - One page of a user's webinars.
    pub async fn get_all_webinars(
        &self,
        user_id: &str,
        page: PaginationRequest,
        cancel: &CancellationToken,
    ) -> Result<Page<Webinar>> {
        require_id("user id", user_id)?;
        self.get_page(&["users", user_id, "webinars"], "webinars", page, cancel)
            .await
    }

    /// POST /users/{user_id}/webinars - Create a single scheduled webinar.
    pub async fn create_scheduled_webinar(
        &self,
        user_id: &str,
        req: &ScheduledWebinarRequest,
        cancel: &CancellationToken,
    ) -> Result<Webinar> {
        require_id("user id", user_id)?;
        if let Some(password) = &req.password {
            validate_password(password)?;
        }
        let body = payload::scheduled_webinar(req)?;
        let webinar: Webinar = self
            .post_json(&["users", user_id, "webinars"], &body, cancel)
            .await?;
        info!(webinar_id = webinar.id, user_id, "scheduled webinar created");
        Ok(webinar)
    }

    /// POST /users/{user_id}/webinars - Create a recurring webinar series.
    pub async fn create_recurring_webinar(
        &self,
        user_id: &str,
        req: &RecurringWebinarRequest,
        cancel: &CancellationToken,
    ) -> Result<RecurringWebinar> {
        require_id("user id", user_id)?;
        if let Some(password) = &req.password {
            validate_password(password)?;
        }
        let body = payload::recurring_webinar(req)?;
        let webinar: RecurringWebinar = self
            .post_json(&["users", user_id, "webinars"], &body, cancel)
            .await?;
        info!(
            webinar_id = webinar.webinar.id,
            user_id,
            occurrences = webinar.occurrences.len(),
            "recurring webinar created"
        );
        Ok(webinar)
    }

    /// GET /webinars/{webinar_id} - Webinar details.
    ///
    /// `webinar_id` is the numeric `id` from listings, not the `uuid`.
    pub async fn get_webinar(&self, webinar_id: i64, cancel: &CancellationToken) -> Result<Webinar> {
        let id = webinar_id.to_string();
        self.get(&["webinars", id.as_str()], &[], cancel).await
    }

    /// DELETE /webinars/{webinar_id} - Delete a webinar, or one occurrence of
    /// a series when `occurrence_id` is given.
    ///
    /// `webinar_id` is the numeric `id`; occurrence ids come from
    /// [`RecurringWebinar::occurrences`].
    pub async fn delete_webinar(
        &self,
        webinar_id: i64,
        occurrence_id: Option<&str>,
        send_notification: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut query = Vec::new();
        if let Some(occurrence) = occurrence_id {
            query.push(("occurrence_id", occurrence));
        }
        if send_notification {
            query.push(("cancel_webinar_reminder", "true"));
        }
        let id = webinar_id.to_string();
        self.delete(&["webinars", id.as_str()], &query, cancel)
            .await?;
        info!(
            webinar_id,
            occurrence = occurrence_id.unwrap_or("all"),
            "webinar deleted"
        );
        Ok(())
    }
}
