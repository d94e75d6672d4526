use chrono::{DateTime, FixedOffset};

use super::recurrence::RecurrenceInfo;
use super::settings::WebinarSettings;

/// Input for creating a single scheduled webinar.
#[derive(Debug, Clone)]
pub struct ScheduledWebinarRequest {
    pub topic: Option<String>,
    pub agenda: Option<String>,
    pub start_time: DateTime<FixedOffset>,
    /// Duration in minutes.
    pub duration: Option<u32>,
    pub password: Option<String>,
    pub settings: Option<WebinarSettings>,
    /// Tracking field name/value pairs, sent in this order.
    pub tracking_fields: Option<Vec<(String, String)>>,
}

impl ScheduledWebinarRequest {
    pub fn new(topic: impl Into<String>, start_time: DateTime<FixedOffset>) -> Self {
        Self {
            topic: Some(topic.into()),
            agenda: None,
            start_time,
            duration: None,
            password: None,
            settings: None,
            tracking_fields: None,
        }
    }
}

/// Input for creating a recurring webinar series. Without a start time the
/// series has no fixed time.
#[derive(Debug, Clone, Default)]
pub struct RecurringWebinarRequest {
    pub topic: Option<String>,
    pub agenda: Option<String>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub duration: Option<u32>,
    pub recurrence: Option<RecurrenceInfo>,
    pub password: Option<String>,
    pub settings: Option<WebinarSettings>,
    pub tracking_fields: Option<Vec<(String, String)>>,
}

impl RecurringWebinarRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Default::default()
        }
    }
}
