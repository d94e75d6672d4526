use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::WebinarType;
use super::recurrence::RecurrenceInfo;
use super::settings::WebinarSettings;

/// A webinar as returned by the listing, get and create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webinar {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<WebinarSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_fields: Vec<TrackingField>,
    /// Fields this client does not model, kept so re-serializing is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A recurring webinar series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringWebinar {
    #[serde(flatten)]
    pub webinar: Webinar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<WebinarOccurrence>,
}

/// One occurrence of a recurring series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebinarOccurrence {
    pub occurrence_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A tracking field attached to a webinar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingField {
    pub field: String,
    #[serde(default)]
    pub value: String,
}
