use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::RecurrenceType;

/// Recurrence rule of a webinar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceInfo {
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<u32>,
    /// Comma separated days of the week, 1 (Sunday) to 7 (Saturday).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_days: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_day: Option<u32>,
    /// -1 for the last week, otherwise 1 to 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_week_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_times: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
}

impl RecurrenceInfo {
    pub fn daily(repeat_interval: u32, end_times: u32) -> Self {
        Self {
            recurrence_type: RecurrenceType::Daily,
            repeat_interval: Some(repeat_interval),
            weekly_days: None,
            monthly_day: None,
            monthly_week: None,
            monthly_week_day: None,
            end_times: Some(end_times),
            end_date_time: None,
        }
    }

    pub fn weekly(repeat_interval: u32, weekly_days: &str, end_times: u32) -> Self {
        Self {
            recurrence_type: RecurrenceType::Weekly,
            weekly_days: Some(weekly_days.to_string()),
            ..Self::daily(repeat_interval, end_times)
        }
    }
}
