use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{ApprovalType, AudioType};

/// Webinar settings. Only the commonly used subset is typed; everything else
/// the server sends lands in `extra`. Unset fields are left out of request
/// bodies so the server keeps its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebinarSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelists_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_session: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hd_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<ApprovalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioType>,
    /// "local", "cloud" or "none".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_recording: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_hosts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrants_email_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_multiple_devices: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
