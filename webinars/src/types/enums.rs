use serde::{Deserialize, Serialize};

/// Webinar variant, sent as the integer `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WebinarType {
    /// A single webinar with a fixed start time.
    ScheduledFixedTime,
    /// A recurring series whose occurrences have no fixed time.
    RecurringNoFixedTime,
    /// A recurring series with fixed-time occurrences.
    RecurringFixedTime,
}

impl WebinarType {
    pub fn code(self) -> u8 {
        match self {
            WebinarType::ScheduledFixedTime => 5,
            WebinarType::RecurringNoFixedTime => 6,
            WebinarType::RecurringFixedTime => 9,
        }
    }

    /// Tag used when creating a recurring series.
    pub fn for_recurring(has_start_time: bool) -> Self {
        if has_start_time {
            WebinarType::RecurringFixedTime
        } else {
            WebinarType::RecurringNoFixedTime
        }
    }
}

impl From<WebinarType> for u8 {
    fn from(t: WebinarType) -> Self {
        t.code()
    }
}

impl TryFrom<u8> for WebinarType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            5 => Ok(WebinarType::ScheduledFixedTime),
            6 => Ok(WebinarType::RecurringNoFixedTime),
            9 => Ok(WebinarType::RecurringFixedTime),
            other => Err(format!("unknown webinar type {other}")),
        }
    }
}

/// Recurrence kind. Codes this client does not know are kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Other(u8),
}

impl From<RecurrenceType> for u8 {
    fn from(t: RecurrenceType) -> Self {
        match t {
            RecurrenceType::Daily => 1,
            RecurrenceType::Weekly => 2,
            RecurrenceType::Monthly => 3,
            RecurrenceType::Other(code) => code,
        }
    }
}

impl From<u8> for RecurrenceType {
    fn from(code: u8) -> Self {
        match code {
            1 => RecurrenceType::Daily,
            2 => RecurrenceType::Weekly,
            3 => RecurrenceType::Monthly,
            other => RecurrenceType::Other(other),
        }
    }
}

/// Registration approval mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ApprovalType {
    Automatic,
    Manual,
    NoRegistration,
    Other(u8),
}

impl From<ApprovalType> for u8 {
    fn from(t: ApprovalType) -> Self {
        match t {
            ApprovalType::Automatic => 0,
            ApprovalType::Manual => 1,
            ApprovalType::NoRegistration => 2,
            ApprovalType::Other(code) => code,
        }
    }
}

impl From<u8> for ApprovalType {
    fn from(code: u8) -> Self {
        match code {
            0 => ApprovalType::Automatic,
            1 => ApprovalType::Manual,
            2 => ApprovalType::NoRegistration,
            other => ApprovalType::Other(other),
        }
    }
}

/// Audio options. Values such as `thirdParty` land in `Other` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AudioType {
    Both,
    Telephony,
    Voip,
    Other(String),
}

impl From<AudioType> for String {
    fn from(t: AudioType) -> Self {
        match t {
            AudioType::Both => "both".to_string(),
            AudioType::Telephony => "telephony".to_string(),
            AudioType::Voip => "voip".to_string(),
            AudioType::Other(value) => value,
        }
    }
}

impl From<String> for AudioType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "both" => AudioType::Both,
            "telephony" => AudioType::Telephony,
            "voip" => AudioType::Voip,
            _ => AudioType::Other(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webinar_type_codes() {
        assert_eq!(WebinarType::ScheduledFixedTime.code(), 5);
        assert_eq!(WebinarType::RecurringNoFixedTime.code(), 6);
        assert_eq!(WebinarType::RecurringFixedTime.code(), 9);
    }

    #[test]
    fn recurring_tag_depends_on_start_time() {
        assert_eq!(
            WebinarType::for_recurring(true),
            WebinarType::RecurringFixedTime
        );
        assert_eq!(
            WebinarType::for_recurring(false),
            WebinarType::RecurringNoFixedTime
        );
    }

    #[test]
    fn webinar_type_serializes_as_integer() {
        assert_eq!(
            serde_json::to_string(&WebinarType::RecurringFixedTime).unwrap(),
            "9"
        );
        let t: WebinarType = serde_json::from_str("6").unwrap();
        assert_eq!(t, WebinarType::RecurringNoFixedTime);
    }

    #[test]
    fn unknown_codes_are_kept() {
        let approval: ApprovalType = serde_json::from_str("7").unwrap();
        assert_eq!(approval, ApprovalType::Other(7));
        assert_eq!(serde_json::to_string(&approval).unwrap(), "7");

        let recurrence: RecurrenceType = serde_json::from_str("4").unwrap();
        assert_eq!(recurrence, RecurrenceType::Other(4));
        assert_eq!(serde_json::to_string(&recurrence).unwrap(), "4");
    }

    #[test]
    fn unknown_audio_is_kept_verbatim() {
        let audio: AudioType = serde_json::from_str(r#""thirdParty""#).unwrap();
        assert_eq!(audio, AudioType::Other("thirdParty".into()));
        assert_eq!(serde_json::to_string(&audio).unwrap(), r#""thirdParty""#);
        let known: AudioType = serde_json::from_str(r#""voip""#).unwrap();
        assert_eq!(known, AudioType::Voip);
    }

    #[test]
    fn unknown_webinar_type_is_rejected() {
        assert!(serde_json::from_str::<WebinarType>("2").is_err());
    }
}
