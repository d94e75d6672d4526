//! Request body assembly.
//!
//! A body is described as an ordered list of [`FieldSpec`]s and folded into a
//! JSON object by [`build`]. Fields whose value is `None` are left out of the
//! object entirely; present values go through their encoder.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::types::{RecurringWebinarRequest, ScheduledWebinarRequest, WebinarType};

/// One named, optional field of a request body.
pub struct FieldSpec {
    name: &'static str,
    value: Option<Result<Value>>,
}

impl FieldSpec {
    /// Field encoded with an infallible encoder.
    pub fn new<T>(name: &'static str, value: Option<T>, encode: impl FnOnce(T) -> Value) -> Self {
        Self {
            name,
            value: value.map(|v| Ok(encode(v))),
        }
    }

    /// Field encoded with an encoder that can fail, e.g. nested serialization.
    pub fn try_new<T>(
        name: &'static str,
        value: Option<T>,
        encode: impl FnOnce(T) -> Result<Value>,
    ) -> Self {
        Self {
            name,
            value: value.map(encode),
        }
    }

    /// Field that is always present.
    pub fn always(name: &'static str, value: impl Into<Value>) -> Self {
        Self {
            name,
            value: Some(Ok(value.into())),
        }
    }
}

/// Fold the fields into a JSON object, in order, skipping absent ones.
///
/// # Errors
///
/// Returns the first encoder error encountered.
pub fn build(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Map<String, Value>> {
    fields.into_iter().try_fold(Map::new(), |mut body, field| {
        if let Some(value) = field.value {
            body.insert(field.name.to_string(), value?);
        }
        Ok(body)
    })
}

/// Value encoders used by the webinar bodies.
pub mod encode {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    /// Timezone sent next to every encoded start time.
    pub const UTC: &str = "UTC";

    /// `YYYY-MM-DDTHH:mm:ssZ` in UTC, second precision.
    pub fn utc_timestamp<Tz: TimeZone>(time: DateTime<Tz>) -> Value {
        Value::String(
            time.with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
        )
    }

    /// `[{"field": k, "value": v}, ...]` in the order given.
    pub fn key_values<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> Value {
        Value::Array(
            pairs
                .iter()
                .map(|(k, v)| {
                    let mut entry = Map::new();
                    entry.insert("field".to_string(), Value::from(k.as_ref()));
                    entry.insert("value".to_string(), Value::from(v.as_ref()));
                    Value::Object(entry)
                })
                .collect(),
        )
    }

    /// Embed a nested object as serialized by serde.
    pub fn nested<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
        Ok(serde_json::to_value(value)?)
    }

    pub fn type_tag(tag: WebinarType) -> Value {
        Value::from(tag.code())
    }
}

/// Body of `POST /users/{userId}/webinars` for a single scheduled webinar.
pub fn scheduled_webinar(req: &ScheduledWebinarRequest) -> Result<Map<String, Value>> {
    build([
        FieldSpec::always("type", encode::type_tag(WebinarType::ScheduledFixedTime)),
        FieldSpec::new("topic", req.topic.as_deref(), Value::from),
        FieldSpec::new("agenda", req.agenda.as_deref(), Value::from),
        FieldSpec::new("password", req.password.as_deref(), Value::from),
        FieldSpec::new("start_time", Some(req.start_time), encode::utc_timestamp),
        FieldSpec::new("duration", req.duration, Value::from),
        FieldSpec::always("timezone", encode::UTC),
        FieldSpec::try_new("settings", req.settings.as_ref(), encode::nested),
        FieldSpec::new(
            "tracking_fields",
            req.tracking_fields.as_deref(),
            encode::key_values,
        ),
    ])
}

/// Body of `POST /users/{userId}/webinars` for a recurring series.
pub fn recurring_webinar(req: &RecurringWebinarRequest) -> Result<Map<String, Value>> {
    let tag = WebinarType::for_recurring(req.start_time.is_some());
    build([
        FieldSpec::always("type", encode::type_tag(tag)),
        FieldSpec::new("topic", req.topic.as_deref(), Value::from),
        FieldSpec::new("agenda", req.agenda.as_deref(), Value::from),
        FieldSpec::new("password", req.password.as_deref(), Value::from),
        FieldSpec::new("start_time", req.start_time, encode::utc_timestamp),
        FieldSpec::new("duration", req.duration, Value::from),
        FieldSpec::new("timezone", req.start_time.map(|_| encode::UTC), Value::from),
        FieldSpec::try_new("recurrence", req.recurrence.as_ref(), encode::nested),
        FieldSpec::try_new("settings", req.settings.as_ref(), encode::nested),
        FieldSpec::new(
            "tracking_fields",
            req.tracking_fields.as_deref(),
            encode::key_values,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use serde_json::json;

    use super::*;
    use crate::types::{RecurrenceInfo, WebinarSettings};

    fn start() -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-05T14:30:00-05:00").unwrap()
    }

    #[test]
    fn absent_fields_are_omitted() {
        let body = build([
            FieldSpec::new("topic", Some("Launch"), Value::from),
            FieldSpec::new("agenda", None::<&str>, Value::from),
        ])
        .unwrap();
        assert_eq!(body.get("topic"), Some(&json!("Launch")));
        assert!(!body.contains_key("agenda"));
    }

    #[test]
    fn field_order_is_kept() {
        let body = build([
            FieldSpec::always("type", 5),
            FieldSpec::new("topic", Some("a"), Value::from),
            FieldSpec::new("duration", Some(60u32), Value::from),
        ])
        .unwrap();
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "topic", "duration"]);
    }

    #[test]
    fn encoder_errors_propagate() {
        let body = build([FieldSpec::try_new("broken", Some(()), |_| {
            Err(crate::error::ZoomError::InvalidArgument("nope".into()))
        })]);
        assert!(body.is_err());
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        assert_eq!(encode::utc_timestamp(start()), json!("2024-03-05T19:30:00Z"));
    }

    #[test]
    fn timestamp_drops_fractional_seconds() {
        let t = DateTime::parse_from_rfc3339("2024-03-05T19:30:00.987+00:00").unwrap();
        assert_eq!(encode::utc_timestamp(t), json!("2024-03-05T19:30:00Z"));
    }

    #[test]
    fn tracking_fields_keep_input_order() {
        let pairs = vec![
            ("custom1".to_string(), "abc".to_string()),
            ("custom2".to_string(), "xyz".to_string()),
        ];
        assert_eq!(
            encode::key_values(&pairs),
            json!([
                {"field": "custom1", "value": "abc"},
                {"field": "custom2", "value": "xyz"}
            ])
        );
    }

    #[test]
    fn scheduled_body_has_type_five_first() {
        let req = ScheduledWebinarRequest::new("Quarterly review", start());
        let body = scheduled_webinar(&req).unwrap();
        assert_eq!(body.keys().next().map(String::as_str), Some("type"));
        assert_eq!(
            Value::Object(body),
            json!({
                "type": 5,
                "topic": "Quarterly review",
                "start_time": "2024-03-05T19:30:00Z",
                "timezone": "UTC"
            })
        );
    }

    #[test]
    fn scheduled_body_with_every_field() {
        let mut req = ScheduledWebinarRequest::new("Launch", start());
        req.agenda = Some("Product launch".into());
        req.password = Some("abc123".into());
        req.duration = Some(90);
        req.settings = Some(WebinarSettings {
            host_video: Some(true),
            ..Default::default()
        });
        req.tracking_fields = Some(vec![("campaign".into(), "spring".into())]);

        let body = scheduled_webinar(&req).unwrap();
        assert_eq!(
            Value::Object(body),
            json!({
                "type": 5,
                "topic": "Launch",
                "agenda": "Product launch",
                "password": "abc123",
                "start_time": "2024-03-05T19:30:00Z",
                "duration": 90,
                "timezone": "UTC",
                "settings": {"host_video": true},
                "tracking_fields": [{"field": "campaign", "value": "spring"}]
            })
        );
    }

    #[test]
    fn recurring_with_start_time_is_fixed_time() {
        let req = RecurringWebinarRequest {
            start_time: Some(start()),
            recurrence: Some(RecurrenceInfo::daily(1, 5)),
            ..RecurringWebinarRequest::new("Daily standup")
        };
        let body = recurring_webinar(&req).unwrap();
        assert_eq!(body["type"], json!(9));
        assert_eq!(body["timezone"], json!("UTC"));
        assert_eq!(
            body["recurrence"],
            json!({"type": 1, "repeat_interval": 1, "end_times": 5})
        );
    }

    #[test]
    fn recurring_without_start_time_has_no_fixed_time() {
        let req = RecurringWebinarRequest::new("Office hours");
        let body = recurring_webinar(&req).unwrap();
        assert_eq!(body["type"], json!(6));
        assert!(!body.contains_key("start_time"));
        assert!(!body.contains_key("timezone"));
        assert!(!body.contains_key("recurrence"));
    }

    #[test]
    fn building_is_deterministic() {
        let mut req = ScheduledWebinarRequest::new("Launch", start());
        req.tracking_fields = Some(vec![
            ("custom1".into(), "abc".into()),
            ("custom2".into(), "xyz".into()),
        ]);
        let a = scheduled_webinar(&req).unwrap();
        let b = scheduled_webinar(&req).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
