use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{api::ClassDescriptor, error::AppError, utils::time::iso_timestamp};

/// Payload carried by an attendance QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub subject: String,
    pub room: String,
    pub teacher: String,
    #[serde(rename = "timestamp")]
    pub timestamp_iso: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl SessionToken {
    /// `session_id` is `{class id}-{epoch millis}`: two encodes of the same
    /// class inside one millisecond produce the same id.
    pub fn for_class(class: &ClassDescriptor, teacher: &str, now: DateTime<Utc>) -> Self {
        Self {
            subject: class.name.clone(),
            room: class.room.clone(),
            teacher: teacher.to_string(),
            timestamp_iso: iso_timestamp(now),
            session_id: format!("{}-{}", class.id, now.timestamp_millis()),
        }
    }

    pub fn to_payload(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|err| AppError::encode(format!("Failed to serialize session: {err}")))
    }
}

/// The fields of a scanned payload the recorder relies on. Any JSON object
/// with a non-empty `subject` and `timestamp` qualifies; the other token
/// fields are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken {
    pub subject: String,
    pub timestamp_iso: String,
    pub session_id: Option<String>,
}

impl ScannedToken {
    pub fn parse(text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            subject: field("subject")?,
            timestamp_iso: field("timestamp")?,
            session_id: field("sessionId"),
        })
    }
}
