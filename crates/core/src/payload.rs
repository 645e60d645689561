//! The canned `manyFieldsPayload` record and payloads derived from it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `2026-02-20T10:00:00Z` as seconds since the Unix epoch.
const LAST_LOGIN_EPOCH_SECS: i64 = 1_771_581_600;

/// Fixed user-profile-like record served by `GET /manyFieldsPayload`.
///
/// Field names are serialized in camelCase and keep their JSON types:
/// integers, booleans and the float `balance` are never stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManyFieldsPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub device: String,
    pub os: String,
    pub app_version: String,
    pub session_id: String,
    pub is_premium: bool,
    pub balance: f64,
    pub last_login: DateTime<Utc>,
    pub locale: String,
    pub currency: String,
    pub features: String,
    pub tags: String,
    pub notes: String,
}

impl ManyFieldsPayload {
    /// The literal record. Every call returns an identical value.
    pub fn canned() -> Self {
        Self {
            id: 1001,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            age: 30,
            country: "SE".into(),
            city: "Stockholm".into(),
            zip: "11122".into(),
            device: "Android".into(),
            os: "Android 14".into(),
            app_version: "5.2.1".into(),
            session_id: "sess-abc-123".into(),
            is_premium: true,
            balance: 1234.56,
            last_login: DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(LAST_LOGIN_EPOCH_SECS),
            locale: "sv-SE".into(),
            currency: "SEK".into(),
            features: "A,B,C".into(),
            tags: "tag1,tag2".into(),
            notes: "test user with many fields".into(),
        }
    }

    /// The record as a JSON object.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// A JSON object holding only `keys` (unknown keys are skipped).
    ///
    /// Keys appear in the order requested, e.g. `["id", "device"]` yields
    /// `{"id":1001,"device":"Android"}`.
    pub fn project(&self, keys: &[&str]) -> serde_json::Result<Value> {
        let Value::Object(mut all) = self.to_value()? else {
            return Ok(Value::Object(Map::new()));
        };

        let picked = keys
            .iter()
            .filter_map(|k| all.remove(*k).map(|v| ((*k).to_string(), v)))
            .collect();

        Ok(Value::Object(picked))
    }

    /// The serialized record with its last character cut off.
    ///
    /// Always invalid JSON, and never shorter than one character.
    pub fn truncated_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string(self)?;
        if json.chars().count() > 1 {
            json.pop();
        }
        Ok(json)
    }

    /// The string field `key` repeated and cut to exactly `len` characters.
    ///
    /// Falls back to `"x"` when the field is missing, empty or not a string.
    pub fn repeat_field(&self, key: &str, len: usize) -> String {
        let seed = self
            .to_value()
            .ok()
            .and_then(|v| v.get(key).and_then(Value::as_str).map(str::to_owned))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "x".to_string());

        seed.chars().cycle().take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canned_payload_has_exact_fields_and_types() {
        let v = ManyFieldsPayload::canned().to_value().unwrap();
        let obj = v.as_object().unwrap();

        assert_eq!(obj.len(), 19);
        assert_eq!(v["id"], json!(1001));
        assert!(v["id"].is_i64());
        assert_eq!(v["age"], json!(30));
        assert_eq!(v["isPremium"], json!(true));
        assert!(v["balance"].is_f64());
        assert_eq!(v["balance"].as_f64(), Some(1234.56));
        assert_eq!(v["appVersion"], "5.2.1");
        assert_eq!(v["sessionId"], "sess-abc-123");
        assert_eq!(v["lastLogin"], "2026-02-20T10:00:00Z");
        assert_eq!(v["zip"], "11122");
        assert_eq!(v["notes"], "test user with many fields");
    }

    #[test]
    fn canned_payload_is_stable() {
        let a = serde_json::to_string(&ManyFieldsPayload::canned()).unwrap();
        let b = serde_json::to_string(&ManyFieldsPayload::canned()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn canned_payload_deserializes_back() {
        let json = serde_json::to_string(&ManyFieldsPayload::canned()).unwrap();
        let back: ManyFieldsPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ManyFieldsPayload::canned());
    }

    #[test]
    fn project_keeps_requested_fields_in_order() {
        let partial = ManyFieldsPayload::canned()
            .project(&["id", "device", "missing"])
            .unwrap();
        assert_eq!(
            serde_json::to_string(&partial).unwrap(),
            r#"{"id":1001,"device":"Android"}"#
        );
    }

    #[test]
    fn truncated_json_is_invalid() {
        let truncated = ManyFieldsPayload::canned().truncated_json().unwrap();
        assert!(!truncated.is_empty());
        assert!(serde_json::from_str::<Value>(&truncated).is_err());
    }

    #[test]
    fn repeat_field_cuts_to_length() {
        let payload = ManyFieldsPayload::canned();

        let data = payload.repeat_field("notes", 10_000);
        assert_eq!(data.len(), 10_000);
        assert!(data.starts_with("test user with many fields"));

        assert_eq!(payload.repeat_field("id", 3), "xxx");
        assert_eq!(payload.repeat_field("nope", 0), "");
    }
}
