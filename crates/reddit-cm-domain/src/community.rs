use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub const PLATFORM_DOMAIN: &str = "reddit.com";

pub fn community_url(name: &str) -> String {
    format!("https://{}/r/{}", PLATFORM_DOMAIN, name)
}

/// One community as it appears in an export document.
///
/// Only `name` matters for import. The remaining fields are informational;
/// they are read leniently so hand-edited or older files still import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscribers: u64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_utc: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

impl CommunityRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            url: community_url(&name),
            name,
            title: String::new(),
            description: String::new(),
            subscribers: 0,
            created_utc: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// `None` stays empty, matching communities with no public description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.unwrap_or_default();
        self
    }

    pub fn with_subscribers(mut self, subscribers: u64) -> Self {
        self.subscribers = subscribers;
        self
    }

    pub fn with_created_utc(mut self, created_utc: Option<DateTime<Utc>>) -> Self {
        self.created_utc = created_utc;
        self
    }

    /// The name to act on during import, if there is one.
    pub fn import_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Converts a platform `created_utc` epoch (fractional seconds) into a UTC timestamp.
pub fn timestamp_from_epoch(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    Utc.timestamp_opt(seconds.trunc() as i64, 0).single()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any value that does not fit `T` lands in `Invalid` instead of failing the entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient<String>>::deserialize(deserializer)? {
        Some(Lenient::Valid(text)) => text,
        Some(Lenient::Invalid(_)) => {
            tracing::debug!("Ignoring non-text value in community entry");
            String::new()
        }
        None => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Whole(u64),
    Fractional(f64),
    Text(String),
    Invalid(IgnoredAny),
}

fn count_from_f64(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}

fn parse_count(text: &str) -> Option<u64> {
    let text = text.trim();
    text.parse::<u64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(count_from_f64))
}

/// Subscriber counts from floats and numeric strings are truncated; anything
/// else (negative, `"1.2k"`, objects) reads as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<RawCount>::deserialize(deserializer)? {
        None => Some(0),
        Some(RawCount::Whole(count)) => Some(count),
        Some(RawCount::Fractional(value)) => count_from_f64(value),
        Some(RawCount::Text(text)) => parse_count(&text),
        Some(RawCount::Invalid(_)) => None,
    };

    Ok(count.unwrap_or_else(|| {
        tracing::debug!("Ignoring unreadable subscribers value");
        0
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Epoch(f64),
    Invalid(IgnoredAny),
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => None,
        Some(RawTimestamp::Epoch(seconds)) => timestamp_from_epoch(seconds),
        Some(RawTimestamp::Text(text)) => {
            let parsed = parse_timestamp(&text);
            if parsed.is_none() {
                tracing::debug!("Ignoring unparseable created_utc: {}", text);
            }
            parsed
        }
        Some(RawTimestamp::Invalid(_)) => {
            tracing::debug!("Ignoring unreadable created_utc");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_derives_canonical_url() {
        let record = CommunityRecord::new("rust");
        assert_eq!(record.url, "https://reddit.com/r/rust");
        assert!(record.description.is_empty());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let record = CommunityRecord::new("nodesc").with_description(None);
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_import_name_rejects_blank() {
        assert_eq!(CommunityRecord::new("").import_name(), None);
        assert_eq!(CommunityRecord::new("   ").import_name(), None);
        assert_eq!(CommunityRecord::new("python").import_name(), Some("python"));
    }

    #[test]
    fn test_deserialize_name_only_entry() {
        let record: CommunityRecord = serde_json::from_str(r#"{"name": "python"}"#).unwrap();
        assert_eq!(record.name, "python");
        assert_eq!(record.subscribers, 0);
        assert!(record.created_utc.is_none());
    }

    #[test]
    fn test_deserialize_nulls_as_defaults() {
        let record: CommunityRecord = serde_json::from_str(
            r#"{"name": null, "description": null, "subscribers": null, "created_utc": null}"#,
        )
        .unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.subscribers, 0);
    }

    #[test]
    fn test_accepts_naive_iso_timestamps() {
        let record: CommunityRecord =
            serde_json::from_str(r#"{"name": "python", "created_utc": "2008-01-25T03:14:15"}"#)
                .unwrap();
        assert_eq!(
            record.created_utc,
            Some(Utc.with_ymd_and_hms(2008, 1, 25, 3, 14, 15).unwrap())
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_dropped() {
        let record: CommunityRecord =
            serde_json::from_str(r#"{"name": "python", "created_utc": "last tuesday"}"#).unwrap();
        assert_eq!(record.name, "python");
        assert!(record.created_utc.is_none());
    }

    #[test]
    fn test_fractional_and_text_subscriber_counts() {
        for (raw, expected) in [
            ("1200000.0", 1_200_000),
            ("\"1200000\"", 1_200_000),
            ("\" 42.9 \"", 42),
            ("-1", 0),
            ("\"1.2k\"", 0),
            ("{\"count\": 5}", 0),
        ] {
            let json = format!(r#"{{"name": "python", "subscribers": {raw}}}"#);
            let record: CommunityRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.subscribers, expected, "subscribers: {raw}");
        }
    }

    #[test]
    fn test_mistyped_text_fields_become_empty() {
        let record: CommunityRecord = serde_json::from_str(
            r#"{"name": "python", "title": 42, "description": ["a"], "url": {"href": "x"}}"#,
        )
        .unwrap();
        assert_eq!(record.name, "python");
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_mistyped_timestamp_is_dropped() {
        let record: CommunityRecord =
            serde_json::from_str(r#"{"name": "python", "created_utc": true}"#).unwrap();
        assert!(record.created_utc.is_none());
    }

    #[test]
    fn test_serialized_fields_survive_reload() {
        let record = CommunityRecord::new("python")
            .with_title("Python")
            .with_description(Some("Python programming language".into()))
            .with_subscribers(1_000_000)
            .with_created_utc(timestamp_from_epoch(1_200_000_000.0));

        let json = serde_json::to_string(&record).unwrap();
        let reloaded: CommunityRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, record);
    }
}
