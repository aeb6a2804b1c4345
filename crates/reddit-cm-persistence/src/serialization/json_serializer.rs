use crate::traits::Serializer;
use reddit_cm_core::{CmError, CmResult};

/// Pretty JSON with two-space indentation. Non-ASCII text is written as-is.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> CmResult<Vec<u8>> {
        let mut json =
            serde_json::to_vec_pretty(data).map_err(|e| CmError::Serialization(e.to_string()))?;
        json.push(b'\n');
        Ok(json)
    }

    fn deserialize(&self, bytes: &[u8]) -> CmResult<T> {
        serde_json::from_slice(bytes).map_err(|e| CmError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_pretty_print() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        let serialized = JsonSerializer.serialize(&data).unwrap();
        let json_str = String::from_utf8(serialized).unwrap();

        assert!(json_str.contains("\n  \"name\": \"test\""));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let data = TestData {
            name: "日本語".to_string(),
            value: 1,
        };

        let serialized = JsonSerializer.serialize(&data).unwrap();
        assert!(String::from_utf8(serialized).unwrap().contains("日本語"));
    }

    #[test]
    fn test_invalid_bytes_are_serialization_errors() {
        let result: CmResult<TestData> = JsonSerializer.deserialize(b"{ nope");
        assert!(matches!(result, Err(CmError::Serialization(_))));
    }
}
