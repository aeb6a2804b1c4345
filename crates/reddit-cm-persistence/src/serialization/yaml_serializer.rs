use crate::traits::Serializer;
use reddit_cm_core::{CmError, CmResult};

/// Block-style YAML.
pub struct YamlSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for YamlSerializer
{
    fn serialize(&self, data: &T) -> CmResult<Vec<u8>> {
        serde_yaml::to_string(data)
            .map(String::into_bytes)
            .map_err(|e| CmError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> CmResult<T> {
        serde_yaml::from_slice(bytes).map_err(|e| CmError::Serialization(e.to_string()))
    }
}
