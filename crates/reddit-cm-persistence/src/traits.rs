use reddit_cm_core::CmResult;

/// Serialization strategy for export documents.
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> CmResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> CmResult<T>;
}
