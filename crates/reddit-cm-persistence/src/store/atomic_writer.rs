use reddit_cm_core::CmResult;
use std::path::Path;
use tokio::fs;

/// Writes through a temp file in the destination directory, then renames,
/// so an interrupted export never leaves a truncated document behind.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> CmResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;

        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> CmResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("communities.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"{}");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("communities.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing").join("communities.json");

        assert!(AtomicWriter::write_atomic(&file_path, b"{}").await.is_err());
    }
}
