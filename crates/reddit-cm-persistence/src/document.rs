//! Reading and writing export documents on disk.

use crate::format::DocumentFormat;
use crate::store::AtomicWriter;
use crate::traits::Serializer;
use reddit_cm_core::{CmError, CmResult};
use reddit_cm_domain::{CommunityRecord, ExportDocument};
use serde_json::Value;
use std::path::Path;

pub struct ExportWriter;

impl ExportWriter {
    /// Serialize and write atomically. Any failure is reported as `ExportFailed`.
    pub async fn write(doc: &ExportDocument, format: DocumentFormat, path: &Path) -> CmResult<()> {
        let bytes = format
            .serializer()
            .serialize(doc)
            .map_err(CmError::export_failed)?;
        AtomicWriter::write_atomic(path, &bytes)
            .await
            .map_err(CmError::export_failed)?;

        tracing::info!(
            "Exported {} communities to {} as {}",
            doc.total_communities,
            path.display(),
            format
        );
        Ok(())
    }
}

pub struct ImportLoader;

impl ImportLoader {
    /// Load the community list from an export document.
    ///
    /// Only the `communities` sequence is required; the rest of the envelope
    /// is ignored so partially hand-written files import too.
    pub async fn load(path: &Path) -> CmResult<Vec<CommunityRecord>> {
        let bytes = AtomicWriter::read_all(path).await.map_err(|e| match e {
            CmError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                CmError::InvalidImportFile(format!("Import file not found: {}", path.display()))
            }
            other => CmError::InvalidImportFile(format!("Failed to load import file: {}", other)),
        })?;

        let communities = Self::parse(&bytes, DocumentFormat::from_path(path))?;
        tracing::info!(
            "Loaded {} communities from {}",
            communities.len(),
            path.display()
        );
        Ok(communities)
    }

    pub fn parse(bytes: &[u8], format: DocumentFormat) -> CmResult<Vec<CommunityRecord>> {
        let document: Value = match format {
            DocumentFormat::Json => serde_json::from_slice(bytes).map_err(|e| {
                CmError::InvalidImportFile(format!("Failed to parse JSON file: {}", e))
            })?,
            DocumentFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| {
                CmError::InvalidImportFile(format!("Failed to parse YAML file: {}", e))
            })?,
        };

        let communities = match document {
            Value::Object(mut map) => map.remove("communities").ok_or_else(|| {
                CmError::InvalidImportFile("missing 'communities' field".to_string())
            })?,
            _ => {
                return Err(CmError::InvalidImportFile(
                    "missing 'communities' field".to_string(),
                ))
            }
        };

        if !communities.is_array() {
            return Err(CmError::InvalidImportFile(
                "'communities' must be a list".to_string(),
            ));
        }

        serde_json::from_value(communities)
            .map_err(|e| CmError::InvalidImportFile(format!("Invalid community entry: {}", e)))
    }
}
