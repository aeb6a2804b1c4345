//! Collects joined communities from the platform.

use super::models::ExportDocument;
use crate::client::PlatformClient;
use reddit_cm_core::{CmError, CmResult};

pub struct CommunityExporter;

impl CommunityExporter {
    /// Enumerate the account's joined communities into a fresh document.
    pub async fn collect<C>(client: &C) -> CmResult<ExportDocument>
    where
        C: PlatformClient + ?Sized,
    {
        tracing::info!("Fetching joined communities");
        let communities = client
            .joined_communities()
            .await
            .map_err(CmError::export_failed)?;
        tracing::info!("Found {} communities", communities.len());

        Ok(ExportDocument::new(communities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::CommunityRecord;
    use crate::testing::MockPlatform;
    use reddit_cm_core::PlatformError;

    #[tokio::test]
    async fn test_collect_wraps_communities_in_platform_order() {
        let mut client = MockPlatform::new();
        client.expect_joined_communities().times(1).returning(|| {
            Ok(vec![
                CommunityRecord::new("python").with_title("Python"),
                CommunityRecord::new("javascript").with_title("JavaScript"),
            ])
        });

        let doc = CommunityExporter::collect(&client).await.unwrap();

        assert_eq!(doc.total_communities, 2);
        assert_eq!(doc.communities[0].name, "python");
        assert_eq!(doc.communities[1].name, "javascript");
        assert_eq!(doc.communities[0].url, "https://reddit.com/r/python");
    }

    #[tokio::test]
    async fn test_collect_empty_account() {
        let mut client = MockPlatform::new();
        client
            .expect_joined_communities()
            .returning(|| Ok(Vec::new()));

        let doc = CommunityExporter::collect(&client).await.unwrap();
        assert_eq!(doc.total_communities, 0);
        assert!(doc.communities.is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_failure_is_export_failed() {
        let mut client = MockPlatform::new();
        client
            .expect_joined_communities()
            .returning(|| Err(PlatformError::Other("API Error".into())));

        let err = CommunityExporter::collect(&client).await.unwrap_err();
        assert!(matches!(err, CmError::ExportFailed { .. }));
        assert_eq!(err.to_string(), "Export failed: API Error");
    }
}
