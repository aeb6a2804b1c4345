//! Export document model.

use crate::community::CommunityRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope written by `export` and read back by `import`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub total_communities: usize,
    pub communities: Vec<CommunityRecord>,
}

impl ExportDocument {
    /// Stamped with the current time. `total_communities` always matches the list.
    pub fn new(communities: Vec<CommunityRecord>) -> Self {
        Self::at(Utc::now(), communities)
    }

    pub fn at(exported_at: DateTime<Utc>, communities: Vec<CommunityRecord>) -> Self {
        Self {
            exported_at,
            total_communities: communities.len(),
            communities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_matches_community_count() {
        let doc = ExportDocument::new(vec![
            CommunityRecord::new("python"),
            CommunityRecord::new("rust"),
        ]);
        assert_eq!(doc.total_communities, 2);
        assert_eq!(doc.communities.len(), 2);
    }

    #[test]
    fn test_serialized_keys() {
        let doc = ExportDocument::new(vec![CommunityRecord::new("python")]);
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value.get("exported_at").is_some());
        assert_eq!(value["total_communities"], 1);
        let community = &value["communities"][0];
        for key in ["name", "title", "description", "subscribers", "created_utc", "url"] {
            assert!(community.get(key).is_some(), "missing key {key}");
        }
    }
}
