use crate::community::CommunityRecord;
use async_trait::async_trait;
use reddit_cm_core::PlatformResult;

/// A community resolved on the platform, ready for state queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityHandle {
    /// Display name as the platform spells it.
    pub name: String,
    /// Platform-wide identifier used for mutations (e.g. `t5_2qh0y`).
    pub fullname: String,
    /// Subscription state observed while resolving, if the platform reported it.
    pub subscribed: Option<bool>,
}

impl CommunityHandle {
    pub fn new(name: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fullname: fullname.into(),
            subscribed: None,
        }
    }

    pub fn with_subscribed(mut self, subscribed: bool) -> Self {
        self.subscribed = Some(subscribed);
        self
    }
}

/// Operations the export and import paths need from an authenticated account.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Every community the account has joined, in platform order.
    async fn joined_communities(&self) -> PlatformResult<Vec<CommunityRecord>>;

    async fn resolve_community(&self, name: &str) -> PlatformResult<CommunityHandle>;

    async fn is_subscribed(&self, handle: &CommunityHandle) -> PlatformResult<bool>;

    async fn subscribe(&self, handle: &CommunityHandle) -> PlatformResult<()>;
}
