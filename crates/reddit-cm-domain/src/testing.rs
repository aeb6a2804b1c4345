use crate::client::{CommunityHandle, PlatformClient};
use crate::community::CommunityRecord;
use async_trait::async_trait;
use reddit_cm_core::{PlatformError, PlatformResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

mockall::mock! {
    pub Platform {}

    #[async_trait]
    impl PlatformClient for Platform {
        async fn joined_communities(&self) -> PlatformResult<Vec<CommunityRecord>>;
        async fn resolve_community(&self, name: &str) -> PlatformResult<CommunityHandle>;
        async fn is_subscribed(&self, handle: &CommunityHandle) -> PlatformResult<bool>;
        async fn subscribe(&self, handle: &CommunityHandle) -> PlatformResult<()>;
    }
}

/// In-memory account whose subscriptions change when `subscribe` succeeds.
#[derive(Default)]
pub struct FakeAccount {
    known: HashMap<String, CommunityRecord>,
    subscribed: Mutex<HashSet<String>>,
    subscribe_failures: HashMap<String, PlatformError>,
    subscribe_calls: AtomicUsize,
}

impl FakeAccount {
    pub fn with_community(mut self, record: CommunityRecord) -> Self {
        self.known.insert(record.name.to_lowercase(), record);
        self
    }

    pub fn with_joined(self, record: CommunityRecord) -> Self {
        let key = record.name.to_lowercase();
        let account = self.with_community(record);
        account.subscribed.lock().unwrap().insert(key);
        account
    }

    pub fn failing_subscribe(mut self, name: &str, error: PlatformError) -> Self {
        self.subscribe_failures.insert(name.to_lowercase(), error);
        self
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }

    pub fn is_joined(&self, name: &str) -> bool {
        self.subscribed.lock().unwrap().contains(&name.to_lowercase())
    }
}

#[async_trait]
impl PlatformClient for FakeAccount {
    async fn joined_communities(&self) -> PlatformResult<Vec<CommunityRecord>> {
        let subscribed = self.subscribed.lock().unwrap();
        let mut records: Vec<CommunityRecord> = self
            .known
            .iter()
            .filter(|(key, _)| subscribed.contains(*key))
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    async fn resolve_community(&self, name: &str) -> PlatformResult<CommunityHandle> {
        self.known
            .get(&name.to_lowercase())
            .map(|record| CommunityHandle::new(&record.name, format!("t5_{}", record.name)))
            .ok_or_else(|| PlatformError::NotFound(name.to_string()))
    }

    async fn is_subscribed(&self, handle: &CommunityHandle) -> PlatformResult<bool> {
        Ok(self.is_joined(&handle.name))
    }

    async fn subscribe(&self, handle: &CommunityHandle) -> PlatformResult<()> {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        let key = handle.name.to_lowercase();
        if let Some(err) = self.subscribe_failures.get(&key) {
            return Err(err.clone());
        }
        self.subscribed.lock().unwrap().insert(key);
        Ok(())
    }
}
