//! Wire shapes of the Reddit API responses used here.

use reddit_cm_domain::community::timestamp_from_epoch;
use reddit_cm_domain::{CommunityHandle, CommunityRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub after: Option<String>,
    pub children: Vec<Thing<T>>,
}

pub type Listing<T> = Thing<ListingData<T>>;

#[derive(Debug, Clone, Deserialize)]
pub struct SubredditData {
    pub display_name: String,
    /// Fullname, e.g. `t5_2qh0y`.
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub public_description: Option<String>,
    #[serde(default)]
    pub subscribers: Option<u64>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub user_is_subscriber: Option<bool>,
}

impl SubredditData {
    pub fn into_record(self) -> CommunityRecord {
        CommunityRecord::new(self.display_name)
            .with_title(self.title.unwrap_or_default())
            .with_description(self.public_description.filter(|d| !d.is_empty()))
            .with_subscribers(self.subscribers.unwrap_or_default())
            .with_created_utc(self.created_utc.and_then(timestamp_from_epoch))
    }

    pub fn into_handle(self) -> CommunityHandle {
        let handle = CommunityHandle::new(self.display_name, self.name);
        match self.user_is_subscriber {
            Some(subscribed) => handle.with_subscribed(subscribed),
            None => handle,
        }
    }
}
