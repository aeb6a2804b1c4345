pub mod client;
pub mod community;
pub mod export;
pub mod import;

pub use client::{CommunityHandle, PlatformClient};
pub use community::{community_url, CommunityRecord, PLATFORM_DOMAIN};
pub use export::{CommunityExporter, ExportDocument};
pub use import::{
    FailureReason, ImportObserver, ImportOutcome, ImportSummary, NoopObserver, OutcomeCounts,
    Reconciler, RecordOutcome,
};

#[cfg(test)]
pub(crate) mod testing;
