use super::observer::ImportObserver;
use super::outcome::{FailureReason, ImportOutcome, RecordOutcome};
use super::summary::ImportSummary;
use crate::client::PlatformClient;
use crate::community::CommunityRecord;
use reddit_cm_core::PlatformResult;

/// Drives one import run against a platform client.
///
/// Records are processed strictly in order, one platform call at a time.
/// Nothing is retried and no per-record failure escapes as an error.
pub struct Reconciler<'a, C: PlatformClient + ?Sized> {
    client: &'a C,
    simulate: bool,
}

impl<'a, C: PlatformClient + ?Sized> Reconciler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            simulate: false,
        }
    }

    /// In simulation every read still happens but `subscribe` is never called.
    pub fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    pub async fn reconcile(
        &self,
        records: &[CommunityRecord],
        observer: &mut dyn ImportObserver,
    ) -> ImportSummary {
        let mut summary = ImportSummary::new(self.simulate);
        observer.on_start(records.len());

        for (index, record) in records.iter().enumerate() {
            let name = record.import_name();
            let outcome = match name {
                None => ImportOutcome::missing_name(),
                Some(name) => match self.join(name).await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        let reason = FailureReason::classify(&err);
                        tracing::info!("Could not join {}: {} ({})", name, reason, err);
                        ImportOutcome::Failed(reason)
                    }
                },
            };

            let record_outcome = RecordOutcome {
                index,
                name: name.map(str::to_string),
                outcome,
            };
            observer.on_outcome(&record_outcome);
            summary.record(record_outcome);
        }

        tracing::info!(
            "Processed {} records (simulated: {})",
            summary.total_processed(),
            self.simulate
        );
        summary
    }

    async fn join(&self, name: &str) -> PlatformResult<ImportOutcome> {
        let handle = self.client.resolve_community(name).await?;

        if self.client.is_subscribed(&handle).await? {
            tracing::debug!("Already subscribed to {}", handle.name);
            return Ok(ImportOutcome::AlreadyJoined);
        }

        if self.simulate {
            tracing::debug!("Would subscribe to {}", handle.name);
        } else {
            self.client.subscribe(&handle).await?;
            tracing::debug!("Subscribed to {}", handle.name);
        }
        Ok(ImportOutcome::Joined)
    }
}
