use super::outcome::{FailureReason, ImportOutcome, RecordOutcome};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub joined: usize,
    pub already_joined: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Result of one import run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub simulated: bool,
    pub outcomes: Vec<RecordOutcome>,
}

impl ImportSummary {
    pub fn new(simulated: bool) -> Self {
        Self {
            simulated,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total_processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.outcomes
            .iter()
            .fold(OutcomeCounts::default(), |mut counts, record| {
                match record.outcome {
                    ImportOutcome::Joined => counts.joined += 1,
                    ImportOutcome::AlreadyJoined => counts.already_joined += 1,
                    ImportOutcome::Failed(_) => counts.failed += 1,
                    ImportOutcome::Skipped(_) => counts.skipped += 1,
                }
                counts
            })
    }

    /// Names joined, or that would be joined in a dry run.
    pub fn joined(&self) -> Vec<&str> {
        self.names_where(|o| matches!(o, ImportOutcome::Joined))
    }

    pub fn already_joined(&self) -> Vec<&str> {
        self.names_where(|o| matches!(o, ImportOutcome::AlreadyJoined))
    }

    /// Failures in input order. A failure always has a name: records
    /// without one are skipped before any platform call.
    pub fn failed(&self) -> Vec<(&str, &FailureReason)> {
        self.outcomes
            .iter()
            .filter_map(|record| match (&record.outcome, record.name.as_deref()) {
                (ImportOutcome::Failed(reason), Some(name)) => Some((name, reason)),
                _ => None,
            })
            .collect()
    }

    pub fn joined_label(&self) -> &'static str {
        if self.simulated {
            "Would join"
        } else {
            "Successfully joined"
        }
    }

    fn names_where(&self, pred: impl Fn(&ImportOutcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|record| pred(&record.outcome))
            .filter_map(|record| record.name.as_deref())
            .collect()
    }
}

#[derive(Serialize)]
struct FailureEntry<'a> {
    name: &'a str,
    reason: String,
}

impl Serialize for ImportSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let failed: Vec<FailureEntry<'_>> = self
            .failed()
            .into_iter()
            .map(|(name, reason)| FailureEntry {
                name,
                reason: reason.to_string(),
            })
            .collect();

        let mut state = serializer.serialize_struct("ImportSummary", 6)?;
        state.serialize_field("dry_run", &self.simulated)?;
        state.serialize_field("counts", &self.counts())?;
        state.serialize_field("joined", &self.joined())?;
        state.serialize_field("already_joined", &self.already_joined())?;
        state.serialize_field("failed", &failed)?;
        state.serialize_field("total_processed", &self.total_processed())?;
        state.end()
    }
}
