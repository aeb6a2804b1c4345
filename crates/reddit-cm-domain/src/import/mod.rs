//! Import reconciliation.
//!
//! Walks an imported community list against live account state and
//! records one terminal outcome per entry.

pub mod observer;
pub mod outcome;
pub mod reconciler;
pub mod summary;

pub use observer::{ImportObserver, NoopObserver};
pub use outcome::{FailureReason, ImportOutcome, RecordOutcome, MISSING_NAME};
pub use reconciler::Reconciler;
pub use summary::{ImportSummary, OutcomeCounts};
