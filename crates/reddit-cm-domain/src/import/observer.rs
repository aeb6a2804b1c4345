use super::outcome::RecordOutcome;

/// Hook invoked as reconciliation progresses. Presentation only; it cannot
/// influence outcomes.
pub trait ImportObserver {
    fn on_start(&mut self, _total: usize) {}

    fn on_outcome(&mut self, outcome: &RecordOutcome);
}

pub struct NoopObserver;

impl ImportObserver for NoopObserver {
    fn on_outcome(&mut self, _outcome: &RecordOutcome) {}
}

impl<F> ImportObserver for F
where
    F: FnMut(&RecordOutcome),
{
    fn on_outcome(&mut self, outcome: &RecordOutcome) {
        self(outcome)
    }
}
