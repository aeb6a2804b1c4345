use indicatif::{ProgressBar, ProgressStyle};
use reddit_cm_domain::{ImportObserver, ImportOutcome, RecordOutcome};

/// Progress bar shown while an import runs.
pub struct ImportProgress {
    bar: ProgressBar,
}

impl ImportProgress {
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::with_template(
                "Importing communities [{bar:36.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ImportObserver for ImportProgress {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_outcome(&mut self, outcome: &RecordOutcome) {
        let label = match (&outcome.name, &outcome.outcome) {
            (Some(name), ImportOutcome::Failed(_)) => format!("r/{} (failed)", name),
            (Some(name), _) => format!("r/{}", name),
            (None, _) => String::new(),
        };
        self.bar.set_message(label);
        self.bar.inc(1);
    }
}
