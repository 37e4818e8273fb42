//! Aggregate success/failure accounting for one pipeline execution.

/// Mutable accumulator threaded through a run. Never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub failure: usize,
    /// Identifiers in failure order; duplicates allowed if an id fails twice.
    pub failed_ids: Vec<u32>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self, id: u32) {
        self.failure += 1;
        self.failed_ids.push(id);
    }

    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    /// Fold another summary into this one, preserving failure order.
    pub fn merge(&mut self, other: RunSummary) {
        self.success += other.success;
        self.failure += other.failure;
        self.failed_ids.extend(other.failed_ids);
    }

    /// Emit the end-of-run report.
    pub fn report(&self) {
        log::info!("Summary:");
        log::info!("  Successful media creations: {}", self.success);
        log::info!("  Failed media creations: {}", self.failure);
        if !self.failed_ids.is_empty() {
            log::warn!("  Failed media IDs: {:?}", self.failed_ids);
        }
    }
}
