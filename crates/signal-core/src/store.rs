use std::sync::RwLock;

use crate::PresentDayAnalysis;

/// Read side of the "last present-day analysis" cache owned by the AI
/// orchestration layer. The export pipeline only ever takes a snapshot; it
/// never mutates what the store holds.
pub trait AnalysisStore: Send + Sync {
    /// `None` until the first analysis run completes
    fn last_present_day(&self) -> Option<PresentDayAnalysis>;
}

/// Process-local store, replaced wholesale on every analysis run
#[derive(Debug, Default)]
pub struct InMemoryAnalysisStore {
    last: RwLock<Option<PresentDayAnalysis>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, analysis: PresentDayAnalysis) {
        *self.last.write().unwrap() = Some(analysis);
    }
}

impl AnalysisStore for InMemoryAnalysisStore {
    fn last_present_day(&self) -> Option<PresentDayAnalysis> {
        self.last.read().unwrap().clone()
    }
}
