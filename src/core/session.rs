use crate::utils::error::FinderError;

/// UI-facing search lifecycle. Transitions are driven solely by the two
/// collaborator results, so the presentation state is reproducible without
/// any view plumbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    ResultsReady { count: usize },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// A new location request starts; any prior result is abandoned.
    pub fn begin_search(&mut self) {
        self.phase = Phase::Searching;
    }

    /// The search completed and a fresh list model of `count` entries
    /// replaced whatever was shown before.
    pub fn results_ready(&mut self, count: usize) {
        self.phase = Phase::ResultsReady { count };
    }

    /// A collaborator failed; terminal for this attempt.
    pub fn fail(&mut self, error: &FinderError) {
        self.phase = Phase::Error {
            message: error.user_friendly_message(),
        };
    }

    /// The spinner runs only while a request is in flight.
    pub fn spinner_visible(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// The sort toggle is usable only once results are on screen.
    pub fn sort_enabled(&self) -> bool {
        matches!(self.phase, Phase::ResultsReady { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
