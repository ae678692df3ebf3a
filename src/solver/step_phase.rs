/// Where a rank is inside one distributed step.
/// Phases run in declaration order, `SendsDrained` of step `k` is the
/// starting point of step `k + 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepPhase {
    EdgesSampled,
    SendsPosted,
    InteriorDone,
    RightEdgeClosed,
    LeftEdgeClosed,
    Rotated,
    SendsDrained,
}

impl StepPhase {
    /// The phase that follows this one, wrapping into the next step.
    pub fn next(self) -> Self {
        match self {
            StepPhase::EdgesSampled => StepPhase::SendsPosted,
            StepPhase::SendsPosted => StepPhase::InteriorDone,
            StepPhase::InteriorDone => StepPhase::RightEdgeClosed,
            StepPhase::RightEdgeClosed => StepPhase::LeftEdgeClosed,
            StepPhase::LeftEdgeClosed => StepPhase::Rotated,
            StepPhase::Rotated => StepPhase::SendsDrained,
            StepPhase::SendsDrained => StepPhase::EdgesSampled,
        }
    }
}

/// Tracks the phase of a rank across steps.
#[derive(Debug)]
pub(crate) struct PhaseTracker {
    rank: usize,
    steps_started: usize,
    phase: StepPhase,
}

impl PhaseTracker {
    pub(crate) fn new(rank: usize) -> Self {
        PhaseTracker {
            rank,
            steps_started: 0,
            phase: StepPhase::SendsDrained,
        }
    }

    #[inline]
    pub(crate) fn enter(&mut self, phase: StepPhase) {
        debug_assert_eq!(
            self.phase.next(),
            phase,
            "rank {} step {} out of order",
            self.rank,
            self.steps_started
        );
        if phase == StepPhase::EdgesSampled {
            self.steps_started += 1;
        }
        self.phase = phase;
        tracing::trace!(
            rank = self.rank,
            step = self.steps_started - 1,
            phase = ?phase
        );
    }
}
