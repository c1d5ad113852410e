use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cadence_core::{FrequencyDetector, FrequencyLabel, NaiveDateTime};

/// Instruction for how the next `detect` call should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectBehavior {
    /// Report the provided label.
    Return(FrequencyLabel),
    /// Report that nothing was recognized.
    Undetermined,
}

impl DetectBehavior {
    fn outcome(&self) -> Option<FrequencyLabel> {
        match self {
            Self::Return(label) => Some(label.clone()),
            Self::Undetermined => None,
        }
    }
}

#[derive(Debug)]
struct InternalState {
    queued: VecDeque<DetectBehavior>,
    otherwise: DetectBehavior,
    calls: Vec<Vec<NaiveDateTime>>,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            queued: VecDeque::new(),
            otherwise: DetectBehavior::Undetermined,
            calls: Vec::new(),
        }
    }
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    // A panicking test thread must not hide the recorded calls from others.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive a [`ScriptedDetector`].
#[derive(Debug, Clone)]
pub struct ScriptController {
    state: Arc<Mutex<InternalState>>,
}

impl ScriptController {
    /// Queue a behavior for the next unanswered `detect` call.
    pub fn push_behavior(&self, behavior: DetectBehavior) {
        lock(&self.state).queued.push_back(behavior);
    }

    /// Behavior used once the queue is drained. Defaults to `Undetermined`.
    pub fn set_otherwise(&self, behavior: DetectBehavior) {
        lock(&self.state).otherwise = behavior;
    }

    /// Every input received so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<NaiveDateTime>> {
        lock(&self.state).calls.clone()
    }

    /// Number of `detect` calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.state).calls.len()
    }

    /// Forget recorded calls and queued behaviors.
    pub fn reset(&self) {
        let mut guard = lock(&self.state);
        guard.queued.clear();
        guard.calls.clear();
    }
}

/// Detector whose answers are scripted by a [`ScriptController`].
#[derive(Debug)]
pub struct ScriptedDetector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl ScriptedDetector {
    /// Create a scripted detector and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, ScriptController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let detector = Arc::new(Self {
            name,
            state: Arc::clone(&state),
        });
        (detector, ScriptController { state })
    }
}

impl FrequencyDetector for ScriptedDetector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        let mut guard = lock(&self.state);
        guard.calls.push(dates.to_vec());
        match guard.queued.pop_front() {
            Some(behavior) => behavior.outcome(),
            None => guard.otherwise.outcome(),
        }
    }
}
