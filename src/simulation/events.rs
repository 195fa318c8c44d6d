//! Events produced by the integrator and the outcome classification
//!
//! A step emits at most two events: a planet collision suppresses everything
//! else in its step, while target arrival and out-of-bounds may co-occur
//! (a target placed at the escape radius). All three end a resolved run.

use super::states::{NVec3, ShotState};

/// Terminal condition observed during a single step.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsEvent {
    /// Ship overlapped a planet. `planet_index` is the first colliding
    /// planet in level order; the pre-step position is reported.
    PlanetCollision { planet_index: usize, position: NVec3 },
    /// Ship entered the target volume.
    TargetReached { position: NVec3 },
    /// Ship crossed the escape radius.
    OutOfBounds { position: NVec3 },
}

/// New state plus whatever events the step produced (0..=2).
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub state: ShotState,
    pub events: Vec<PhysicsEvent>,
}

/// Everything recorded over one driven run: final state, every intermediate
/// state in chronological order (index 0 is the initial state), and the flat
/// event log.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub final_state: ShotState,
    pub trajectory: Vec<ShotState>,
    pub events: Vec<PhysicsEvent>,
}

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Flying,
}

impl Outcome {
    /// Classify a resolved run from its event log.
    ///
    /// Target arrival terminates a resolved run, so a `TargetReached` can
    /// only sit in the final step's emissions; a trailing `OutOfBounds`
    /// from that same step must not demote the win.
    pub fn from_events(events: &[PhysicsEvent]) -> Self {
        if events
            .iter()
            .any(|e| matches!(e, PhysicsEvent::TargetReached { .. }))
        {
            return Outcome::Won;
        }
        match events.last() {
            Some(PhysicsEvent::PlanetCollision { .. }) | Some(PhysicsEvent::OutOfBounds { .. }) => {
                Outcome::Lost
            }
            _ => Outcome::Flying,
        }
    }
}

/// Resolver return value: the classified run.
#[derive(Debug, Clone)]
pub struct ShotResult {
    pub outcome: Outcome,
    pub trajectory: Vec<ShotState>,
    pub events: Vec<PhysicsEvent>,
}
