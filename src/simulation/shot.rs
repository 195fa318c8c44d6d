//! Shot resolution: aim and power to a classified trajectory
//!
//! The integrator's `step` is the only place physics lives; everything here
//! is a driving loop over it. `ShotSim` is the step-wise driver a frame loop
//! can animate, `simulate_shot` runs a shot to completion for batch
//! analysis, and `preview` produces the aiming trajectory that keeps
//! integrating through the target marker.

use nalgebra::Rotation3;

use super::events::{Outcome, PhysicsEvent, RunResult, ShotResult, StepResult};
use super::integrator;
use super::params::SimParams;
use super::states::{Level, NVec3, ShotState};

/// Step schedule for a resolved shot.
#[derive(Debug, Clone)]
pub struct ShotParams {
    pub delta: f64,   // seconds per step
    pub horizon: f64, // give up and report Flying past this many seconds
}

impl Default for ShotParams {
    fn default() -> Self {
        Self {
            delta: 0.016,
            horizon: 60.0,
        }
    }
}

/// Launch direction from aim angles: the canonical forward vector (0, 0, 1)
/// rotated by pitch about the lateral (x) axis, then yaw about the vertical
/// (y) axis. The order is fixed; pitch and yaw do not commute.
pub fn launch_direction(pitch: f64, yaw: f64) -> NVec3 {
    let rot = Rotation3::from_axis_angle(&NVec3::y_axis(), yaw)
        * Rotation3::from_axis_angle(&NVec3::x_axis(), pitch);
    rot * NVec3::new(0.0, 0.0, 1.0)
}

/// Initial velocity from aim and power. Power is floored at 1 so a zero
/// charge still launches a moving ship.
pub fn initial_velocity(pitch: f64, yaw: f64, power: f64) -> NVec3 {
    launch_direction(pitch, yaw) * power.max(1.0)
}

/// Step-wise driver owning one shot's state. A frame loop calls `step`
/// directly; `run` and `preview` are canned loops for analysis and aiming.
pub struct ShotSim<'a> {
    level: &'a Level,
    params: SimParams,
    state: ShotState,
}

impl<'a> ShotSim<'a> {
    pub fn new(level: &'a Level, params: SimParams, state: ShotState) -> Self {
        Self {
            level,
            params,
            state,
        }
    }

    /// Start a shot at the level's ship start with the given aim and power.
    pub fn from_aim(level: &'a Level, params: SimParams, pitch: f64, yaw: f64, power: f64) -> Self {
        let state = ShotState {
            x: level.ship_start,
            v: initial_velocity(pitch, yaw, power),
        };
        Self::new(level, params, state)
    }

    pub fn state(&self) -> &ShotState {
        &self.state
    }

    /// Advance one step and adopt the new state.
    pub fn step(&mut self, delta: f64) -> StepResult {
        let result = integrator::step(&self.state, self.level, &self.params, delta);
        self.state = result.state.clone();
        result
    }

    /// Drive to the first terminal event or until the horizon is exhausted.
    pub fn run(&mut self, shot: &ShotParams) -> RunResult {
        let mut trajectory = vec![self.state.clone()];
        let mut events = Vec::new();
        let mut elapsed = 0.0;

        while elapsed < shot.horizon {
            let StepResult {
                state,
                events: step_events,
            } = self.step(shot.delta);
            trajectory.push(state);
            // every event kind is terminal, so any emission ends the run
            let terminal = !step_events.is_empty();
            events.extend(step_events);
            elapsed += shot.delta;
            if terminal {
                break;
            }
        }

        RunResult {
            final_state: self.state.clone(),
            trajectory,
            events,
        }
    }

    /// Integrate a fixed number of steps for aiming visualization.
    ///
    /// Unlike `run`, passing through the target volume does not stop the
    /// preview; only a collision or escape cuts the drawn path short.
    pub fn preview(&mut self, delta: f64, steps: usize) -> RunResult {
        let mut trajectory = vec![self.state.clone()];
        let mut events = Vec::new();

        for _ in 0..steps {
            let StepResult {
                state,
                events: step_events,
            } = self.step(delta);
            trajectory.push(state);
            let blocked = step_events.iter().any(|e| {
                matches!(
                    e,
                    PhysicsEvent::PlanetCollision { .. } | PhysicsEvent::OutOfBounds { .. }
                )
            });
            events.extend(step_events);
            if blocked {
                break;
            }
        }

        RunResult {
            final_state: self.state.clone(),
            trajectory,
            events,
        }
    }
}

/// Resolve one shot: derive the initial state from aim and power, drive the
/// integrator to completion or timeout, and classify the outcome.
///
/// Pure in its inputs: identical arguments produce bit-identical
/// trajectories, which batch analysis relies on.
pub fn simulate_shot(
    level: &Level,
    pitch: f64,
    yaw: f64,
    power: f64,
    params: &SimParams,
    shot: &ShotParams,
) -> ShotResult {
    let mut sim = ShotSim::from_aim(level, params.clone(), pitch, yaw, power);
    let run = sim.run(shot);
    ShotResult {
        outcome: Outcome::from_events(&run.events),
        trajectory: run.trajectory,
        events: run.events,
    }
}
