//! Fixed-step gravity integrator for a single shot
//!
//! Advances a `ShotState` one step under the combined pull of every planet
//! using semi-implicit Euler: the velocity is kicked by this step's forces
//! before the position drifts on it. That ordering keeps orbital energy
//! bounded over long horizons, which matters for slingshot paths that loop
//! a planet many times.

use super::events::{PhysicsEvent, StepResult};
use super::params::SimParams;
use super::states::{normalize_or_zero, Level, ShotState};

/// Advance `state` by one step of `delta` seconds.
///
/// Per call, in order: collision check then inverse-square kick for each
/// planet in level order, drift, target check, bounds check. The caller
/// supplies `delta` each call, so frame loops and coarse batch sweeps share
/// the same primitive.
pub fn step(state: &ShotState, level: &Level, params: &SimParams, delta: f64) -> StepResult {
    let mut x = state.x;
    let mut v = state.v;

    // Kick: v_n+1 = v_n + sum_i a_i * dt, planets in level order.
    for (i, planet) in level.planets.iter().enumerate() {
        let r = planet.x - x; // displacement ship -> planet
        let dist_sq = r.norm_squared();
        let dist = dist_sq.sqrt();

        // An overlapped planet halts the step before any update from it is
        // applied: the first match wins, later planets are never examined,
        // and the position is not integrated. Kicks already accumulated
        // from earlier planets this step are kept.
        if dist <= planet.radius + params.ship_radius {
            return StepResult {
                state: ShotState { x, v },
                events: vec![PhysicsEvent::PlanetCollision {
                    planet_index: i,
                    position: x,
                }],
            };
        }

        // a = G * m / d^2 toward the planet (unit ship mass)
        let pull = params.G * planet.m / dist_sq;
        v += normalize_or_zero(r) * (pull * delta);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    x += v * delta;

    let mut events = Vec::new();

    // Target arrival and escape may both hold in the same step; both are
    // reported, target first.
    if (x - level.target).norm() < params.target_radius + params.ship_radius {
        events.push(PhysicsEvent::TargetReached { position: x });
    }
    if x.norm() > params.max_distance {
        events.push(PhysicsEvent::OutOfBounds { position: x });
    }

    StepResult {
        state: ShotState { x, v },
        events,
    }
}
