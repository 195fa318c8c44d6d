//! Core state types for the slingshot simulation.
//!
//! Defines the static level description and the per-shot moving state:
//! - `Planet` / `Level` – the immutable field a shot flies through
//! - `ShotState` – position and velocity of the ship
//!
//! Planet order inside a `Level` is significant: it is the tie-break for
//! which collision is reported when several planets could collide in the
//! same step.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Normalize `v`, returning the zero vector when its length is ~0.
///
/// The integrator may be handed a ship coincident with a planet center;
/// direction math must stay finite there instead of producing NaNs.
pub fn normalize_or_zero(v: NVec3) -> NVec3 {
    v.try_normalize(1.0e-12).unwrap_or_else(NVec3::zeros)
}

/// A spherical mass body. Immutable for the duration of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub x: NVec3, // position
    pub radius: f64,
    pub m: f64, // mass
}

/// Static description of one level: where the ship starts, where the target
/// volume sits, and the planets in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub ship_start: NVec3,
    pub target: NVec3,
    pub planets: Vec<Planet>, // order is collision priority
}

/// Moving state of the ship. Each integrator step returns a new value
/// rather than mutating in place, so runs stay independent.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotState {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}
