//! Configuration types for loading levels from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! playable scenario. A scenario consists of:
//!
//! - [`LevelConfig`]      – the static field: ship start, target, planets
//! - [`SimulationConfig`] – optional physical-constant overrides
//! - [`ShotConfig`]       – optional step size / horizon overrides
//! - [`ScenarioConfig`]   – top-level wrapper used to load a file
//!
//! # YAML format
//! An example level YAML matching these types:
//!
//! ```yaml
//! level:
//!   id: 1
//!   name: "The First Slingshot"
//!   ship_start: [0.0, 0.0, 15.0]
//!   target_position: [0.0, 0.0, -15.0]
//!   camera_start: [20.0, 10.0, 20.0]   # cosmetic, ignored here
//!   planets:
//!     - position: [0.0, 0.0, 0.0]
//!       radius: 4.0
//!       mass: 50.0
//!       color: "#4f86f7"               # cosmetic, ignored here
//!
//! simulation:            # optional, partial
//!   gravity_constant: 20.0
//!   max_distance: 100.0
//!
//! shot:                  # optional, partial
//!   delta: 0.016
//!   horizon: 60.0
//! ```
//!
//! Field names also accept the camelCase spelling used by the original
//! level files (`shipStart`, `targetPosition`, ...), so those can be pasted
//! in unchanged. `color` and `camera_start` exist for the renderer; the
//! simulation never reads them.

use serde::Deserialize;

/// One spherical mass body as written in a level file.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub position: [f64; 3],
    pub radius: f64,
    pub mass: f64,
    pub color: Option<String>, // renderer-only
}

/// The static field of one level.
#[derive(Deserialize, Debug, Clone)]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    #[serde(alias = "shipStart")]
    pub ship_start: [f64; 3],
    #[serde(alias = "targetPosition")]
    pub target_position: [f64; 3],
    #[serde(default)]
    pub planets: Vec<PlanetConfig>, // order is collision priority; may be empty
    #[serde(alias = "cameraStart")]
    pub camera_start: Option<[f64; 3]>, // renderer-only
}

/// Optional overrides for the physical constants. Anything omitted keeps
/// its default (G = 20, ship 0.5, target 1.5, bounds 100).
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimulationConfig {
    #[serde(alias = "gravityConstant")]
    pub gravity_constant: Option<f64>,
    #[serde(alias = "shipRadius")]
    pub ship_radius: Option<f64>,
    #[serde(alias = "targetRadius")]
    pub target_radius: Option<f64>,
    #[serde(alias = "maxDistance")]
    pub max_distance: Option<f64>,
}

/// Optional overrides for the resolver's step schedule
/// (delta = 0.016, horizon = 60 when omitted).
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ShotConfig {
    pub delta: Option<f64>,
    pub horizon: Option<f64>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub level: LevelConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub shot: ShotConfig,
}
