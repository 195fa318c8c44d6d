//! Build fully-initialized runtime scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the resolver and the analysis tools:
//! - the static `Level` (planets in file order, cosmetic fields dropped)
//! - resolved `SimParams` (partial overrides merged onto defaults)
//! - resolved `ShotParams` (step size and horizon)

use crate::configuration::config::{PlanetConfig, ScenarioConfig};
use crate::simulation::params::SimParams;
use crate::simulation::shot::ShotParams;
use crate::simulation::states::{Level, NVec3, Planet};

/// A fully-initialized scenario: everything a run needs.
pub struct Scenario {
    pub level: Level,
    pub params: SimParams,
    pub shot: ShotParams,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Planets: map `PlanetConfig` -> runtime `Planet`, keeping file
        // order (it decides collision priority). Color is renderer-only.
        let planets: Vec<Planet> = cfg
            .level
            .planets
            .iter()
            .map(|pc: &PlanetConfig| Planet {
                x: NVec3::new(pc.position[0], pc.position[1], pc.position[2]),
                radius: pc.radius,
                m: pc.mass,
            })
            .collect();

        let l = &cfg.level;
        let level = Level {
            id: l.id,
            name: l.name.clone(),
            ship_start: NVec3::new(l.ship_start[0], l.ship_start[1], l.ship_start[2]),
            target: NVec3::new(
                l.target_position[0],
                l.target_position[1],
                l.target_position[2],
            ),
            planets,
        };

        // Simulation constants: overrides merged onto defaults
        let d = SimParams::default();
        let s = &cfg.simulation;
        let params = SimParams {
            G: s.gravity_constant.unwrap_or(d.G),
            ship_radius: s.ship_radius.unwrap_or(d.ship_radius),
            target_radius: s.target_radius.unwrap_or(d.target_radius),
            max_distance: s.max_distance.unwrap_or(d.max_distance),
        };

        // Step schedule
        let ds = ShotParams::default();
        let shot = ShotParams {
            delta: cfg.shot.delta.unwrap_or(ds.delta),
            horizon: cfg.shot.horizon.unwrap_or(ds.horizon),
        };

        Self {
            level,
            params,
            shot,
        }
    }
}
