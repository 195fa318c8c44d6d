//! Random level generation and difficulty search
//!
//! `generate_level` places 1..=N planets on a jittered ring around the
//! midpoint of the ship-to-target path, so gravity always interferes with
//! the obvious straight shot. `find_level` is a rejection loop over it:
//! keep generating until a level's sweep success rate lands at or below a
//! target percentage, with a fixed retry cap.
//!
//! Both take a seeded PCG so a (seed, attempt) pair always names the same
//! level.

use std::f64::consts::TAU;

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::analysis::sweep::{sweep, SweepGrid, SweepReport};
use crate::simulation::params::SimParams;
use crate::simulation::shot::ShotParams;
use crate::simulation::states::{Level, NVec3, Planet};

/// Generate a random level: ship at the origin, target 30–60 units down
/// -z, planets ringed around the path midpoint. Planet mass scales with
/// radius (m = 15 r), matching the shipped hand-tuned levels.
pub fn generate_level(id: u32, max_planets: u32, rng: &mut Pcg32) -> Level {
    let ship_start = NVec3::zeros();
    let span = rng.random_range(30.0..60.0);
    let target = NVec3::new(0.0, 0.0, -span);
    let mid = (ship_start + target) * 0.5;

    let count = rng.random_range(1..=max_planets.max(1));
    let mut planets = Vec::with_capacity(count as usize);
    for i in 0..count {
        // evenly spaced ring angles, jittered off the exact circle
        let angle = i as f64 / count as f64 * TAU;
        let ring = rng.random_range(3.0..20.0);
        let x = mid.x + angle.cos() * ring + rng.random_range(-3.0..3.0);
        let y = rng.random_range(-3.0..3.0);
        let z = mid.z + angle.sin() * ring + rng.random_range(-3.0..3.0);

        let radius = rng.random_range(1.5..7.0);
        planets.push(Planet {
            x: NVec3::new(x, y, z),
            radius,
            m: radius * 15.0,
        });
    }

    Level {
        id,
        name: format!("Generated Level {id}"),
        ship_start,
        target,
        planets,
    }
}

/// A generated level that met the difficulty target, with its sweep report
/// and the attempt number that produced it.
#[derive(Debug, Clone)]
pub struct FinderOutcome {
    pub level: Level,
    pub report: SweepReport,
    pub attempts: u32,
}

/// Search for a level whose sweep success rate is winnable but no easier
/// than `target_rate` percent. Returns `None` once the retry cap is hit.
#[allow(clippy::too_many_arguments)]
pub fn find_level(
    target_rate: f64,
    max_planets: u32,
    seed: u64,
    max_attempts: u32,
    params: &SimParams,
    shot: &ShotParams,
    grid: &SweepGrid,
) -> Option<FinderOutcome> {
    let mut rng = Pcg32::seed_from_u64(seed);

    for attempt in 1..=max_attempts {
        let level = generate_level(attempt, max_planets, &mut rng);
        let report = sweep(&level, params, shot, grid);
        let rate = report.success_rate();
        info!(
            "attempt {attempt}: {} planets, success rate {rate:.3}%",
            level.planets.len()
        );

        if rate > 0.0 && rate <= target_rate {
            return Some(FinderOutcome {
                level,
                report,
                attempts: attempt,
            });
        }
    }

    None
}
