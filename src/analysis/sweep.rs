//! Aim/power grid sweeps for level tuning
//!
//! Resolves every combination in a grid of pitch, yaw, and power values and
//! reports how many shots win. Each shot owns its own state and event log,
//! so the grid fans out across worker threads with no coordination; results
//! are reduced back in grid order to keep reports deterministic.

use rayon::prelude::*;

use crate::simulation::events::Outcome;
use crate::simulation::params::SimParams;
use crate::simulation::shot::{simulate_shot, ShotParams};
use crate::simulation::states::Level;

/// Inclusive min/max/step ranges over the three aim dimensions.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub pitch_min: f64,
    pub pitch_max: f64,
    pub pitch_step: f64,
    pub yaw_min: f64,
    pub yaw_max: f64,
    pub yaw_step: f64,
    pub power_min: f64,
    pub power_max: f64,
    pub power_step: f64,
}

impl Default for SweepGrid {
    /// The tuning grid: full pitch/yaw range at 0.2 rad, powers 5..=25.
    /// Powers below 5 rarely clear the start region, so they are skipped.
    fn default() -> Self {
        Self {
            pitch_min: -std::f64::consts::FRAC_PI_2,
            pitch_max: std::f64::consts::FRAC_PI_2,
            pitch_step: 0.2,
            yaw_min: -std::f64::consts::PI,
            yaw_max: std::f64::consts::PI,
            yaw_step: 0.2,
            power_min: 5.0,
            power_max: 25.0,
            power_step: 1.0,
        }
    }
}

/// One aim/power combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub pitch: f64,
    pub yaw: f64,
    pub power: f64,
}

/// Sweep statistics: shots resolved, wins, and the winning combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub tests: usize,
    pub wins: usize,
    pub winners: Vec<Aim>,
}

impl SweepReport {
    /// Win percentage over the grid (0 when the grid is empty).
    pub fn success_rate(&self) -> f64 {
        if self.tests == 0 {
            0.0
        } else {
            self.wins as f64 / self.tests as f64 * 100.0
        }
    }
}

/// Inclusive float range matching the sweep loops of the tuning scripts:
/// `min, min+step, ...` while the value stays <= max.
fn frange(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut v = min;
    while v <= max {
        out.push(v);
        v += step;
    }
    out
}

/// Resolve every grid combination against `level` and tally the wins.
///
/// Parallel over the power axis; within one power the pitch/yaw loops run in
/// grid order, and the per-power tallies are concatenated in power order, so
/// two sweeps of the same level produce identical reports.
pub fn sweep(level: &Level, params: &SimParams, shot: &ShotParams, grid: &SweepGrid) -> SweepReport {
    let powers = frange(grid.power_min, grid.power_max, grid.power_step);
    let pitches = frange(grid.pitch_min, grid.pitch_max, grid.pitch_step);
    let yaws = frange(grid.yaw_min, grid.yaw_max, grid.yaw_step);

    let per_power: Vec<(usize, Vec<Aim>)> = powers
        .par_iter()
        .map(|&power| {
            let mut tests = 0;
            let mut winners = Vec::new();
            for &pitch in &pitches {
                for &yaw in &yaws {
                    tests += 1;
                    let result = simulate_shot(level, pitch, yaw, power, params, shot);
                    if result.outcome == Outcome::Won {
                        winners.push(Aim { pitch, yaw, power });
                    }
                }
            }
            (tests, winners)
        })
        .collect();

    let mut report = SweepReport {
        tests: 0,
        wins: 0,
        winners: Vec::new(),
    };
    for (tests, winners) in per_power {
        report.tests += tests;
        report.wins += winners.len();
        report.winners.extend(winners);
    }
    report
}
