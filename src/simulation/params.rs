//! Numerical and physical parameters for the simulation
//!
//! `SimParams` holds the per-run constants:
//! - gravitational constant (`G`),
//! - ship and target collision radii,
//! - escape distance past which a shot counts as lost
//!
//! Resolved once per run by merging caller overrides onto these defaults.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct SimParams {
    pub G: f64, // gravitational constant
    pub ship_radius: f64,
    pub target_radius: f64,
    pub max_distance: f64, // out-of-bounds radius from the origin
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            G: 20.0,
            ship_radius: 0.5,
            target_radius: 1.5,
            max_distance: 100.0,
        }
    }
}
