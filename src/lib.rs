pub mod simulation;
pub mod configuration;
pub mod analysis;

pub use simulation::states::{normalize_or_zero, Level, NVec3, Planet, ShotState};
pub use simulation::params::SimParams;
pub use simulation::events::{Outcome, PhysicsEvent, RunResult, ShotResult, StepResult};
pub use simulation::integrator::step;
pub use simulation::shot::{initial_velocity, launch_direction, simulate_shot, ShotParams, ShotSim};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    LevelConfig, PlanetConfig, ScenarioConfig, ShotConfig, SimulationConfig,
};

pub use analysis::levelgen::{find_level, generate_level, FinderOutcome};
pub use analysis::sweep::{sweep, Aim, SweepGrid, SweepReport};
