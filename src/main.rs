use gravshot::{simulate_shot, NVec3, Outcome, PhysicsEvent, Scenario, ScenarioConfig, ShotParams};
use gravshot::{find_level, sweep, SweepGrid};

use anyhow::Result;
use clap::{Parser, Subcommand};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Orbital slingshot physics driver: single shots, grid sweeps, level finding")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one shot against a level file and print the result
    Shoot {
        #[arg(short, default_value = "first_slingshot.yaml")]
        file_name: String,
        #[arg(long, default_value_t = 0.0)]
        pitch: f64,
        #[arg(long, default_value_t = 0.0)]
        yaw: f64,
        #[arg(long, default_value_t = 15.0)]
        power: f64,
        /// Override the scenario's step size
        #[arg(long)]
        delta: Option<f64>,
        /// Override the scenario's time horizon
        #[arg(long)]
        horizon: Option<f64>,
    },
    /// Sweep the aim/power grid and report the level's win rate
    Sweep {
        #[arg(short, default_value = "first_slingshot.yaml")]
        file_name: String,
        /// Also list every winning pitch/yaw/power combination
        #[arg(long)]
        winners: bool,
        #[arg(long)]
        pitch_step: Option<f64>,
        #[arg(long)]
        yaw_step: Option<f64>,
        #[arg(long)]
        power_min: Option<f64>,
        #[arg(long)]
        power_max: Option<f64>,
        #[arg(long)]
        power_step: Option<f64>,
    },
    /// Generate random levels until one matches a difficulty target
    Find {
        /// Accept the first level with 0 < success rate <= this percentage
        #[arg(long, default_value_t = 10.0)]
        target_rate: f64,
        #[arg(long, default_value_t = 3)]
        max_planets: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 50)]
        attempts: u32,
    },
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("levels")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn fmt_vec(v: &NVec3) -> String {
    format!("[{:.2}, {:.2}, {:.2}]", v.x, v.y, v.z)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Shoot {
            file_name,
            pitch,
            yaw,
            power,
            delta,
            horizon,
        } => {
            let scenario = Scenario::build_scenario(load_scenario_from_yaml(&file_name)?);
            let shot = ShotParams {
                delta: delta.unwrap_or(scenario.shot.delta),
                horizon: horizon.unwrap_or(scenario.shot.horizon),
            };
            let result = simulate_shot(&scenario.level, pitch, yaw, power, &scenario.params, &shot);

            println!("Level: {}", scenario.level.name);
            println!("Aim: pitch={pitch:.2}, yaw={yaw:.2}, power={power}");
            println!(
                "Result: {}",
                match result.outcome {
                    Outcome::Won => "won",
                    Outcome::Lost => "lost",
                    Outcome::Flying => "flying",
                }
            );
            for e in &result.events {
                match e {
                    PhysicsEvent::PlanetCollision {
                        planet_index,
                        position,
                    } => println!(
                        "  - planet collision at {} (planet {planet_index})",
                        fmt_vec(position)
                    ),
                    PhysicsEvent::TargetReached { position } => {
                        println!("  - target reached at {}", fmt_vec(position))
                    }
                    PhysicsEvent::OutOfBounds { position } => {
                        println!("  - out of bounds at {}", fmt_vec(position))
                    }
                }
            }
            let final_pos = &result.trajectory[result.trajectory.len() - 1].x;
            println!("Final position: {}", fmt_vec(final_pos));
            println!("Trajectory points: {}", result.trajectory.len());
        }

        Command::Sweep {
            file_name,
            winners,
            pitch_step,
            yaw_step,
            power_min,
            power_max,
            power_step,
        } => {
            let scenario = Scenario::build_scenario(load_scenario_from_yaml(&file_name)?);
            let d = SweepGrid::default();
            let grid = SweepGrid {
                pitch_step: pitch_step.unwrap_or(d.pitch_step),
                yaw_step: yaw_step.unwrap_or(d.yaw_step),
                power_min: power_min.unwrap_or(d.power_min),
                power_max: power_max.unwrap_or(d.power_max),
                power_step: power_step.unwrap_or(d.power_step),
                ..d
            };

            let t0 = Instant::now();
            let report = sweep(&scenario.level, &scenario.params, &scenario.shot, &grid);
            let elapsed = t0.elapsed().as_secs_f64();

            println!("Level: {}", scenario.level.name);
            println!(
                "Tested {} combinations, found {} winning shots ({:.1}% success rate) in {:.2} s",
                report.tests,
                report.wins,
                report.success_rate(),
                elapsed
            );
            if winners {
                for w in &report.winners {
                    println!(
                        "  pitch={:.2}, yaw={:.2}, power={}",
                        w.pitch, w.yaw, w.power
                    );
                }
            }
        }

        Command::Find {
            target_rate,
            max_planets,
            seed,
            attempts,
        } => {
            let params = Default::default();
            let shot = Default::default();
            let grid = SweepGrid::default();

            match find_level(
                target_rate,
                max_planets,
                seed,
                attempts,
                &params,
                &shot,
                &grid,
            ) {
                Some(found) => {
                    println!(
                        "Attempt {}: found match, success rate {:.3}%",
                        found.attempts,
                        found.report.success_rate()
                    );
                    println!("  Planets: {}", found.level.planets.len());
                    println!("  Ship: {}", fmt_vec(&found.level.ship_start));
                    println!("  Target: {}", fmt_vec(&found.level.target));
                    for (i, p) in found.level.planets.iter().enumerate() {
                        println!(
                            "    P{}: pos={}, r={:.1}, m={:.1}",
                            i + 1,
                            fmt_vec(&p.x),
                            p.radius,
                            p.m
                        );
                    }
                }
                None => println!("No level within target rate after {attempts} attempts"),
            }
        }
    }

    Ok(())
}
