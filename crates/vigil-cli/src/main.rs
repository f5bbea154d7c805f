//! Vigil demo - headless guard scenario.
//!
//! Drives the reference guard agent tick by tick: the guard patrols, a
//! target wanders into view, the guard fetches the tagging item and closes
//! in. The goal/plan/fact dump is printed as the scenario unfolds.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vigil_core::TickContext;
use vigil_goap::AgentConfig;
use vigil_guard::{guard_agent, GuardContext, RangeVision};
use vigil_nav::{SteeringLocomotor, Vec2};

#[derive(Parser)]
#[command(name = "vigil-demo")]
#[command(about = "Headless GOAP guard scenario", version)]
struct Cli {
    /// Ticks to simulate
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Minimum seconds between replans (0 disables throttling)
    #[arg(long, default_value_t = 0.2)]
    replan_interval: f32,

    /// Tick at which the target wanders in
    #[arg(long, default_value_t = 80)]
    target_appears: u64,

    /// Print the agent dump every N ticks (0 disables)
    #[arg(long, default_value_t = 20)]
    dump_every: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut world = GuardContext {
        locomotion: SteeringLocomotor::new(Vec2::ZERO, 4.0, 0.5),
        vision: RangeVision::new(12.0),
        target: None,
        item: Some(Vec2::new(-6.0, 2.0)),
        patrol_route: vec![
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, -4.0),
        ],
        patrol_index: 0,
    };

    let mut agent = guard_agent(AgentConfig {
        min_seconds_between_replans: cli.replan_interval,
    })?;

    for tick in 0..cli.ticks {
        world.locomotion.update(cli.dt);

        if tick == cli.target_appears {
            world.target = Some(Vec2::new(9.0, 0.0));
            tracing::info!(tick, "target spawned");
        }

        // Sensors refresh before the agent rebuilds its state.
        let origin = world.locomotion.position();
        world.vision.update(origin, world.target);

        agent.tick(
            &TickContext {
                tick,
                dt_seconds: cli.dt,
                time_seconds: tick as f64 * f64::from(cli.dt),
            },
            &mut world,
        );

        if cli.dump_every != 0 && tick % cli.dump_every == 0 {
            println!("tick {tick}");
            println!("{}", agent.describe(&world));
        }
    }

    println!("final state after {} ticks", cli.ticks);
    println!("{}", agent.describe(&world));
    Ok(())
}
