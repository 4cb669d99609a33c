//! flock: smallest demo for the rust_steer framework.
//!
//! Scatters a flock over the default 640×480 world and runs classic boids
//! (separation, cohesion, alignment) on a toroidal world.  Pass a JSON
//! `SimConfig` path as the first argument to override bounds, boundary
//! policy, tick count, or seed; missing fields keep their defaults.
//!
//! ```text
//! RUST_LOG=debug cargo run -p flock -- config.json
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use st_agent::{AgentParams, AgentStore, AgentStoreBuilder};
use st_behavior::Flocking;
use st_core::{SimConfig, Tick, Vec2};
use st_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:    usize = 60;
const AGENT_SIZE:     f32   = 5.0;
const AGENT_SPEED:    f32   = 3.0;
const SUMMARY_EVERY:  u64   = 60; // ticks between log lines

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the flock's centroid and mean speed every `every` ticks.
struct FlockSummary {
    every:     u64,
    summaries: usize,
}

impl FlockSummary {
    fn new(every: u64) -> Self {
        Self { every: every.max(1), summaries: 0 }
    }
}

impl SimObserver for FlockSummary {
    fn on_tick_end(&mut self, tick: Tick, agents: &AgentStore) {
        if tick.0 % self.every != 0 || agents.is_empty() {
            return;
        }
        let n = agents.len() as f32;
        let centroid = agents.iter().map(|a| a.position()).sum::<Vec2>() / n;
        let mean_speed = agents.iter().map(|a| a.velocity().length()).sum::<f32>() / n;

        info!(%tick, %centroid, mean_speed, "flock summary");
        self.summaries += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, summaries = self.summaries, "flock finished");
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    info!(
        agents   = AGENT_COUNT,
        ticks    = config.total_ticks,
        seed     = config.seed,
        width    = config.bounds.width,
        height   = config.bounds.height,
        "flock starting"
    );

    // 1. Scatter the flock.
    let (store, rngs) = AgentStoreBuilder::new(config.seed)
        .default_params(AgentParams::new(AGENT_SIZE, AGENT_SPEED))
        .scatter(AGENT_COUNT, config.bounds)
        .build()?;

    // 2. Build and run.
    let mut sim = SimBuilder::new(config, store, rngs, Flocking::default()).build()?;
    let mut obs = FlockSummary::new(SUMMARY_EVERY);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "simulation complete");

    // 3. Final positions table.
    println!("{:<8} {:>10} {:>10} {:>8}", "Agent", "x", "y", "speed");
    println!("{}", "-".repeat(40));
    for agent in sim.agents.iter().take(10) {
        let p = agent.position();
        println!(
            "{:<8} {:>10.2} {:>10.2} {:>8.3}",
            agent.id.0,
            p.x,
            p.y,
            agent.velocity().length(),
        );
    }
    if sim.agents.len() > 10 {
        println!("… {} more", sim.agents.len() - 10);
    }

    Ok(())
}
