//! The `Sim` struct and its tick loop.

use st_agent::{AgentRngs, AgentStore, SteeringAgent};
use st_behavior::{BehaviorModel, NearestPointProvider, SteerContext, VectorFieldSampler};
use st_core::{AgentRng, BoundaryPolicy, SimConfig, Tick};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` holds all simulation state and drives the two-phase tick loop:
///
/// 1. **Snapshot**: capture every agent's settled position and velocity as
///    the neighbor list for this tick.
/// 2. **Behavior phase** (optionally parallel with the `parallel` feature):
///    call [`BehaviorModel::steer_agent`] for each agent.  Each call writes
///    only that agent's accumulator and reads only the snapshot.
/// 3. **Integrate phase** (sequential, ascending `AgentId`): `update()` every
///    agent, then apply the boundary policy.
///
/// No agent is integrated until every agent has been steered, which is what
/// makes the behavior phase order-independent.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Global configuration (bounds, boundary policy, total ticks, seed, …).
    pub config: SimConfig,

    /// The next tick to be processed.
    pub tick: Tick,

    /// All agents, indexed by `AgentId`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The behavior model.  Called once per agent per tick.
    pub behavior: B,

    /// Path exposed to behaviors through `SteerContext::path`.
    pub path: Option<Box<dyn NearestPointProvider>>,

    /// Flow field exposed to behaviors through `SteerContext::field`.
    pub field: Option<Box<dyn VectorFieldSampler>>,

    /// Dedicated pool when `config.num_threads` is set; otherwise Rayon's
    /// global pool is used.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        debug!(from = %self.tick, to = %end, agents = self.agents.len(), "sim run starting");

        while self.tick < end {
            self.step(observer);
        }

        observer.on_sim_end(self.tick);
        info!(final_tick = %self.tick, agents = self.agents.len(), "sim run complete");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for hosts that pace frames themselves.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);

        self.behavior_phase(now);
        // ── Barrier: every accumulator is complete past this point. ───────
        self.integrate_phase();

        observer.on_tick_end(now, &self.agents);
        trace!(tick = %now, "tick complete");
        self.tick = now.next();
    }

    /// Accumulate steering forces for every agent against a snapshot of the
    /// previous tick's state.
    fn behavior_phase(&mut self, now: Tick) {
        let neighbors = self.agents.snapshot();
        let ctx = SteerContext::new(now, self.config.bounds, &neighbors)
            .with_path(self.path.as_deref())
            .with_field(self.field.as_deref());

        // Explicit field borrows so the borrow checker sees disjoint access.
        let behavior = &self.behavior;
        let agents   = &mut self.agents.agents;
        let rngs     = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        steer_all(agents, rngs, behavior, &ctx);

        #[cfg(feature = "parallel")]
        match &self.pool {
            Some(pool) => pool.install(|| steer_all(agents, rngs, behavior, &ctx)),
            None => steer_all(agents, rngs, behavior, &ctx),
        }
    }

    /// Integrate every agent, then apply the boundary policy.
    ///
    /// `Bounce` steers after `update()`, so its force lands in the
    /// accumulator that the next tick's behavior phase adds to.
    fn integrate_phase(&mut self) {
        let bounds = self.config.bounds;
        let boundary = self.config.boundary;

        for agent in &mut self.agents.agents {
            agent.update();
            match boundary {
                BoundaryPolicy::Toroid => agent.toroid(bounds),
                BoundaryPolicy::Bounce { margin } => agent.bounce(bounds, margin),
                BoundaryPolicy::Open => {}
            }
        }
    }
}

// ── Behavior phase helpers ────────────────────────────────────────────────────

/// Run `behavior` for every agent with its own RNG.
#[cfg(not(feature = "parallel"))]
fn steer_all<B: BehaviorModel>(
    agents:   &mut [SteeringAgent],
    rngs:     &mut [AgentRng],
    behavior: &B,
    ctx:      &SteerContext<'_>,
) {
    for (agent, rng) in agents.iter_mut().zip(rngs.iter_mut()) {
        behavior.steer_agent(agent, ctx, rng);
    }
}

/// Run `behavior` for every agent with its own RNG, on the current Rayon
/// pool.  Each worker gets disjoint `&mut` agent/RNG pairs.
#[cfg(feature = "parallel")]
fn steer_all<B: BehaviorModel>(
    agents:   &mut [SteeringAgent],
    rngs:     &mut [AgentRng],
    behavior: &B,
    ctx:      &SteerContext<'_>,
) {
    use rayon::prelude::*;

    agents
        .par_iter_mut()
        .zip(rngs.par_iter_mut())
        .for_each(|(agent, rng)| behavior.steer_agent(agent, ctx, rng));
}
