//! Fluent builder for constructing a [`Sim`].

use st_agent::{AgentRngs, AgentStore};
use st_behavior::{BehaviorModel, NearestPointProvider, VectorFieldSampler};
use st_core::{SimConfig, Tick};
use tracing::info;
#[cfg(not(feature = "parallel"))]
use tracing::warn;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: bounds, boundary policy, total ticks, seed, …
/// - [`AgentStore`] + [`AgentRngs`]: from [`st_agent::AgentStoreBuilder`]
/// - `B: BehaviorModel`: the per-tick steering
///
/// # Optional inputs
///
/// | Method        | Default                                    |
/// |---------------|--------------------------------------------|
/// | `.path(p)`    | None: `SteerContext::path` is `None`      |
/// | `.field(f)`   | None: `SteerContext::field` is `None`     |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(config.seed)
///     .scatter(200, config.bounds)
///     .build()?;
/// let mut sim = SimBuilder::new(config, store, rngs, Flocking::default()).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    agents:   AgentStore,
    rngs:     AgentRngs,
    behavior: B,
    path:     Option<Box<dyn NearestPointProvider>>,
    field:    Option<Box<dyn VectorFieldSampler>>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs, behavior: B) -> Self {
        Self { config, agents, rngs, behavior, path: None, field: None }
    }

    /// Supply the path that tracking behaviors follow.
    pub fn path<P: NearestPointProvider + 'static>(mut self, path: P) -> Self {
        self.path = Some(Box::new(path));
        self
    }

    /// Supply the flow field that following behaviors sample.
    pub fn field<F: VectorFieldSampler + 'static>(mut self, field: F) -> Self {
        self.field = Some(Box::new(field));
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        if self.rngs.len() != self.agents.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.len(),
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        #[cfg(not(feature = "parallel"))]
        {
            if let Some(n) = self.config.num_threads {
                warn!(num_threads = n, "num_threads ignored: st-sim built without the `parallel` feature");
            }
        }

        info!(
            agents   = self.agents.len(),
            ticks    = self.config.total_ticks,
            boundary = ?self.config.boundary,
            path     = self.path.is_some(),
            field    = self.field.is_some(),
            "sim built"
        );

        Ok(Sim {
            config:   self.config,
            tick:     Tick::ZERO,
            agents:   self.agents,
            rngs:     self.rngs,
            behavior: self.behavior,
            path:     self.path,
            field:    self.field,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
