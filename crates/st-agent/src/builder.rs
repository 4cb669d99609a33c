//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use st_agent::{AgentParams, AgentStoreBuilder};
//! use st_core::{Vec2, WorldBounds};
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(Vec2::new(10.0, 10.0))
//!     .spawn_with(Vec2::new(20.0, 5.0), AgentParams::new(3.0, 8.0))
//!     .scatter(50, WorldBounds::new(640.0, 480.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.len(), 52);
//! assert_eq!(rngs.len(),  52);
//! ```

use st_core::{AgentId, SimRng, SteerError, SteerResult, Vec2, WorldBounds};

use crate::{AgentParams, AgentRngs, AgentStore, SteeringAgent};

/// Offset mixed into the seed for host-side placement so scattering does not
/// reuse agent 0's RNG stream.
const SCATTER_SALT: u64 = 0x5ca7_7e55;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents receive ids in the order they are added.  Each agent's initial
/// velocity is drawn from its own RNG (see [`SteeringAgent::spawn`]), so the
/// population is fully determined by `seed` and the sequence of calls.
pub struct AgentStoreBuilder {
    seed:     u64,
    defaults: AgentParams,
    spawns:   Vec<(Vec2, AgentParams)>,
    scatter:  SimRng,
}

impl AgentStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            defaults: AgentParams::default(),
            spawns:   Vec::new(),
            scatter:  SimRng::new(seed ^ SCATTER_SALT),
        }
    }

    /// Parameters used by [`spawn`](Self::spawn) and
    /// [`scatter`](Self::scatter).  Only affects agents added afterwards.
    pub fn default_params(mut self, params: AgentParams) -> Self {
        self.defaults = params;
        self
    }

    /// Add one agent at `position` with the default parameters.
    pub fn spawn(self, position: Vec2) -> Self {
        let params = self.defaults;
        self.spawn_with(position, params)
    }

    /// Add one agent at `position` with explicit parameters.
    pub fn spawn_with(mut self, position: Vec2, params: AgentParams) -> Self {
        self.spawns.push((position, params));
        self
    }

    /// Add `count` agents at uniformly random positions inside `bounds`.
    pub fn scatter(mut self, count: usize, bounds: WorldBounds) -> Self {
        for _ in 0..count {
            let position = Vec2::new(
                self.scatter.gen_range(0.0..bounds.width.max(f32::MIN_POSITIVE)),
                self.scatter.gen_range(0.0..bounds.height.max(f32::MIN_POSITIVE)),
            );
            self.spawns.push((position, self.defaults));
        }
        self
    }

    /// Validate every agent's parameters and construct the store.
    ///
    /// Fails with [`SteerError::InvalidParameter`] on the first agent with a
    /// negative or non-finite tunable, or a non-finite position.
    pub fn build(self) -> SteerResult<(AgentStore, AgentRngs)> {
        let mut rngs = AgentRngs::new(self.spawns.len(), self.seed)?;
        let mut agents = Vec::with_capacity(self.spawns.len());

        for (i, (position, params)) in self.spawns.into_iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SteerError::Config(format!("too many agents: {i}")))?;
            agents.push(SteeringAgent::spawn(id, position, params, rngs.get_mut(id))?);
        }

        Ok((AgentStore::new(agents), rngs))
    }
}
