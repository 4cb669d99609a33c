//! Agent storage: `AgentStore` (agent state) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The behavior phase needs `&mut AgentRng` for each agent (wander draws from
//! it) while also holding `&mut SteeringAgent` for the same agent and a shared
//! `&[Neighbor]` snapshot.  Keeping the RNGs out of the agent vector lets the
//! simulation zip the two vectors and hand out disjoint `&mut` pairs, which
//! is exactly what Rayon's `par_iter_mut` needs:
//!
//! ```ignore
//! store.agents
//!     .par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .for_each(|(agent, rng)| behavior.steer_agent(agent, &ctx, rng));
//! ```

use st_core::{AgentId, AgentRng, SteerError, SteerResult};

use crate::{Neighbor, SteeringAgent};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    ///
    /// Fails if `count` exceeds the `AgentId` range.
    pub(crate) fn new(count: usize, global_seed: u64) -> SteerResult<Self> {
        let count = u32::try_from(count)
            .map_err(|_| SteerError::Config(format!("too many agents: {count}")))?;
        let inner = (0..count)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Ok(Self { inner })
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agents of a run, stored densely so that `agents[id.index()]` is the
/// agent with that id.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    pub agents: Vec<SteeringAgent>,
}

impl AgentStore {
    pub(crate) fn new(agents: Vec<SteeringAgent>) -> Self {
        debug_assert!(agents.iter().enumerate().all(|(i, a)| a.id.index() == i));
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&SteeringAgent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut SteeringAgent> {
        self.agents.get_mut(agent.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SteeringAgent> {
        self.agents.iter()
    }

    /// Settled state of every agent, in `AgentId` order.
    ///
    /// This is the neighbor list handed to every agent for one tick.  It
    /// includes each agent itself; the flocking rules deal with self by
    /// distance (`separate`) or by id (`align`).
    pub fn snapshot(&self) -> Vec<Neighbor> {
        self.agents.iter().map(SteeringAgent::snapshot).collect()
    }
}
