//! The `BehaviorModel` trait: the main extension point for user code.

use st_agent::SteeringAgent;
use st_core::AgentRng;

use crate::SteerContext;

/// Pluggable per-tick steering.
///
/// Implement this trait to decide which steering behaviors an agent runs
/// each tick and in what order.  Behaviors accumulate into the agent's own
/// force accumulator; the simulation integrates every agent afterwards.
///
/// # Thread safety
///
/// With the `parallel` feature of st-sim, `steer_agent` is called for many
/// agents at once, so implementations must be `Send + Sync`.  Per-agent
/// mutable state belongs on the agent (e.g. its wander angle), never in the
/// model.
///
/// # Example
///
/// ```rust,ignore
/// struct Chase { target: Vec2 }
///
/// impl BehaviorModel for Chase {
///     fn steer_agent(&self, agent: &mut SteeringAgent, ctx: &SteerContext<'_>, _rng: &mut AgentRng) {
///         agent.arrive_within(self.target, 100.0);
///         agent.separate_default(ctx.neighbors);
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Accumulate this tick's steering forces on `agent`.
    ///
    /// Must not call `agent.update()`; integration happens after every agent
    /// has been steered.
    fn steer_agent(
        &self,
        agent: &mut SteeringAgent,
        ctx:   &SteerContext<'_>,
        rng:   &mut AgentRng,
    );
}
