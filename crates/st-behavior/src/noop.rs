//! A no-op behavior model: agents coast at constant velocity.

use st_agent::SteeringAgent;
use st_core::AgentRng;

use crate::{BehaviorModel, SteerContext};

/// A [`BehaviorModel`] that never steers.
///
/// Useful as a placeholder in tests, or for passive agents that still take
/// part in other agents' neighbor lists.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn steer_agent(
        &self,
        _agent: &mut SteeringAgent,
        _ctx:   &SteerContext<'_>,
        _rng:   &mut AgentRng,
    ) {
    }
}
