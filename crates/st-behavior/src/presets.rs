//! Ready-made behavior models for common scenes.

use st_agent::{SteeringAgent, WanderParams};
use st_core::{AgentRng, Vec2};

use crate::{BehaviorModel, FlockRules, FollowGeometry, SteerContext, DEFAULT_PREDICTION_DISTANCE};

/// Random drift.
#[derive(Clone, Debug, Default)]
pub struct Wander {
    pub params: WanderParams,
}

impl BehaviorModel for Wander {
    fn steer_agent(&self, agent: &mut SteeringAgent, _ctx: &SteerContext<'_>, rng: &mut AgentRng) {
        agent.wander(rng, self.params);
    }
}

/// Head for a fixed point.
///
/// With `arrive_radius` set the agent slows linearly inside that radius;
/// without it the agent seeks at full speed and overshoots.
#[derive(Clone, Debug)]
pub struct SeekTarget {
    pub target:        Vec2,
    pub arrive_radius: Option<f32>,
}

impl BehaviorModel for SeekTarget {
    fn steer_agent(&self, agent: &mut SteeringAgent, _ctx: &SteerContext<'_>, _rng: &mut AgentRng) {
        match self.arrive_radius {
            Some(radius) => agent.arrive_within(self.target, radius),
            None => agent.seek(self.target),
        }
    }
}

/// Classic boids: separation, then cohesion, then alignment.
#[derive(Clone, Debug, Default)]
pub struct Flocking {
    /// Separation radius; `None` uses each agent's `2 * size`.
    pub separation_radius: Option<f32>,
}

impl BehaviorModel for Flocking {
    fn steer_agent(&self, agent: &mut SteeringAgent, ctx: &SteerContext<'_>, _rng: &mut AgentRng) {
        match self.separation_radius {
            Some(radius) => agent.separate(ctx.neighbors, radius),
            None => agent.separate_default(ctx.neighbors),
        }
        agent.cohese(ctx.neighbors);
        agent.align(ctx.neighbors);
    }
}

/// Follow the context's flow field.  Coasts if no field was supplied.
#[derive(Clone, Debug, Default)]
pub struct FollowField;

impl BehaviorModel for FollowField {
    fn steer_agent(&self, agent: &mut SteeringAgent, ctx: &SteerContext<'_>, _rng: &mut AgentRng) {
        if let Some(field) = ctx.field {
            agent.follow(field);
        }
    }
}

/// Stay on the context's path, wandering while inside its band.
/// Wanders freely if no path was supplied.
#[derive(Clone, Debug)]
pub struct TrackPath {
    pub prediction: f32,
    pub wander:     WanderParams,
}

impl Default for TrackPath {
    fn default() -> Self {
        Self { prediction: DEFAULT_PREDICTION_DISTANCE, wander: WanderParams::default() }
    }
}

impl BehaviorModel for TrackPath {
    fn steer_agent(&self, agent: &mut SteeringAgent, ctx: &SteerContext<'_>, rng: &mut AgentRng) {
        let corrected = match ctx.path {
            Some(path) => agent.track(path, self.prediction),
            None => false,
        };
        if !corrected {
            agent.wander(rng, self.wander);
        }
    }
}
