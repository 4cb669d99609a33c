//! `SteeringAgent` and the core steering behaviors.
//!
//! Every behavior builds a *desired velocity* and hands it to
//! [`SteeringAgent::steer`], the only place where `max_speed` and `max_force`
//! limits are applied.  Behaviors never touch the accumulator directly.
//!
//! Group behaviors (separation, cohesion, alignment) and geometry-following
//! behaviors live in `st-behavior` as extension traits over this type.

use st_core::{AgentId, AgentRng, SteerError, SteerResult, Vec2, WorldBounds};

use crate::{AgentParams, Mover};

/// Fraction of the remaining offset `arrive` asks for each tick.
pub const ARRIVE_GAIN: f32 = 0.1;

// ── WanderParams ──────────────────────────────────────────────────────────────

/// Geometry of the wander circle.
///
/// The circle of radius `radius` sits `distance` units ahead of the agent
/// along its heading; each call nudges the target angle by at most `change`
/// radians in either direction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderParams {
    pub distance: f32,
    pub radius:   f32,
    pub change:   f32,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self { distance: 50.0, radius: 25.0, change: 0.5 }
    }
}

// ── Neighbor ──────────────────────────────────────────────────────────────────

/// Read-only snapshot of another agent's settled state for one tick.
///
/// The simulation builds one `Vec<Neighbor>` per tick before the behavior
/// phase; behaviors read it and write only their own accumulator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub id:       AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
}

// ── SteeringAgent ─────────────────────────────────────────────────────────────

/// A [`Mover`] with steering limits and a library of steering behaviors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringAgent {
    pub id: AgentId,

    /// Kinematic state.  `apply`/`update` are also exposed on the agent.
    pub mover: Mover,

    pub size:      f32,
    pub max_speed: f32,
    pub max_force: f32,

    /// Last desired velocity passed through `steer`.  Diagnostic only:
    /// hosts read it for debug overlays, nothing in the model consumes it.
    desired: Vec2,

    /// Persistent phase of the wander circle.  Only `wander` mutates it.
    wander_angle: f32,
}

impl SteeringAgent {
    /// Build an agent at `position` with the given initial velocity.
    ///
    /// Fails with [`SteerError::InvalidParameter`] if `params` has a negative
    /// or non-finite tunable, or if `position` or `velocity` is not finite.
    pub fn new(id: AgentId, position: Vec2, velocity: Vec2, params: AgentParams) -> SteerResult<Self> {
        params.validate()?;
        check_finite("position", position)?;
        check_finite("velocity", velocity)?;

        Ok(Self {
            id,
            mover:        Mover::new(position).with_velocity(velocity),
            size:         params.size,
            max_speed:    params.max_speed,
            max_force:    params.resolved_max_force(),
            desired:      Vec2::ZERO,
            wander_angle: 0.0,
        })
    }

    /// Build an agent whose initial velocity is uniform in
    /// `[-max_speed/2, max_speed/2]` per axis (default spawn jitter).
    ///
    /// `params` is validated before any jitter is drawn.
    pub fn spawn(id: AgentId, position: Vec2, params: AgentParams, rng: &mut AgentRng) -> SteerResult<Self> {
        params.validate()?;
        let half = params.max_speed / 2.0;
        let velocity = Vec2::new(rng.symmetric(half), rng.symmetric(half));
        Self::new(id, position, velocity, params)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.mover.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.mover.velocity
    }

    #[inline]
    pub fn desired(&self) -> Vec2 {
        self.desired
    }

    #[inline]
    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }

    #[inline]
    pub fn acceleration(&self) -> Vec2 {
        self.mover.acceleration()
    }

    /// This agent's state as seen by its neighbors.
    #[inline]
    pub fn snapshot(&self) -> Neighbor {
        Neighbor { id: self.id, position: self.position(), velocity: self.velocity() }
    }

    // ── Kinematics (delegated) ────────────────────────────────────────────

    #[inline]
    pub fn apply(&mut self, force: Vec2) {
        self.mover.apply(force);
    }

    #[inline]
    pub fn update(&mut self) {
        self.mover.update();
    }

    #[inline]
    pub fn toroid(&mut self, bounds: WorldBounds) {
        self.mover.toroid(bounds);
    }

    // ── Steering primitive ────────────────────────────────────────────────

    /// Steer toward `desired` and return the force that was applied.
    ///
    /// `desired` is clamped to `max_speed` and recorded; the force is
    /// `desired - velocity` clamped to `max_force`.
    pub fn steer(&mut self, desired: Vec2) -> Vec2 {
        let desired = desired.clamp_magnitude(self.max_speed);
        self.desired = desired;
        let force = (desired - self.velocity()).clamp_magnitude(self.max_force);
        self.apply(force);
        force
    }

    // ── Point behaviors ───────────────────────────────────────────────────

    pub fn seek(&mut self, target: Vec2) {
        self.steer(target - self.position());
    }

    pub fn flee(&mut self, target: Vec2) {
        self.steer(self.position() - target);
    }

    /// Ask for a fixed [`ARRIVE_GAIN`] fraction of the remaining offset.
    ///
    /// Simpler than [`arrive_within`](Self::arrive_within): it ignores
    /// distance, so far targets saturate at `max_speed` and near ones are
    /// approached asymptotically rather than with a proper slow-down.
    pub fn arrive(&mut self, target: Vec2) {
        self.steer((target - self.position()) * ARRIVE_GAIN);
    }

    /// Seek `target`, ramping the desired speed down linearly once inside
    /// `radius`: full strength at `radius`, zero at the target.
    pub fn arrive_within(&mut self, target: Vec2, radius: f32) {
        let mut desired = target - self.position();
        let d = self.position().distance(target);
        if d < radius {
            desired *= d / radius;
        }
        self.steer(desired);
    }

    /// Steer toward a point that drifts around a circle projected ahead.
    ///
    /// The circle offset is measured from a fixed basis,
    /// `(sin θ, cos θ) * radius`, not relative to the heading.  With zero
    /// velocity the circle centre collapses onto the agent, which then
    /// orbits slowly around its own position.
    pub fn wander(&mut self, rng: &mut AgentRng, params: WanderParams) {
        self.wander_angle += rng.symmetric(params.change);
        let center = self.velocity().normalize() * params.distance + self.position();
        let (sin, cos) = self.wander_angle.sin_cos();
        let offset = Vec2::new(sin, cos) * params.radius;
        self.steer(center + offset - self.position());
    }

    /// Soft repulsion from the world edges.
    ///
    /// Each of the four margins is checked independently, so an agent in a
    /// corner gets two `steer` calls.  Inside a margin the desired velocity
    /// keeps the current component along the edge and forces the other axis
    /// to `max_speed` toward the interior.
    pub fn bounce(&mut self, bounds: WorldBounds, margin: f32) {
        let pos = self.position();
        let speed = self.max_speed;

        if pos.x < margin {
            self.steer(Vec2::new(speed, self.velocity().y));
        }
        if pos.x > bounds.width - margin {
            self.steer(Vec2::new(-speed, self.velocity().y));
        }
        if pos.y < margin {
            self.steer(Vec2::new(self.velocity().x, speed));
        }
        if pos.y > bounds.height - margin {
            self.steer(Vec2::new(self.velocity().x, -speed));
        }
    }
}

fn check_finite(name: &'static str, v: Vec2) -> SteerResult<()> {
    if v.is_finite() {
        return Ok(());
    }
    let value = if v.x.is_finite() { v.y } else { v.x };
    Err(SteerError::InvalidParameter { name, value })
}
