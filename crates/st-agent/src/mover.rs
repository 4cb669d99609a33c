//! Base kinematic body.

use st_core::{Vec2, WorldBounds};

/// Position, velocity, and a per-tick acceleration accumulator.
///
/// # Two-phase protocol
///
/// 1. **Accumulate**: any number of [`apply`](Self::apply) calls add forces.
/// 2. **Integrate**: one [`update`](Self::update) folds the accumulator into
///    velocity and position, then resets it to zero.
///
/// The simulation keeps a barrier between the two phases: no agent is
/// integrated until every agent has finished accumulating, so behaviors only
/// ever observe settled previous-tick state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mover {
    pub position: Vec2,
    pub velocity: Vec2,
    acceleration: Vec2,
}

impl Mover {
    /// A body at rest at `position`.
    pub fn new(position: Vec2) -> Self {
        Self { position, velocity: Vec2::ZERO, acceleration: Vec2::ZERO }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Forces accumulated since the last `update`.
    #[inline]
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Add `force` to the accumulator.  No magnitude limit is applied here;
    /// steering behaviors cap their own output.
    #[inline]
    pub fn apply(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// One explicit Euler step at a fixed tick.
    ///
    /// Velocity is not clamped.  Several steering calls in one tick can push
    /// an agent past its `max_speed`; only desired velocities are capped.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Wrap position into `[0, width) × [0, height)`.
    pub fn toroid(&mut self, bounds: WorldBounds) {
        self.position.x = wrap(self.position.x, bounds.width);
        self.position.y = wrap(self.position.y, bounds.height);
    }
}

#[inline]
fn wrap(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}
