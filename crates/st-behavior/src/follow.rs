//! Flow-field following and path tracking.

use st_agent::SteeringAgent;

use crate::{NearestPointProvider, VectorFieldSampler};

/// How far ahead, in world units, `track` predicts the agent's position.
pub const DEFAULT_PREDICTION_DISTANCE: f32 = 25.0;

/// Steering behaviors driven by host-owned geometry.
pub trait FollowGeometry {
    /// Steer along the field at the agent's position, at full speed.
    ///
    /// Only the direction of the sample is used; its magnitude is discarded.
    fn follow(&mut self, field: &dyn VectorFieldSampler);

    /// Keep the agent within `path.radius()` of the path.
    ///
    /// Predicts the position `prediction` units ahead along the current
    /// heading, projects it onto the path, and seeks the projection only if
    /// the prediction lies outside the band.  Returns `true` when a
    /// correction was applied.  A stationary agent predicts its own position.
    fn track(&mut self, path: &dyn NearestPointProvider, prediction: f32) -> bool;
}

impl FollowGeometry for SteeringAgent {
    fn follow(&mut self, field: &dyn VectorFieldSampler) {
        let desired = field.sample(self.position()).normalize() * self.max_speed;
        self.steer(desired);
    }

    fn track(&mut self, path: &dyn NearestPointProvider, prediction: f32) -> bool {
        let future = self.position() + self.velocity().normalize() * prediction;
        let normal = path.nearest_point_on(future);

        if future.distance(normal) > path.radius() {
            self.seek(normal);
            true
        } else {
            false
        }
    }
}
