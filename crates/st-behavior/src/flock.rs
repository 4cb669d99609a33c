//! Separation, cohesion, and alignment.
//!
//! The three rules are independent: they share no state and each contributes
//! through one `steer` call, so a behavior model may call any subset in any
//! order within a tick.  Each is a linear scan of the neighbor slice, which
//! makes a full flock O(n²) per tick.  No spatial index is used.

use st_agent::{Neighbor, SteeringAgent};
use st_core::Vec2;

/// Group steering rules over a neighbor snapshot.
///
/// Implemented for [`SteeringAgent`]; import the trait to call
/// `agent.separate(&neighbors, r)` and friends.  An empty slice is always a
/// valid input and applies no force.
pub trait FlockRules {
    /// Steer away from neighbors closer than `radius`, weighting each by the
    /// inverse of its distance.
    ///
    /// Neighbors at distance exactly zero are skipped, which is how the agent
    /// ignores its own entry in the snapshot.  No-op if nobody is in range.
    fn separate(&mut self, neighbors: &[Neighbor], radius: f32);

    /// [`separate`](Self::separate) with the default radius of `2 * size`.
    fn separate_default(&mut self, neighbors: &[Neighbor]);

    /// Seek the centroid of every neighbor position.
    ///
    /// There is no distance filter: the whole slice is averaged, including
    /// the agent itself if present.  No-op for an empty slice.
    fn cohese(&mut self, neighbors: &[Neighbor]);

    /// Steer toward the average heading of the other agents, at full speed.
    ///
    /// The agent's own entry is excluded by id.  No-op when no other agent
    /// remains after filtering.
    fn align(&mut self, neighbors: &[Neighbor]);
}

impl FlockRules for SteeringAgent {
    fn separate(&mut self, neighbors: &[Neighbor], radius: f32) {
        let position = self.position();
        let mut sum = Vec2::ZERO;
        let mut n = 0u32;

        for other in neighbors {
            let d = position.distance(other.position);
            if 0.0 < d && d < radius {
                sum += (position - other.position).normalize() / d;
                n += 1;
            }
        }

        if n > 0 {
            sum /= n as f32;
            self.steer(sum.normalize() * self.max_speed);
        }
    }

    fn separate_default(&mut self, neighbors: &[Neighbor]) {
        let radius = self.size * 2.0;
        self.separate(neighbors, radius);
    }

    fn cohese(&mut self, neighbors: &[Neighbor]) {
        if neighbors.is_empty() {
            return;
        }
        let centroid = neighbors.iter().map(|n| n.position).sum::<Vec2>() / neighbors.len() as f32;
        self.seek(centroid);
    }

    fn align(&mut self, neighbors: &[Neighbor]) {
        let me = self.id;
        let (sum, n) = neighbors
            .iter()
            .filter(|other| other.id != me)
            .fold((Vec2::ZERO, 0u32), |(sum, n), other| (sum + other.velocity, n + 1));

        if n > 0 {
            let average = sum / n as f32;
            self.steer(average.normalize() * self.max_speed);
        }
    }
}
