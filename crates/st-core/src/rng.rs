//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Randomness is never ambient.  Each agent gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! and every behavior that needs randomness (`wander`, spawn jitter) receives
//! that RNG as an explicit `&mut` argument.  Consequences:
//!
//! - Agents never share RNG state, so the behavior phase can run in parallel
//!   and still produce bit-identical results to a sequential run.
//! - Appending agents does not disturb the streams of existing ones.
//! - A test can replay any run exactly by reusing the seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in `AgentRngs` alongside the agent vector so the simulation can
/// borrow `&mut` RNGs and `&` neighbor snapshots at the same time.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[-half_width, +half_width]`.
    ///
    /// Returns `0.0` for a zero, negative, or non-finite half-width.  The
    /// draw is a unit sample scaled by `half_width`, so any finite width is
    /// accepted, up to `f32::MAX`.
    #[inline]
    pub fn symmetric(&mut self, half_width: f32) -> f32 {
        if half_width > 0.0 && half_width.is_finite() {
            self.0.gen_range(-1.0f32..=1.0) * half_width
        } else {
            0.0
        }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for host-side operations such as scattering the
/// initial population across the world.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
