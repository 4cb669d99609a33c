//! World bounds, boundary policy, and top-level simulation configuration.

use crate::{SteerError, SteerResult, Tick};

/// Default soft-bounce margin, in world units from each edge.
pub const DEFAULT_BOUNCE_MARGIN: f32 = 50.0;

// ── WorldBounds ───────────────────────────────────────────────────────────────

/// Axis-aligned world rectangle `[0, width) × [0, height)`.
///
/// Used by the toroid wrap and by the `bounce` steering behavior.  Nothing
/// else in the steering model reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub width:  f32,
    pub height: f32,
}

impl WorldBounds {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> SteerResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SteerError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

// ── BoundaryPolicy ────────────────────────────────────────────────────────────

/// What the integrate phase does at the world edges after `update()`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum BoundaryPolicy {
    /// Wrap position modulo the world bounds.  No steering involved.
    #[default]
    Toroid,

    /// Soft repulsion: agents within `margin` of an edge are steered back
    /// toward the interior.  This is a steering force, not a reflection, so a
    /// fast agent can still cross the edge.
    Bounce {
        #[cfg_attr(feature = "serde", serde(default = "default_bounce_margin"))]
        margin: f32,
    },

    /// No boundary handling; agents may leave the world.
    Open,
}

impl BoundaryPolicy {
    /// `Bounce` with the [`DEFAULT_BOUNCE_MARGIN`].
    #[inline]
    pub const fn bounce() -> Self {
        BoundaryPolicy::Bounce { margin: DEFAULT_BOUNCE_MARGIN }
    }
}

#[cfg(feature = "serde")]
fn default_bounce_margin() -> f32 {
    DEFAULT_BOUNCE_MARGIN
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the host application and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// World rectangle used by the boundary policy.
    pub bounds: WorldBounds,

    /// Edge handling applied after every integration step.
    pub boundary: BoundaryPolicy,

    /// Total ticks `Sim::run` simulates.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored unless the `parallel` feature of `st-sim` is enabled.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn validate(&self) -> SteerResult<()> {
        self.bounds.validate()?;
        if let BoundaryPolicy::Bounce { margin } = self.boundary {
            if !(margin.is_finite() && margin >= 0.0) {
                return Err(SteerError::InvalidParameter { name: "bounce margin", value: margin });
            }
        }
        if self.num_threads == Some(0) {
            return Err(SteerError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds:      WorldBounds::default(),
            boundary:    BoundaryPolicy::Toroid,
            total_ticks: 600,
            seed:        42,
            num_threads: None,
        }
    }
}
