//! Per-agent construction parameters.

use st_core::{SteerError, SteerResult};

/// Ratio between max speed and the derived max force.
///
/// `max_force = max_speed / MAX_FORCE_DIVISOR` unless overridden.  This
/// constant sets how many ticks an agent needs to reverse direction at full
/// speed (roughly `2 * divisor`), so every tuned behavior depends on it.
pub const MAX_FORCE_DIVISOR: f32 = 10.0;

/// Tunables for one steering agent.
///
/// | Field       | Default | Meaning                                       |
/// |-------------|---------|-----------------------------------------------|
/// | `size`      | 5       | Body radius; separation radius is `2 * size`  |
/// | `max_speed` | 5       | Ceiling on every desired velocity             |
/// | `max_force` | `None`  | Ceiling on every steering force; `None` derives `max_speed / 10` |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentParams {
    pub size:      f32,
    pub max_speed: f32,
    pub max_force: Option<f32>,
}

impl AgentParams {
    pub fn new(size: f32, max_speed: f32) -> Self {
        Self { size, max_speed, max_force: None }
    }

    /// Override the derived max force.
    pub fn with_max_force(mut self, max_force: f32) -> Self {
        self.max_force = Some(max_force);
        self
    }

    /// The effective max force: the override if set, else `max_speed / 10`.
    #[inline]
    pub fn resolved_max_force(&self) -> f32 {
        self.max_force.unwrap_or(self.max_speed / MAX_FORCE_DIVISOR)
    }

    /// Reject negative or non-finite tunables.
    ///
    /// Zero is allowed everywhere: a zero-speed agent simply never moves.
    pub fn validate(&self) -> SteerResult<()> {
        let checks = [
            ("size", self.size),
            ("max_speed", self.max_speed),
            ("max_force", self.resolved_max_force()),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SteerError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        Self::new(5.0, 5.0)
    }
}
