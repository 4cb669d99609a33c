//! Simulation observer trait for progress reporting and host rendering.

use st_agent::AgentStore;
use st_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A rendering host draws from
/// `on_tick_end`, where every agent has been integrated and the boundary
/// policy applied.
///
/// # Example: centroid logger
///
/// ```rust,ignore
/// struct Centroid;
///
/// impl SimObserver for Centroid {
///     fn on_tick_end(&mut self, tick: Tick, agents: &AgentStore) {
///         let c = agents.iter().map(|a| a.position()).sum::<Vec2>() / agents.len() as f32;
///         println!("{tick}: centroid {c}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the behavior phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the integrate phase with the settled agent state.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
