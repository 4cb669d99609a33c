//! Read-only simulation state passed to every behavior callback.

use st_agent::Neighbor;
use st_core::{Tick, WorldBounds};

use crate::{NearestPointProvider, VectorFieldSampler};

/// A read-only snapshot of the world for one tick.
///
/// Built once per tick by st-sim and shared immutably across every agent's
/// behavior call.  Neighbor state is the settled result of the previous
/// tick's integration, so agents may be processed in any order (or in
/// parallel) without seeing each other's partial updates.
pub struct SteerContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// World rectangle, for edge-aware behaviors.
    pub bounds: WorldBounds,

    /// Every agent's state, including the agent being steered.
    pub neighbors: &'a [Neighbor],

    /// Path for tracking behaviors, if the host supplied one.
    pub path: Option<&'a dyn NearestPointProvider>,

    /// Flow field for following behaviors, if the host supplied one.
    pub field: Option<&'a dyn VectorFieldSampler>,
}

impl<'a> SteerContext<'a> {
    /// Context with neighbors only; attach geometry with the `with_*` methods.
    #[inline]
    pub fn new(tick: Tick, bounds: WorldBounds, neighbors: &'a [Neighbor]) -> Self {
        Self { tick, bounds, neighbors, path: None, field: None }
    }

    #[inline]
    pub fn with_path(mut self, path: Option<&'a dyn NearestPointProvider>) -> Self {
        self.path = path;
        self
    }

    #[inline]
    pub fn with_field(mut self, field: Option<&'a dyn VectorFieldSampler>) -> Self {
        self.field = field;
        self
    }
}
