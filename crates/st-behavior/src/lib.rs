//! `st-behavior`: group and geometry-driven steering, plus the behavior
//! model trait the simulation drives.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`flock`]    | `FlockRules`: separate / cohese / align over a neighbor slice  |
//! | [`geometry`] | `NearestPointProvider`, `VectorFieldSampler`, `PolylinePath`, `GridField` |
//! | [`follow`]   | `FollowGeometry`: follow a field, track a path                 |
//! | [`context`]  | `SteerContext<'a>`: read-only tick snapshot shared by all agents |
//! | [`model`]    | `BehaviorModel` trait                                           |
//! | [`noop`]     | `NoopBehavior`: never steers                                   |
//! | [`presets`]  | `Wander`, `SeekTarget`, `Flocking`, `FollowField`, `TrackPath`  |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The two-phase tick loop in st-sim works as follows:
//!
//! 1. **Behavior phase** (optionally parallel): for every agent, call
//!    `BehaviorModel::steer_agent`.  Reads go through `&SteerContext`; the
//!    only write is to the agent's own force accumulator (and wander angle).
//!
//! 2. **Integrate phase** (sequential): every agent's `update()` runs, then
//!    the boundary policy.
//!
//! Group and geometry behaviors are extension traits on `SteeringAgent`
//! rather than inherent methods so that `st-agent` does not depend on the
//! geometry types.

pub mod context;
pub mod error;
pub mod flock;
pub mod follow;
pub mod geometry;
pub mod model;
pub mod noop;
pub mod presets;


pub use context::SteerContext;
pub use error::{BehaviorError, BehaviorResult};
pub use flock::FlockRules;
pub use follow::{FollowGeometry, DEFAULT_PREDICTION_DISTANCE};
pub use geometry::{GridField, NearestPointProvider, PolylinePath, VectorFieldSampler};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use presets::{Flocking, FollowField, SeekTarget, TrackPath, Wander};
