//! `st-core`: foundational types for the `rust_steer` framework.
//!
//! This crate is a dependency of every other `st-*` crate.  It has no `st-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vec2`: normalize, distance, clamp-to-magnitude       |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `WorldBounds`, `BoundaryPolicy`, `SimConfig`          |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (host-side)          |
//! | [`error`]       | `SteerError`, `SteerResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoundaryPolicy, SimConfig, WorldBounds, DEFAULT_BOUNCE_MARGIN};
pub use error::{SteerError, SteerResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use vector::Vec2;
