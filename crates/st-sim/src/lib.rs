//! `st-sim`: tick loop orchestrator for the rust_steer framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot:  capture (id, position, velocity) for every agent.
//!   ② Behavior:  call BehaviorModel::steer_agent for each agent against
//!                 the snapshot (parallel with the `parallel` feature).
//!   ③ Integrate: for each agent in ascending AgentId order:
//!                   update()  → velocity += acceleration, position += velocity
//!                   boundary  → Toroid wraps, Bounce steers, Open does nothing
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the behavior phase on Rayon's thread pool.        |
//! | `serde`    | `SimConfig` and agent types derive serde traits.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_agent::AgentStoreBuilder;
//! use st_behavior::Flocking;
//! use st_core::SimConfig;
//! use st_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let (store, rngs) = AgentStoreBuilder::new(config.seed)
//!     .scatter(100, config.bounds)
//!     .build()?;
//! let mut sim = SimBuilder::new(config, store, rngs, Flocking::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
