//! `st-agent`: kinematic bodies, steering agents, and agent storage.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`mover`]    | `Mover`: position, velocity, acceleration accumulator          |
//! | [`params`]   | `AgentParams`: size / max speed / max force tunables           |
//! | [`agent`]    | `SteeringAgent`, `Neighbor`, `WanderParams`; steer, seek, flee, arrive, arrive_within, wander, bounce |
//! | [`store`]    | `AgentStore` (agents), `AgentRngs` (per-agent RNG)              |
//! | [`builder`]  | `AgentStoreBuilder` (fluent construction + validation)          |
//!
//! # Steering model
//!
//! A behavior computes a desired velocity; [`SteeringAgent::steer`] caps it
//! at `max_speed`, turns it into a force `desired - velocity` capped at
//! `max_force`, and adds that force to the [`Mover`]'s accumulator.  The
//! host calls [`SteeringAgent::update`] once per tick after all behaviors
//! have run.

pub mod agent;
pub mod builder;
pub mod mover;
pub mod params;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Neighbor, SteeringAgent, WanderParams, ARRIVE_GAIN};
pub use builder::AgentStoreBuilder;
pub use mover::Mover;
pub use params::{AgentParams, MAX_FORCE_DIVISOR};
pub use store::{AgentRngs, AgentStore};
