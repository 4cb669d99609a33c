//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SteerError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `st-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SteerError {
    /// A tunable was negative, zero where forbidden, or not finite.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `st-*` crates.
pub type SteerResult<T> = Result<T, SteerError>;
