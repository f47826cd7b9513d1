//! Shared models, limits, errors and configuration for `hmap`.

pub mod config;
pub mod error;
pub mod record;

mod macros;

#[doc(hidden)]
pub use tracing;
