#![warn(missing_docs)]

//! A small greeting service.
//!
//! Provide:
//! - The [Greeter] that formats greetings and delayed farewells around a resolved name.
//! - The [NameResolver] seam used to supply that name, with its
//!   [default implementation][FriendlyNeighborNameResolver].
//! - [Logging][logging] helpers built on `slog`.
//! - Test utilities (test logger, mock builder) in [test_utils] when the `test_tools` feature
//!   is enabled.

mod greeter;
pub mod logging;
mod name_resolver;
#[cfg(any(test, feature = "test_tools"))]
pub mod test_utils;

pub use greeter::{FAREWELL_DELAY, Greeter};
pub use name_resolver::{FriendlyNeighborNameResolver, NameResolver};

#[cfg(test)]
pub use name_resolver::MockNameResolver;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
