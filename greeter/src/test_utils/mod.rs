//! Test utilities
//!
//! They contain:
//! * A logger writing to the test-captured standard output.
//! * A builder for `mockall` mocks.
//!
//! IMPORTANT: To avoid polluting production code, those tools do not expose or reexpose any
//! `automock` types, users need to add them themselves to their crates.

mod mock_builder;
mod test_logger;

pub use mock_builder::MockBuilder;
pub use test_logger::TestLogger;
