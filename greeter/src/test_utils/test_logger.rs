use std::{io, sync::Arc};

use slog::{Drain, Logger};
use slog_async::Async;
use slog_term::{CompactFormat, PlainDecorator};

/// Logger builder for tests.
pub struct TestLogger;

impl TestLogger {
    fn from_writer<W: io::Write + Send + 'static>(writer: W) -> Logger {
        let decorator = PlainDecorator::new(writer);
        let drain = CompactFormat::new(decorator).build().fuse();
        let drain = Async::new(drain).build().fuse();
        Logger::root(Arc::new(drain), slog::o!())
    }

    /// Create a logger that writes to the standard output captured by the test harness.
    pub fn stdout() -> Logger {
        Self::from_writer(slog_term::TestStdoutWriter)
    }
}
