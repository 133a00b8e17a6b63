use std::{sync::Arc, time::Duration};

use slog::{Logger, debug, trace};

use crate::{FriendlyNeighborNameResolver, NameResolver, StdResult, logging::LoggerExtensions};

/// Time waited by [Greeter::say_goodbye] before resolving the name.
pub const FAREWELL_DELAY: Duration = Duration::from_millis(1000);

/// Format greetings and farewells around a name supplied by a [NameResolver].
pub struct Greeter {
    name_resolver: Arc<dyn NameResolver>,
    logger: Logger,
}

impl Greeter {
    /// Create a new Greeter using the given name source.
    pub fn new(name_resolver: Arc<dyn NameResolver>, logger: Logger) -> Self {
        Self {
            name_resolver,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Create a new Greeter that greets the friendly neighbor.
    pub fn with_default_name_resolver(logger: Logger) -> Self {
        Self::new(Arc::new(FriendlyNeighborNameResolver), logger)
    }

    /// Resolve the name to greet.
    ///
    /// Errors raised by the name source are returned as is.
    pub fn resolve_name(&self) -> StdResult<String> {
        let name = self.name_resolver.resolve_name()?;
        debug!(self.logger, "Resolved name"; "name" => &name);

        Ok(name)
    }

    /// Greet the resolved name.
    pub fn say_hello(&self) -> StdResult<String> {
        let name = self.resolve_name()?;

        Ok(format!("Hello, {name}!"))
    }

    /// Wait for [FAREWELL_DELAY] then say goodbye to the resolved name.
    ///
    /// The wait does not block the runtime thread, and the name is only resolved once it is
    /// over.
    pub async fn say_goodbye(&self) -> StdResult<String> {
        trace!(self.logger, "Waiting before saying goodbye"; "delay" => ?FAREWELL_DELAY);
        tokio::time::sleep(FAREWELL_DELAY).await;
        let name = self.resolve_name()?;

        Ok(format!("Goodbye, {name}!"))
    }
}
