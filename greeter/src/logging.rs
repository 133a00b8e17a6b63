//! Logging utilities for the greeter.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;

    /// Create a new child logger with a `src` key containing the provided name.
    fn new_with_name(&self, name: &str) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new_with_name(short_type_name::<T>())
    }

    fn new_with_name(&self, name: &str) -> Self {
        self.new(slog::o!("src" => name.to_owned()))
    }
}

/// Name of `T` without its module path nor its generic parameters.
fn short_type_name<T>() -> &'static str {
    let full_name = std::any::type_name::<T>();
    let base_name = full_name.split('<').next().unwrap_or(full_name);

    base_name.rsplit("::").next().unwrap_or(base_name)
}
