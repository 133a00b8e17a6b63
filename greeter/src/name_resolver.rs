#[cfg(test)]
use mockall::automock;

use crate::StdResult;

/// The name used by [FriendlyNeighborNameResolver].
const FRIENDLY_NEIGHBOR: &str = "friendly neighbor";

/// Supply the subject name used when greeting.
#[cfg_attr(test, automock)]
pub trait NameResolver: Sync + Send {
    /// Resolve the name to greet.
    fn resolve_name(&self) -> StdResult<String>;
}

/// Default [NameResolver], always resolves to `"friendly neighbor"`.
#[derive(Debug, Default, Clone)]
pub struct FriendlyNeighborNameResolver;

impl NameResolver for FriendlyNeighborNameResolver {
    fn resolve_name(&self) -> StdResult<String> {
        Ok(FRIENDLY_NEIGHBOR.to_string())
    }
}
