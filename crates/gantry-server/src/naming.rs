//! External naming service boundary.

use crate::error::ServerResult;

/// Supplies the plugin's registered name.
///
/// The name lives outside this core — the surrounding server learns it
/// from its own bootstrap. [`Registration::describe`] propagates any
/// failure from this trait verbatim; whether that is fatal is the
/// caller's call.
///
/// [`Registration::describe`]: crate::registration::Registration::describe
pub trait NameSource {
    /// Resolves the plugin's registered name.
    fn plugin_name(&self) -> ServerResult<String>;
}
