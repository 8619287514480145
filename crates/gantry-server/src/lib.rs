//! # Gantry Server
//!
//! Plugin registration and descriptor layer for the Gantry plugin
//! server.
//!
//! This crate provides:
//! - Registration of a plugin slot from its config factory
//!   ([`register`], [`Constructor`])
//! - Concurrency-guarded instance/event storage for the external
//!   runtime ([`Registration`])
//! - Descriptor assembly for operators and tooling
//!   ([`Registration::describe`], [`PluginDescriptor`])
//! - Logging configuration ([`logging::LoggingBuilder`])
//!
//! # Registering a plugin
//!
//! ```rust,ignore
//! use gantry_server::{register, Constructor, FieldShape, Phase, PluginConfig, Shape};
//!
//! struct RateLimitConfig;
//!
//! impl PluginConfig for RateLimitConfig {
//!     fn shape(&self) -> Shape {
//!         Shape::Record(vec![
//!             FieldShape::new("Limit", Shape::UInt).annotated("required=true"),
//!         ])
//!     }
//!
//!     fn handles(&self, phase: Phase) -> bool {
//!         matches!(phase, Phase::Access | Phase::Log)
//!     }
//! }
//!
//! let registration = register::<InstanceState, EventState>(
//!     Some(Constructor::new(|| RateLimitConfig)),
//!     "0.2",
//!     1,
//! ).expect("valid constructor");
//!
//! let descriptor = registration.describe(&naming)?;
//! ```
//!
//! The instance and event state types are owned by the external
//! runtime; this crate only stores them behind the slot guard.

pub mod descriptor;
pub mod error;
pub mod logging;
pub mod naming;
pub mod registration;

// Re-exports
pub use descriptor::{ConfigSchema, PluginDescriptor};
pub use error::{ServerError, ServerResult};
pub use logging::LoggingBuilder;
pub use naming::NameSource;
pub use registration::{Constructor, Registration, register};

// Re-export the synthesis primitives so plugin crates depend on one
// crate only.
pub use gantry_core::{
    FieldShape, Phase, PhaseSet, PluginConfig, SchemaKind, SchemaNode, Shape, UNSIGNED_RANGE,
    synthesize,
};

/// Prelude module for convenient imports.
///
/// Provides the commonly used logging macros alongside the
/// registration surface.
pub mod prelude {
    pub use tracing::{debug, error, info, trace, warn};

    pub use crate::registration::{Constructor, Registration, register};
    pub use gantry_core::{FieldShape, Phase, PluginConfig, Shape};
}
