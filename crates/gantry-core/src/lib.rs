//! # Gantry Core
//!
//! Schema synthesis primitives for the Gantry plugin server.
//!
//! A plugin describes its configuration type with an explicit [`Shape`]
//! tree and a declared set of lifecycle capabilities; this crate turns
//! that description into the declarative schema and phase list the
//! server publishes for operators and tooling.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌─────────────┐
//! │ PluginConfig │────▶│ synthesize │────▶│ SchemaNode  │
//! │ (Shape tree) │     │  (walker)  │     │   tree      │
//! └──────────────┘     └─────┬──────┘     └─────────────┘
//!                           │ per record field
//!                     ┌─────▼──────┐
//!                     │ annotation │  merges required/default
//!                     └────────────┘
//! ```
//!
//! Capability detection runs separately: [`PhaseSet::detect`] asks the
//! config which [`Phase`]s it handles and always reports them in the
//! fixed vocabulary order, never in declaration order.
//!
//! Everything in this crate is pure and reentrant — no shared mutable
//! state, no locking, no I/O.

pub mod annotation;
pub mod phase;
pub mod schema;
pub mod shape;
pub mod synth;

pub use phase::{Phase, PhaseSet};
pub use schema::{SchemaKind, SchemaNode, UNSIGNED_RANGE};
pub use shape::{FieldShape, PluginConfig, Shape};
pub use synth::synthesize;
