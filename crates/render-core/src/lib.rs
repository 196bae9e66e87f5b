//! Core rendering abstractions shared by every folio backend.
//!
//! This crate provides the pieces that sit between a composition tree and a
//! concrete output format:
//! - `StyleRegistry` for ordered, conditional styles
//! - `Resolver` for the effective style of a node (own style over registry)
//! - `Dispatcher`, `Backend` and `HookTable` for the depth-first walk
//! - `RenderContext` for per-render lookup tables
//! - Error types for rendering operations

mod context;
mod dispatch;
mod error;
pub mod glue;
mod registry;
mod resolver;

pub use context::RenderContext;
pub use dispatch::{Backend, DispatchPolicy, Dispatcher, HookTable, LeafHook, WalkStats};
pub use error::RenderError;
pub use registry::StyleRegistry;
pub use resolver::{join, EffectiveStyle, Resolver};
