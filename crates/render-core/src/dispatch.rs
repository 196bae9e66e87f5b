//! Depth-first traversal that forwards (node, resolved style) pairs to a
//! backend.
//!
//! Leaf handling is a table lookup keyed by [`NodeKind`]. A kind missing from
//! the table is a dispatch gap: by default it is logged and the walk goes on;
//! a strict policy or the backend itself may turn it into an error.

use crate::error::RenderError;
use crate::resolver::Resolver;
use folio_idf::{Node, NodeKind, StyleDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A backend entry point for one leaf kind.
pub type LeafHook<B> =
    fn(&mut B, &Node, Option<&StyleDescriptor>, &Resolver<'_>) -> Result<(), RenderError>;

/// Leaf handlers of a backend, keyed by node kind.
pub struct HookTable<B> {
    hooks: HashMap<NodeKind, LeafHook<B>>,
}

impl<B> HookTable<B> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    pub fn on(mut self, kind: NodeKind, hook: LeafHook<B>) -> Self {
        self.hooks.insert(kind, hook);
        self
    }

    /// Registers one hook for several kinds.
    pub fn on_each(mut self, kinds: &[NodeKind], hook: LeafHook<B>) -> Self {
        for kind in kinds {
            self.hooks.insert(*kind, hook);
        }
        self
    }

    pub fn get(&self, kind: NodeKind) -> Option<LeafHook<B>> {
        self.hooks.get(&kind).copied()
    }

    pub fn handles(&self, kind: NodeKind) -> bool {
        self.hooks.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<B> Default for HookTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for HookTable<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&NodeKind> = self.hooks.keys().collect();
        kinds.sort_by_key(|k| k.as_str());
        f.debug_struct("HookTable").field("kinds", &kinds).finish()
    }
}

/// An output format driven by the [`Dispatcher`].
pub trait Backend {
    /// Used in diagnostics.
    fn name(&self) -> &'static str;

    /// Handlers for leaf nodes. Built once per walk.
    fn hooks() -> HookTable<Self>
    where
        Self: Sized;

    /// Called before the children of a composite node are visited.
    /// Composites are not resolved by the dispatcher; a backend that needs
    /// their style asks the resolver.
    fn begin_composite(
        &mut self,
        _node: &Node,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Called after the last child of a composite node.
    fn end_composite(
        &mut self,
        _node: &Node,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Called for a leaf whose kind has no hook. The default logs and
    /// continues; a backend that requires the kind returns an error.
    fn on_missing_hook(&mut self, node: &Node) -> Result<(), RenderError> {
        log::warn!(
            "Backend '{}' has no specialized handling for {} nodes; skipping.",
            self.name(),
            node.kind()
        );
        Ok(())
    }
}

/// What to do about a dispatch gap before the backend gets a say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DispatchPolicy {
    /// Defer to [`Backend::on_missing_hook`].
    #[default]
    Lenient,
    /// Every gap is a [`RenderError::MissingHook`].
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkStats {
    pub composites: usize,
    pub leaves: usize,
    pub gaps: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    policy: DispatchPolicy,
}

impl Dispatcher {
    pub fn new(policy: DispatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Walks `root` depth-first, children in order. The first error raised by
    /// resolution or by the backend aborts the walk and is returned.
    pub fn walk<B: Backend>(
        &self,
        root: &Node,
        resolver: &Resolver<'_>,
        backend: &mut B,
    ) -> Result<WalkStats, RenderError> {
        let hooks = B::hooks();
        let mut stats = WalkStats::default();
        self.visit(root, resolver, backend, &hooks, &mut stats)?;
        log::debug!(
            "Walked {} composites and {} leaves for '{}' ({} gaps)",
            stats.composites,
            stats.leaves,
            backend.name(),
            stats.gaps
        );
        Ok(stats)
    }

    fn visit<B: Backend>(
        &self,
        node: &Node,
        resolver: &Resolver<'_>,
        backend: &mut B,
        hooks: &HookTable<B>,
        stats: &mut WalkStats,
    ) -> Result<(), RenderError> {
        if node.is_composite() {
            stats.composites += 1;
            backend.begin_composite(node, resolver)?;
            for child in node.children() {
                self.visit(child, resolver, backend, hooks, stats)?;
            }
            return backend.end_composite(node, resolver);
        }

        stats.leaves += 1;
        match hooks.get(node.kind()) {
            Some(hook) => {
                let style = resolver.prepare_style_from(node)?;
                hook(backend, node, style.as_deref(), resolver)
            }
            None => {
                stats.gaps += 1;
                match self.policy {
                    DispatchPolicy::Strict => Err(RenderError::MissingHook {
                        backend: backend.name(),
                        kind: node.kind(),
                    }),
                    DispatchPolicy::Lenient => backend.on_missing_hook(node),
                }
            }
        }
    }
}
