//! Backend-specific attribute bundles carried inside a style descriptor.

use crate::error::StyleError;
use std::any::Any;
use std::fmt::Debug;

/// A format-specific set of attributes a backend attaches to a descriptor.
///
/// The engine treats extensions opaquely: it compares, copies and joins them
/// only through this trait. An extension that cannot be copied makes every
/// cascade of its descriptor fail with [`StyleError::NotCopyable`].
pub trait StyleExtension: Debug + Send + Sync {
    /// A short name used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Produces an independent copy of this extension.
    fn try_clone(&self) -> Result<Box<dyn StyleExtension>, StyleError> {
        Err(StyleError::NotCopyable(self.name().to_string()))
    }

    /// Value equality against another extension, usually via `as_any` downcast.
    fn eq_extension(&self, other: &dyn StyleExtension) -> bool;

    /// Fills unset attributes from `donor`. Returns `false` when the donor is
    /// not a compatible extension and nothing was joined.
    fn join_from(&mut self, _donor: &dyn StyleExtension) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;
}
