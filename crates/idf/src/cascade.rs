//! Depth-bounded propagation of a style onto descendants.

use crate::descriptor::StyleDescriptor;
use crate::error::IdfError;
use crate::node::Node;

/// How far below the root a cascade reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unbounded,
    /// `Levels(0)` touches nothing, `Levels(1)` only direct children.
    Levels(usize),
}

impl Depth {
    /// Maps the signed convention (`-1` = unbounded) onto `Depth`.
    pub fn from_signed(depth: i64) -> Self {
        if depth < 0 {
            Depth::Unbounded
        } else {
            Depth::Levels(depth as usize)
        }
    }

    /// The budget left for the next level, or `None` when exhausted.
    fn descend(self) -> Option<Depth> {
        match self {
            Depth::Unbounded => Some(Depth::Unbounded),
            Depth::Levels(0) => None,
            Depth::Levels(n) => Some(Depth::Levels(n - 1)),
        }
    }
}

impl From<i64> for Depth {
    fn from(depth: i64) -> Self {
        Depth::from_signed(depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Descendants inspected.
    pub visited: usize,
    /// Descendants that received a copy of the style.
    pub applied: usize,
}

/// Pushes a copy of `style` onto every descendant of `root` within `depth`
/// that has no own style and whose kind the style's condition admits.
///
/// Styled nodes keep their style, but their descendants are still visited.
/// Each node receives its own deep copy. A copy failure aborts the walk;
/// nodes styled before the failure keep their copies.
pub fn cascade(
    root: &mut Node,
    style: &StyleDescriptor,
    depth: Depth,
) -> Result<CascadeReport, IdfError> {
    let mut report = CascadeReport::default();
    spread(root, style, depth, &mut report)?;
    log::debug!(
        "Cascaded style onto {} of {} descendants of {}",
        report.applied,
        report.visited,
        root.kind()
    );
    Ok(report)
}

fn spread(
    node: &mut Node,
    style: &StyleDescriptor,
    depth: Depth,
    report: &mut CascadeReport,
) -> Result<(), IdfError> {
    let Some(remaining) = depth.descend() else {
        return Ok(());
    };
    for child in node.children_mut() {
        report.visited += 1;
        if !child.has_own_style() && style.accepts_kind(child.kind()) {
            child.set_own_style(Some(style.try_clone()?));
            report.applied += 1;
        }
        if child.is_composite() {
            spread(child, style, remaining, report)?;
        }
    }
    Ok(())
}
