use crate::error::IdfError;
use crate::kind::NodeKind;
use crate::node::Node;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&Node) -> Result<bool, IdfError> + Send + Sync;

/// A predicate bound to a target node kind.
///
/// A condition matches a node only when the node's kind is assignable to the
/// target *and* the predicate holds. The kind check runs first, so a
/// predicate only ever sees nodes of its declared type; a predicate that
/// still fails (for instance by reading a column index the declared kind
/// does not have) surfaces as [`IdfError::Predicate`].
///
/// Cloning shares the predicate; two conditions are equal only when they
/// share the same predicate and target.
#[derive(Clone)]
pub struct Condition {
    target: NodeKind,
    predicate: Arc<Predicate>,
    label: Option<Arc<str>>,
}

impl Condition {
    pub fn new<F>(target: NodeKind, predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Self::try_new(target, move |node| Ok(predicate(node)))
    }

    /// A condition whose predicate may fail, typically by propagating a
    /// missing-field error from one of the node accessors.
    pub fn try_new<F>(target: NodeKind, predicate: F) -> Self
    where
        F: Fn(&Node) -> Result<bool, IdfError> + Send + Sync + 'static,
    {
        Self {
            target,
            predicate: Arc::new(predicate),
            label: None,
        }
    }

    /// Matches every node assignable to `target`.
    pub fn for_kind(target: NodeKind) -> Self {
        Self::new(target, |_| true)
    }

    /// Attaches a human-readable description, shown in `Debug` output.
    pub fn labeled(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn target(&self) -> NodeKind {
        self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The type half of matching: is `kind` assignable to the target?
    pub fn admits(&self, kind: NodeKind) -> bool {
        kind.is_assignable_to(self.target)
    }

    pub fn matches(&self, node: &Node) -> Result<bool, IdfError> {
        if !self.admits(node.kind()) {
            return Ok(false);
        }
        (self.predicate)(node).map_err(|source| IdfError::Predicate {
            target: self.target,
            source: Box::new(source),
        })
    }
}

/// Matching against an optional condition: an absent condition never matches.
pub fn matches(condition: Option<&Condition>, node: &Node) -> Result<bool, IdfError> {
    match condition {
        Some(condition) => condition.matches(node),
        None => Ok(false),
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("target", &self.target)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_predicate_both_required() {
        let first_column = Condition::try_new(NodeKind::TableCell, |node| {
            Ok(node.column_index()? == 0)
        });

        let row = Node::row()
            .with_children([Node::cell("a"), Node::cell("b")])
            .unwrap();
        assert!(first_column.matches(&row.children()[0]).unwrap());
        assert!(!first_column.matches(&row.children()[1]).unwrap());

        // Same predicate result, wrong kind.
        let always = Condition::new(NodeKind::Heading, |_| true);
        assert!(!always.matches(&Node::paragraph("p")).unwrap());
        assert!(always.matches(&Node::heading(1, "h")).unwrap());
    }

    #[test]
    fn test_subtype_admitted() {
        let cells = Condition::for_kind(NodeKind::TableCell);
        assert!(cells.matches(&Node::header_cell("h")).unwrap());

        let header_only = Condition::for_kind(NodeKind::HeaderCell);
        assert!(!header_only.matches(&Node::cell("c")).unwrap());
    }

    #[test]
    fn test_absent_condition_never_matches() {
        assert!(!matches(None, &Node::paragraph("p")).unwrap());
    }

    #[test]
    fn test_predicate_fault_is_surfaced() {
        // Declared for every element, but reads a cell-only field.
        let misconfigured = Condition::try_new(NodeKind::Element, |node| {
            Ok(node.column_index()? > 0)
        });

        let err = misconfigured.matches(&Node::paragraph("p")).unwrap_err();
        assert!(matches!(
            err,
            IdfError::Predicate {
                target: NodeKind::Element,
                ..
            }
        ));
        assert!(err.to_string().contains("column index"));
    }

    #[test]
    fn test_equality_is_identity_of_predicate() {
        let a = Condition::for_kind(NodeKind::Heading);
        let b = a.clone();
        let c = Condition::for_kind(NodeKind::Heading);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
