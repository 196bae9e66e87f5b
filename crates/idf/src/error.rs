use crate::kind::NodeKind;
use folio_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdfError {
    /// The node has no append-capable child container.
    #[error("Cannot append children to a {kind} node")]
    NotAppendable { kind: NodeKind },

    #[error("A {child} node cannot be a child of a {parent} node")]
    InvalidChild { parent: NodeKind, child: NodeKind },

    #[error("{kind} node has no '{field}'")]
    MissingField { kind: NodeKind, field: &'static str },

    /// A condition's predicate failed on a node its target type admitted.
    #[error("Condition targeting {target} failed: {source}")]
    Predicate {
        target: NodeKind,
        #[source]
        source: Box<IdfError>,
    },

    #[error("Style error: {0}")]
    Style(#[from] StyleError),
}
