use folio_idf::{IdfError, NodeKind};
use folio_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Document error: {0}")]
    Idf(#[from] IdfError),
    #[error("Style error: {0}")]
    Style(#[from] StyleError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    /// A dispatch gap escalated by a strict policy or backend.
    #[error("Backend '{backend}' has no handler for {kind} nodes")]
    MissingHook {
        backend: &'static str,
        kind: NodeKind,
    },
    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Backend(s.to_string())
    }
}
