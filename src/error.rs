use folio_idf::IdfError;
use folio_render_core::RenderError;
use folio_style::StyleError;
use thiserror::Error;

/// A comprehensive error type for loading and rendering a document.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid document tree: {0}")]
    Idf(#[from] IdfError),

    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Stylesheet is invalid: {0}")]
    Stylesheet(String),
}
