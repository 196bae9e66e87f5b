//! folio: a format-agnostic document composition and style-resolution engine.
//!
//! Documents are built as a composition tree ([`Node`]), styled through an
//! ordered [`StyleRegistry`] of conditional styles plus each node's own style,
//! and rendered by walking the tree into a [`Backend`].
//!
//! ```no_run
//! use folio::{Composer, RenderConfig};
//!
//! let loaded = folio::loader::load_file("report.json")?;
//! let (composer, root) = Composer::from_loaded(loaded, RenderConfig::default());
//! println!("{}", composer.render_html(&root)?);
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;

pub use composer::{Composer, OutputFormat};
pub use config::RenderConfig;
pub use error::PipelineError;

pub use folio_idf::{
    CascadeReport, Condition, Content, Depth, IdfError, Node, NodeKind, StyleDescriptor,
    TablePosition,
};
pub use folio_render_core::{
    join, Backend, DispatchPolicy, Dispatcher, EffectiveStyle, HookTable, RenderContext,
    RenderError, Resolver, StyleRegistry, WalkStats,
};
pub use folio_style::{
    parse_declarations, Border, BorderWeight, CombinedStyle, Dimension, FillPattern, FontFamily,
    HorizontalAlign, Join, LayoutStyle, StyleAttrs, StyleError, StyleExtension, TextStyle,
    VerticalAlign,
};
pub use folio_types::{Color, ResourceUri};
