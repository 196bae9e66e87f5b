//! Row-to-cell style glue.
//!
//! Some backends let a row's style flow into its cells: a cell's registry
//! match is completed from the row's effective style before the cell's own
//! style is applied on top. This is a backend policy assembled from the
//! resolver primitives; the dispatcher never applies it.
//!
//! Precedence, highest first: cell own style, cell registry match, row style.

use crate::error::RenderError;
use crate::resolver::{join, Resolver};
use folio_idf::{Node, StyleDescriptor};

/// The effective style of `row` as an owned copy, ready to be glued into
/// each of its cells.
pub fn row_style_for(
    resolver: &Resolver<'_>,
    row: &Node,
) -> Result<Option<StyleDescriptor>, RenderError> {
    resolver
        .prepare_style_from(row)?
        .map(|style| style.to_owned_style())
        .transpose()
}

/// Resolves `cell` with `row_style` filling whatever the cell leaves unset.
pub fn glue_row_style(
    resolver: &Resolver<'_>,
    row_style: Option<&StyleDescriptor>,
    cell: &Node,
) -> Result<Option<StyleDescriptor>, RenderError> {
    let registered = resolver.extract_style_for(cell)?;
    let glued = match (registered, row_style) {
        (Some(cell_style), Some(row_style)) => Some(join(row_style, cell_style.try_clone()?)),
        (Some(cell_style), None) => Some(cell_style.try_clone()?),
        (None, Some(row_style)) => Some(row_style.try_clone()?),
        (None, None) => None,
    };

    Ok(match (cell.own_style(), glued) {
        (Some(own), Some(glued)) => Some(join(&glued, own.try_clone()?)),
        (Some(own), None) => Some(own.try_clone()?),
        (None, glued) => glued,
    })
}
