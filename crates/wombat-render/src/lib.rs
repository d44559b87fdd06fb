//! Rasterizer for the wombat layout engine.
//!
//! Takes the draw list produced by `wombat_layout` and replays it onto a
//! character grid sized from the tree's canvas. Two output forms exist:
//! plain rows with attributes dropped, and rows carrying ANSI escape
//! sequences with runs of equally-styled cells coalesced. The
//! [`DiffRenderer`] wraps the latter for front ends that repaint in place.

mod ansi;
pub mod canvas;
pub mod diff;

pub use canvas::{Canvas, Cell, CellStyle};
pub use diff::DiffRenderer;

use wombat_layout::{LayoutError, calculate_layout};
use wombat_tree::NodeTree;

/// Lays the tree out and rasterizes it to plain text rows.
///
/// A bounded canvas always produces exactly its height in rows, each
/// exactly the canvas width; unbounded canvases produce as many rows as
/// the content reaches.
///
/// # Errors
/// Returns an error when layout fails for the tree.
pub fn render(tree: &NodeTree) -> Result<Vec<String>, LayoutError> {
    let layout = calculate_layout(tree)?;
    let mut canvas = Canvas::new(tree.size());
    canvas.paint(&layout.elements);
    Ok(canvas.to_rows())
}

/// Lays the tree out and rasterizes it to rows with ANSI escapes.
///
/// Rows holding only default-styled cells come out as bare text, so an
/// unstyled scene renders identically to [`render`].
///
/// # Errors
/// Returns an error when layout fails for the tree.
pub fn render_ansi(tree: &NodeTree) -> Result<Vec<String>, LayoutError> {
    let layout = calculate_layout(tree)?;
    let mut canvas = Canvas::new(tree.size());
    canvas.paint(&layout.elements);
    Ok(canvas.to_ansi_rows())
}
