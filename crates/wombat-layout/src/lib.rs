//! Box layout over a character grid.
//!
//! This crate turns a [`wombat_tree::NodeTree`] into two things in one
//! depth-first pass:
//!
//! * a flat list of [`RenderElement`]s in back-to-front paint order,
//!   ready for a rasterizer,
//! * a [`LayoutTree`] recording the dimensions and placement computed
//!   for every node, for inspection.
//!
//! The model is a simplified CSS box flow on integer cells: block views
//! stack vertically, inline views and text extend the current line,
//! absolutely positioned views leave the flow entirely and land on
//! explicit canvas coordinates inside coarse z layers. Fixed widths trim
//! text with optional alignment; fixed heights clip whole lines once the
//! rows are spent.
//!
//! Enable the `layout-trace` cargo feature to print every computed node
//! to stderr during the walk.

pub mod border;
pub mod dimensions;
pub mod element;
pub mod error;
pub mod hierarchy;
pub mod normalize;
pub mod placement;
pub mod tree;
pub mod walker;

pub use dimensions::{Constraint, Dimensions};
pub use element::{BodyElement, BodyStyle, BoxElement, BoxStyle, RenderElement};
pub use error::{Axis, LayoutError};
pub use placement::Placement;
pub use tree::{LayoutId, LayoutKind, LayoutNode, LayoutTree};
pub use walker::{Layout, calculate_layout};
