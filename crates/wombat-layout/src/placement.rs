//! Grid positions for layout nodes.
//!
//! Flow nodes derive their position from the parent's origin and the
//! cells earlier siblings already consumed, tracked by the parent's used
//! counters. Absolute nodes take their position verbatim from their
//! props, in canvas coordinates.

use serde::Serialize;
use wombat_tree::Edges;

/// Where a box lands on the canvas.
///
/// `x` grows to the right, `y` downwards. `z` picks the paint layer;
/// higher layers are painted later and cover lower ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Column of the top-left corner.
    pub x: i32,
    /// Row of the top-left corner.
    pub y: i32,
    /// Paint layer.
    pub z: i32,
}

impl Placement {
    /// Opens a new line under everything the parent laid out so far.
    ///
    /// `rows_above` is the rows occupied by the parent's completed lines,
    /// which is the parent's used height right after the line opened.
    #[must_use]
    pub fn on_new_line(
        parent: &Placement,
        parent_inset: &Edges,
        rows_above: i32,
        outset: &Edges,
    ) -> Self {
        Self {
            x: parent.x + parent_inset.left + outset.left,
            y: parent.y + parent_inset.top + rows_above + outset.top,
            z: parent.z,
        }
    }

    /// Continues the parent's current line after the previous inline
    /// sibling.
    ///
    /// `line_used` is the cells earlier siblings consumed on this line,
    /// the parent's used width. `line_top` is the row the line started
    /// on, taken from the previous sibling's position with its own top
    /// margin removed.
    #[must_use]
    pub fn on_same_line(
        parent: &Placement,
        parent_inset: &Edges,
        line_used: i32,
        line_top: i32,
        outset: &Edges,
    ) -> Self {
        Self {
            x: parent.x + parent_inset.left + line_used + outset.left,
            y: line_top + outset.top,
            z: parent.z,
        }
    }

    /// Places a box out of flow at explicit canvas coordinates.
    #[must_use]
    pub const fn out_of_flow(left: i32, top: i32, z: i32) -> Self {
        Self {
            x: left,
            y: top,
            z,
        }
    }
}
