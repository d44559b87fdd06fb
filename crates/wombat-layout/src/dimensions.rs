//! The box model.
//!
//! Every layout node owns a [`Dimensions`] record tracking three pairs of
//! numbers on the character grid:
//!
//! * `measured_*` grows as children fold their sizes in,
//! * `fixed_*` is an explicit [`Constraint`] inherited from the parent or
//!   declared on the node itself,
//! * `used_*` counts cells already consumed by earlier content and drives
//!   trimming and clipping.
//!
//! The final size of a box is its fixed size when constrained and its
//! measured size otherwise.

use serde::Serialize;
use wombat_tree::{Edges, Size, TextAlign};

/// An optional upper bound on one axis of a box.
///
/// Unconstrained axes grow with their content. Fixed axes clip it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Constraint {
    /// The axis grows freely with content.
    #[default]
    Unconstrained,
    /// The axis is capped at the given number of cells.
    Fixed(i32),
}

impl Constraint {
    /// Builds a fixed constraint, clamping negative values to zero.
    #[must_use]
    pub fn fixed(cells: i32) -> Self {
        Self::Fixed(cells.max(0))
    }

    /// Whether this axis is capped.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The cap in cells, if any.
    #[must_use]
    pub const fn get(self) -> Option<i32> {
        match self {
            Self::Unconstrained => None,
            Self::Fixed(cells) => Some(cells),
        }
    }
}

/// Measured, fixed and used extents of a single box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Width accumulated from folded children, in cells.
    pub measured_width: i32,
    /// Height accumulated from folded children, in cells.
    pub measured_height: i32,
    /// Explicit width cap, if any.
    pub fixed_width: Constraint,
    /// Explicit height cap, if any.
    pub fixed_height: Constraint,
    /// Cells of the current line already taken by earlier siblings.
    pub used_width: i32,
    /// Rows already taken by earlier lines.
    pub used_height: i32,
}

impl Dimensions {
    /// A fresh, empty, unconstrained box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Width the box reports to the outside: the cap when fixed, the
    /// content size otherwise.
    #[must_use]
    pub const fn final_width(&self) -> i32 {
        match self.fixed_width {
            Constraint::Fixed(cells) => cells,
            Constraint::Unconstrained => self.measured_width,
        }
    }

    /// Height counterpart of [`final_width`](Self::final_width).
    #[must_use]
    pub const fn final_height(&self) -> i32 {
        match self.fixed_height {
            Constraint::Fixed(cells) => cells,
            Constraint::Unconstrained => self.measured_height,
        }
    }

    /// Cells left on the current line, or `None` when width is
    /// unconstrained.
    #[must_use]
    pub const fn available_width(&self) -> Option<i32> {
        match self.fixed_width {
            Constraint::Fixed(cells) => Some(cells - self.used_width),
            Constraint::Unconstrained => None,
        }
    }

    /// Rows left below the consumed lines, or `None` when height is
    /// unconstrained.
    #[must_use]
    pub const fn available_height(&self) -> Option<i32> {
        match self.fixed_height {
            Constraint::Fixed(cells) => Some(cells - self.used_height),
            Constraint::Unconstrained => None,
        }
    }

    /// The box size as reported to siblings and parents.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.final_width(), self.final_height())
    }

    /// The box size grown by one ring of edges, typically padding.
    #[must_use]
    pub fn size_with(&self, edges: &Edges) -> Size {
        Size::new(
            self.final_width() + edges.horizontal(),
            self.final_height() + edges.vertical(),
        )
    }

    /// The box size grown by padding and margin, the footprint a parent
    /// folds in.
    #[must_use]
    pub fn outer_size(&self, inset: &Edges, outset: &Edges) -> Size {
        Size::new(
            self.final_width() + inset.horizontal() + outset.horizontal(),
            self.final_height() + inset.vertical() + outset.vertical(),
        )
    }

    /// Inherits constraints from the parent box.
    ///
    /// Width inherits the parent's full cap minus this node's `inset`
    /// (padding). Height inherits what is left of the parent's cap after
    /// the rows earlier lines consumed, again minus the inset. When the
    /// node continues the parent's current inline line it also carries
    /// over the cells that line has used, so trimming accounts for
    /// earlier inline siblings.
    pub fn apply_parent_constraints(
        &mut self,
        parent: &Dimensions,
        inset: &Edges,
        continues_line: bool,
    ) {
        if let Some(cells) = parent.fixed_width.get() {
            self.fixed_width = Constraint::fixed(cells - inset.horizontal());
            if continues_line {
                self.used_width = parent.used_width;
            }
        }
        if let Some(rows) = parent.available_height() {
            self.fixed_height = Constraint::fixed(rows - inset.vertical());
        }
    }

    /// Applies the node's own declared size on top of inherited caps.
    ///
    /// A declared size covers the padding ring, so the inset is taken out
    /// before it becomes the content cap. Declarations never widen an
    /// inherited cap; the smaller one wins, which keeps children inside
    /// their parents.
    pub fn apply_own_size(&mut self, width: Option<i32>, height: Option<i32>, inset: &Edges) {
        if let Some(width) = width {
            let mut cells = width - inset.horizontal();
            if let Some(inherited) = self.fixed_width.get() {
                cells = cells.min(inherited);
            }
            self.fixed_width = Constraint::fixed(cells);
        }
        if let Some(height) = height {
            let mut rows = height - inset.vertical();
            if let Some(inherited) = self.fixed_height.get() {
                rows = rows.min(inherited);
            }
            self.fixed_height = Constraint::fixed(rows);
        }
    }

    /// Folds a block child in: lines stack, so width maxes and height
    /// sums.
    pub fn fold_block(&mut self, child: Size) {
        self.measured_width = self.measured_width.max(child.width);
        self.measured_height += child.height;
    }

    /// Folds a child that continues the current line. The line extends to
    /// the cells already used plus the child, and the box grows to cover
    /// that extent; earlier, wider lines keep the measure.
    pub fn fold_inline(&mut self, child: Size) {
        self.measured_width = self.measured_width.max(self.used_width + child.width);
        self.measured_height = self.measured_height.max(self.used_height + child.height);
    }

    /// Folds an out-of-flow child in by bounding box, used by the root to
    /// size the scene around absolute views.
    pub fn fold_absolute(&mut self, extent: Size) {
        self.measured_width = self.measured_width.max(extent.width);
        self.measured_height = self.measured_height.max(extent.height);
    }

    /// Marks `rows` further rows as consumed.
    pub fn consume_row(&mut self, rows: i32) {
        self.used_height += rows;
    }

    /// Marks `cells` further cells of the current line as consumed.
    pub fn consume_inline(&mut self, cells: i32) {
        self.used_width += cells;
    }

    /// Starts a fresh line, releasing the cells the previous one used.
    pub fn reset_line(&mut self) {
        self.used_width = 0;
    }

    /// Whether at least one more row fits under the height cap.
    #[must_use]
    pub fn has_available_space(&self) -> bool {
        self.available_height().is_none_or(|rows| rows > 0)
    }

    /// Whether further content would fall past the height cap and must
    /// not produce render elements.
    #[must_use]
    pub fn should_skip(&self) -> bool {
        !self.has_available_space()
    }

    /// Fits `value` into the cells left on the current line.
    ///
    /// Unconstrained widths return the value untouched. Otherwise the
    /// value is cut to the available cells and, for center and right
    /// alignment, padded with spaces up to them; center puts the odd
    /// spare cell on the right. A line with nothing left yields an empty
    /// string.
    #[must_use]
    pub fn trim_horizontally(&self, value: &str, align: TextAlign) -> String {
        let Some(available) = self.available_width() else {
            return value.to_string();
        };
        if available <= 0 {
            return String::new();
        }
        #[allow(clippy::cast_sign_loss)]
        let room = available as usize;
        let trimmed: String = value.chars().take(room).collect();
        let fill = room.saturating_sub(trimmed.chars().count());
        match align {
            TextAlign::Left => trimmed,
            TextAlign::Center => {
                let left = fill / 2;
                format!("{}{trimmed}{}", " ".repeat(left), " ".repeat(fill - left))
            }
            TextAlign::Right => format!("{}{trimmed}", " ".repeat(fill)),
        }
    }
}

/// Measures a text body: one row tall, one cell per character.
#[must_use]
pub fn measure_text(body: &str) -> Size {
    let width = i32::try_from(body.chars().count()).unwrap_or(i32::MAX);
    Size::new(width, 1)
}
