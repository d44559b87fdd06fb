//! The flat draw list a layout pass produces.
//!
//! Rendering is decoupled from the tree: the walker emits
//! [`RenderElement`]s in paint order and a rasterizer replays them onto a
//! grid without knowing anything about boxes or flow.

use serde::Serialize;
use wombat_tree::{Color, FontStyle, FontWeight, StyleProps, TextDecoration};

/// One paintable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderElement {
    /// A filled rectangle. Restyles the area it covers, keeping the
    /// glyphs already there.
    Box(BoxElement),
    /// A run of text on a single row.
    Body(BodyElement),
}

/// A rectangle of background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxElement {
    /// Column of the left edge.
    pub x: i32,
    /// Row of the top edge.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
    /// Fill style.
    pub style: BoxStyle,
}

/// Style of a [`BoxElement`]. Boxes are only emitted when there is a
/// color to fill with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxStyle {
    /// The fill color.
    pub background_color: Color,
}

/// A single-row run of characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyElement {
    /// The characters to draw.
    pub value: String,
    /// Column of the first character.
    pub x: i32,
    /// Row the run sits on.
    pub y: i32,
    /// Text attributes; `None` draws with whatever the cell already has.
    pub style: Option<BodyStyle>,
}

/// Text attributes of a [`BodyElement`].
///
/// A `None` field leaves the corresponding cell attribute untouched, so
/// text drawn over a colored box keeps the box's background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BodyStyle {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color behind the run.
    pub background_color: Option<Color>,
    /// Normal or bold.
    pub font_weight: Option<FontWeight>,
    /// Normal or italic.
    pub font_style: Option<FontStyle>,
    /// Underline or strike-through.
    pub text_decoration: Option<TextDecoration>,
}

impl BodyStyle {
    /// Whether no attribute is set, in which case the element carries no
    /// style at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.background_color.is_none()
            && self.font_weight.is_none()
            && self.font_style.is_none()
            && self.text_decoration.is_none()
    }

    /// Folds one style record in; set fields win over earlier ones.
    ///
    /// Background color is deliberately left out: it belongs to the box
    /// of the view that declared it and does not inherit into descendant
    /// text.
    pub fn merge(&mut self, props: &StyleProps) {
        if props.color.is_some() {
            self.color = props.color;
        }
        if props.font_weight.is_some() {
            self.font_weight = props.font_weight;
        }
        if props.font_style.is_some() {
            self.font_style = props.font_style;
        }
        if props.text_decoration.is_some() {
            self.text_decoration = props.text_decoration;
        }
    }

    /// The style as attached to an element: `None` when empty.
    #[must_use]
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}
