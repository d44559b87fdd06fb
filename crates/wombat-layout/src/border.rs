//! Border decoration.
//!
//! A border is not a layout concept of its own: a bordered view is laid
//! out as a plain container whose content is shifted one cell right and
//! down, and the ring of glyphs is painted around the content box
//! afterwards. The view's outer footprint grows by two cells on each
//! axis.

use wombat_tree::{BorderProps, BorderThickness, Size, StyleProps};

use crate::element::{BodyElement, BodyStyle, RenderElement};
use crate::placement::Placement;

/// The six characters a border ring is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
}

const SINGLE_LINE: BorderGlyphs = BorderGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
};

const DOUBLE_LINE: BorderGlyphs = BorderGlyphs {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
};

impl BorderGlyphs {
    /// The glyph set for a border thickness.
    #[must_use]
    pub const fn for_thickness(thickness: BorderThickness) -> &'static Self {
        match thickness {
            BorderThickness::SingleLine => &SINGLE_LINE,
            BorderThickness::DoubleLine => &DOUBLE_LINE,
        }
    }
}

/// Resolves the style the ring is drawn with: border colors first,
/// falling back to the view's own style props.
#[must_use]
pub fn ring_style(border: &BorderProps, view_style: Option<&StyleProps>) -> Option<BodyStyle> {
    let fallback_color = view_style.and_then(|style| style.color);
    let fallback_background = view_style.and_then(|style| style.background_color);
    BodyStyle {
        color: border.color.or(fallback_color),
        background_color: border.background_color.or(fallback_background),
        ..BodyStyle::default()
    }
    .into_option()
}

/// Builds the text runs of a border ring around a content box.
///
/// `content` is the top-left cell of the padded content area and `inner`
/// its size; the ring occupies the one-cell frame around it, starting at
/// `(content.x - 1, content.y - 1)`.
#[must_use]
pub fn ring_elements(
    content: Placement,
    inner: Size,
    border: &BorderProps,
    view_style: Option<&StyleProps>,
) -> Vec<RenderElement> {
    let glyphs = BorderGlyphs::for_thickness(border.thickness);
    let style = ring_style(border, view_style);
    let width = usize::try_from(inner.width.max(0)).unwrap_or(0);

    let run = |value: String, x: i32, y: i32| {
        RenderElement::Body(BodyElement {
            value,
            x,
            y,
            style,
        })
    };

    let mut elements = Vec::with_capacity(2 + 2 * usize::try_from(inner.height.max(0)).unwrap_or(0));
    let top = format!(
        "{}{}{}",
        glyphs.top_left,
        glyphs.horizontal.to_string().repeat(width),
        glyphs.top_right
    );
    elements.push(run(top, content.x - 1, content.y - 1));
    for row in 0..inner.height.max(0) {
        elements.push(run(glyphs.vertical.to_string(), content.x - 1, content.y + row));
        elements.push(run(
            glyphs.vertical.to_string(),
            content.x + inner.width,
            content.y + row,
        ));
    }
    let bottom = format!(
        "{}{}{}",
        glyphs.bottom_left,
        glyphs.horizontal.to_string().repeat(width),
        glyphs.bottom_right
    );
    elements.push(run(bottom, content.x - 1, content.y + inner.height));
    elements
}
