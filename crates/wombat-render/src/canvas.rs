//! The character grid a draw list is replayed onto.

use wombat_layout::{BodyStyle, BoxElement, RenderElement};
use wombat_tree::{Color, FontStyle, FontWeight, Size, TextDecoration};

use crate::ansi;

/// Attributes attached to a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    /// Foreground color of the glyph.
    pub foreground: Option<Color>,
    /// Background color of the cell.
    pub background: Option<Color>,
    /// Font weight of the glyph.
    pub weight: Option<FontWeight>,
    /// Slant of the glyph.
    pub slant: Option<FontStyle>,
    /// Underline or strike-through on the glyph.
    pub decoration: Option<TextDecoration>,
}

/// One cell of the grid: a glyph plus its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph occupying the cell.
    pub ch: char,
    /// Attributes the glyph is drawn with.
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// A fixed-width grid of cells.
///
/// Writes land cell by cell and anything outside the grid is dropped, so
/// elements may hang off any edge without corrupting the frame. A canvas
/// built from a size with negative height is unbounded: rows come into
/// existence as writes reach them.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<Cell>>,
    unbounded: bool,
}

impl Canvas {
    /// Creates a blank canvas of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let width = usize::try_from(size.width.max(0)).unwrap_or(0);
        let unbounded = size.height < 0;
        let rows = if unbounded {
            Vec::new()
        } else {
            let height = usize::try_from(size.height).unwrap_or(0);
            vec![vec![Cell::default(); width]; height]
        };
        Self {
            width,
            rows,
            unbounded,
        }
    }

    /// Width of the grid in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Rows currently materialized. A bounded canvas always holds its
    /// full height; an unbounded one grows on write.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The cell at a column and row, if inside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Replays a draw list onto the grid in order. Later elements win,
    /// which is how stacking order reaches the terminal.
    pub fn paint(&mut self, elements: &[RenderElement]) {
        for element in elements {
            match element {
                RenderElement::Box(rect) => self.apply_style(rect),
                RenderElement::Body(body) => {
                    self.set_text(body.x, body.y, &body.value, body.style.as_ref());
                }
            }
        }
    }

    /// Writes a run of characters on one row.
    ///
    /// The glyph and every attribute except the background come from the
    /// run. A run without its own background keeps whatever background is
    /// already in each cell, so text drawn over a colored box stays on
    /// the box's color.
    #[allow(clippy::cast_sign_loss)]
    pub fn set_text(&mut self, x: i32, y: i32, value: &str, style: Option<&BodyStyle>) {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let Some(row) = self.row_mut(y) else { return };
        let mut col = x;
        for ch in value.chars() {
            if col >= width {
                break;
            }
            if col >= 0 {
                let cell = &mut row[col as usize];
                cell.ch = ch;
                cell.style.foreground = style.and_then(|s| s.color);
                cell.style.weight = style.and_then(|s| s.font_weight);
                cell.style.slant = style.and_then(|s| s.font_style);
                cell.style.decoration = style.and_then(|s| s.text_decoration);
                if let Some(background) = style.and_then(|s| s.background_color) {
                    cell.style.background = Some(background);
                }
            }
            col += 1;
        }
    }

    /// Recolors the background of a rectangle, leaving glyphs and text
    /// attributes in place.
    #[allow(clippy::cast_sign_loss)]
    pub fn apply_style(&mut self, rect: &BoxElement) {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let right = rect.x.saturating_add(rect.width.max(0)).min(width);
        let bottom = rect.y.saturating_add(rect.height.max(0));
        for y in rect.y..bottom {
            let Some(row) = self.row_mut(y) else { continue };
            for col in rect.x.max(0)..right {
                row[col as usize].style.background = Some(rect.style.background_color);
            }
        }
    }

    /// The grid as plain text, one string per row, attributes dropped.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .collect()
    }

    /// The grid as rows carrying ANSI escape sequences. Adjacent cells
    /// with equal attributes share one sequence.
    #[must_use]
    pub fn to_ansi_rows(&self) -> Vec<String> {
        self.rows.iter().map(|row| ansi::row_to_ansi(row)).collect()
    }

    fn row_mut(&mut self, y: i32) -> Option<&mut Vec<Cell>> {
        let y = usize::try_from(y).ok()?;
        if self.unbounded {
            while self.rows.len() <= y {
                self.rows.push(vec![Cell::default(); self.width]);
            }
        }
        self.rows.get_mut(y)
    }
}
