//! ANSI escape formatting for canvas rows.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};
use wombat_tree::{Color, FontStyle, FontWeight, TextDecoration};

use crate::canvas::{Cell, CellStyle};

/// Maps an engine color onto the terminal palette.
pub(crate) const fn terminal_color(color: Color) -> DynColors {
    match color {
        Color::Black => DynColors::Ansi(AnsiColors::Black),
        Color::Red => DynColors::Ansi(AnsiColors::Red),
        Color::Green => DynColors::Ansi(AnsiColors::Green),
        Color::Yellow => DynColors::Ansi(AnsiColors::Yellow),
        Color::Blue => DynColors::Ansi(AnsiColors::Blue),
        Color::Magenta => DynColors::Ansi(AnsiColors::Magenta),
        Color::Cyan => DynColors::Ansi(AnsiColors::Cyan),
        Color::White => DynColors::Ansi(AnsiColors::White),
        Color::BrightBlack => DynColors::Ansi(AnsiColors::BrightBlack),
        Color::BrightRed => DynColors::Ansi(AnsiColors::BrightRed),
        Color::BrightGreen => DynColors::Ansi(AnsiColors::BrightGreen),
        Color::BrightYellow => DynColors::Ansi(AnsiColors::BrightYellow),
        Color::BrightBlue => DynColors::Ansi(AnsiColors::BrightBlue),
        Color::BrightMagenta => DynColors::Ansi(AnsiColors::BrightMagenta),
        Color::BrightCyan => DynColors::Ansi(AnsiColors::BrightCyan),
        Color::BrightWhite => DynColors::Ansi(AnsiColors::BrightWhite),
        Color::Rgb(r, g, b) => DynColors::Rgb(r, g, b),
    }
}

/// Formats one row as a single string, coalescing runs of cells that
/// share a style into one escape sequence. A run with the default style
/// is emitted as bare text.
pub(crate) fn row_to_ansi(row: &[Cell]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut current = CellStyle::default();
    for cell in row {
        if cell.style != current {
            push_fragment(&mut out, &run, current);
            run.clear();
            current = cell.style;
        }
        run.push(cell.ch);
    }
    push_fragment(&mut out, &run, current);
    out
}

fn push_fragment(out: &mut String, text: &str, style: CellStyle) {
    if text.is_empty() {
        return;
    }
    if style == CellStyle::default() {
        out.push_str(text);
        return;
    }
    let mut ansi = Style::new();
    if let Some(color) = style.foreground {
        ansi = ansi.color(terminal_color(color));
    }
    if let Some(color) = style.background {
        ansi = ansi.on_color(terminal_color(color));
    }
    if style.weight == Some(FontWeight::Bold) {
        ansi = ansi.bold();
    }
    if style.slant == Some(FontStyle::Italic) {
        ansi = ansi.italic();
    }
    match style.decoration {
        Some(TextDecoration::Underline) => ansi = ansi.underline(),
        Some(TextDecoration::LineThrough) => ansi = ansi.strikethrough(),
        Some(TextDecoration::None) | None => {}
    }
    out.push_str(&text.style(ansi).to_string());
}
