//! Inline text styling props, colors and border decoration.
//!
//! Style props are inherited by descendant text leaves (innermost wins per
//! field, background color excepted); border props decorate a single view
//! with box-drawing glyphs.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ParseError;

/// Inline text styling for a view, inherited by descendant text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleProps {
    /// Foreground color of text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Background fill for the view's box. Stripped when styles are
    /// inherited by text (the box paints it instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Normal or bold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Normal or italic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// Underline or line-through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    /// Case transformation applied to text bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    /// Horizontal alignment of text within a width-constrained parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// Font weight keyword.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold.
    Bold,
}

/// Font style keyword.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// Text decoration keyword.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    /// No decoration.
    #[default]
    None,
    /// Underlined.
    Underline,
    /// Struck through.
    LineThrough,
}

/// Case transformation keyword.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    /// Leave the body as written.
    #[default]
    None,
    /// Uppercase the first letter of every word.
    Capitalize,
    /// Uppercase everything.
    Uppercase,
    /// Lowercase everything.
    Lowercase,
}

/// Horizontal text alignment keyword.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    /// Flush left (the default).
    #[default]
    Left,
    /// Centered, with the odd leftover cell going to the right.
    Center,
    /// Flush right.
    Right,
}

/// Apply a case transformation to a text body.
///
/// Capitalization uppercases the first alphabetic character of each
/// whitespace-separated word; the other variants defer to the standard
/// Unicode case mappings.
#[must_use]
pub fn apply_text_transform(value: &str, transform: TextTransform) -> Cow<'_, str> {
    match transform {
        TextTransform::None => Cow::Borrowed(value),
        TextTransform::Uppercase => Cow::Owned(value.to_uppercase()),
        TextTransform::Lowercase => Cow::Owned(value.to_lowercase()),
        TextTransform::Capitalize => {
            let mut out = String::with_capacity(value.len());
            let mut at_word_start = true;
            for ch in value.chars() {
                if ch.is_whitespace() {
                    at_word_start = true;
                    out.push(ch);
                } else if at_word_start {
                    at_word_start = false;
                    out.extend(ch.to_uppercase());
                } else {
                    out.push(ch);
                }
            }
            Cow::Owned(out)
        }
    }
}

/// A terminal color: one of the sixteen ANSI palette entries or a direct
/// RGB value for terminals with truecolor support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// ANSI black.
    Black,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
    /// Bright black (usually rendered as gray).
    BrightBlack,
    /// Bright red.
    BrightRed,
    /// Bright green.
    BrightGreen,
    /// Bright yellow.
    BrightYellow,
    /// Bright blue.
    BrightBlue,
    /// Bright magenta.
    BrightMagenta,
    /// Bright cyan.
    BrightCyan,
    /// Bright white.
    BrightWhite,
    /// 24-bit color from hex notation.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Look up one of the sixteen ANSI palette names.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "bright-black" | "gray" | "grey" => Some(Color::BrightBlack),
            "bright-red" => Some(Color::BrightRed),
            "bright-green" => Some(Color::BrightGreen),
            "bright-yellow" => Some(Color::BrightYellow),
            "bright-blue" => Some(Color::BrightBlue),
            "bright-magenta" => Some(Color::BrightMagenta),
            "bright-cyan" => Some(Color::BrightCyan),
            "bright-white" => Some(Color::BrightWhite),
            _ => None,
        }
    }

    /// Parse `#rgb` or `#rrggbb` hex notation. The three-digit form expands
    /// by replicating digits, not by adding zeros.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
            Color::Rgb(r, g, b) => return write!(f, "#{r:02x}{g:02x}{b:02x}"),
        };
        f.write_str(keyword)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Color::from_hex(s).ok_or_else(|| ParseError::Color(s.to_string()));
        }
        Color::from_named(s).ok_or_else(|| ParseError::Color(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Box-drawing glyph set for a border.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BorderThickness {
    /// `─ │ ┌ ┐ └ ┘`
    #[default]
    SingleLine,
    /// `═ ║ ╔ ╗ ╚ ╝`
    DoubleLine,
}

/// Border decoration for a view.
///
/// A border grows the view's reported size by two cells on each axis and
/// shifts children by one cell right and down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BorderPropsRepr", rename_all = "kebab-case")]
pub struct BorderProps {
    /// Glyph set to draw with.
    pub thickness: BorderThickness,
    /// Glyph foreground color; falls back to the view's style color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Glyph background color; falls back to the view's background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl FromStr for BorderProps {
    type Err = ParseError;

    /// Parses the `"<thickness> [<color> [<background-color>]]"` shorthand,
    /// e.g. `"single-line white blue"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let thickness = tokens
            .next()
            .and_then(|t| t.parse::<BorderThickness>().ok())
            .ok_or_else(|| ParseError::BorderShorthand(s.to_string()))?;
        let color = tokens.next().map(Color::from_str).transpose()?;
        let background_color = tokens.next().map(Color::from_str).transpose()?;
        if tokens.next().is_some() {
            return Err(ParseError::BorderShorthand(s.to_string()));
        }
        Ok(BorderProps {
            thickness,
            color,
            background_color,
        })
    }
}

/// Wire form of [`BorderProps`]: shorthand string or full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum BorderPropsRepr {
    /// `"border": "single-line red"`
    Shorthand(String),
    /// `"border": {"thickness": "double-line", "color": "red"}`
    #[serde(rename_all = "kebab-case")]
    Full {
        #[serde(default)]
        thickness: BorderThickness,
        #[serde(default)]
        color: Option<Color>,
        #[serde(default)]
        background_color: Option<Color>,
    },
}

impl TryFrom<BorderPropsRepr> for BorderProps {
    type Error = ParseError;

    fn try_from(repr: BorderPropsRepr) -> Result<Self, Self::Error> {
        match repr {
            BorderPropsRepr::Shorthand(s) => s.parse(),
            BorderPropsRepr::Full {
                thickness,
                color,
                background_color,
            } => Ok(BorderProps {
                thickness,
                color,
                background_color,
            }),
        }
    }
}
