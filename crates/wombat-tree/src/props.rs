//! Layout prop records and their value types.
//!
//! Views carry an optional [`LayoutProps`] record controlling flow
//! (block/inline), spacing (margin/padding), sizing (cells, percentages or
//! natural) and positioning (relative flow or absolute with explicit
//! coordinates). Records are replaced wholesale; individual fields are
//! optional and default to the unset behavior.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ParseError;

/// Flow, sizing and positioning props for a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutProps {
    /// Outer spacing, kept outside the view's own box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Edges>,
    /// Inner spacing between the view's edge and its content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    /// Block (stacks vertically) or inline (flows on the current line).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayValue>,
    /// Width constraint; unset means natural width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<SizeValue>,
    /// Height constraint; unset means natural height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<SizeValue>,
    /// Relative (in flow, the default) or absolute (out of flow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionType>,
    /// Paint layer for absolutely positioned views; defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Column for absolutely positioned views; defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
    /// Row for absolutely positioned views; defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

/// How a view participates in flow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DisplayValue {
    /// Stacks vertically: a block view always opens a new line.
    #[default]
    Block,
    /// Flows horizontally next to a preceding inline sibling.
    Inline,
}

/// How a view is positioned.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    /// Normal flow placement relative to siblings.
    #[default]
    Relative,
    /// Out of flow at (`left`, `top`); contributes nothing to the parent's
    /// size and does not move siblings.
    Absolute,
}

/// A width or height prop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SizeValueRepr", into = "SizeValueRepr")]
pub enum SizeValue {
    /// Fixed size in character cells.
    Cells(i32),
    /// Percentage of the parent's resolved size on the same axis.
    Percent(u16),
    /// Natural size from content.
    Auto,
}

impl FromStr for SizeValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(SizeValue::Auto);
        }
        if let Some(pct) = s.strip_suffix('%') {
            let value = pct
                .parse::<u16>()
                .map_err(|_| ParseError::Size(s.to_string()))?;
            return Ok(SizeValue::Percent(value));
        }
        let cells = s
            .parse::<i32>()
            .map_err(|_| ParseError::Size(s.to_string()))?;
        // A negative fixed size is meaningless; treat it as natural sizing.
        Ok(if cells < 0 {
            SizeValue::Auto
        } else {
            SizeValue::Cells(cells)
        })
    }
}

/// Wire form of [`SizeValue`]: a bare number or a keyword string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SizeValueRepr {
    /// `"width": 9`
    Number(i64),
    /// `"width": "45%"` or `"auto"`
    Keyword(String),
}

impl TryFrom<SizeValueRepr> for SizeValue {
    type Error = ParseError;

    fn try_from(repr: SizeValueRepr) -> Result<Self, Self::Error> {
        match repr {
            SizeValueRepr::Number(n) => {
                let cells =
                    i32::try_from(n).map_err(|_| ParseError::Size(n.to_string()))?;
                Ok(if cells < 0 {
                    SizeValue::Auto
                } else {
                    SizeValue::Cells(cells)
                })
            }
            SizeValueRepr::Keyword(s) => s.parse(),
        }
    }
}

impl From<SizeValue> for SizeValueRepr {
    fn from(value: SizeValue) -> Self {
        match value {
            SizeValue::Cells(n) => SizeValueRepr::Number(i64::from(n)),
            SizeValue::Percent(p) => SizeValueRepr::Keyword(format!("{p}%")),
            SizeValue::Auto => SizeValueRepr::Keyword("auto".to_string()),
        }
    }
}

/// Per-side cell counts for margin and padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EdgesRepr")]
pub struct Edges {
    /// Cells above.
    pub top: i32,
    /// Cells to the right.
    pub right: i32,
    /// Cells below.
    pub bottom: i32,
    /// Cells to the left.
    pub left: i32,
}

impl Edges {
    /// All four sides zero.
    pub const ZERO: Edges = Edges {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// Construct from the four sides in CSS order.
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on all four sides.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left + right.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Combined top + bottom.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// Copy with negative components clamped to zero. Spacing can never be
    /// negative in cell arithmetic.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(
            self.top.max(0),
            self.right.max(0),
            self.bottom.max(0),
            self.left.max(0),
        )
    }
}

impl FromStr for Edges {
    type Err = ParseError;

    /// Parses the CSS-style shorthand `"T R B L"` with 1 to 4 integer
    /// tokens: one value applies to all sides, two expand to vertical /
    /// horizontal, three leave left mirroring right. Negative tokens clamp
    /// to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| ParseError::EdgeShorthand(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = match tokens.as_slice() {
            [all] => Edges::uniform(*all),
            [vertical, horizontal] => Edges::new(*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => Edges::new(*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => Edges::new(*top, *right, *bottom, *left),
            _ => return Err(ParseError::EdgeShorthand(s.to_string())),
        };
        Ok(edges.clamped())
    }
}

/// Wire form of [`Edges`]: a bare number, a shorthand string or an object
/// with per-side fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgesRepr {
    /// `"margin": 1`
    Uniform(i32),
    /// `"margin": "1 2 3 4"`
    Shorthand(String),
    /// `"margin": {"top": 1, "left": 2}`
    Sides {
        #[serde(default)]
        top: i32,
        #[serde(default)]
        right: i32,
        #[serde(default)]
        bottom: i32,
        #[serde(default)]
        left: i32,
    },
}

impl TryFrom<EdgesRepr> for Edges {
    type Error = ParseError;

    fn try_from(repr: EdgesRepr) -> Result<Self, Self::Error> {
        match repr {
            EdgesRepr::Uniform(value) => Ok(Edges::uniform(value).clamped()),
            EdgesRepr::Shorthand(s) => s.parse(),
            EdgesRepr::Sides {
                top,
                right,
                bottom,
                left,
            } => Ok(Edges::new(top, right, bottom, left).clamped()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_shorthand_expansion() {
        assert_eq!("2".parse::<Edges>().unwrap(), Edges::uniform(2));
        assert_eq!("1 2".parse::<Edges>().unwrap(), Edges::new(1, 2, 1, 2));
        assert_eq!("1 2 3".parse::<Edges>().unwrap(), Edges::new(1, 2, 3, 2));
        assert_eq!("1 2 3 4".parse::<Edges>().unwrap(), Edges::new(1, 2, 3, 4));
    }

    #[test]
    fn test_edge_shorthand_clamps_negatives() {
        assert_eq!("-1 2".parse::<Edges>().unwrap(), Edges::new(0, 2, 0, 2));
    }

    #[test]
    fn test_edge_shorthand_rejects_junk() {
        assert!("".parse::<Edges>().is_err());
        assert!("1 2 3 4 5".parse::<Edges>().is_err());
        assert!("1 two".parse::<Edges>().is_err());
    }

    #[test]
    fn test_size_value_parsing() {
        assert_eq!("9".parse::<SizeValue>().unwrap(), SizeValue::Cells(9));
        assert_eq!("45%".parse::<SizeValue>().unwrap(), SizeValue::Percent(45));
        assert_eq!("auto".parse::<SizeValue>().unwrap(), SizeValue::Auto);
        // Negative sizes degrade to natural sizing.
        assert_eq!("-3".parse::<SizeValue>().unwrap(), SizeValue::Auto);
        assert!("9px".parse::<SizeValue>().is_err());
    }

    #[test]
    fn test_keyword_round_trips() {
        assert_eq!(DisplayValue::Inline.to_string(), "inline");
        assert_eq!("inline".parse::<DisplayValue>().unwrap(), DisplayValue::Inline);
        assert_eq!(PositionType::Absolute.to_string(), "absolute");
    }
}
