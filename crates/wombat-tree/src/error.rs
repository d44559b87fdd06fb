//! Parse errors for prop values.

use thiserror::Error;

/// A prop value string that could not be parsed.
///
/// These come out of the `FromStr` surface (shorthand strings, color
/// keywords) and from deserializing scene files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a known color keyword or hex notation.
    #[error("invalid color '{0}'")]
    Color(String),
    /// Not a number, percentage or `auto`.
    #[error("invalid size value '{0}'")]
    Size(String),
    /// Margin/padding shorthand with zero or more than four tokens, or a
    /// non-integer token.
    #[error("invalid edge shorthand '{0}', expected 1-4 integers")]
    EdgeShorthand(String),
    /// Border shorthand that does not start with a thickness keyword or has
    /// trailing tokens.
    #[error("invalid border shorthand '{0}', expected '<thickness> [<color> [<background>]]'")]
    BorderShorthand(String),
}
