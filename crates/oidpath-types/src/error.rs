//! Error types for arc-sequence parsing.

use thiserror::Error;

/// Errors that can occur while parsing dotted-decimal OID notation.
///
/// Resolution itself has no error taxonomy beyond "no input" (modeled as
/// `Option` at the resolver surface); these errors belong to the text
/// adapter layer only.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArcParseError {
    /// The input string was empty.
    #[error("empty OID string")]
    Empty,

    /// A dot-separated component was empty (`"1..2"`, `".1"`, `"1."`).
    #[error("empty arc component at position {index}")]
    EmptyComponent { index: usize },

    /// A component contained something other than ASCII decimal digits.
    #[error("invalid arc component: {component:?}")]
    InvalidComponent { component: String },

    /// A component is a valid number but exceeds 64 bits.
    ///
    /// Known gap: UUID-derived arcs under `2.25` routinely exceed 64 bits
    /// and cannot be represented by this crate.
    #[error("arc component exceeds 64 bits: {component}")]
    ArcTooLarge { component: String },
}
