//! Foundation types for oidpath.
//!
//! This crate provides the types shared by every other oidpath crate: the
//! arc scalar, dotted-notation parsing, and the resolution result record.
//!
//! # Key Types
//!
//! - [`ArcValue`] — One component of an OID (an unsigned 64-bit integer)
//! - [`parse_dotted`] — Dotted-decimal text (`"1.2.840.113549"`) to arc sequence
//! - [`Resolution`] — The output of walking an arc sequence against a registry
//! - [`ArcParseError`] — Error type for dotted-notation parsing

pub mod arcs;
pub mod error;
pub mod resolution;

pub use arcs::{parse_dotted, ArcValue};
pub use error::ArcParseError;
pub use resolution::Resolution;
