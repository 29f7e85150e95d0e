//! Resolution of OID arc sequences into readable pseudo-IRI paths.
//!
//! The [`walker`] descends the registry trie as far as it recognizes arcs;
//! the [`format`] entry point wraps it, appending whatever the walk left
//! unconsumed as raw decimal segments. Both are pure functions over the
//! immutable registry and the caller's input, so concurrent use needs no
//! synchronization.
//!
//! # Example
//!
//! ```
//! use oidpath_resolver::resolve;
//!
//! let iri = resolve(&[2, 5, 4, 3]).unwrap();
//! assert_eq!(iri, "/Joint-ISO-ITU-T/Directory/[Attribute types]/commonName");
//! ```

pub mod format;
pub mod walker;

pub use format::{resolve, resolve_in};
pub use walker::walk;
