//! The OID registry trie for oidpath.
//!
//! This crate holds the hierarchical lookup structure that maps arc
//! sequences to display-path segments, plus the declarative dataset it is
//! compiled from. The trie is built once, published read-only, and never
//! mutated afterwards, so any number of concurrent resolutions may share it
//! without locking.
//!
//! # Architecture
//!
//! - The dataset is a set of `const` entry tables under [`dataset`], one
//!   module per top-level subtree. Each entry pairs an absolute arc path
//!   with the [`Segment`] rule for the node at that path.
//! - [`RegistryBuilder`] compiles entry tables into a [`Registry`],
//!   materializing unnamed intermediate nodes along the way.
//! - [`Registry::global()`] lazily builds the full standard dataset behind
//!   a one-time initialization barrier and returns a `'static` reference.
//!
//! # Modules
//!
//! - [`node`] — [`RegistryNode`] and the per-node [`Segment`] rule
//! - [`builder`] — [`RegistryBuilder`]
//! - [`registry`] — [`Registry`] lookups and the global instance
//! - [`dataset`] — the entry tables (volume, not design)

pub mod builder;
pub mod dataset;
pub mod node;
pub mod registry;

pub use builder::RegistryBuilder;
pub use node::{RegistryNode, Segment};
pub use registry::Registry;
