//! Compiles declarative entry tables into a [`Registry`] trie.

use std::collections::HashMap;

use oidpath_types::ArcValue;

use crate::node::{RegistryNode, Segment};
use crate::registry::Registry;

/// Builds a [`Registry`] from `(arc path, segment)` entries.
///
/// Entries may arrive in any order. Inserting a path materializes any
/// missing intermediate nodes with [`Segment::Number`] (registered ancestry,
/// no descriptive text); a later entry for the same path overwrites the
/// segment recorded earlier, so explicit entries always win over
/// materialized defaults.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    root: HashMap<ArcValue, RegistryNode>,
    entries: usize,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the node at `arcs` with the given segment rule.
    ///
    /// `arcs` is an absolute path from the root and must be non-empty;
    /// empty paths are ignored (there is no root node to label).
    pub fn entry(&mut self, arcs: &[ArcValue], segment: Segment) -> &mut Self {
        let Some((&first, rest)) = arcs.split_first() else {
            return self;
        };
        let mut node = self
            .root
            .entry(first)
            .or_insert_with(|| RegistryNode::new(Segment::Number));
        for &arc in rest {
            node = node.child_or_insert(arc, Segment::Number);
        }
        node.set_segment(segment);
        self.entries += 1;
        self
    }

    /// Record every entry from a table.
    pub fn table(&mut self, entries: &[(&[ArcValue], Segment)]) -> &mut Self {
        for &(arcs, segment) in entries {
            self.entry(arcs, segment);
        }
        self
    }

    /// Finish building, producing an immutable [`Registry`].
    pub fn build(self) -> Registry {
        Registry::from_parts(self.root, self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creates_path() {
        let mut builder = RegistryBuilder::new();
        builder.entry(&[0], Segment::Name("ITU-T"));
        builder.entry(&[0, 0], Segment::Name("Recommendation"));
        let registry = builder.build();

        let root = registry.root_lookup(0).unwrap();
        assert_eq!(root.segment(), Segment::Name("ITU-T"));
        assert_eq!(root.child(0).unwrap().segment(), Segment::Name("Recommendation"));
    }

    #[test]
    fn intermediates_default_to_number() {
        let mut builder = RegistryBuilder::new();
        builder.entry(&[1, 2, 840], Segment::Name("[United States]"));
        let registry = builder.build();

        let iso = registry.root_lookup(1).unwrap();
        assert_eq!(iso.segment(), Segment::Number);
        let member_body = iso.child(2).unwrap();
        assert_eq!(member_body.segment(), Segment::Number);
        assert_eq!(member_body.child(840).unwrap().segment(), Segment::Name("[United States]"));
    }

    #[test]
    fn later_entry_overwrites_materialized_default() {
        let mut builder = RegistryBuilder::new();
        builder.entry(&[1, 2, 840], Segment::Name("[United States]"));
        builder.entry(&[1], Segment::Name("ISO"));
        builder.entry(&[1, 2], Segment::Name("Member-Body"));
        let registry = builder.build();

        let iso = registry.root_lookup(1).unwrap();
        assert_eq!(iso.segment(), Segment::Name("ISO"));
        assert_eq!(iso.child(2).unwrap().segment(), Segment::Name("Member-Body"));
    }

    #[test]
    fn overwrite_preserves_children() {
        let mut builder = RegistryBuilder::new();
        builder.entry(&[2, 5, 4], Segment::Name("[Attribute types]"));
        builder.entry(&[2, 5], Segment::Name("Directory"));
        let registry = builder.build();

        let joint = registry.root_lookup(2).unwrap();
        let ds = joint.child(5).unwrap();
        assert_eq!(ds.segment(), Segment::Name("Directory"));
        assert!(ds.child(4).is_some());
    }

    #[test]
    fn empty_path_is_ignored() {
        let mut builder = RegistryBuilder::new();
        builder.entry(&[], Segment::Name("nothing"));
        let registry = builder.build();
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.node_count(), 0);
    }

    #[test]
    fn entry_count_tracks_explicit_entries_only() {
        let mut builder = RegistryBuilder::new();
        // Three intermediate nodes materialized, one explicit entry.
        builder.entry(&[1, 3, 6, 1], Segment::Name("[Internet]"));
        let registry = builder.build();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.node_count(), 4);
    }
}
