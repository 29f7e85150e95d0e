//! The immutable registry and its process-wide instance.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::info;

use oidpath_types::ArcValue;

use crate::builder::RegistryBuilder;
use crate::dataset;
use crate::node::RegistryNode;

/// An immutable trie mapping arc sequences to display-path segments.
///
/// Built once by a [`RegistryBuilder`] and read-only afterwards. All lookups
/// are pure: absence of an entry is a normal outcome, never an error.
#[derive(Debug)]
pub struct Registry {
    root: HashMap<ArcValue, RegistryNode>,
    entries: usize,
}

impl Registry {
    /// The process-wide registry holding the full standard dataset.
    ///
    /// Built lazily on first access behind a one-time initialization
    /// barrier; subsequent reads take no locks.
    pub fn global() -> &'static Registry {
        static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
            let mut builder = RegistryBuilder::new();
            for table in dataset::tables() {
                builder.table(table);
            }
            let registry = builder.build();
            info!(
                entries = registry.len(),
                nodes = registry.node_count(),
                "oid registry built"
            );
            registry
        });
        &GLOBAL
    }

    /// Top-level dispatch: the node for the first arc of an OID.
    pub fn root_lookup(&self, arc: ArcValue) -> Option<&RegistryNode> {
        self.root.get(&arc)
    }

    /// Number of explicit dataset entries compiled into this registry.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns `true` if the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Total node count of the trie, including materialized intermediates.
    pub fn node_count(&self) -> usize {
        self.root.values().map(RegistryNode::subtree_len).sum()
    }

    pub(crate) fn from_parts(root: HashMap<ArcValue, RegistryNode>, entries: usize) -> Self {
        Self { root, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Segment;

    #[test]
    fn global_registry_builds_once_and_is_shared() {
        let a = Registry::global();
        let b = Registry::global();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn global_registry_knows_the_three_standard_roots() {
        let registry = Registry::global();
        assert_eq!(registry.root_lookup(0).unwrap().segment(), Segment::Name("ITU-T"));
        assert_eq!(registry.root_lookup(1).unwrap().segment(), Segment::Name("ISO"));
        assert_eq!(
            registry.root_lookup(2).unwrap().segment(),
            Segment::Name("Joint-ISO-ITU-T")
        );
    }

    #[test]
    fn unregistered_root_arcs_are_absent() {
        let registry = Registry::global();
        assert!(registry.root_lookup(3).is_none());
        assert!(registry.root_lookup(9).is_none());
    }

    #[test]
    fn arc_999_is_not_registered_under_joint() {
        // 2.999 stays unregistered; it must hit the fallback path.
        let joint = Registry::global().root_lookup(2).unwrap();
        assert!(joint.child(999).is_none());
    }

    #[test]
    fn node_count_is_at_least_entry_count() {
        let registry = Registry::global();
        assert!(registry.node_count() >= registry.len());
    }

    #[test]
    fn dataset_tables_hold_no_duplicate_paths() {
        use std::collections::HashSet;
        let mut seen: HashSet<&[ArcValue]> = HashSet::new();
        for table in dataset::tables() {
            for &(arcs, _) in *table {
                assert!(seen.insert(arcs), "duplicate dataset entry for {arcs:?}");
            }
        }
    }

    #[test]
    fn dataset_paths_are_never_empty() {
        for table in dataset::tables() {
            for &(arcs, _) in *table {
                assert!(!arcs.is_empty());
            }
        }
    }
}
