//! Trie node types and the per-node segment rule.
//!
//! A node exists at a fixed depth (the number of arcs consumed to reach it)
//! and owns a sparse child map keyed by the next arc value. Lookups are
//! exact-match only: the dataset never encodes ranges or wildcards, and an
//! arc absent from the child map is simply unregistered.

use std::collections::HashMap;
use std::fmt::Write as _;

use oidpath_types::ArcValue;

/// The display rule a node applies to the accumulated path when its arc is
/// consumed.
///
/// `Number` and `Silent` are deliberately distinct from the unregistered
/// fallback: both consume a *known* arc, they just contribute no descriptive
/// text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Append `/<label>`.
    Name(&'static str),
    /// Registered but unnamed: append the arc itself as `/<decimal>`.
    Number,
    /// Registered pass-through: consume the arc, append nothing.
    Silent,
    /// Discard everything accumulated so far and begin again at `/<label>`.
    ///
    /// Used for the X.660 Unicode long arcs (`/Country`, `/UUID`, ...),
    /// which the modified OID-IRI form renders from the long arc instead of
    /// spelling out `/Joint-ISO-ITU-T`.
    Restart(&'static str),
}

impl Segment {
    /// Apply this rule to `path` for the arc that was just consumed.
    pub fn apply(&self, path: &mut String, arc: ArcValue) {
        match self {
            Segment::Name(label) => {
                path.push('/');
                path.push_str(label);
            }
            Segment::Number => {
                // Infallible: writing to a String cannot fail.
                let _ = write!(path, "/{arc}");
            }
            Segment::Silent => {}
            Segment::Restart(label) => {
                path.clear();
                path.push('/');
                path.push_str(label);
            }
        }
    }
}

/// A node in the registry trie.
///
/// Nodes with an empty child map are leaves: reaching one always terminates
/// the walk at that depth, even if input arcs remain (the formatter handles
/// those). Every node is also a valid end-of-input stop.
#[derive(Clone, Debug)]
pub struct RegistryNode {
    segment: Segment,
    children: HashMap<ArcValue, RegistryNode>,
}

impl RegistryNode {
    /// Create a childless node with the given segment rule.
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            children: HashMap::new(),
        }
    }

    /// The display rule for this node.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Exact-match child lookup for the next arc value.
    pub fn child(&self, arc: ArcValue) -> Option<&RegistryNode> {
        self.children.get(&arc)
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.values().map(RegistryNode::subtree_len).sum::<usize>()
    }

    pub(crate) fn set_segment(&mut self, segment: Segment) {
        self.segment = segment;
    }

    pub(crate) fn child_or_insert(&mut self, arc: ArcValue, default: Segment) -> &mut RegistryNode {
        self.children.entry(arc).or_insert_with(|| RegistryNode::new(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_appends_slash_label() {
        let mut path = String::from("/ISO");
        Segment::Name("Member-Body").apply(&mut path, 2);
        assert_eq!(path, "/ISO/Member-Body");
    }

    #[test]
    fn number_appends_decimal_arc() {
        let mut path = String::from("/ITU-T/Question");
        Segment::Number.apply(&mut path, 11);
        assert_eq!(path, "/ITU-T/Question/11");
    }

    #[test]
    fn silent_leaves_path_untouched() {
        let mut path = String::from("/ITU-T/Recommendation/H");
        Segment::Silent.apply(&mut path, 0);
        assert_eq!(path, "/ITU-T/Recommendation/H");
    }

    #[test]
    fn restart_discards_accumulated_path() {
        let mut path = String::from("/Joint-ISO-ITU-T");
        Segment::Restart("Country").apply(&mut path, 16);
        assert_eq!(path, "/Country");
    }

    #[test]
    fn leaf_has_no_children() {
        let node = RegistryNode::new(Segment::Name("X"));
        assert!(node.is_leaf());
        assert_eq!(node.subtree_len(), 1);
        assert!(node.child(0).is_none());
    }

    #[test]
    fn subtree_len_counts_descendants() {
        let mut root = RegistryNode::new(Segment::Silent);
        root.child_or_insert(1, Segment::Number)
            .child_or_insert(2, Segment::Number);
        root.child_or_insert(3, Segment::Number);
        assert_eq!(root.subtree_len(), 4);
    }
}
