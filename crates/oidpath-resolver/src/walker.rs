//! The registry walker: a single forward pass over the input arcs.

use std::fmt::Write as _;

use tracing::trace;

use oidpath_registry::{Registry, RegistryNode};
use oidpath_types::{ArcValue, Resolution};

/// Descend `registry` along `arcs`, producing the accumulated path and the
/// number of arcs consumed.
///
/// The walk is iterative (registry depth reaches ~12) and never backtracks:
///
/// - End of input is a valid stop at any node; the path accumulated so far
///   is the result.
/// - Reaching a leaf stops the walk at that depth even if input remains;
///   the caller appends the rest.
/// - An arc with no child entry is the fallback: it is consumed, appended
///   as its literal decimal value, and nothing past it is inspected.
///
/// Never fails: absence of registry structure is a normal outcome.
pub fn walk(registry: &Registry, arcs: &[ArcValue]) -> Resolution {
    let mut path = String::new();
    let mut index = 0usize;
    let mut node: Option<&RegistryNode> = None;

    while index < arcs.len() {
        let arc = arcs[index];
        index += 1;

        let found = match node {
            None => registry.root_lookup(arc),
            Some(current) => current.child(arc),
        };

        match found {
            Some(child) => {
                child.segment().apply(&mut path, arc);
                if child.is_leaf() {
                    trace!(consumed = index, path = %path, "walk stopped at leaf");
                    return Resolution::new(path, index);
                }
                node = Some(child);
            }
            None => {
                // Unregistered arc: consume it, render it raw, stop.
                let _ = write!(path, "/{arc}");
                trace!(consumed = index, path = %path, "walk stopped at unregistered arc");
                return Resolution::new(path, index);
            }
        }
    }

    trace!(consumed = index, path = %path, "walk consumed entire input");
    Resolution::new(path, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oidpath_registry::{RegistryBuilder, Segment};

    /// A registry exercising every segment rule:
    ///
    /// ```text
    /// 7 "Root"
    /// ├── 1 (silent)
    /// │   └── 5 "Deep"
    /// ├── 2 (number, leaf)
    /// ├── 3 restart "Fresh"
    /// │   └── 4 "Below"
    /// └── 6 "Leafy" (leaf)
    /// ```
    fn test_registry() -> Registry {
        let mut builder = RegistryBuilder::new();
        builder
            .entry(&[7], Segment::Name("Root"))
            .entry(&[7, 1], Segment::Silent)
            .entry(&[7, 1, 5], Segment::Name("Deep"))
            .entry(&[7, 2], Segment::Number)
            .entry(&[7, 3], Segment::Restart("Fresh"))
            .entry(&[7, 3, 4], Segment::Name("Below"))
            .entry(&[7, 6], Segment::Name("Leafy"));
        builder.build()
    }

    #[test]
    fn empty_input_consumes_nothing() {
        let res = walk(&test_registry(), &[]);
        assert_eq!(res, Resolution::new("", 0));
    }

    #[test]
    fn end_of_input_is_a_valid_stop_at_a_waypoint() {
        let res = walk(&test_registry(), &[7]);
        assert_eq!(res, Resolution::new("/Root", 1));
    }

    #[test]
    fn silent_node_consumes_without_text() {
        let res = walk(&test_registry(), &[7, 1]);
        assert_eq!(res, Resolution::new("/Root", 2));
    }

    #[test]
    fn descent_continues_through_silent_nodes() {
        let res = walk(&test_registry(), &[7, 1, 5]);
        assert_eq!(res, Resolution::new("/Root/Deep", 3));
    }

    #[test]
    fn number_node_appends_decimal_without_description() {
        // Registered arc, no name: distinct from the unregistered fallback
        // even though the rendering looks the same.
        let res = walk(&test_registry(), &[7, 2]);
        assert_eq!(res, Resolution::new("/Root/2", 2));
    }

    #[test]
    fn restart_discards_the_accumulated_prefix() {
        let res = walk(&test_registry(), &[7, 3, 4]);
        assert_eq!(res, Resolution::new("/Fresh/Below", 3));
    }

    #[test]
    fn leaf_stops_the_walk_with_input_remaining() {
        let res = walk(&test_registry(), &[7, 6, 1, 2, 3]);
        assert_eq!(res, Resolution::new("/Root/Leafy", 2));
    }

    #[test]
    fn unregistered_arc_is_consumed_and_rendered_raw() {
        let res = walk(&test_registry(), &[7, 42, 1, 2]);
        // 42 is consumed; 1 and 2 are never inspected.
        assert_eq!(res, Resolution::new("/Root/42", 2));
    }

    #[test]
    fn unregistered_root_arc_falls_back_at_depth_zero() {
        let res = walk(&test_registry(), &[8, 7]);
        assert_eq!(res, Resolution::new("/8", 1));
    }

    #[test]
    fn consumed_never_exceeds_input_length() {
        let registry = test_registry();
        for arcs in [&[7u64][..], &[7, 1], &[7, 1, 5, 9, 9], &[0, 0, 0]] {
            let res = walk(&registry, arcs);
            assert!(res.consumed <= arcs.len());
        }
    }
}
