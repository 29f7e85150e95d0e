//! The public resolution entry point.

use std::fmt::Write as _;

use oidpath_registry::Registry;
use oidpath_types::ArcValue;

use crate::walker::walk;

/// Resolve an arc sequence against the process-wide registry.
///
/// Returns `None` for an empty input; otherwise always returns a path.
/// Arcs the registry does not recognize are rendered as their literal
/// decimal values.
///
/// # Examples
///
/// ```
/// use oidpath_resolver::resolve;
///
/// assert_eq!(resolve(&[]), None);
/// assert_eq!(resolve(&[0, 0, 5]).unwrap(), "/ITU-T/Recommendation/E");
/// ```
pub fn resolve(arcs: &[ArcValue]) -> Option<String> {
    resolve_in(Registry::global(), arcs)
}

/// Resolve an arc sequence against a caller-supplied registry.
///
/// The walk stops at the deepest registered node it can reach; everything
/// past `consumed` is appended here as raw decimal segments.
pub fn resolve_in(registry: &Registry, arcs: &[ArcValue]) -> Option<String> {
    if arcs.is_empty() {
        return None;
    }

    let resolution = walk(registry, arcs);
    let mut path = resolution.path;
    for &arc in &arcs[resolution.consumed..] {
        let _ = write!(path, "/{arc}");
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_resolves_to_none() {
        assert_eq!(resolve(&[]), None);
    }

    #[test]
    fn fully_registered_prefix() {
        assert_eq!(resolve(&[0, 0, 5]).unwrap(), "/ITU-T/Recommendation/E");
    }

    #[test]
    fn unrecognized_arc_under_a_registered_node() {
        assert_eq!(resolve(&[0, 0, 5, 999]).unwrap(), "/ITU-T/Recommendation/E/999");
    }

    #[test]
    fn unrecognized_arc_directly_under_the_root() {
        assert_eq!(resolve(&[2, 999]).unwrap(), "/Joint-ISO-ITU-T/999");
    }

    #[test]
    fn media_gateway_control_consumes_every_arc() {
        let arcs = [0, 0, 8, 248, 0, 0, 2];
        let resolution = walk(Registry::global(), &arcs);
        assert_eq!(resolution.consumed, 7);
        assert_eq!(
            resolve(&arcs).unwrap(),
            "/ITU-T/Recommendation/H/[Gateway control protocol]/[ASN.1 modules]\
             /[MEDIA-GATEWAY-CONTROL]/Version 2"
        );
    }

    #[test]
    fn unregistered_root_arc_renders_entirely_raw() {
        // The walk consumes only the first arc; the trailing two are
        // appended by the formatter.
        let resolution = walk(Registry::global(), &[9, 9, 9]);
        assert_eq!(resolution.consumed, 1);
        assert_eq!(resolve(&[9, 9, 9]).unwrap(), "/9/9/9");
    }

    #[test]
    fn sha256_with_rsa() {
        assert_eq!(
            resolve(&[1, 2, 840, 113549, 1, 1, 11]).unwrap(),
            "/ISO/Member-Body/[United States]/[RSA Data Security]/PKCS/PKCS-1\
             /sha256WithRSAEncryption"
        );
    }

    #[test]
    fn common_name_attribute() {
        assert_eq!(
            resolve(&[2, 5, 4, 3]).unwrap(),
            "/Joint-ISO-ITU-T/Directory/[Attribute types]/commonName"
        );
    }

    #[test]
    fn country_long_arc_restarts_the_path() {
        assert_eq!(resolve(&[2, 16, 840]).unwrap(), "/Country/US");
    }

    #[test]
    fn uuid_subtree_is_a_known_gap() {
        // Arcs under 2.25 are UUIDs wider than 64 bits; the registry stops
        // at the long arc and anything representable below it stays raw.
        assert_eq!(resolve(&[2, 25]).unwrap(), "/UUID");
        assert_eq!(resolve(&[2, 25, 4231, 77]).unwrap(), "/UUID/4231/77");
    }

    #[test]
    fn question_arcs_render_number_segments() {
        // Registered but unnamed: the arc is consumed by the registry, not
        // by the fallback, yet the visible text is just the number.
        let resolution = walk(Registry::global(), &[0, 1, 7]);
        assert_eq!(resolution.consumed, 3);
        assert_eq!(resolve(&[0, 1, 7]).unwrap(), "/ITU-T/Question/7");
    }

    #[test]
    fn silent_version_container_contributes_no_text() {
        let arcs = [0, 0, 8, 235, 0, 2];
        assert_eq!(
            resolve(&arcs).unwrap(),
            "/ITU-T/Recommendation/H\
             /[Security and encryption for H-series multimedia terminals]/Version 2"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let arcs = [1, 3, 6, 1, 5, 5, 7, 3, 1];
        assert_eq!(resolve(&arcs), resolve(&arcs));
    }

    #[test]
    fn resolve_in_accepts_a_custom_registry() {
        use oidpath_registry::{RegistryBuilder, Segment};

        let mut builder = RegistryBuilder::new();
        builder.entry(&[5], Segment::Name("Five"));
        let registry = builder.build();

        assert_eq!(resolve_in(&registry, &[5, 1]).unwrap(), "/Five/1");
        assert_eq!(resolve_in(&registry, &[0]).unwrap(), "/0");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arcs_strategy() -> impl Strategy<Value = Vec<ArcValue>> {
            // Small arc values stay inside the registry; large ones
            // exercise the fallback.
            proptest::collection::vec(
                prop_oneof![0u64..64, 0u64..4096, any::<u64>()],
                1..12,
            )
        }

        proptest! {
            #[test]
            fn resolve_is_total_for_nonempty_input(arcs in arcs_strategy()) {
                let rendered = resolve(&arcs).expect("non-empty input resolves");
                prop_assert!(rendered.starts_with('/'));
            }

            #[test]
            fn consumed_is_bounded_by_input_length(arcs in arcs_strategy()) {
                let resolution = walk(Registry::global(), &arcs);
                prop_assert!(resolution.consumed <= arcs.len());
            }

            #[test]
            fn rendered_path_ends_with_unconsumed_suffix(arcs in arcs_strategy()) {
                let resolution = walk(Registry::global(), &arcs);
                let rendered = resolve(&arcs).unwrap();
                let suffix: String = arcs[resolution.consumed..]
                    .iter()
                    .map(|arc| format!("/{arc}"))
                    .collect();
                prop_assert!(rendered.ends_with(&suffix));
            }

            #[test]
            fn resolution_is_pure(arcs in arcs_strategy()) {
                prop_assert_eq!(resolve(&arcs), resolve(&arcs));
            }

            #[test]
            fn extending_input_never_reduces_consumption(
                arcs in arcs_strategy(),
                extra in 0u64..4096,
            ) {
                let registry = Registry::global();
                let before = walk(registry, &arcs).consumed;
                let mut extended = arcs.clone();
                extended.push(extra);
                let after = walk(registry, &extended).consumed;
                prop_assert!(after >= before);
            }
        }
    }
}
