//! The declarative registry dataset.
//!
//! Each submodule holds one `const` entry table covering a top-level
//! subtree of the OID hierarchy. An entry pairs an absolute arc path with
//! the [`Segment`] rule for the node at that path; entry order within a
//! table is irrelevant, and intermediate nodes a table never names are
//! materialized by the builder as unnamed [`Segment::Number`] nodes.
//!
//! This is the data payload of the crate. The tables track the standard
//! allocations published by ITU-T, ISO, the national bodies, and the usual
//! vendor arcs; coverage is deepest where binary formats actually embed
//! OIDs (PKCS, PKIX, directory attributes, certificate extensions, the
//! NIST algorithm arcs).

use oidpath_types::ArcValue;

use crate::node::Segment;

mod country;
mod directory;
mod internet;
mod iso;
mod itu_t;
mod joint;
mod rsadsi;

/// One dataset entry: an absolute arc path and the node's segment rule.
pub type Entry = (&'static [ArcValue], Segment);

/// All entry tables, one per top-level subtree module.
pub fn tables() -> &'static [&'static [Entry]] {
    static TABLES: [&[Entry]; 7] = [
        itu_t::ENTRIES,
        iso::ENTRIES,
        rsadsi::ENTRIES,
        internet::ENTRIES,
        joint::ENTRIES,
        directory::ENTRIES,
        country::ENTRIES,
    ];
    &TABLES
}

const fn name(label: &'static str) -> Segment {
    Segment::Name(label)
}

const fn num() -> Segment {
    Segment::Number
}

const fn silent() -> Segment {
    Segment::Silent
}

const fn restart(label: &'static str) -> Segment {
    Segment::Restart(label)
}
