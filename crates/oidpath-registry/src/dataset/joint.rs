//! Joint ISO/ITU-T subtree (`2.*`), except the directory (`2.5`) and
//! country (`2.16`) subtrees which have their own tables.
//!
//! The X.660 Unicode long arcs (UUID, Tag-Based, Alerting, ...) carry
//! `Restart` rules: the modified OID-IRI renders them from the long arc,
//! dropping the `/Joint-ISO-ITU-T` prefix.

use super::{name, num, restart, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[2], name("Joint-ISO-ITU-T")),
    // ASN.1 itself.
    (&[2, 1], name("ASN.1")),
    (&[2, 1, 0], name("[Modules]")),
    (&[2, 1, 1], name("[Basic Encoding Rules]")),
    (&[2, 1, 2], name("[BER-derived encodings]")),
    (&[2, 1, 2, 0], name("[Canonical Encoding Rules]")),
    (&[2, 1, 2, 1], name("[Distinguished Encoding Rules]")),
    (&[2, 1, 3], name("[Packed Encoding Rules]")),
    (&[2, 2], name("[Association Control Service Element]")),
    (&[2, 3], name("[Reliable Transfer Service Element]")),
    (&[2, 4], name("[Remote Operations Service Element]")),
    // 2.5 Directory: see the directory table.
    (&[2, 6], name("[Message Handling System (MHS)]")),
    (&[2, 6, 1], name("[IPMS information objects]")),
    (&[2, 7], name("[Commitment, Concurrency and Recovery]")),
    (&[2, 8], name("[Open Document Architecture]")),
    (&[2, 9], name("[OSI Management]")),
    (&[2, 9, 3], name("[Structure of management information]")),
    (&[2, 10], name("[Terminal Management]")),
    (&[2, 11], name("[Collection of Open Systems documents]")),
    (&[2, 12], name("[Virtual Terminal]")),
    (&[2, 13], name("[Job Transfer and Manipulation]")),
    // 2.16 Country: see the country table.
    (&[2, 17], name("[Registration procedures]")),
    (&[2, 18], name("[Distinguished object reference]")),
    (&[2, 19], name("[Open Systems Environment implementers workshop]")),
    (&[2, 20], name("[Security frameworks]")),
    (&[2, 21], name("[Broadband ISDN]")),
    (&[2, 22], name("[Generic Upper Layers Security]")),
    // International organizations.
    (&[2, 23], name("[International organizations]")),
    (&[2, 23, 42], name("[Secure Electronic Transactions (SET)]")),
    (&[2, 23, 42, 0], name("[Content types]")),
    (&[2, 23, 42, 1], name("[Message extensions]")),
    (&[2, 23, 43], name("[WAP Forum]")),
    (&[2, 23, 43, 1], name("[WTLS]")),
    (&[2, 23, 133], name("[Trusted Computing Group]")),
    (&[2, 23, 133, 2], name("[TPM attributes]")),
    (&[2, 23, 133, 8], name("[Key purposes]")),
    (&[2, 23, 136], name("[ICAO]")),
    (&[2, 23, 136, 1], name("[Machine readable travel documents]")),
    (&[2, 23, 136, 1, 1], name("[Security]")),
    (&[2, 23, 136, 1, 1, 1], name("cscaMasterList")),
    (&[2, 23, 140], name("[CA/Browser Forum]")),
    (&[2, 23, 140, 1], name("[Certificate policies]")),
    (&[2, 23, 140, 1, 1], name("[Extended validation]")),
    (&[2, 23, 140, 1, 2], name("[Baseline requirements]")),
    (&[2, 23, 140, 1, 2, 1], name("[Domain validated]")),
    (&[2, 23, 140, 1, 2, 2], name("[Organization validated]")),
    (&[2, 23, 140, 1, 2, 3], name("[Individual validated]")),
    (&[2, 23, 140, 1, 3], name("[Extended validation code signing]")),
    (&[2, 24], name("[OSI networking]")),
    // UUID-derived OIDs: the long arc is the whole rendering. Arcs under
    // this node exceed 64 bits and cannot be represented here, so the node
    // is a leaf and everything below it falls through to the raw suffix.
    (&[2, 25], restart("UUID")),
    (&[2, 26], name("[ODP]")),
    (&[2, 27], restart("Tag-Based")),
    (&[2, 28], name("[Intelligent Transport Systems]")),
    (&[2, 40], name("[Upper layer security model]")),
    (&[2, 41], restart("BIP")),
    (&[2, 42], name("[Telebiometrics]")),
    (&[2, 46], name("[Network identity management]")),
    (&[2, 47], name("[International Code Designator]")),
    (&[2, 48], name("[Directory services]")),
    // Common Alerting Protocol authorities are keyed by country code and
    // carry no registered names.
    (&[2, 49], restart("Alerting")),
    (&[2, 49, 0], name("[WMO]")),
    (&[2, 49, 0, 0], name("[Alerting authorities]")),
    (&[2, 49, 0, 0, 124], num()),
    (&[2, 49, 0, 0, 276], num()),
    (&[2, 49, 0, 0, 392], num()),
    (&[2, 49, 0, 0, 826], num()),
    (&[2, 49, 0, 0, 840], num()),
    (&[2, 50], restart("OID-Resolution-System")),
    (&[2, 51], restart("GS1")),
    (&[2, 51, 1], name("[Identification keys]")),
    (&[2, 52], name("[Unmanned aircraft systems]")),
];
