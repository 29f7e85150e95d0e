//! ITU-T subtree (`0.*`): recommendations, questions, administrations,
//! network operators, identified organizations, and the X.25-era data arcs.

use super::{name, num, silent, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[0], name("ITU-T")),
    // Recommendation series, keyed A=1 .. Z=26.
    (&[0, 0], name("Recommendation")),
    (&[0, 0, 1], name("A")),
    (&[0, 0, 2], name("B")),
    (&[0, 0, 3], name("C")),
    (&[0, 0, 4], name("D")),
    (&[0, 0, 5], name("E")),
    (&[0, 0, 6], name("F")),
    (&[0, 0, 7], name("G")),
    (&[0, 0, 8], name("H")),
    (&[0, 0, 9], name("I")),
    (&[0, 0, 10], name("J")),
    (&[0, 0, 11], name("K")),
    (&[0, 0, 12], name("L")),
    (&[0, 0, 13], name("M")),
    (&[0, 0, 14], name("N")),
    (&[0, 0, 15], name("O")),
    (&[0, 0, 16], name("P")),
    (&[0, 0, 17], name("Q")),
    (&[0, 0, 18], name("R")),
    (&[0, 0, 19], name("S")),
    (&[0, 0, 20], name("T")),
    (&[0, 0, 21], name("U")),
    (&[0, 0, 22], name("V")),
    (&[0, 0, 23], name("W")),
    (&[0, 0, 24], name("X")),
    (&[0, 0, 25], name("Y")),
    (&[0, 0, 26], name("Z")),
    // E series.
    (&[0, 0, 5, 115], name("[Computerized directory assistance]")),
    // G series audio codecs.
    (&[0, 0, 7, 711], name("[Pulse code modulation of voice frequencies]")),
    (&[0, 0, 7, 722], name("[7 kHz audio-coding within 64 kbit/s]")),
    (&[0, 0, 7, 726], name("[Adaptive differential pulse code modulation]")),
    (&[0, 0, 7, 729], name("[Coding of speech at 8 kbit/s]")),
    // H.235: security for H-series multimedia terminals.
    (&[0, 0, 8, 235], name("[Security and encryption for H-series multimedia terminals]")),
    (&[0, 0, 8, 235, 0], silent()),
    (&[0, 0, 8, 235, 0, 1], name("Version 1")),
    (&[0, 0, 8, 235, 0, 2], name("Version 2")),
    (&[0, 0, 8, 235, 0, 3], name("Version 3")),
    // H.245: multimedia control protocol.
    (&[0, 0, 8, 245], name("[Control protocol for multimedia communication]")),
    (&[0, 0, 8, 245, 0], name("[Version]")),
    (&[0, 0, 8, 245, 1], name("[Generic capabilities]")),
    // H.248: gateway control protocol (MEGACO).
    (&[0, 0, 8, 248], name("[Gateway control protocol]")),
    (&[0, 0, 8, 248, 0], name("[ASN.1 modules]")),
    (&[0, 0, 8, 248, 0, 0], name("[MEDIA-GATEWAY-CONTROL]")),
    (&[0, 0, 8, 248, 0, 0, 1], name("Version 1")),
    (&[0, 0, 8, 248, 0, 0, 2], name("Version 2")),
    (&[0, 0, 8, 248, 0, 0, 3], name("Version 3")),
    (&[0, 0, 8, 248, 1], name("[Packages]")),
    (&[0, 0, 8, 248, 1, 1], name("[Generic package]")),
    // H.225.0: call signalling for packet-based multimedia.
    (&[0, 0, 8, 2250], name("[Call signalling and media stream packetization]")),
    (&[0, 0, 8, 2250, 0], silent()),
    (&[0, 0, 8, 2250, 0, 1], name("Version 1")),
    (&[0, 0, 8, 2250, 0, 2], name("Version 2")),
    (&[0, 0, 8, 2250, 0, 3], name("Version 3")),
    (&[0, 0, 8, 2250, 0, 4], name("Version 4")),
    (&[0, 0, 8, 2250, 0, 5], name("Version 5")),
    (&[0, 0, 8, 2250, 0, 6], name("Version 6")),
    // Q.773: transaction capabilities (TCAP).
    (&[0, 0, 17, 773], name("[Transaction capabilities formats and encoding]")),
    (&[0, 0, 17, 773, 2], name("[Modules]")),
    (&[0, 0, 17, 773, 2, 1], name("[Messages]")),
    // T.124: generic conference control.
    (&[0, 0, 20, 124], name("[Generic conference control]")),
    (&[0, 0, 20, 124, 0], silent()),
    (&[0, 0, 20, 124, 0, 1], name("Version 1")),
    // Questions are allocated per study group and carry no names.
    (&[0, 1], name("Question")),
    (&[0, 1, 1], num()),
    (&[0, 1, 2], num()),
    (&[0, 1, 4], num()),
    (&[0, 1, 7], num()),
    (&[0, 1, 11], num()),
    (&[0, 1, 13], num()),
    (&[0, 1, 16], num()),
    (&[0, 1, 17], num()),
    // Administrations, keyed by X.121 data country code.
    (&[0, 2], name("Administration")),
    (&[0, 2, 202], name("[Greece]")),
    (&[0, 2, 204], name("[Netherlands]")),
    (&[0, 2, 206], name("[Belgium]")),
    (&[0, 2, 208], name("[France]")),
    (&[0, 2, 212], name("[Monaco]")),
    (&[0, 2, 214], name("[Spain]")),
    (&[0, 2, 216], name("[Hungary]")),
    (&[0, 2, 222], name("[Italy]")),
    (&[0, 2, 226], name("[Romania]")),
    (&[0, 2, 228], name("[Switzerland]")),
    (&[0, 2, 230], name("[Czech Republic]")),
    (&[0, 2, 232], name("[Austria]")),
    (&[0, 2, 234], name("[United Kingdom]")),
    (&[0, 2, 238], name("[Denmark]")),
    (&[0, 2, 240], name("[Sweden]")),
    (&[0, 2, 242], name("[Norway]")),
    (&[0, 2, 244], name("[Finland]")),
    (&[0, 2, 250], name("[Russia]")),
    (&[0, 2, 255], name("[Ukraine]")),
    (&[0, 2, 260], name("[Poland]")),
    (&[0, 2, 262], name("[Germany]")),
    (&[0, 2, 268], name("[Portugal]")),
    (&[0, 2, 270], name("[Luxembourg]")),
    (&[0, 2, 272], name("[Ireland]")),
    (&[0, 2, 274], name("[Iceland]")),
    (&[0, 2, 280], name("[Cyprus]")),
    (&[0, 2, 284], name("[Bulgaria]")),
    (&[0, 2, 286], name("[Turkey]")),
    (&[0, 2, 302], name("[Canada]")),
    (&[0, 2, 310], name("[United States]")),
    (&[0, 2, 334], name("[Mexico]")),
    (&[0, 2, 404], name("[India]")),
    (&[0, 2, 440], name("[Japan]")),
    (&[0, 2, 450], name("[Korea]")),
    (&[0, 2, 460], name("[China]")),
    (&[0, 2, 505], name("[Australia]")),
    (&[0, 2, 525], name("[Singapore]")),
    (&[0, 2, 530], name("[New Zealand]")),
    // Network operators, keyed by X.121 DNIC.
    (&[0, 3], name("Network-Operator")),
    (&[0, 3, 2342], name("[PSS (United Kingdom)]")),
    (&[0, 3, 3110], name("[Telenet (United States)]")),
    // Identified organizations under ITU-T.
    (&[0, 4], name("Identified-Organization")),
    (&[0, 4, 0], name("[ETSI]")),
    (&[0, 4, 0, 127], name("[Reserved]")),
    (&[0, 4, 0, 127, 0], name("[ETSI identified organization]")),
    (&[0, 4, 0, 127, 0, 7], name("[BSI]")),
    (&[0, 4, 0, 1862], name("[Qualified certificate statements]")),
    (&[0, 4, 0, 1862, 1], name("[Statement identifiers]")),
    (&[0, 4, 0, 1862, 1, 1], name("QcCompliance")),
    (&[0, 4, 0, 1862, 1, 2], name("QcLimitValue")),
    (&[0, 4, 0, 1862, 1, 3], name("QcRetentionPeriod")),
    (&[0, 4, 0, 1862, 1, 4], name("QcSSCD")),
    (&[0, 4, 0, 1862, 1, 5], name("QcPDS")),
    (&[0, 4, 0, 1862, 1, 6], name("QcType")),
    (&[0, 4, 0, 1862, 1, 6, 1], name("[Electronic signatures]")),
    (&[0, 4, 0, 1862, 1, 6, 2], name("[Electronic seals]")),
    (&[0, 4, 0, 1862, 1, 6, 3], name("[Website authentication]")),
    (&[0, 5], name("R-Recommendation")),
    // Legacy X.25-era data networks; home of the pilot directory attributes.
    (&[0, 9], name("Data")),
    (&[0, 9, 2342], name("[PSS]")),
    (&[0, 9, 2342, 19200300], name("[University College London]")),
    (&[0, 9, 2342, 19200300, 100], name("[Pilot]")),
    (&[0, 9, 2342, 19200300, 100, 1], name("[Pilot attribute type]")),
    (&[0, 9, 2342, 19200300, 100, 1, 1], name("uid")),
    (&[0, 9, 2342, 19200300, 100, 1, 3], name("mail")),
    (&[0, 9, 2342, 19200300, 100, 1, 25], name("domainComponent")),
];
