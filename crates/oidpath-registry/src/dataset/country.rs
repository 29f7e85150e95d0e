//! Country subtree (`2.16.*`), keyed by ISO 3166 numeric code.
//!
//! `2.16` itself is the X.660 `/Country` long arc, so its node restarts the
//! path. The United States arc is by far the deepest resident: the NIST
//! algorithm registry and the big legacy vendor allocations live there.

use super::{name, restart, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[2, 16], restart("Country")),
    (&[2, 16, 36], name("AU")),
    (&[2, 16, 76], name("BR")),
    (&[2, 16, 124], name("CA")),
    (&[2, 16, 156], name("CN")),
    (&[2, 16, 203], name("CZ")),
    (&[2, 16, 208], name("DK")),
    (&[2, 16, 246], name("FI")),
    (&[2, 16, 250], name("FR")),
    (&[2, 16, 276], name("DE")),
    (&[2, 16, 300], name("GR")),
    (&[2, 16, 344], name("HK")),
    (&[2, 16, 348], name("HU")),
    (&[2, 16, 356], name("IN")),
    (&[2, 16, 372], name("IE")),
    (&[2, 16, 376], name("IL")),
    (&[2, 16, 380], name("IT")),
    (&[2, 16, 392], name("JP")),
    (&[2, 16, 410], name("KR")),
    (&[2, 16, 484], name("MX")),
    (&[2, 16, 528], name("NL")),
    (&[2, 16, 554], name("NZ")),
    (&[2, 16, 578], name("NO")),
    (&[2, 16, 616], name("PL")),
    (&[2, 16, 620], name("PT")),
    (&[2, 16, 643], name("RU")),
    (&[2, 16, 702], name("SG")),
    (&[2, 16, 710], name("ZA")),
    (&[2, 16, 724], name("ES")),
    (&[2, 16, 752], name("SE")),
    (&[2, 16, 756], name("CH")),
    (&[2, 16, 764], name("TH")),
    (&[2, 16, 792], name("TR")),
    (&[2, 16, 804], name("UA")),
    (&[2, 16, 826], name("GB")),
    (&[2, 16, 840], name("US")),
    // United States organizations.
    (&[2, 16, 840, 1], name("[Organization]")),
    (&[2, 16, 840, 1, 101], name("[US government]")),
    (&[2, 16, 840, 1, 101, 2], name("[US Department of Defense]")),
    (&[2, 16, 840, 1, 101, 2, 1], name("[InfoSec]")),
    (&[2, 16, 840, 1, 101, 3], name("[CSOR]")),
    (&[2, 16, 840, 1, 101, 3, 4], name("[NIST algorithms]")),
    (&[2, 16, 840, 1, 101, 3, 4, 1], name("[AES]")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 1], name("aes128-ECB")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 2], name("aes128-CBC")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 3], name("aes128-OFB")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 4], name("aes128-CFB")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 5], name("aes128-wrap")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 6], name("aes128-GCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 7], name("aes128-CCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 21], name("aes192-ECB")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 22], name("aes192-CBC")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 25], name("aes192-wrap")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 26], name("aes192-GCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 27], name("aes192-CCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 41], name("aes256-ECB")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 42], name("aes256-CBC")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 45], name("aes256-wrap")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 46], name("aes256-GCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 47], name("aes256-CCM")),
    (&[2, 16, 840, 1, 101, 3, 4, 2], name("[Hash algorithms]")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 1], name("sha256")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 2], name("sha384")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 3], name("sha512")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 4], name("sha224")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 5], name("sha512-224")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 6], name("sha512-256")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 7], name("sha3-224")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 8], name("sha3-256")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 9], name("sha3-384")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 10], name("sha3-512")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 11], name("shake128")),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 12], name("shake256")),
    (&[2, 16, 840, 1, 101, 3, 4, 3], name("[Signature algorithms]")),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 1], name("dsa-with-sha224")),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 2], name("dsa-with-sha256")),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 17], name("ml-dsa-44")),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 18], name("ml-dsa-65")),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 19], name("ml-dsa-87")),
    (&[2, 16, 840, 1, 113730], name("[Netscape]")),
    (&[2, 16, 840, 1, 113730, 1], name("[Certificate extensions]")),
    (&[2, 16, 840, 1, 113730, 1, 1], name("cert-type")),
    (&[2, 16, 840, 1, 113730, 1, 2], name("base-url")),
    (&[2, 16, 840, 1, 113730, 1, 4], name("ca-revocation-url")),
    (&[2, 16, 840, 1, 113730, 1, 8], name("ca-policy-url")),
    (&[2, 16, 840, 1, 113730, 1, 12], name("ssl-server-name")),
    (&[2, 16, 840, 1, 113730, 1, 13], name("comment")),
    (&[2, 16, 840, 1, 113730, 2], name("[Data types]")),
    (&[2, 16, 840, 1, 113730, 4], name("[Policy]")),
    (&[2, 16, 840, 1, 113730, 4, 1], name("serverGatedCrypto")),
    (&[2, 16, 840, 1, 113733], name("[VeriSign]")),
    (&[2, 16, 840, 1, 113733, 1], name("[PKI]")),
    (&[2, 16, 840, 1, 114028], name("[Entrust]")),
    (&[2, 16, 840, 1, 114412], name("[DigiCert]")),
    (&[2, 16, 840, 1, 114412, 2], name("[Certificate policies]")),
    (&[2, 16, 840, 1, 114412, 2, 1], name("[Extended validation]")),
];
