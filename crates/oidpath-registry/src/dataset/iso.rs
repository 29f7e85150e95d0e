//! ISO subtree (`1.*`): international standards, registration authorities,
//! national member bodies, and identified organizations. The two deepest
//! residents, `1.2.840.113549` (RSADSI) and `1.3.6.1` (internet), live in
//! their own tables.

use super::{name, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[1], name("ISO")),
    // International standards, keyed by standard number.
    (&[1, 0], name("Standard")),
    (&[1, 0, 639], name("[Codes for the representation of names of languages]")),
    (&[1, 0, 3166], name("[Codes for the representation of names of countries]")),
    (&[1, 0, 4217], name("[Currency codes]")),
    (&[1, 0, 7816], name("[Identification cards, integrated circuit cards]")),
    (&[1, 0, 8571], name("[File transfer, access and management (FTAM)]")),
    (&[1, 0, 8802], name("[Local and metropolitan area networks (IEEE 802)]")),
    (&[1, 0, 9362], name("[Business identifier codes (BIC)]")),
    (&[1, 0, 9797], name("[Message authentication codes (MACs)]")),
    (&[1, 0, 9798], name("[Entity authentication]")),
    (&[1, 0, 9979], name("[Register of cryptographic algorithms]")),
    (&[1, 0, 10118], name("[Hash-functions]")),
    (&[1, 0, 10118, 3], name("[Dedicated hash-functions]")),
    (&[1, 0, 10646], name("[Universal coded character set (UCS)]")),
    (&[1, 0, 14888], name("[Digital signatures with appendix]")),
    (&[1, 0, 15946], name("[Cryptographic techniques based on elliptic curves]")),
    (&[1, 0, 18033], name("[Encryption algorithms]")),
    (&[1, 0, 19772], name("[Authenticated encryption]")),
    (&[1, 1], name("Registration-Authority")),
    // National member bodies, keyed by ISO 3166 numeric code.
    (&[1, 2], name("Member-Body")),
    (&[1, 2, 36], name("[Australia]")),
    (&[1, 2, 40], name("[Austria]")),
    (&[1, 2, 56], name("[Belgium]")),
    (&[1, 2, 124], name("[Canada]")),
    (&[1, 2, 156], name("[China]")),
    (&[1, 2, 203], name("[Czech Republic]")),
    (&[1, 2, 208], name("[Denmark]")),
    (&[1, 2, 246], name("[Finland]")),
    (&[1, 2, 250], name("[France]")),
    (&[1, 2, 276], name("[Germany]")),
    (&[1, 2, 300], name("[Greece]")),
    (&[1, 2, 344], name("[Hong Kong]")),
    (&[1, 2, 356], name("[India]")),
    (&[1, 2, 372], name("[Ireland]")),
    (&[1, 2, 376], name("[Israel]")),
    (&[1, 2, 380], name("[Italy]")),
    (&[1, 2, 392], name("[Japan]")),
    (&[1, 2, 398], name("[Kazakhstan]")),
    (&[1, 2, 410], name("[Korea]")),
    (&[1, 2, 484], name("[Mexico]")),
    (&[1, 2, 528], name("[Netherlands]")),
    (&[1, 2, 554], name("[New Zealand]")),
    (&[1, 2, 578], name("[Norway]")),
    (&[1, 2, 616], name("[Poland]")),
    (&[1, 2, 620], name("[Portugal]")),
    (&[1, 2, 643], name("[Russia]")),
    (&[1, 2, 702], name("[Singapore]")),
    (&[1, 2, 710], name("[South Africa]")),
    (&[1, 2, 724], name("[Spain]")),
    (&[1, 2, 752], name("[Sweden]")),
    (&[1, 2, 756], name("[Switzerland]")),
    (&[1, 2, 764], name("[Thailand]")),
    (&[1, 2, 792], name("[Turkey]")),
    (&[1, 2, 804], name("[Ukraine]")),
    (&[1, 2, 826], name("[United Kingdom]")),
    (&[1, 2, 840], name("[United States]")),
    // China: OSCCA commercial cryptography.
    (&[1, 2, 156, 10197], name("[OSCCA cryptographic algorithms]")),
    (&[1, 2, 156, 10197, 1], name("[Algorithm classes]")),
    (&[1, 2, 156, 10197, 1, 301], name("SM2")),
    (&[1, 2, 156, 10197, 1, 401], name("SM3")),
    // Japan: Mitsubishi Electric (Camellia).
    (&[1, 2, 392, 200011], name("[Mitsubishi Electric]")),
    (&[1, 2, 392, 200011, 61], name("[Security technology]")),
    // Korea: KISA.
    (&[1, 2, 410, 200004], name("[KISA algorithms]")),
    (&[1, 2, 410, 200004, 1], name("[Algorithm]")),
    (&[1, 2, 410, 200004, 1, 4], name("seedECB")),
    (&[1, 2, 410, 200004, 1, 5], name("seedCBC")),
    // Russia: CryptoPro and TC26 GOST arcs.
    (&[1, 2, 643, 2], name("[Unofficial assignments]")),
    (&[1, 2, 643, 2, 2], name("[CryptoPro]")),
    (&[1, 2, 643, 7], name("[Official assignments]")),
    (&[1, 2, 643, 7, 1], name("[TC26]")),
    // United States: ANSI-registered arcs. RSADSI has its own table.
    (&[1, 2, 840, 10008], name("[DICOM]")),
    (&[1, 2, 840, 10008, 1], name("[DICOM UID registry]")),
    (&[1, 2, 840, 10008, 1, 1], name("[Verification SOP class]")),
    (&[1, 2, 840, 10040], name("[ANSI X9.57 (DSA)]")),
    (&[1, 2, 840, 10040, 4], name("[Algorithms]")),
    (&[1, 2, 840, 10040, 4, 1], name("dsa")),
    (&[1, 2, 840, 10040, 4, 3], name("dsa-with-sha1")),
    (&[1, 2, 840, 10045], name("[ANSI X9.62 (elliptic curve)]")),
    (&[1, 2, 840, 10045, 1], name("[Field type]")),
    (&[1, 2, 840, 10045, 1, 1], name("prime-field")),
    (&[1, 2, 840, 10045, 1, 2], name("characteristic-two-field")),
    (&[1, 2, 840, 10045, 2], name("[Public key type]")),
    (&[1, 2, 840, 10045, 2, 1], name("ecPublicKey")),
    (&[1, 2, 840, 10045, 3], name("[Curves]")),
    (&[1, 2, 840, 10045, 3, 0], name("[Characteristic-two curves]")),
    (&[1, 2, 840, 10045, 3, 1], name("[Prime curves]")),
    (&[1, 2, 840, 10045, 3, 1, 1], name("prime192v1")),
    (&[1, 2, 840, 10045, 3, 1, 2], name("prime192v2")),
    (&[1, 2, 840, 10045, 3, 1, 3], name("prime192v3")),
    (&[1, 2, 840, 10045, 3, 1, 4], name("prime239v1")),
    (&[1, 2, 840, 10045, 3, 1, 5], name("prime239v2")),
    (&[1, 2, 840, 10045, 3, 1, 6], name("prime239v3")),
    (&[1, 2, 840, 10045, 3, 1, 7], name("prime256v1")),
    (&[1, 2, 840, 10045, 4], name("[Signatures]")),
    (&[1, 2, 840, 10045, 4, 1], name("ecdsa-with-SHA1")),
    (&[1, 2, 840, 10045, 4, 3], name("[ecdsa-with-SHA2]")),
    (&[1, 2, 840, 10045, 4, 3, 1], name("ecdsa-with-SHA224")),
    (&[1, 2, 840, 10045, 4, 3, 2], name("ecdsa-with-SHA256")),
    (&[1, 2, 840, 10045, 4, 3, 3], name("ecdsa-with-SHA384")),
    (&[1, 2, 840, 10045, 4, 3, 4], name("ecdsa-with-SHA512")),
    (&[1, 2, 840, 10046], name("[ANSI X9.42 (Diffie-Hellman)]")),
    (&[1, 2, 840, 10046, 2], name("[Number types]")),
    (&[1, 2, 840, 10046, 2, 1], name("dhpublicnumber")),
    (&[1, 2, 840, 113533], name("[Nortel Networks]")),
    (&[1, 2, 840, 113533, 7], name("[Entrust]")),
    (&[1, 2, 840, 113556], name("[Microsoft]")),
    (&[1, 2, 840, 113556, 1], name("[Active Directory]")),
    // Identified organizations outside the national bodies.
    (&[1, 3], name("Identified-Organization")),
    (&[1, 3, 6], name("[US Department of Defense]")),
    (&[1, 3, 12], name("[ECMA]")),
    (&[1, 3, 14], name("[OIW]")),
    (&[1, 3, 14, 3], name("[Security special interest group]")),
    (&[1, 3, 14, 3, 2], name("[Algorithms]")),
    (&[1, 3, 14, 3, 2, 7], name("desCBC")),
    (&[1, 3, 14, 3, 2, 12], name("dsa")),
    (&[1, 3, 14, 3, 2, 26], name("sha1")),
    (&[1, 3, 14, 3, 2, 27], name("dsa-with-sha1")),
    (&[1, 3, 14, 3, 2, 29], name("sha1-with-rsa-signature")),
    (&[1, 3, 36], name("[TeleTrusT]")),
    (&[1, 3, 36, 3], name("[Algorithm]")),
    (&[1, 3, 36, 3, 2], name("[Hash algorithm]")),
    (&[1, 3, 36, 3, 2, 1], name("ripemd160")),
    (&[1, 3, 36, 3, 3], name("[Signature algorithm]")),
    (&[1, 3, 36, 3, 3, 2], name("[Signature scheme]")),
    (&[1, 3, 36, 3, 3, 2, 8], name("[EC signature scheme]")),
    (&[1, 3, 36, 3, 3, 2, 8, 1], name("[Elliptic curve]")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1], name("[Version one]")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 1], name("brainpoolP160r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 2], name("brainpoolP160t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 3], name("brainpoolP192r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 4], name("brainpoolP192t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 5], name("brainpoolP224r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 6], name("brainpoolP224t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 7], name("brainpoolP256r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 8], name("brainpoolP256t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 9], name("brainpoolP320r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 10], name("brainpoolP320t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 11], name("brainpoolP384r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 12], name("brainpoolP384t1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 13], name("brainpoolP512r1")),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 14], name("brainpoolP512t1")),
    (&[1, 3, 101], name("[Thawte]")),
    (&[1, 3, 101, 110], name("X25519")),
    (&[1, 3, 101, 111], name("X448")),
    (&[1, 3, 101, 112], name("Ed25519")),
    (&[1, 3, 101, 113], name("Ed448")),
    (&[1, 3, 132], name("[Certicom (SECG)]")),
    (&[1, 3, 132, 0], name("[Curves]")),
    (&[1, 3, 132, 0, 1], name("sect163k1")),
    (&[1, 3, 132, 0, 2], name("sect163r1")),
    (&[1, 3, 132, 0, 8], name("secp160r1")),
    (&[1, 3, 132, 0, 9], name("secp160k1")),
    (&[1, 3, 132, 0, 10], name("secp256k1")),
    (&[1, 3, 132, 0, 15], name("sect163r2")),
    (&[1, 3, 132, 0, 16], name("sect283k1")),
    (&[1, 3, 132, 0, 17], name("sect283r1")),
    (&[1, 3, 132, 0, 26], name("sect233k1")),
    (&[1, 3, 132, 0, 27], name("sect233r1")),
    (&[1, 3, 132, 0, 31], name("secp192k1")),
    (&[1, 3, 132, 0, 32], name("secp224k1")),
    (&[1, 3, 132, 0, 33], name("secp224r1")),
    (&[1, 3, 132, 0, 34], name("secp384r1")),
    (&[1, 3, 132, 0, 35], name("secp521r1")),
    (&[1, 3, 132, 0, 36], name("sect409k1")),
    (&[1, 3, 132, 0, 37], name("sect409r1")),
    (&[1, 3, 132, 0, 38], name("sect571k1")),
    (&[1, 3, 132, 0, 39], name("sect571r1")),
    (&[1, 3, 132, 1], name("[Key establishment schemes]")),
];
