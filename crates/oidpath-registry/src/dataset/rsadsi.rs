//! RSA Data Security subtree (`1.2.840.113549.*`): the PKCS family and the
//! RSADSI digest and encryption algorithm arcs.

use super::{name, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[1, 2, 840, 113549], name("[RSA Data Security]")),
    (&[1, 2, 840, 113549, 1], name("PKCS")),
    // PKCS #1: RSA cryptography.
    (&[1, 2, 840, 113549, 1, 1], name("PKCS-1")),
    (&[1, 2, 840, 113549, 1, 1, 1], name("rsaEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 2], name("md2WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 3], name("md4WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 4], name("md5WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 5], name("sha1WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 7], name("id-RSAES-OAEP")),
    (&[1, 2, 840, 113549, 1, 1, 8], name("id-mgf1")),
    (&[1, 2, 840, 113549, 1, 1, 9], name("id-pSpecified")),
    (&[1, 2, 840, 113549, 1, 1, 10], name("id-RSASSA-PSS")),
    (&[1, 2, 840, 113549, 1, 1, 11], name("sha256WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 12], name("sha384WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 13], name("sha512WithRSAEncryption")),
    (&[1, 2, 840, 113549, 1, 1, 14], name("sha224WithRSAEncryption")),
    // PKCS #3: Diffie-Hellman key agreement.
    (&[1, 2, 840, 113549, 1, 3], name("PKCS-3")),
    (&[1, 2, 840, 113549, 1, 3, 1], name("dhKeyAgreement")),
    // PKCS #5: password-based cryptography.
    (&[1, 2, 840, 113549, 1, 5], name("PKCS-5")),
    (&[1, 2, 840, 113549, 1, 5, 1], name("pbeWithMD2AndDES-CBC")),
    (&[1, 2, 840, 113549, 1, 5, 3], name("pbeWithMD5AndDES-CBC")),
    (&[1, 2, 840, 113549, 1, 5, 6], name("pbeWithSHA1AndDES-CBC")),
    (&[1, 2, 840, 113549, 1, 5, 10], name("pbeWithSHA1AndRC2-CBC")),
    (&[1, 2, 840, 113549, 1, 5, 12], name("id-PBKDF2")),
    (&[1, 2, 840, 113549, 1, 5, 13], name("id-PBES2")),
    (&[1, 2, 840, 113549, 1, 5, 14], name("id-PBMAC1")),
    // PKCS #7: cryptographic message syntax.
    (&[1, 2, 840, 113549, 1, 7], name("PKCS-7")),
    (&[1, 2, 840, 113549, 1, 7, 1], name("data")),
    (&[1, 2, 840, 113549, 1, 7, 2], name("signedData")),
    (&[1, 2, 840, 113549, 1, 7, 3], name("envelopedData")),
    (&[1, 2, 840, 113549, 1, 7, 4], name("signedAndEnvelopedData")),
    (&[1, 2, 840, 113549, 1, 7, 5], name("digestedData")),
    (&[1, 2, 840, 113549, 1, 7, 6], name("encryptedData")),
    // PKCS #9: attribute types.
    (&[1, 2, 840, 113549, 1, 9], name("PKCS-9")),
    (&[1, 2, 840, 113549, 1, 9, 1], name("emailAddress")),
    (&[1, 2, 840, 113549, 1, 9, 2], name("unstructuredName")),
    (&[1, 2, 840, 113549, 1, 9, 3], name("contentType")),
    (&[1, 2, 840, 113549, 1, 9, 4], name("messageDigest")),
    (&[1, 2, 840, 113549, 1, 9, 5], name("signingTime")),
    (&[1, 2, 840, 113549, 1, 9, 6], name("counterSignature")),
    (&[1, 2, 840, 113549, 1, 9, 7], name("challengePassword")),
    (&[1, 2, 840, 113549, 1, 9, 8], name("unstructuredAddress")),
    (&[1, 2, 840, 113549, 1, 9, 14], name("extensionRequest")),
    (&[1, 2, 840, 113549, 1, 9, 15], name("smimeCapabilities")),
    (&[1, 2, 840, 113549, 1, 9, 16], name("smime")),
    (&[1, 2, 840, 113549, 1, 9, 16, 1], name("[Content types]")),
    (&[1, 2, 840, 113549, 1, 9, 16, 1, 4], name("id-ct-TSTInfo")),
    (&[1, 2, 840, 113549, 1, 9, 16, 2], name("[Authenticated attributes]")),
    (&[1, 2, 840, 113549, 1, 9, 20], name("friendlyName")),
    (&[1, 2, 840, 113549, 1, 9, 21], name("localKeyID")),
    (&[1, 2, 840, 113549, 1, 9, 22], name("certTypes")),
    (&[1, 2, 840, 113549, 1, 9, 22, 1], name("x509Certificate")),
    // PKCS #12: personal information exchange.
    (&[1, 2, 840, 113549, 1, 12], name("PKCS-12")),
    (&[1, 2, 840, 113549, 1, 12, 1], name("[PBE identifiers]")),
    (&[1, 2, 840, 113549, 1, 12, 1, 1], name("pbeWithSHAAnd128BitRC4")),
    (&[1, 2, 840, 113549, 1, 12, 1, 2], name("pbeWithSHAAnd40BitRC4")),
    (&[1, 2, 840, 113549, 1, 12, 1, 3], name("pbeWithSHAAnd3-KeyTripleDES-CBC")),
    (&[1, 2, 840, 113549, 1, 12, 1, 4], name("pbeWithSHAAnd2-KeyTripleDES-CBC")),
    (&[1, 2, 840, 113549, 1, 12, 1, 5], name("pbeWithSHAAnd128BitRC2-CBC")),
    (&[1, 2, 840, 113549, 1, 12, 1, 6], name("pbeWithSHAAnd40BitRC2-CBC")),
    (&[1, 2, 840, 113549, 1, 12, 10], name("[Bag types container]")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1], name("[Bag types]")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 1], name("keyBag")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 2], name("pkcs-8ShroudedKeyBag")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 3], name("certBag")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 4], name("crlBag")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 5], name("secretBag")),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 6], name("safeContentsBag")),
    // Digest algorithms.
    (&[1, 2, 840, 113549, 2], name("[Digest algorithms]")),
    (&[1, 2, 840, 113549, 2, 2], name("md2")),
    (&[1, 2, 840, 113549, 2, 4], name("md4")),
    (&[1, 2, 840, 113549, 2, 5], name("md5")),
    (&[1, 2, 840, 113549, 2, 7], name("hmacWithSHA1")),
    (&[1, 2, 840, 113549, 2, 8], name("hmacWithSHA224")),
    (&[1, 2, 840, 113549, 2, 9], name("hmacWithSHA256")),
    (&[1, 2, 840, 113549, 2, 10], name("hmacWithSHA384")),
    (&[1, 2, 840, 113549, 2, 11], name("hmacWithSHA512")),
    // Encryption algorithms.
    (&[1, 2, 840, 113549, 3], name("[Encryption algorithms]")),
    (&[1, 2, 840, 113549, 3, 2], name("rc2-cbc")),
    (&[1, 2, 840, 113549, 3, 4], name("rc4")),
    (&[1, 2, 840, 113549, 3, 7], name("des-ede3-cbc")),
];
