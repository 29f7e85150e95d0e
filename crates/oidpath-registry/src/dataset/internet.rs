//! Internet subtree (`1.3.6.1.*`): the IANA arcs, SNMP management tree,
//! private enterprise numbers, and the PKIX security arcs.

use super::{name, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[1, 3, 6, 1], name("[Internet]")),
    (&[1, 3, 6, 1, 1], name("Directory")),
    // SNMP management tree.
    (&[1, 3, 6, 1, 2], name("Management")),
    (&[1, 3, 6, 1, 2, 1], name("MIB-2")),
    (&[1, 3, 6, 1, 2, 1, 1], name("system")),
    (&[1, 3, 6, 1, 2, 1, 1, 1], name("sysDescr")),
    (&[1, 3, 6, 1, 2, 1, 1, 2], name("sysObjectID")),
    (&[1, 3, 6, 1, 2, 1, 1, 3], name("sysUpTime")),
    (&[1, 3, 6, 1, 2, 1, 2], name("interfaces")),
    (&[1, 3, 6, 1, 2, 1, 3], name("at")),
    (&[1, 3, 6, 1, 2, 1, 4], name("ip")),
    (&[1, 3, 6, 1, 2, 1, 5], name("icmp")),
    (&[1, 3, 6, 1, 2, 1, 6], name("tcp")),
    (&[1, 3, 6, 1, 2, 1, 7], name("udp")),
    (&[1, 3, 6, 1, 2, 1, 10], name("transmission")),
    (&[1, 3, 6, 1, 2, 1, 11], name("snmp")),
    (&[1, 3, 6, 1, 2, 1, 25], name("host")),
    (&[1, 3, 6, 1, 3], name("Experimental")),
    // Private enterprise numbers.
    (&[1, 3, 6, 1, 4], name("Private")),
    (&[1, 3, 6, 1, 4, 1], name("Enterprise")),
    (&[1, 3, 6, 1, 4, 1, 9], name("[Cisco Systems]")),
    (&[1, 3, 6, 1, 4, 1, 11], name("[Hewlett-Packard]")),
    (&[1, 3, 6, 1, 4, 1, 42], name("[Sun Microsystems]")),
    (&[1, 3, 6, 1, 4, 1, 111], name("[Oracle]")),
    (&[1, 3, 6, 1, 4, 1, 311], name("[Microsoft]")),
    (&[1, 3, 6, 1, 4, 1, 311, 10], name("[Cryptography]")),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3], name("[Enhanced key usages]")),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 3], name("serverGatedCrypto")),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 4], name("encryptedFileSystem")),
    (&[1, 3, 6, 1, 4, 1, 311, 20], name("[Enrollment services]")),
    (&[1, 3, 6, 1, 4, 1, 311, 20, 2], name("[Certificate templates]")),
    (&[1, 3, 6, 1, 4, 1, 311, 20, 2, 2], name("smartcardLogon")),
    (&[1, 3, 6, 1, 4, 1, 1466], name("[LDAP]")),
    (&[1, 3, 6, 1, 4, 1, 1466, 115], name("[Attribute syntaxes]")),
    (&[1, 3, 6, 1, 4, 1, 5923], name("[Internet2 (eduPerson)]")),
    (&[1, 3, 6, 1, 4, 1, 11129], name("[Google]")),
    (&[1, 3, 6, 1, 4, 1, 11129, 2], name("[Technical]")),
    (&[1, 3, 6, 1, 4, 1, 11129, 2, 4], name("[Certificate Transparency]")),
    (&[1, 3, 6, 1, 4, 1, 11129, 2, 4, 2], name("[Signed certificate timestamp list]")),
    (&[1, 3, 6, 1, 4, 1, 11129, 2, 4, 3], name("[Precertificate poison]")),
    (&[1, 3, 6, 1, 4, 1, 11129, 2, 4, 4], name("[Precertificate signing certificate]")),
    (&[1, 3, 6, 1, 4, 1, 11591], name("[GNU Project]")),
    (&[1, 3, 6, 1, 4, 1, 44947], name("[ISRG (Let's Encrypt)]")),
    (&[1, 3, 6, 1, 4, 1, 44947, 1], name("[Certificate policies]")),
    (&[1, 3, 6, 1, 4, 1, 44947, 1, 1], name("[Domain validated]")),
    // Security mechanisms, dominated by PKIX.
    (&[1, 3, 6, 1, 5], name("Security")),
    (&[1, 3, 6, 1, 5, 5], name("[Security mechanisms]")),
    (&[1, 3, 6, 1, 5, 5, 2], name("SPNEGO")),
    (&[1, 3, 6, 1, 5, 5, 7], name("PKIX")),
    (&[1, 3, 6, 1, 5, 5, 7, 0], name("[Modules]")),
    (&[1, 3, 6, 1, 5, 5, 7, 1], name("[Private extensions]")),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 1], name("authorityInfoAccess")),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 11], name("subjectInfoAccess")),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 14], name("proxyCertInfo")),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 24], name("tlsfeature")),
    (&[1, 3, 6, 1, 5, 5, 7, 2], name("[Policy qualifiers]")),
    (&[1, 3, 6, 1, 5, 5, 7, 2, 1], name("cps")),
    (&[1, 3, 6, 1, 5, 5, 7, 2, 2], name("unotice")),
    (&[1, 3, 6, 1, 5, 5, 7, 3], name("[Extended key purposes]")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 1], name("serverAuth")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 2], name("clientAuth")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 3], name("codeSigning")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 4], name("emailProtection")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 5], name("ipsecEndSystem")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 6], name("ipsecTunnel")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 7], name("ipsecUser")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 8], name("timeStamping")),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 9], name("OCSPSigning")),
    (&[1, 3, 6, 1, 5, 5, 7, 11], name("[Qualified certificate statements]")),
    (&[1, 3, 6, 1, 5, 5, 7, 11, 1], name("pkixQCSyntax-v1")),
    (&[1, 3, 6, 1, 5, 5, 7, 11, 2], name("pkixQCSyntax-v2")),
    (&[1, 3, 6, 1, 5, 5, 7, 48], name("[Access descriptors]")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1], name("ocsp")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 1], name("[Basic response]")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 2], name("[Nonce]")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 5], name("[No check]")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 2], name("caIssuers")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 3], name("timeStamping")),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 5], name("caRepository")),
    (&[1, 3, 6, 1, 6], name("SNMPv2")),
    (&[1, 3, 6, 1, 6, 1], name("snmpDomains")),
    (&[1, 3, 6, 1, 6, 2], name("snmpProxys")),
    (&[1, 3, 6, 1, 6, 3], name("snmpModules")),
    (&[1, 3, 6, 1, 7], name("Mail")),
    (&[1, 3, 6, 1, 7, 1], name("mime-mhs")),
];
