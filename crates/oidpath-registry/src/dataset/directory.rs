//! X.500 directory subtree (`2.5.*`): attribute types, object classes, and
//! the certificate extension arc every X.509 implementation leans on.

use super::{name, Entry};

pub(super) const ENTRIES: &[Entry] = &[
    (&[2, 5], name("Directory")),
    (&[2, 5, 1], name("[Modules]")),
    (&[2, 5, 2], name("[Service environment]")),
    (&[2, 5, 3], name("[Application context]")),
    // X.520 attribute types.
    (&[2, 5, 4], name("[Attribute types]")),
    (&[2, 5, 4, 0], name("objectClass")),
    (&[2, 5, 4, 1], name("aliasedEntryName")),
    (&[2, 5, 4, 2], name("knowledgeInformation")),
    (&[2, 5, 4, 3], name("commonName")),
    (&[2, 5, 4, 4], name("surname")),
    (&[2, 5, 4, 5], name("serialNumber")),
    (&[2, 5, 4, 6], name("countryName")),
    (&[2, 5, 4, 7], name("localityName")),
    (&[2, 5, 4, 8], name("stateOrProvinceName")),
    (&[2, 5, 4, 9], name("streetAddress")),
    (&[2, 5, 4, 10], name("organizationName")),
    (&[2, 5, 4, 11], name("organizationalUnitName")),
    (&[2, 5, 4, 12], name("title")),
    (&[2, 5, 4, 13], name("description")),
    (&[2, 5, 4, 14], name("searchGuide")),
    (&[2, 5, 4, 15], name("businessCategory")),
    (&[2, 5, 4, 16], name("postalAddress")),
    (&[2, 5, 4, 17], name("postalCode")),
    (&[2, 5, 4, 18], name("postOfficeBox")),
    (&[2, 5, 4, 19], name("physicalDeliveryOfficeName")),
    (&[2, 5, 4, 20], name("telephoneNumber")),
    (&[2, 5, 4, 21], name("telexNumber")),
    (&[2, 5, 4, 22], name("teletexTerminalIdentifier")),
    (&[2, 5, 4, 23], name("facsimileTelephoneNumber")),
    (&[2, 5, 4, 24], name("x121Address")),
    (&[2, 5, 4, 25], name("internationalISDNNumber")),
    (&[2, 5, 4, 26], name("registeredAddress")),
    (&[2, 5, 4, 27], name("destinationIndicator")),
    (&[2, 5, 4, 28], name("preferredDeliveryMethod")),
    (&[2, 5, 4, 29], name("presentationAddress")),
    (&[2, 5, 4, 30], name("supportedApplicationContext")),
    (&[2, 5, 4, 31], name("member")),
    (&[2, 5, 4, 32], name("owner")),
    (&[2, 5, 4, 33], name("roleOccupant")),
    (&[2, 5, 4, 34], name("seeAlso")),
    (&[2, 5, 4, 35], name("userPassword")),
    (&[2, 5, 4, 36], name("userCertificate")),
    (&[2, 5, 4, 37], name("cACertificate")),
    (&[2, 5, 4, 38], name("authorityRevocationList")),
    (&[2, 5, 4, 39], name("certificateRevocationList")),
    (&[2, 5, 4, 40], name("crossCertificatePair")),
    (&[2, 5, 4, 41], name("name")),
    (&[2, 5, 4, 42], name("givenName")),
    (&[2, 5, 4, 43], name("initials")),
    (&[2, 5, 4, 44], name("generationQualifier")),
    (&[2, 5, 4, 45], name("x500UniqueIdentifier")),
    (&[2, 5, 4, 46], name("dnQualifier")),
    (&[2, 5, 4, 47], name("enhancedSearchGuide")),
    (&[2, 5, 4, 48], name("protocolInformation")),
    (&[2, 5, 4, 49], name("distinguishedName")),
    (&[2, 5, 4, 50], name("uniqueMember")),
    (&[2, 5, 4, 51], name("houseIdentifier")),
    (&[2, 5, 4, 52], name("supportedAlgorithms")),
    (&[2, 5, 4, 53], name("deltaRevocationList")),
    (&[2, 5, 4, 54], name("dmdName")),
    (&[2, 5, 4, 65], name("pseudonym")),
    (&[2, 5, 4, 72], name("role")),
    (&[2, 5, 5], name("[Attribute syntaxes]")),
    // X.521 object classes.
    (&[2, 5, 6], name("[Object classes]")),
    (&[2, 5, 6, 0], name("top")),
    (&[2, 5, 6, 1], name("alias")),
    (&[2, 5, 6, 2], name("country")),
    (&[2, 5, 6, 3], name("locality")),
    (&[2, 5, 6, 4], name("organization")),
    (&[2, 5, 6, 5], name("organizationalUnit")),
    (&[2, 5, 6, 6], name("person")),
    (&[2, 5, 6, 7], name("organizationalPerson")),
    (&[2, 5, 6, 8], name("organizationalRole")),
    (&[2, 5, 6, 9], name("groupOfNames")),
    (&[2, 5, 6, 10], name("residentialPerson")),
    (&[2, 5, 6, 11], name("applicationProcess")),
    (&[2, 5, 6, 12], name("applicationEntity")),
    (&[2, 5, 6, 13], name("dSA")),
    (&[2, 5, 6, 14], name("device")),
    (&[2, 5, 8], name("[Algorithms]")),
    (&[2, 5, 8, 1], name("[Encryption]")),
    (&[2, 5, 8, 1, 1], name("rsa")),
    // X.509 certificate extensions.
    (&[2, 5, 29], name("[Certificate extensions]")),
    (&[2, 5, 29, 9], name("subjectDirectoryAttributes")),
    (&[2, 5, 29, 14], name("subjectKeyIdentifier")),
    (&[2, 5, 29, 15], name("keyUsage")),
    (&[2, 5, 29, 16], name("privateKeyUsagePeriod")),
    (&[2, 5, 29, 17], name("subjectAltName")),
    (&[2, 5, 29, 18], name("issuerAltName")),
    (&[2, 5, 29, 19], name("basicConstraints")),
    (&[2, 5, 29, 20], name("cRLNumber")),
    (&[2, 5, 29, 21], name("reasonCode")),
    (&[2, 5, 29, 23], name("instructionCode")),
    (&[2, 5, 29, 24], name("invalidityDate")),
    (&[2, 5, 29, 27], name("deltaCRLIndicator")),
    (&[2, 5, 29, 28], name("issuingDistributionPoint")),
    (&[2, 5, 29, 29], name("certificateIssuer")),
    (&[2, 5, 29, 30], name("nameConstraints")),
    (&[2, 5, 29, 31], name("cRLDistributionPoints")),
    (&[2, 5, 29, 32], name("certificatePolicies")),
    (&[2, 5, 29, 32, 0], name("anyPolicy")),
    (&[2, 5, 29, 33], name("policyMappings")),
    (&[2, 5, 29, 35], name("authorityKeyIdentifier")),
    (&[2, 5, 29, 36], name("policyConstraints")),
    (&[2, 5, 29, 37], name("extKeyUsage")),
    (&[2, 5, 29, 37, 0], name("anyExtendedKeyUsage")),
    (&[2, 5, 29, 46], name("freshestCRL")),
    (&[2, 5, 29, 54], name("inhibitAnyPolicy")),
];
