//! The arc scalar and dotted-notation parsing.
//!
//! An OID is an ordered sequence of non-negative integers ("arcs"). Binary
//! decoders hand us arcs directly; the CLI and other text surfaces go through
//! [`parse_dotted`]. Arcs wider than 64 bits (some UUID-derived OIDs under
//! `2.25`) cannot be represented and are rejected at parse time.

use std::num::IntErrorKind;

use crate::error::ArcParseError;

/// One component of an OID.
///
/// The registry and resolver operate on `&[ArcValue]` slices and never take
/// ownership of the input sequence.
pub type ArcValue = u64;

/// Parse dotted-decimal OID notation (`"1.2.840.113549"`) into an arc
/// sequence.
///
/// Accepts only ASCII decimal components separated by single dots. Rejects
/// empty input, empty components (`"1..2"`, leading or trailing dots),
/// non-digit characters, and components that overflow 64 bits.
///
/// # Examples
///
/// ```
/// use oidpath_types::parse_dotted;
///
/// assert_eq!(parse_dotted("2.5.4.3").unwrap(), vec![2, 5, 4, 3]);
/// assert!(parse_dotted("").is_err());
/// assert!(parse_dotted("1..2").is_err());
/// ```
pub fn parse_dotted(text: &str) -> Result<Vec<ArcValue>, ArcParseError> {
    if text.is_empty() {
        return Err(ArcParseError::Empty);
    }

    let mut arcs = Vec::new();
    for (index, component) in text.split('.').enumerate() {
        if component.is_empty() {
            return Err(ArcParseError::EmptyComponent { index });
        }
        if !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArcParseError::InvalidComponent {
                component: component.to_string(),
            });
        }
        match component.parse::<ArcValue>() {
            Ok(arc) => arcs.push(arc),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                return Err(ArcParseError::ArcTooLarge {
                    component: component.to_string(),
                });
            }
            Err(_) => {
                return Err(ArcParseError::InvalidComponent {
                    component: component.to_string(),
                });
            }
        }
    }

    Ok(arcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_arc() {
        assert_eq!(parse_dotted("0").unwrap(), vec![0]);
    }

    #[test]
    fn parse_typical_oid() {
        assert_eq!(
            parse_dotted("1.2.840.113549.1.1.11").unwrap(),
            vec![1, 2, 840, 113549, 1, 1, 11]
        );
    }

    #[test]
    fn parse_max_u64_arc() {
        let max = u64::MAX.to_string();
        assert_eq!(parse_dotted(&max).unwrap(), vec![u64::MAX]);
    }

    #[test]
    fn reject_empty_input() {
        assert!(matches!(parse_dotted(""), Err(ArcParseError::Empty)));
    }

    #[test]
    fn reject_empty_components() {
        assert!(matches!(
            parse_dotted("1..2"),
            Err(ArcParseError::EmptyComponent { index: 1 })
        ));
        assert!(matches!(
            parse_dotted(".1.2"),
            Err(ArcParseError::EmptyComponent { index: 0 })
        ));
        assert!(matches!(
            parse_dotted("1.2."),
            Err(ArcParseError::EmptyComponent { index: 2 })
        ));
    }

    #[test]
    fn reject_non_digits() {
        assert!(parse_dotted("1.2.x").is_err());
        assert!(parse_dotted("1,2").is_err());
        assert!(parse_dotted("1.-2").is_err());
        assert!(parse_dotted("1. 2").is_err());
        assert!(parse_dotted("1.+2").is_err());
    }

    #[test]
    fn reject_overflowing_arc() {
        // One past u64::MAX.
        assert!(matches!(
            parse_dotted("2.25.18446744073709551616"),
            Err(ArcParseError::ArcTooLarge { .. })
        ));
    }

    #[test]
    fn leading_zeros_are_accepted_as_decimal() {
        assert_eq!(parse_dotted("007").unwrap(), vec![7]);
    }
}
