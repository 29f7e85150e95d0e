//! The resolution result record.

use serde::{Deserialize, Serialize};

/// The outcome of walking an arc sequence against a registry.
///
/// `path` is the slash-delimited pseudo-IRI accumulated while descending;
/// `consumed` is the number of input arcs the walk inspected. The formatter
/// uses `consumed` to decide how many trailing arcs still need to be
/// appended as raw decimal segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Slash-delimited path accumulated so far (may be empty).
    pub path: String,
    /// Number of input arcs consumed; always `<=` the input length.
    pub consumed: usize,
}

impl Resolution {
    /// Create a resolution result.
    pub fn new(path: impl Into<String>, consumed: usize) -> Self {
        Self {
            path: path.into(),
            consumed,
        }
    }

    /// Returns `true` if the walk consumed the entire input of `input_len`
    /// arcs, i.e. no raw trailing segments remain to be appended.
    pub fn fully_consumed(&self, input_len: usize) -> bool {
        self.consumed == input_len
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_consumed_compares_against_input_length() {
        let res = Resolution::new("/ITU-T", 1);
        assert!(res.fully_consumed(1));
        assert!(!res.fully_consumed(3));
    }

    #[test]
    fn display_is_the_path() {
        let res = Resolution::new("/ISO/Member-Body", 2);
        assert_eq!(res.to_string(), "/ISO/Member-Body");
    }

    #[test]
    fn serde_roundtrip() {
        let res = Resolution::new("/Joint-ISO-ITU-T", 1);
        let json = serde_json::to_string(&res).unwrap();
        let back: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(res, back);
    }
}
