use std::fmt;

/// Order-independent identity of an unordered pair of contacts.
///
/// The two identifiers are stored in lexicographic order, so `(a, b)` and
/// `(b, a)` produce the same key. Keeping the identifiers apart (instead of
/// joining them into one string) means no separator can collide with an ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: String,
    high: String,
}

impl PairKey {
    pub fn new(left: &str, right: &str) -> Self {
        let (low, high) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    pub fn low(&self) -> &str {
        &self.low
    }

    pub fn high(&self) -> &str {
        &self.high
    }

    /// Both sides carry the same identifier.
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_argument_order() {
        assert_eq!(PairKey::new("a", "b"), PairKey::new("b", "a"));
        assert_eq!(PairKey::new("b", "a").low(), "a");
        assert_eq!(PairKey::new("b", "a").high(), "b");
    }

    #[test]
    fn key_does_not_collide_on_separator_characters() {
        assert_ne!(PairKey::new("a_b", "c"), PairKey::new("a", "b_c"));
        assert_ne!(PairKey::new("a|b", "c"), PairKey::new("a", "b|c"));
    }

    #[test]
    fn empty_ids_are_valid_keys() {
        let key = PairKey::new("", "7");
        assert_eq!(key.low(), "");
        assert!(!key.is_self_pair());
        assert!(PairKey::new("", "").is_self_pair());
    }
}
