//! Field-level scoring of a contact pair.
//!
//! A pair earns one point for every comparable field the two contacts share
//! exactly. Values of one byte or less never score, so empty cells and bare
//! ASCII initials cannot make two records look alike. Lengths are UTF-8 byte
//! lengths: a single non-ASCII character such as `王` is long enough to score.
//!
//! When a pair is not an exact duplicate, differing name fields that start with
//! the same byte earn an initial bonus. The bonus is worth half a point
//! when nothing else matched and a full point otherwise. Scores are kept in
//! half points and truncated to whole levels at the end, so a lone half point
//! is dropped while two halves add up to one level.

use contact_model::{Contact, ContactField, MAX_LEVEL};

/// Half points awarded for a shared initial when no field matched.
const WEAK_INITIAL_BONUS: u8 = 1;
/// Half points awarded for a shared initial once any field matched.
const STRONG_INITIAL_BONUS: u8 = 2;

/// Score of a single pair evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairScore {
    /// Number of exactly equal, non-trivial fields (0 to 5).
    pub base: u8,
    /// Initial bonus in half points.
    pub bonus_halves: u8,
}

impl PairScore {
    /// Every comparable field matched.
    pub fn is_duplicate(&self) -> bool {
        self.base == MAX_LEVEL
    }

    /// Whole accuracy level after truncating fractional bonus.
    pub fn level(&self) -> u8 {
        self.base + self.bonus_halves / 2
    }
}

/// Score two contacts.
///
/// The initial bonus is only computed for pairs below the duplicate threshold.
pub fn score_pair(a: &Contact, b: &Contact) -> PairScore {
    let base = ContactField::ALL
        .iter()
        .filter(|&&field| fields_match(a.field(field), b.field(field)))
        .count() as u8;

    if base == MAX_LEVEL {
        return PairScore {
            base,
            bonus_halves: 0,
        };
    }

    let increment = if base == 0 {
        WEAK_INITIAL_BONUS
    } else {
        STRONG_INITIAL_BONUS
    };
    let bonus_halves = ContactField::ALL
        .iter()
        .filter(|field| field.is_name())
        .filter(|&&field| share_initial(a.field(field), b.field(field)))
        .map(|_| increment)
        .sum();

    PairScore { base, bonus_halves }
}

/// Exact, case-sensitive equality of two values longer than one byte.
pub fn fields_match(left: &str, right: &str) -> bool {
    is_significant(left) && is_significant(right) && left == right
}

/// Differing, non-empty values whose first bytes are equal.
pub fn share_initial(left: &str, right: &str) -> bool {
    if left == right {
        return false;
    }
    match (left.as_bytes().first(), right.as_bytes().first()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn is_significant(value: &str) -> bool {
    value.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, first: &str, last: &str) -> Contact {
        Contact::new(id).with_first_name(first).with_last_name(last)
    }

    #[test]
    fn single_character_values_never_match() {
        assert!(!fields_match("J", "J"));
        assert!(!fields_match("", ""));
        assert!(fields_match("Jo", "Jo"));
        assert!(!fields_match("Jo", "jo"));
    }

    #[test]
    fn multibyte_single_character_is_significant() {
        assert!(fields_match("é", "é"));
        assert!(fields_match("王", "王"));
        assert!(!fields_match("王", "李"));
    }

    #[test]
    fn initials_compare_first_bytes() {
        // U+00E9 and U+00E8 share the lead byte 0xC3.
        assert!(share_initial("éa", "èb"));
        assert!(!share_initial("王伟", "李伟"));
    }

    #[test]
    fn share_initial_requires_different_non_empty_values() {
        assert!(share_initial("Mark", "Mary"));
        assert!(!share_initial("Mark", "Mark"));
        assert!(!share_initial("", "Mary"));
        assert!(!share_initial("Mark", "mary"));
        assert!(share_initial("J", "John"));
    }

    #[test]
    fn weak_bonus_alone_truncates_to_zero() {
        let score = score_pair(&person("1", "Mark", "Smith"), &person("2", "Mary", "Jones"));
        assert_eq!(score, PairScore { base: 0, bonus_halves: 1 });
        assert_eq!(score.level(), 0);
    }

    #[test]
    fn two_weak_bonuses_make_one_level() {
        let score = score_pair(&person("1", "Mark", "Smith"), &person("2", "Mary", "Stone"));
        assert_eq!(score, PairScore { base: 0, bonus_halves: 2 });
        assert_eq!(score.level(), 1);
    }

    #[test]
    fn strong_bonus_applies_once_a_field_matched() {
        let score = score_pair(&person("1", "John", "Doe"), &person("2", "Jane", "Doe"));
        assert_eq!(score, PairScore { base: 1, bonus_halves: 2 });
        assert_eq!(score.level(), 2);
    }

    #[test]
    fn equal_single_letter_names_earn_neither_base_nor_bonus() {
        let score = score_pair(&person("1", "J", "Doe"), &person("2", "J", "Doe"));
        // Equal first names are excluded from the bonus even when too short to score.
        assert_eq!(score, PairScore { base: 1, bonus_halves: 0 });
    }
}
