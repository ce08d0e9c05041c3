//! Property tests for the matching engine over generated contact sets.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use contact_match::{PairKey, match_contacts, score_pair};
use contact_model::{Contact, MAX_LEVEL};

fn field_value() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "J", "M", "John", "Jane", "Mark", "Mary", "Doe", "Dorn"])
        .prop_map(str::to_string)
}

fn contacts() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(
        (
            field_value(),
            field_value(),
            prop::sample::select(vec!["", "a@x.com", "b@x.com"]),
            prop::sample::select(vec!["", "1", "12345"]),
            prop::sample::select(vec!["", "1 St", "2 Ave"]),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (first, last, email, zip, address))| {
                Contact::new(format!("C{idx}"))
                    .with_first_name(first)
                    .with_last_name(last)
                    .with_email(email)
                    .with_zip_code(zip)
                    .with_address(address)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_pair_is_evaluated_exactly_once(contacts in contacts()) {
        let n = contacts.len();
        let report = match_contacts(&contacts);
        prop_assert_eq!(report.pairs_evaluated, n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn matches_are_symmetric_with_equal_levels(contacts in contacts()) {
        let report = match_contacts(&contacts);
        prop_assert_eq!(report.matches.len() % 2, 0);
        for pair in report.matches.chunks(2) {
            prop_assert_eq!(&pair[0].source_id, &pair[1].match_id);
            prop_assert_eq!(&pair[0].match_id, &pair[1].source_id);
            prop_assert_eq!(pair[0].accuracy_level, pair[1].accuracy_level);
            prop_assert!((1..=MAX_LEVEL).contains(&pair[0].accuracy_level));
        }
    }

    #[test]
    fn no_result_refers_to_itself(contacts in contacts()) {
        let report = match_contacts(&contacts);
        for result in &report.matches {
            prop_assert_ne!(&result.source_id, &result.match_id);
        }
        for pair in &report.duplicates {
            prop_assert_ne!(&pair.first.contact_id, &pair.second.contact_id);
        }
    }

    #[test]
    fn duplicates_never_appear_as_matches(contacts in contacts()) {
        let report = match_contacts(&contacts);
        let duplicate_keys: HashSet<PairKey> = report
            .duplicates
            .iter()
            .map(|pair| PairKey::new(&pair.first.contact_id, &pair.second.contact_id))
            .collect();
        for result in &report.matches {
            let key = PairKey::new(&result.source_id, &result.match_id);
            prop_assert!(!duplicate_keys.contains(&key));
        }
        for pair in &report.duplicates {
            prop_assert!(score_pair(&pair.first, &pair.second).is_duplicate());
        }
    }

    #[test]
    fn each_related_pair_appears_once(contacts in contacts()) {
        let report = match_contacts(&contacts);
        let mut counts: HashMap<PairKey, usize> = HashMap::new();
        for result in &report.matches {
            *counts.entry(PairKey::new(&result.source_id, &result.match_id)).or_insert(0) += 1;
        }
        for count in counts.values() {
            prop_assert_eq!(*count, 2);
        }
    }

    #[test]
    fn scoring_is_order_independent(contacts in contacts()) {
        for (i, a) in contacts.iter().enumerate() {
            for b in &contacts[i + 1..] {
                prop_assert_eq!(score_pair(a, b), score_pair(b, a));
            }
        }
    }
}
