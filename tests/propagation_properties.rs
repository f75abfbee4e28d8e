//! Property-based tests for propagation and reporting
//!
//! These tests verify invariants that should hold for all inputs:
//! - Sorted output is non-increasing in probability and stable on ties
//! - The last record naming an infected person decides their probability
//! - The report has exactly one line per roster entry
//! - The index case always ends at certainty

use proptest::prelude::*;
use spreader_detector::{
    propagate, run_streams, sort_descending, ContactStream, ExposureModel, Person, PersonRegistry,
    SpreaderConfig,
};
use std::io::Cursor;

fn registry_of(count: i64) -> PersonRegistry {
    let roster: String = (1..=count).map(|id| format!("P{} {} 40\n", id, id)).collect();
    PersonRegistry::load(Cursor::new(roster)).unwrap()
}

fn replay(registry: &mut PersonRegistry, log: &str) {
    let mut contacts = ContactStream::new(Cursor::new(log.as_bytes().to_vec()));
    propagate(registry, &mut contacts, &ExposureModel::default()).unwrap();
}

proptest! {
    #[test]
    fn prop_sort_is_non_increasing_and_stable(
        probabilities in prop::collection::vec(prop::sample::select(vec![0.0, 0.1, 0.25, 0.5, 1.0]), 0..40)
    ) {
        let mut people: Vec<Person> = probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut person = Person::new(format!("p{}", i), i as i64, 20.0);
                person.probability = p;
                person
            })
            .collect();

        sort_descending(&mut people);

        for pair in people.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
            if pair[0].probability == pair[1].probability {
                // ids were assigned in input order
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn prop_last_write_wins(
        earlier_durations in prop::collection::vec(0.0f64..40.0, 1..6),
        final_duration in 0.0f64..40.0,
        distance in 0.5f64..5.0,
    ) {
        let mut log = String::from("1\n");
        for duration in &earlier_durations {
            log.push_str(&format!("1 2 {} {}\n", distance, duration));
        }
        log.push_str(&format!("1 2 {} {}\n", distance, final_duration));

        let mut registry = registry_of(2);
        replay(&mut registry, &log);

        let mut expected_registry = registry_of(2);
        replay(&mut expected_registry, &format!("1\n1 2 {} {}\n", distance, final_duration));

        prop_assert_eq!(
            registry.find(2).unwrap().probability,
            expected_registry.find(2).unwrap().probability
        );
    }

    #[test]
    fn prop_report_has_one_line_per_person(
        count in 1i64..30,
        blank_every in 2usize..6,
    ) {
        let mut roster = String::new();
        for id in 1..=count {
            roster.push_str(&format!("Name{} {} 33\n", id, id));
            if (id as usize) % blank_every == 0 {
                roster.push('\n');
            }
        }
        let log = format!("1\n1 {} 2 3\n", count);

        let mut report = Vec::new();
        let summary = run_streams(
            Cursor::new(roster),
            Cursor::new(log),
            &mut report,
            &SpreaderConfig::default(),
        )
        .unwrap();

        let text = String::from_utf8(report).unwrap();
        prop_assert_eq!(text.lines().count(), count as usize);
        prop_assert_eq!(summary.people, count as usize);
    }

    #[test]
    fn prop_seed_is_certain_and_supervised(count in 1i64..20, seed_offset in 0i64..20) {
        let seed = 1 + seed_offset % count;
        let mut registry = registry_of(count);
        replay(&mut registry, &format!("{}\n", seed));

        prop_assert_eq!(registry.find(seed).unwrap().probability, 1.0);

        let classifier = spreader_detector::TierClassifier::default();
        prop_assert_eq!(
            classifier.classify(1.0),
            spreader_detector::RiskTier::MedicalSupervision
        );
    }
}
