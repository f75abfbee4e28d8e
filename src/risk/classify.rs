use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::ThresholdsConfig;
use crate::core::Person;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    MedicalSupervision, // p >= medical_supervision
    RegularQuarantine,  // regular_quarantine <= p < medical_supervision
    Clean,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierClassifier {
    pub medical_supervision: f64,
    pub regular_quarantine: f64,
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::from(&ThresholdsConfig::default())
    }
}

impl From<&ThresholdsConfig> for TierClassifier {
    fn from(thresholds: &ThresholdsConfig) -> Self {
        Self {
            medical_supervision: thresholds.medical_supervision,
            regular_quarantine: thresholds.regular_quarantine,
        }
    }
}

impl TierClassifier {
    pub fn classify(&self, probability: f64) -> RiskTier {
        if probability >= self.medical_supervision {
            RiskTier::MedicalSupervision
        } else if probability >= self.regular_quarantine {
            RiskTier::RegularQuarantine
        } else {
            RiskTier::Clean
        }
    }
}

/// Order by probability, highest first, NaN last. Stable: equal
/// probabilities keep their incoming relative order.
pub fn sort_descending(people: &mut [Person]) {
    people.sort_by(compare_by_probability);
}

// NaN ranks below every number so the order stays total.
fn compare_by_probability(a: &Person, b: &Person) -> Ordering {
    match (a.probability.is_nan(), b.probability.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b
            .probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal),
    }
}

/// Per-tier head count of a classified roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    pub medical_supervision_count: usize,
    pub regular_quarantine_count: usize,
    pub clean_count: usize,
    pub total_people: usize,
}

impl TierDistribution {
    pub fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::MedicalSupervision => self.medical_supervision_count += 1,
            RiskTier::RegularQuarantine => self.regular_quarantine_count += 1,
            RiskTier::Clean => self.clean_count += 1,
        }
        self.total_people += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, probability: f64) -> Person {
        let mut p = Person::new(format!("p{}", id), id, 30.0);
        p.probability = probability;
        p
    }

    fn classifier() -> TierClassifier {
        TierClassifier {
            medical_supervision: 0.95,
            regular_quarantine: 0.05,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let c = classifier();
        assert_eq!(c.classify(1.0), RiskTier::MedicalSupervision);
        assert_eq!(c.classify(0.95), RiskTier::MedicalSupervision);
        assert_eq!(c.classify(16.0), RiskTier::MedicalSupervision);
        assert_eq!(c.classify(0.94), RiskTier::RegularQuarantine);
        assert_eq!(c.classify(0.05), RiskTier::RegularQuarantine);
        assert_eq!(c.classify(0.049), RiskTier::Clean);
        assert_eq!(c.classify(0.0), RiskTier::Clean);
    }

    #[test]
    fn test_classify_nan_is_clean() {
        assert_eq!(classifier().classify(f64::NAN), RiskTier::Clean);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut people = vec![
            person(1, 0.1),
            person(2, 0.5),
            person(3, 0.1),
            person(4, 1.0),
            person(5, 0.5),
        ];
        sort_descending(&mut people);
        let ids: Vec<_> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_nan_sorts_last_without_disturbing_finite_order() {
        let mut people: Vec<_> = (0..300)
            .map(|id| {
                let probability = if id % 3 == 0 {
                    f64::NAN
                } else {
                    ((id * 37) % 101) as f64 / 100.0
                };
                person(id, probability)
            })
            .collect();

        sort_descending(&mut people);

        let first_nan = people
            .iter()
            .position(|p| p.probability.is_nan())
            .unwrap();
        assert_eq!(first_nan, 200);
        assert!(people[first_nan..].iter().all(|p| p.probability.is_nan()));
        for pair in people[..first_nan].windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        // NaN entries keep their input order too
        let nan_ids: Vec<_> = people[first_nan..].iter().map(|p| p.id).collect();
        assert_eq!(nan_ids, (0..300).step_by(3).collect::<Vec<_>>());
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let mut people = vec![person(1, -0.0), person(2, 0.0), person(3, 0.5)];
        sort_descending(&mut people);
        let ids: Vec<_> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_all_zero_keeps_roster_order() {
        let mut people: Vec<_> = (10..20).rev().map(|id| person(id, 0.0)).collect();
        sort_descending(&mut people);
        let ids: Vec<_> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, (10..20).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_distribution_counts() {
        let c = classifier();
        let mut distribution = TierDistribution::default();
        for p in [1.0, 0.5, 0.5, 0.0] {
            distribution.record(c.classify(p));
        }
        assert_eq!(distribution.medical_supervision_count, 1);
        assert_eq!(distribution.regular_quarantine_count, 2);
        assert_eq!(distribution.clean_count, 1);
        assert_eq!(distribution.total_people, 4);
    }
}
