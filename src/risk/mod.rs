pub mod classify;
pub mod exposure;
pub mod propagation;

pub use classify::{sort_descending, RiskTier, TierClassifier, TierDistribution};
pub use exposure::ExposureModel;
pub use propagation::{propagate, PropagationEngine, PropagationStats, SEED_PROBABILITY};
