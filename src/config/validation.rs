//! Validation with error accumulation for configuration.
//!
//! Every check runs even when an earlier one fails, so a user sees all
//! configuration problems in a single run.

use super::core::{ExposureConfig, SpreaderConfig, ThresholdsConfig};
use crate::core::{Error, Result};

/// Validate the entire config, accumulating ALL errors.
pub fn validate_config(config: &SpreaderConfig) -> Result<()> {
    let errors: Vec<String> = validate_exposure(&config.exposure)
        .into_iter()
        .chain(validate_thresholds(&config.thresholds))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Config { errors })
    }
}

fn validate_exposure(exposure: &ExposureConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if !(exposure.min_distance.is_finite() && exposure.min_distance > 0.0) {
        errors.push(format!(
            "exposure.min_distance must be a positive number (got: {})",
            exposure.min_distance
        ));
    }
    if !(exposure.max_time.is_finite() && exposure.max_time > 0.0) {
        errors.push(format!(
            "exposure.max_time must be a positive number (got: {})",
            exposure.max_time
        ));
    }
    errors
}

fn validate_thresholds(thresholds: &ThresholdsConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let high = thresholds.medical_supervision;
    let low = thresholds.regular_quarantine;

    if !high.is_finite() {
        errors.push(format!(
            "thresholds.medical_supervision must be finite (got: {})",
            high
        ));
    }
    if !low.is_finite() {
        errors.push(format!(
            "thresholds.regular_quarantine must be finite (got: {})",
            low
        ));
    }
    if high.is_finite() && low.is_finite() && low > high {
        errors.push(format!(
            "thresholds.regular_quarantine ({}) must not exceed thresholds.medical_supervision ({})",
            low, high
        ));
    }
    errors
}
