use serde::{Deserialize, Serialize};

/// Report file written by every successful run, relative to the working directory.
pub const OUTPUT_FILE: &str = "SpreaderDetectorAnalysis.out";

/// Root configuration structure for spreader-detector
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpreaderConfig {
    /// Exposure model constants
    #[serde(default)]
    pub exposure: ExposureConfig,

    /// Risk tier thresholds
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

/// Parameters of the linear exposure model
/// `exposure = (duration * min_distance) / (distance * max_time)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExposureConfig {
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,

    #[serde(default = "default_max_time")]
    pub max_time: f64,

    /// Clamp propagated probabilities into [0, 1] after every update.
    #[serde(default)]
    pub clamp_probability: bool,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            min_distance: default_min_distance(),
            max_time: default_max_time(),
            clamp_probability: false,
        }
    }
}

/// Tier cut-offs: `p >= medical_supervision` needs medical supervision,
/// `regular_quarantine <= p < medical_supervision` needs quarantine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdsConfig {
    #[serde(default = "default_medical_supervision")]
    pub medical_supervision: f64,

    #[serde(default = "default_regular_quarantine")]
    pub regular_quarantine: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            medical_supervision: default_medical_supervision(),
            regular_quarantine: default_regular_quarantine(),
        }
    }
}

fn default_min_distance() -> f64 {
    1.0
}
fn default_max_time() -> f64 {
    20.0
}
fn default_medical_supervision() -> f64 {
    0.3
}
fn default_regular_quarantine() -> f64 {
    0.1
}
