use crate::config::ExposureConfig;

/// Fixed-parameter linear exposure model.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureModel {
    pub min_distance: f64,
    pub max_time: f64,
    pub clamp_probability: bool,
}

impl Default for ExposureModel {
    fn default() -> Self {
        Self::from(&ExposureConfig::default())
    }
}

impl From<&ExposureConfig> for ExposureModel {
    fn from(config: &ExposureConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_time: config.max_time,
            clamp_probability: config.clamp_probability,
        }
    }
}

impl ExposureModel {
    /// Probability multiplier for one contact: `(duration * min_distance) / (distance * max_time)`.
    pub fn exposure(&self, distance: f64, duration: f64) -> f64 {
        (duration * self.min_distance) / (distance * self.max_time)
    }

    /// Probability handed to the infected party by an infector at `infector_probability`.
    pub fn transmit(&self, infector_probability: f64, distance: f64, duration: f64) -> f64 {
        let probability = infector_probability * self.exposure(distance, duration);
        if self.clamp_probability {
            probability.clamp(0.0, 1.0)
        } else {
            probability
        }
    }
}
