//! Wheel configuration: outcome labels, hidden weights, segment colors, and
//! the spin feel parameters. Immutable once validated; every entry point
//! validates before the widget starts.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("wheel needs at least one outcome")]
    NoOutcomes,
    #[error("expected {expected} weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },
    #[error("outcome {0} has zero weight")]
    ZeroWeight(usize),
    #[error("wheel needs at least one segment color")]
    NoColors,
    #[error("extra-rotation range is empty")]
    BadRotationRange,
    #[error("spin duration range is empty or non-positive")]
    BadDurationRange,
}

/// Full widget configuration. The default instance is the classic 8-outcome
/// wheel with weights `[3, 1, 3, 2, 2, 1, 2, 2]` and the pointer straight up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WheelConfig {
    /// Display label per outcome; the index order is the sector order.
    pub labels: Vec<String>,
    /// Hidden draw weight per outcome. Never shown; sectors render equal-width.
    pub weights: Vec<u32>,
    /// Sector fill colors, cycled when fewer colors than outcomes.
    pub colors: Vec<String>,
    /// Pointer position in canvas radians; `-π/2` is straight up.
    pub pointer_angle: f64,
    pub min_extra_rotations: u32,
    pub max_extra_rotations: u32,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            labels: crate::DEFAULT_OUTCOMES
                .iter()
                .map(|(label, _)| (*label).to_string())
                .collect(),
            weights: crate::DEFAULT_OUTCOMES.iter().map(|(_, w)| *w).collect(),
            colors: crate::SEGMENT_COLORS
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            pointer_angle: -FRAC_PI_2,
            min_extra_rotations: 4,
            max_extra_rotations: 6,
            min_duration_ms: 2600.0,
            max_duration_ms: 3800.0,
        }
    }
}

impl WheelConfig {
    pub fn outcome_count(&self) -> usize {
        self.labels.len()
    }

    /// Check the invariants the selector and planner rely on: at least one
    /// outcome, strictly positive weights, matching vector lengths, and
    /// non-empty randomization ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::NoOutcomes);
        }
        if self.weights.len() != self.labels.len() {
            return Err(ConfigError::WeightCountMismatch {
                expected: self.labels.len(),
                got: self.weights.len(),
            });
        }
        if let Some(i) = self.weights.iter().position(|&w| w == 0) {
            return Err(ConfigError::ZeroWeight(i));
        }
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        if self.max_extra_rotations < self.min_extra_rotations {
            return Err(ConfigError::BadRotationRange);
        }
        if self.min_duration_ms <= 0.0 || self.max_duration_ms < self.min_duration_ms {
            return Err(ConfigError::BadDurationRange);
        }
        Ok(())
    }
}
