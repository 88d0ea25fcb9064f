// Validation tests for wheel configuration.

use fortune_wheel::wheel::config::{ConfigError, WheelConfig};

#[test]
fn default_config_is_valid() {
    WheelConfig::default().validate().expect("default must validate");
}

#[test]
fn default_config_matches_wheel_data() {
    let config = WheelConfig::default();
    assert_eq!(config.outcome_count(), fortune_wheel::DEFAULT_OUTCOMES.len());
    assert_eq!(config.weights, vec![3, 1, 3, 2, 2, 1, 2, 2]);
    assert_eq!(config.colors.len(), fortune_wheel::SEGMENT_COLORS.len());
}

#[test]
fn empty_outcomes_rejected() {
    let mut config = WheelConfig::default();
    config.labels.clear();
    config.weights.clear();
    assert_eq!(config.validate(), Err(ConfigError::NoOutcomes));
}

#[test]
fn weight_count_mismatch_rejected() {
    let mut config = WheelConfig::default();
    config.weights.pop();
    assert_eq!(
        config.validate(),
        Err(ConfigError::WeightCountMismatch { expected: 8, got: 7 })
    );
}

#[test]
fn zero_weight_rejected() {
    let mut config = WheelConfig::default();
    config.weights[3] = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroWeight(3)));
}

#[test]
fn missing_colors_rejected() {
    let mut config = WheelConfig::default();
    config.colors.clear();
    assert_eq!(config.validate(), Err(ConfigError::NoColors));
}

#[test]
fn inverted_rotation_range_rejected() {
    let mut config = WheelConfig::default();
    config.min_extra_rotations = 6;
    config.max_extra_rotations = 4;
    assert_eq!(config.validate(), Err(ConfigError::BadRotationRange));
}

#[test]
fn inverted_duration_range_rejected() {
    let mut config = WheelConfig::default();
    config.min_duration_ms = 4000.0;
    config.max_duration_ms = 3000.0;
    assert_eq!(config.validate(), Err(ConfigError::BadDurationRange));
}

#[test]
fn zero_duration_rejected() {
    let mut config = WheelConfig::default();
    config.min_duration_ms = 0.0;
    assert_eq!(config.validate(), Err(ConfigError::BadDurationRange));
}

#[test]
fn equal_range_bounds_are_valid() {
    // A fixed rotation count and fixed duration are legitimate configs.
    let mut config = WheelConfig::default();
    config.min_extra_rotations = 5;
    config.max_extra_rotations = 5;
    config.min_duration_ms = 3000.0;
    config.max_duration_ms = 3000.0;
    config.validate().expect("degenerate ranges are allowed");
}
