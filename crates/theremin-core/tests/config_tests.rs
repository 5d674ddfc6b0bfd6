use std::time::Duration;
use theremin_core::*;

#[test]
fn defaults_are_valid() {
    assert_eq!(ThereminConfig::default().validate(), Ok(()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(FREQ_MIN_HZ > 0.0 && FREQ_MIN_HZ < FREQ_MAX_HZ);
    assert!(OSC_START_HZ >= FREQ_MIN_HZ && OSC_START_HZ <= FREQ_MAX_HZ);
    assert!(OSC_GAIN > 0.0 && OSC_GAIN <= 1.0);
    assert!(CALIBRATION_SCATTER_PX > 0.0);
    assert!(TARGET_SPEED_PX_PER_MS > 0.0);
    assert!(GLIDE_SEC > 0.0);
}

#[test]
fn grid_grows_to_cover_required_count() {
    let grid = |n| {
        CalibrationConfig {
            required_count: n,
            ..Default::default()
        }
        .grid_size()
    };
    assert_eq!(grid(1), 1);
    assert_eq!(grid(4), 2);
    assert_eq!(grid(5), 3);
    assert_eq!(grid(9), 3);
    assert_eq!(grid(10), 4);
    assert_eq!(CalibrationConfig::default().grid_size(), 3);
}

#[test]
fn zero_points_is_rejected() {
    let cfg = CalibrationConfig {
        required_count: 0,
        ..Default::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::NoCalibrationPoints));
}

#[test]
fn negative_or_nan_lengths_are_rejected() {
    let cfg = CalibrationConfig {
        padding: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Negative { name: "padding", .. })
    ));

    let anim = AnimatorConfig {
        speed_px_per_ms: f32::NAN,
    };
    assert!(anim.validate().is_err());
}

#[test]
fn inverted_band_is_rejected_with_readable_message() {
    let cfg = FusionConfig {
        min_hz: 1000.0,
        max_hz: 20.0,
        ..Default::default()
    };
    let err = cfg.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvertedBand {
            min_hz: 1000.0,
            max_hz: 20.0
        }
    );
    assert_eq!(
        err.to_string(),
        "frequency band is inverted: 1000 Hz > 20 Hz"
    );
}

#[test]
fn default_glide_is_one_second() {
    assert_eq!(FusionConfig::default().glide, Duration::from_secs(1));
}

#[test]
fn oversized_point_counts_are_rejected() {
    let with = |n| CalibrationConfig {
        required_count: n,
        ..Default::default()
    };
    assert_eq!(with(MAX_CALIBRATION_POINTS).validate(), Ok(()));
    for n in [MAX_CALIBRATION_POINTS + 1, 1usize << 40, usize::MAX] {
        assert_eq!(
            with(n).validate(),
            Err(ConfigError::TooManyPoints {
                count: n,
                max: MAX_CALIBRATION_POINTS
            })
        );
    }
}

#[test]
fn grid_size_survives_huge_counts() {
    let grid = |n| {
        CalibrationConfig {
            required_count: n,
            ..Default::default()
        }
        .grid_size()
    };
    assert_eq!(grid(MAX_CALIBRATION_POINTS), 10);
    assert_eq!(grid(1usize << 40), 1usize << 20);
    assert_eq!(grid((1usize << 40) + 1), (1usize << 20) + 1);
    assert_eq!(grid(usize::MAX), 1usize << (usize::BITS / 2));
    assert_eq!(grid(0), 1);
}
