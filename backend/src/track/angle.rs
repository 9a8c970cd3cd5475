use serde::Deserialize;

use crate::config::TrackerConfig;
use crate::track::zone::Band;

/// How an off-center target translates into a command value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Constant-magnitude nudge whenever the center leaves the dead zone.
    #[default]
    FixedStep,
    /// Estimated physical angle via `atan` over the sensor-plane offset,
    /// with its own angular dead zone.
    ContinuousAngle,
}

/// The two actuator axes. Their signs differ: the tilt servo is mounted
/// mirrored relative to the pan servo, so "target above center" means a
/// negative tilt command. Do not unify the sign handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pan,
    Tilt,
}

/// Converts a target center coordinate into a per-axis command value.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    policy: Policy,
    step: i32,
    pixels_per_cm: f32,
    reference_distance_cm: f32,
    min_angle_deg: f32,
}

impl Converter {
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            policy: config.policy,
            step: config.step,
            pixels_per_cm: config.pixels_per_cm,
            reference_distance_cm: config.reference_distance_cm,
            min_angle_deg: config.min_angle_deg,
        }
    }

    pub fn correction(&self, axis: Axis, center: f32, band: &Band, frame_center: f32) -> i32 {
        match self.policy {
            Policy::FixedStep => self.fixed_step(axis, center, band),
            Policy::ContinuousAngle => self.continuous(axis, center, frame_center),
        }
    }

    fn fixed_step(&self, axis: Axis, center: f32, band: &Band) -> i32 {
        if band.contains(center) {
            0
        } else if center < band.lower {
            match axis {
                Axis::Pan => self.step,
                Axis::Tilt => -self.step,
            }
        } else if center > band.upper {
            match axis {
                Axis::Pan => -self.step,
                Axis::Tilt => self.step,
            }
        } else {
            // exactly on a band edge: no branch fires, hold position
            0
        }
    }

    fn continuous(&self, axis: Axis, center: f32, frame_center: f32) -> i32 {
        let offset_px = frame_center - center;
        let offset_cm = offset_px / self.pixels_per_cm;
        let degrees = (offset_cm / self.reference_distance_cm).atan().to_degrees();
        let degrees = match axis {
            Axis::Pan => degrees,
            Axis::Tilt => -degrees,
        };
        if degrees.abs() < self.min_angle_deg {
            0
        } else {
            // truncation toward zero, matching the servo calibration
            degrees as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(step: i32) -> Converter {
        Converter::from_config(&TrackerConfig {
            policy: Policy::FixedStep,
            step,
            ..TrackerConfig::default()
        })
    }

    fn continuous(min_angle_deg: f32) -> Converter {
        Converter::from_config(&TrackerConfig {
            policy: Policy::ContinuousAngle,
            min_angle_deg,
            ..TrackerConfig::default()
        })
    }

    fn band() -> Band {
        Band::around(320.0, 50.0)
    }

    #[test]
    fn fixed_step_sign_table() {
        let converter = fixed(10);
        // target left of / above the band
        assert_eq!(converter.correction(Axis::Pan, 230.0, &band(), 320.0), 10);
        assert_eq!(converter.correction(Axis::Tilt, 230.0, &band(), 320.0), -10);
        // target right of / below the band
        assert_eq!(converter.correction(Axis::Pan, 400.0, &band(), 320.0), -10);
        assert_eq!(converter.correction(Axis::Tilt, 400.0, &band(), 320.0), 10);
    }

    #[test]
    fn fixed_step_holds_inside_band() {
        let converter = fixed(10);
        assert_eq!(converter.correction(Axis::Pan, 320.0, &band(), 320.0), 0);
        assert_eq!(converter.correction(Axis::Tilt, 271.0, &band(), 320.0), 0);
    }

    #[test]
    fn fixed_step_holds_on_exact_boundary() {
        let converter = fixed(10);
        for axis in [Axis::Pan, Axis::Tilt] {
            assert_eq!(converter.correction(axis, 270.0, &band(), 320.0), 0);
            assert_eq!(converter.correction(axis, 370.0, &band(), 320.0), 0);
        }
    }

    #[test]
    fn continuous_zero_offset_is_zero() {
        // zero offset means zero degrees, whatever the threshold
        for threshold in [0.0, 1.0, 45.0] {
            let converter = continuous(threshold);
            assert_eq!(converter.correction(Axis::Pan, 320.0, &band(), 320.0), 0);
        }
    }

    #[test]
    fn continuous_magnitude_grows_with_offset() {
        let converter = continuous(0.0);
        let mut last = 0;
        for center in [300.0, 220.0, 120.0, 20.0] {
            let correction = converter.correction(Axis::Pan, center, &band(), 320.0);
            assert!(correction >= last);
            last = correction;
        }
        assert!(last > 0);
    }

    #[test]
    fn continuous_truncates_toward_zero() {
        // offset 90 px at the defaults: atan(90/38/100) ~ 1.36 degrees
        let converter = continuous(1.0);
        assert_eq!(converter.correction(Axis::Pan, 230.0, &band(), 320.0), 1);
        assert_eq!(converter.correction(Axis::Pan, 410.0, &band(), 320.0), -1);
    }

    #[test]
    fn continuous_tilt_sign_is_negated() {
        let converter = continuous(0.5);
        let pan = converter.correction(Axis::Pan, 200.0, &band(), 320.0);
        let tilt = converter.correction(Axis::Tilt, 200.0, &band(), 320.0);
        assert!(pan > 0);
        assert_eq!(tilt, -pan);
    }

    #[test]
    fn continuous_threshold_suppresses_small_angles() {
        // offset 60 px ~ 0.9 degrees, below a 1 degree threshold
        let converter = continuous(1.0);
        assert_eq!(converter.correction(Axis::Tilt, 180.0, &band(), 240.0), 0);
    }
}
