//! Lunge check - stateless, every frame judged on its own

use super::feedback::LungeVerdict;
use crate::config::LungeThresholds;

/// Open-interval band test; NaN is never inside
fn within(value: f32, min: f32, max: f32) -> bool {
    value > min && value < max
}

/// Judge one frame of a lunge
///
/// Both knees inside the knee band means a lunge stance is held; the leg
/// spread then decides whether the legs are open far enough.
pub fn classify_lunge(
    left_knee: f32,
    right_knee: f32,
    leg_spread: f32,
    thresholds: &LungeThresholds,
) -> LungeVerdict {
    let t = thresholds;
    let stance = within(left_knee, t.knee_min, t.knee_max)
        && within(right_knee, t.knee_min, t.knee_max);

    if !stance {
        return LungeVerdict::IncorrectOrAbsent;
    }

    if within(leg_spread, t.spread_min, t.spread_max) {
        LungeVerdict::DetectedCorrect
    } else {
        LungeVerdict::DetectedLegsNotOpen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(l: f32, r: f32, spread: f32) -> LungeVerdict {
        classify_lunge(l, r, spread, &LungeThresholds::default())
    }

    #[test]
    fn test_correct_lunge() {
        assert_eq!(classify(95.0, 95.0, 95.0), LungeVerdict::DetectedCorrect);
    }

    #[test]
    fn test_legs_not_open() {
        assert_eq!(classify(95.0, 95.0, 50.0), LungeVerdict::DetectedLegsNotOpen);
    }

    #[test]
    fn test_knees_out_of_band() {
        assert_eq!(classify(50.0, 50.0, 95.0), LungeVerdict::IncorrectOrAbsent);
        assert_eq!(classify(95.0, 150.0, 95.0), LungeVerdict::IncorrectOrAbsent);
    }

    #[test]
    fn test_band_edges_are_open() {
        assert_eq!(classify(80.0, 95.0, 95.0), LungeVerdict::IncorrectOrAbsent);
        assert_eq!(classify(95.0, 110.0, 95.0), LungeVerdict::IncorrectOrAbsent);
        assert_eq!(classify(95.0, 95.0, 110.0), LungeVerdict::DetectedLegsNotOpen);
    }

    #[test]
    fn test_nan_is_not_detected() {
        assert_eq!(classify(f32::NAN, 95.0, 95.0), LungeVerdict::IncorrectOrAbsent);
        assert_eq!(classify(95.0, 95.0, f32::NAN), LungeVerdict::DetectedLegsNotOpen);
    }
}
