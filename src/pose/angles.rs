//! Joint angle calculation using the arctangent difference
//!
//! The angle at a joint is the difference between the directions of the
//! two rays leaving it. Unlike the dot product / arccos form this never
//! feeds `acos` a value outside [-1, 1] and stays stable near 0° and 180°.

use serde::Serialize;

use super::landmarks::{
    PoseFrame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP,
    RIGHT_KNEE, RIGHT_SHOULDER,
};

/// Angle in degrees at vertex `b`, between rays b→a and b→c
///
/// Returns a value in [0°, 180°]. Coincident points give an arbitrary
/// (possibly NaN) result; classifiers treat such values as "not detected".
pub fn angle_at(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    let to_c = (c.1 - b.1).atan2(c.0 - b.0);
    let to_a = (a.1 - b.1).atan2(a.0 - b.0);

    let angle = (to_c - to_a).to_degrees().abs();
    let angle = if angle > 180.0 { 360.0 - angle } else { angle };

    // Rounding in to_degrees can push 2π a hair past 360°
    angle.clamp(0.0, 180.0)
}

/// Midpoint of two 2D points
pub fn midpoint(p: (f32, f32), q: (f32, f32)) -> (f32, f32) {
    ((p.0 + q.0) / 2.0, (p.1 + q.1) / 2.0)
}

/// The four joint angles one frame is judged on (degrees)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AngleSet {
    /// Hip → knee → ankle, left leg
    pub left_knee: f32,
    /// Hip → knee → ankle, right leg
    pub right_knee: f32,
    /// Shoulder midpoint → hip midpoint → left knee
    pub torso: f32,
    /// Left knee → hip midpoint → right knee
    pub leg_spread: f32,
}

impl AngleSet {
    pub fn new(left_knee: f32, right_knee: f32, torso: f32, leg_spread: f32) -> Self {
        Self { left_knee, right_knee, torso, leg_spread }
    }

    /// Compute all four angles from a detected pose
    pub fn from_frame(frame: &PoseFrame) -> Self {
        let lm = frame.landmarks();
        let point = |idx: usize| lm[idx].xy();

        let left_hip = point(LEFT_HIP);
        let right_hip = point(RIGHT_HIP);
        let left_knee = point(LEFT_KNEE);
        let right_knee = point(RIGHT_KNEE);

        let mid_hip = midpoint(left_hip, right_hip);
        let mid_shoulder = midpoint(point(LEFT_SHOULDER), point(RIGHT_SHOULDER));

        Self {
            left_knee: angle_at(left_hip, left_knee, point(LEFT_ANKLE)),
            right_knee: angle_at(right_hip, right_knee, point(RIGHT_ANKLE)),
            torso: angle_at(mid_shoulder, mid_hip, left_knee),
            leg_spread: angle_at(left_knee, mid_hip, right_knee),
        }
    }

    /// Flat [left_knee, right_knee, torso, leg_spread] for the JS side
    pub fn as_array(&self) -> [f32; 4] {
        [self.left_knee, self.right_knee, self.torso, self.leg_spread]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::Landmark;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_line() {
        let angle = angle_at((0.0, 0.0), (0.5, 0.0), (1.0, 0.0));
        assert_relative_eq!(angle, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at((0.0, 0.0), (0.5, 0.0), (0.5, 0.5));
        assert_relative_eq!(angle, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_folded_back() {
        let angle = angle_at((1.0, 0.0), (0.0, 0.0), (1.0, 0.0001));
        assert!(angle < 0.1);
    }

    #[test]
    fn test_reflex_difference_is_reflected() {
        // Raw direction difference is 270°, reported as 90°
        let angle = angle_at((0.0, -1.0), (0.0, 0.0), (-1.0, 0.0));
        assert_relative_eq!(angle, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_range_and_symmetry() {
        let coords = [-1.0_f32, -0.3, 0.0, 0.2, 0.9];
        let b = (0.05, -0.07);
        for &ax in &coords {
            for &ay in &coords {
                for &cx in &coords {
                    for &cy in &coords {
                        let a = (ax, ay);
                        let c = (cx, cy);
                        let forward = angle_at(a, b, c);
                        let backward = angle_at(c, b, a);
                        assert!((0.0..=180.0).contains(&forward), "{forward} out of range");
                        assert_relative_eq!(forward, backward, epsilon = 1e-3);
                    }
                }
            }
        }
    }

    #[test]
    fn test_coincident_points_do_not_panic() {
        let angle = angle_at((0.5, 0.5), (0.5, 0.5), (0.7, 0.5));
        assert!(angle.is_nan() || (0.0..=180.0).contains(&angle));
    }

    #[test]
    fn test_angle_set_from_frame() {
        // Upright stance: shoulders above hips, straight legs under the hips
        let frame = PoseFrame::default()
            .with_landmark(LEFT_SHOULDER, Landmark::new(0.45, 0.2))
            .with_landmark(RIGHT_SHOULDER, Landmark::new(0.55, 0.2))
            .with_landmark(LEFT_HIP, Landmark::new(0.45, 0.5))
            .with_landmark(RIGHT_HIP, Landmark::new(0.55, 0.5))
            .with_landmark(LEFT_KNEE, Landmark::new(0.45, 0.7))
            .with_landmark(RIGHT_KNEE, Landmark::new(0.55, 0.7))
            .with_landmark(LEFT_ANKLE, Landmark::new(0.45, 0.9))
            .with_landmark(RIGHT_ANKLE, Landmark::new(0.55, 0.9));

        let angles = AngleSet::from_frame(&frame);
        assert_relative_eq!(angles.left_knee, 180.0, epsilon = 1e-3);
        assert_relative_eq!(angles.right_knee, 180.0, epsilon = 1e-3);
        assert!(angles.torso > 160.0);
        assert!(angles.leg_spread < 40.0);
    }
}
