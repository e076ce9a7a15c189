//! Landmark indices and per-frame landmark storage
//!
//! Parses the flat Float32Array that the page hands over from MediaPipe
//! Pose into a fixed 33-point frame.

use crate::error::{FormError, Result};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Skeleton connections for the torso and legs (pairs of landmark indices)
pub const LEG_SKELETON: [(usize, usize); 8] = [
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
];

/// Floats per landmark without visibility (x, y, z)
const STRIDE_XYZ: usize = 3;

/// Floats per landmark with visibility (x, y, z, visibility)
const STRIDE_XYZV: usize = 4;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single detected keypoint (normalized image coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, visibility: 1.0 }
    }

    /// 2D position used by the angle math
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// All 33 landmarks of one detected pose
#[derive(Clone, Debug, PartialEq)]
pub struct PoseFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl PoseFrame {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse a flat landmark array.
    ///
    /// Accepts 99 floats (x, y, z) or 132 floats (x, y, z, visibility).
    /// An empty slice is the estimator's "no pose" signal and yields `None`.
    pub fn from_flat(data: &[f32]) -> Result<Option<Self>> {
        let stride = match data.len() {
            0 => return Ok(None),
            n if n == LANDMARK_COUNT * STRIDE_XYZ => STRIDE_XYZ,
            n if n == LANDMARK_COUNT * STRIDE_XYZV => STRIDE_XYZV,
            got => return Err(FormError::LandmarkCount { got }),
        };

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (slot, chunk) in landmarks.iter_mut().zip(data.chunks_exact(stride)) {
            *slot = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: if stride == STRIDE_XYZV { chunk[3] } else { 1.0 },
            };
        }

        Ok(Some(Self { landmarks }))
    }

    /// Get a landmark by MediaPipe index
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Replace one landmark (used to build synthetic poses)
    pub fn with_landmark(mut self, index: usize, landmark: Landmark) -> Self {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = landmark;
        }
        self
    }
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self::new([Landmark::default(); LANDMARK_COUNT])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_is_no_pose() {
        assert!(PoseFrame::from_flat(&[]).unwrap().is_none());
    }

    #[test]
    fn test_xyz_layout() {
        let mut data = vec![0.0; 99];
        data[LEFT_KNEE * 3] = 0.4;
        data[LEFT_KNEE * 3 + 1] = 0.7;
        let frame = PoseFrame::from_flat(&data).unwrap().unwrap();
        let knee = frame.get(LEFT_KNEE).unwrap();
        assert_eq!(knee.xy(), (0.4, 0.7));
        assert_eq!(knee.visibility, 1.0);
    }

    #[test]
    fn test_xyzv_layout() {
        let mut data = vec![0.0; 132];
        data[RIGHT_ANKLE * 4] = 0.25;
        data[RIGHT_ANKLE * 4 + 3] = 0.3;
        let frame = PoseFrame::from_flat(&data).unwrap().unwrap();
        let ankle = frame.get(RIGHT_ANKLE).unwrap();
        assert_eq!(ankle.x, 0.25);
        assert_eq!(ankle.visibility, 0.3);
    }

    #[test]
    fn test_bad_length_rejected() {
        let err = PoseFrame::from_flat(&[0.0; 50]).unwrap_err();
        assert!(matches!(err, FormError::LandmarkCount { got: 50 }));
    }
}
