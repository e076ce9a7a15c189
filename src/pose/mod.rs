//! Pose module - landmark parsing and joint geometry
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod landmarks;

pub use angles::{angle_at, midpoint, AngleSet};
pub use landmarks::{
    Landmark, PoseFrame,
    // Constants
    LANDMARK_COUNT, LEG_SKELETON,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};
