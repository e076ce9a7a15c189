//! Sit-up phase machine
//!
//! Idle → Lying → Sitting → Completed, then back to Idle after a delay
//! owned by the session. This function only computes one step; it never
//! touches session state itself.

use serde::Serialize;

use super::feedback::SitUpCue;
use crate::config::SitUpThresholds;

/// Discrete stage of the sit-up motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ExercisePhase {
    #[default]
    Idle,
    Lying,
    Sitting,
    Completed,
}

impl ExercisePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExercisePhase::Idle => "idle",
            ExercisePhase::Lying => "lying",
            ExercisePhase::Sitting => "sitting",
            ExercisePhase::Completed => "completed",
        }
    }
}

/// Result of feeding one frame to the phase machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SitUpStep {
    pub cue: SitUpCue,
    pub next_phase: ExercisePhase,
}

impl SitUpStep {
    /// This frame finished a repetition
    pub fn completed_rep(&self) -> bool {
        self.cue == SitUpCue::DetectedCorrect
    }
}

/// Advance the sit-up phase by one frame
///
/// Bent knees (both below the limit) enable every transition. Without
/// them the phase is held, so a single off-angle frame never regresses it.
pub fn classify_sit_up(
    left_knee: f32,
    right_knee: f32,
    torso: f32,
    phase: ExercisePhase,
    thresholds: &SitUpThresholds,
) -> SitUpStep {
    let t = thresholds;
    let knees_bent = left_knee < t.knee_bent_max && right_knee < t.knee_bent_max;

    if !knees_bent {
        return SitUpStep { cue: SitUpCue::KeepGoing, next_phase: phase };
    }

    let lying = torso > t.lying_torso_min;
    let sitting = torso < t.sitting_torso_max;

    let next_phase = match phase {
        ExercisePhase::Idle | ExercisePhase::Completed if lying => ExercisePhase::Lying,
        ExercisePhase::Lying if sitting => ExercisePhase::Sitting,
        ExercisePhase::Sitting if lying => ExercisePhase::Completed,
        held => held,
    };

    let cue = match next_phase {
        ExercisePhase::Completed if phase == ExercisePhase::Sitting => SitUpCue::DetectedCorrect,
        ExercisePhase::Completed => SitUpCue::KeepGoing,
        ExercisePhase::Idle => SitUpCue::StartLyingDown,
        ExercisePhase::Lying => SitUpCue::LyingDetected,
        ExercisePhase::Sitting => SitUpCue::SittingDetected,
    };

    SitUpStep { cue, next_phase }
}
