//! Frame orchestration - one pose estimator result in, one judgment out
//!
//! Geometry → classifier → session update → log record. No rate limiting;
//! the page's frame loop decides how often this runs.

use chrono::{DateTime, Utc};

use crate::classifier::{classify_lunge, classify_sit_up, Feedback};
use crate::error::{FormError, Result};
use crate::pose::{AngleSet, PoseFrame};
use crate::session::{Exercise, LogRecord, Session};

/// What one frame produced
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Estimator found nobody; nothing was logged
    NoPose,
    Pose { feedback: Feedback, angles: AngleSet },
}

impl FrameOutcome {
    pub fn feedback(&self) -> Feedback {
        match self {
            FrameOutcome::NoPose => Feedback::NoPose,
            FrameOutcome::Pose { feedback, .. } => *feedback,
        }
    }

    pub fn angles(&self) -> Option<AngleSet> {
        match self {
            FrameOutcome::NoPose => None,
            FrameOutcome::Pose { angles, .. } => Some(*angles),
        }
    }

    /// Status line shown under the video
    pub fn display_text(&self) -> String {
        match self {
            FrameOutcome::NoPose => Feedback::NoPose.as_str().to_string(),
            FrameOutcome::Pose { feedback, angles } => format!(
                "Left Knee: {:.1}°, Right Knee: {:.1}°, Torso: {:.1}°, Leg: {:.1}° - {}",
                angles.left_knee,
                angles.right_knee,
                angles.torso,
                angles.leg_spread,
                feedback.as_str(),
            ),
        }
    }
}

/// Process one pose estimator result
///
/// `frame` is `None` when the estimator reported no landmarks. `now` stamps
/// the log record and drives the delayed sit-up reset.
pub fn process_frame(
    session: &mut Session,
    frame: Option<&PoseFrame>,
    now: DateTime<Utc>,
) -> Result<FrameOutcome> {
    if let Some(reason) = session.live_source_error() {
        return Err(FormError::SourceUnavailable(reason.to_string()));
    }

    session.fire_due_reset(now);

    let Some(frame) = frame else {
        session.tracking_lost();
        return Ok(FrameOutcome::NoPose);
    };

    let angles = AngleSet::from_frame(frame);
    let exercise = session.exercise();

    let feedback = match exercise {
        Exercise::Lunge => Feedback::Lunge(classify_lunge(
            angles.left_knee,
            angles.right_knee,
            angles.leg_spread,
            &session.config().lunge,
        )),
        Exercise::SitUp => {
            let step = classify_sit_up(
                angles.left_knee,
                angles.right_knee,
                angles.torso,
                session.phase(),
                &session.config().sit_up,
            );
            session.apply_sit_up(&step, angles, now);
            Feedback::SitUp(step.cue)
        }
    };

    session.record(LogRecord {
        timestamp: now,
        exercise_id: exercise.id(),
        angles,
        feedback,
    });

    Ok(FrameOutcome::Pose { feedback, angles })
}
