//! Frame entry points - landmarks in, feedback out
//!
//! Receives MediaPipe landmarks from JavaScript once per rendered video
//! frame and hands back everything the page displays.

use wasm_bindgen::prelude::*;

use super::state::{now, with_session};
use crate::classifier::FeedbackLevel;
use crate::pipeline::{process_frame, FrameOutcome};
use crate::pose::{PoseFrame, LEG_SKELETON};
use crate::session::Session;

// ============================================================================
// FRAME REPORT
// ============================================================================

/// Result of one processed frame, read by the page through getters
#[wasm_bindgen]
pub struct FrameReport {
    feedback: String,
    display_text: String,
    has_pose: bool,
    is_correct: bool,
    level: FeedbackLevel,
    angles: [f32; 4],
    phase: String,
    reps: u32,
}

impl FrameReport {
    fn new(outcome: &FrameOutcome, session: &Session) -> Self {
        let feedback = outcome.feedback();
        Self {
            feedback: feedback.as_str().to_string(),
            display_text: outcome.display_text(),
            has_pose: outcome.angles().is_some(),
            is_correct: feedback.is_correct(),
            level: feedback.level(),
            angles: outcome.angles().map_or([f32::NAN; 4], |a| a.as_array()),
            phase: session.phase().as_str().to_string(),
            reps: session.completed_reps(),
        }
    }
}

#[wasm_bindgen]
impl FrameReport {
    /// Feedback label alone, e.g. "Lunge Detected: Correct"
    #[wasm_bindgen(getter)]
    pub fn feedback(&self) -> String {
        self.feedback.clone()
    }

    /// Angles plus label, ready for the feedback div
    #[wasm_bindgen(getter)]
    pub fn display_text(&self) -> String {
        self.display_text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn has_pose(&self) -> bool {
        self.has_pose
    }

    #[wasm_bindgen(getter)]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// "correct", "warning", "incorrect" or "neutral"
    #[wasm_bindgen(getter)]
    pub fn level(&self) -> String {
        self.level.as_str().to_string()
    }

    /// CSS colour for the feedback text (green / yellow / red / white)
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.level.color().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn left_knee(&self) -> f32 {
        self.angles[0]
    }

    #[wasm_bindgen(getter)]
    pub fn right_knee(&self) -> f32 {
        self.angles[1]
    }

    #[wasm_bindgen(getter)]
    pub fn torso(&self) -> f32 {
        self.angles[2]
    }

    #[wasm_bindgen(getter)]
    pub fn leg_spread(&self) -> f32 {
        self.angles[3]
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.phase.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn reps(&self) -> u32 {
        self.reps
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array per estimator result
///
/// 99 values (33 × x, y, z) or 132 values (33 × x, y, z, visibility).
/// An empty array means MediaPipe found no pose in this frame.
#[wasm_bindgen]
pub fn process_landmarks(data: &[f32]) -> Result<FrameReport, JsValue> {
    let frame = PoseFrame::from_flat(data).map_err(|err| {
        web_sys::console::warn_1(&err.to_string().into());
        JsValue::from(err)
    })?;

    with_session(|session| -> Result<FrameReport, JsValue> {
        let outcome = process_frame(session, frame.as_ref(), now())?;
        Ok(FrameReport::new(&outcome, session))
    })
}

/// Fire the delayed sit-up reset if it is due
///
/// Frames already do this; call it from a timer to keep the phase honest
/// while no frames arrive (paused upload, backgrounded tab).
#[wasm_bindgen]
pub fn tick() -> bool {
    with_session(|session| session.fire_due_reset(now()))
}

/// Landmark index pairs for the page's skeleton overlay, flattened
#[wasm_bindgen]
pub fn leg_skeleton() -> Vec<u32> {
    LEG_SKELETON
        .iter()
        .flat_map(|&(start, end)| [start as u32, end as u32])
        .collect()
}
