//! Classifier module - per-frame exercise judgments
//!
//! Pure functions only. Phase state lives in the session.

mod feedback;
mod lunge;
mod sit_up;

pub use feedback::{Feedback, FeedbackLevel, LungeVerdict, SitUpCue};
pub use lunge::classify_lunge;
pub use sit_up::{classify_sit_up, ExercisePhase, SitUpStep};
