//! Form Coach Web - exercise form feedback from pose landmarks
//!
//! MediaPipe Pose runs in the page; this module turns its landmarks into
//! joint angles, judges lunges and sit-ups frame by frame, and keeps the
//! session log. Layout:
//! - `pose`, `classifier`, `session`, `pipeline`: plain Rust, no JS types
//! - `bridge`: wasm_bindgen entry points that delegate to the above

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}
pub(crate) use console_log;

// ============================================================================
// MODULES
// ============================================================================

mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pose;
pub mod session;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

pub use classifier::{Feedback, FeedbackLevel, LungeVerdict, SitUpCue};
pub use config::FormConfig;
pub use error::FormError;
pub use pipeline::{process_frame, FrameOutcome};
pub use pose::{angle_at, AngleSet, PoseFrame};
pub use session::{Exercise, ExercisePhase, InputMode, Session};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    // Routes the session's tracing events to the browser console
    if let Err(err) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::warn_1(&format!("tracing already initialised: {err}").into());
    }
    console_log!("Form coach ready");
}
