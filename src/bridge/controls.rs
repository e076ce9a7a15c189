//! Page controls - selectors, configuration, camera errors, log export

use wasm_bindgen::prelude::*;

use super::state::with_session;
use crate::config::FormConfig;
use crate::session::{Exercise, InputMode};

/// Message shown when the camera cannot be opened
pub const CAMERA_REQUIRED: &str = "Camera access required.";

/// Message shown when the user exports an empty log
pub const NO_DATA: &str = "No data to download.";

// ============================================================================
// SELECTION
// ============================================================================

/// Exercise selector changed (1 = lunge, 2 = sit-up)
#[wasm_bindgen]
pub fn select_exercise(id: i32) -> Result<(), JsValue> {
    let exercise = Exercise::try_from(id)?;
    with_session(|session| session.select_exercise(exercise));
    crate::console_log!("Exercise: {}", exercise.name());
    Ok(())
}

/// Mode tab clicked ("live" or "upload"). Returns false if already active.
#[wasm_bindgen]
pub fn switch_mode(mode: &str) -> Result<bool, JsValue> {
    let mode: InputMode = mode.parse()?;
    let switched = with_session(|session| session.switch_mode(mode));
    if switched {
        crate::console_log!("Mode: {} (log cleared)", mode.as_str());
    }
    Ok(switched)
}

/// Replace thresholds from a JSON object; omitted fields keep defaults
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = FormConfig::from_json(json)?;
    with_session(|session| session.set_config(config));
    Ok(())
}

/// Active configuration as JSON
#[wasm_bindgen]
pub fn current_config() -> Result<String, JsValue> {
    with_session(|session| session.config().to_json()).map_err(JsValue::from)
}

// ============================================================================
// CAMERA
// ============================================================================

/// getUserMedia failed. Halts live processing and returns the user message.
#[wasm_bindgen]
pub fn camera_error(detail: &str) -> String {
    web_sys::console::error_1(&format!("Camera error: {}", detail).into());
    with_session(|session| session.mark_source_unavailable(detail));
    CAMERA_REQUIRED.to_string()
}

// ============================================================================
// STATUS
// ============================================================================

#[wasm_bindgen]
pub fn current_phase() -> String {
    with_session(|session| session.phase().as_str().to_string())
}

#[wasm_bindgen]
pub fn completed_reps() -> u32 {
    with_session(|session| session.completed_reps())
}

#[wasm_bindgen]
pub fn log_len() -> usize {
    with_session(|session| session.log().len())
}

/// Recent sit-up angles, flat [lk, rk, torso, leg] per frame, oldest first
#[wasm_bindgen]
pub fn angle_history() -> Vec<f32> {
    with_session(|session| session.history().as_flat())
}

// ============================================================================
// EXPORT
// ============================================================================

/// Text to show the user when an export returns undefined
#[wasm_bindgen]
pub fn no_data_message() -> String {
    NO_DATA.to_string()
}

/// CSV for pose_log.csv, or undefined (with a console warning) when empty
///
/// On undefined the page shows `no_data_message()` and skips the download.
#[wasm_bindgen]
pub fn export_log_csv() -> Option<String> {
    let csv = with_session(|session| session.export_csv());
    if csv.is_none() {
        web_sys::console::warn_1(&NO_DATA.into());
    }
    csv
}

/// Same records as a JSON array, or undefined when empty
///
/// Same contract as `export_log_csv`.
#[wasm_bindgen]
pub fn export_log_json() -> Option<String> {
    let json = with_session(|session| session.export_json());
    if json.is_none() {
        web_sys::console::warn_1(&NO_DATA.into());
    }
    json
}
